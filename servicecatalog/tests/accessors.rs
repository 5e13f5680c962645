/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Every member set through a builder reads back unchanged through its getter.

use pretty_assertions::assert_eq;
use servicecatalog::input::ListStackInstancesForProvisionedProductInput;
use servicecatalog::model::*;
use servicecatalog::Instant;

#[test]
fn constraint_detail() {
    let detail = ConstraintDetail::builder()
        .constraint_id("cons-abc")
        .r#type(ConstraintType::Template)
        .description("only t3 instances")
        .owner("123456789012")
        .product_id("prod-abc")
        .portfolio_id("port-abc")
        .build();
    assert_eq!(detail.constraint_id(), Some("cons-abc"));
    assert_eq!(detail.r#type(), Some(&ConstraintType::Template));
    assert_eq!(detail.description(), Some("only t3 instances"));
    assert_eq!(detail.owner(), Some("123456789012"));
    assert_eq!(detail.product_id(), Some("prod-abc"));
    assert_eq!(detail.portfolio_id(), Some("port-abc"));
}

#[test]
fn product_view_summary() {
    let summary = ProductViewSummary::builder()
        .id("prodview-abc")
        .product_id("prod-abc")
        .name("Web tier")
        .owner("Platform")
        .short_description("Load balanced web servers")
        .r#type(ProductType::CloudFormationTemplate)
        .distributor("Example Corp")
        .has_default_path(false)
        .support_email("support@example.com")
        .support_description("Page the platform team")
        .support_url("https://example.com/support")
        .build();
    assert_eq!(summary.id(), Some("prodview-abc"));
    assert_eq!(summary.product_id(), Some("prod-abc"));
    assert_eq!(summary.name(), Some("Web tier"));
    assert_eq!(summary.owner(), Some("Platform"));
    assert_eq!(summary.short_description(), Some("Load balanced web servers"));
    assert_eq!(summary.r#type(), Some(&ProductType::CloudFormationTemplate));
    assert_eq!(summary.distributor(), Some("Example Corp"));
    assert_eq!(summary.has_default_path(), Some(false));
    assert_eq!(summary.support_email(), Some("support@example.com"));
    assert_eq!(summary.support_description(), Some("Page the platform team"));
    assert_eq!(summary.support_url(), Some("https://example.com/support"));
}

#[test]
fn product_view_aggregation_value() {
    let value = ProductViewAggregationValue::builder()
        .value("MARKETPLACE")
        .approximate_count(0)
        .build();
    assert_eq!(value.value(), Some("MARKETPLACE"));
    assert_eq!(value.approximate_count(), Some(0));
}

#[test]
fn provisioning_artifact_detail() {
    let created = Instant::from_secs_and_nanos(1576540098, 250_000_000);
    let detail = ProvisioningArtifactDetail::builder()
        .id("pa-abc")
        .name("v2")
        .description("second release")
        .r#type(ProvisioningArtifactType::MarketplaceAmi)
        .created_time(created)
        .active(true)
        .guidance(ProvisioningArtifactGuidance::Deprecated)
        .build();
    assert_eq!(detail.id(), Some("pa-abc"));
    assert_eq!(detail.name(), Some("v2"));
    assert_eq!(detail.description(), Some("second release"));
    assert_eq!(detail.r#type(), Some(&ProvisioningArtifactType::MarketplaceAmi));
    assert_eq!(detail.created_time(), Some(&created));
    assert_eq!(detail.active(), Some(true));
    assert_eq!(detail.guidance(), Some(&ProvisioningArtifactGuidance::Deprecated));
}

#[test]
fn resource_change_and_details() {
    let target = ResourceTargetDefinition::builder()
        .attribute(ResourceAttribute::Tags)
        .name("Environment")
        .requires_recreation(RequiresRecreation::Conditionally)
        .build();
    assert_eq!(target.attribute(), Some(&ResourceAttribute::Tags));
    assert_eq!(target.name(), Some("Environment"));
    assert_eq!(
        target.requires_recreation(),
        Some(&RequiresRecreation::Conditionally)
    );

    let detail = ResourceChangeDetail::builder()
        .target(target.clone())
        .evaluation(EvaluationType::Dynamic)
        .causing_entity("ParameterKey")
        .build();
    assert_eq!(detail.target(), Some(&target));
    assert_eq!(detail.evaluation(), Some(&EvaluationType::Dynamic));
    assert_eq!(detail.causing_entity(), Some("ParameterKey"));

    let change = ResourceChange::builder()
        .action(ChangeAction::Add)
        .logical_resource_id("Bucket")
        .physical_resource_id("my-bucket")
        .resource_type("AWS::S3::Bucket")
        .replacement(Replacement::Conditional)
        .scope(ResourceAttribute::Properties)
        .details(detail.clone())
        .build();
    assert_eq!(change.action(), Some(&ChangeAction::Add));
    assert_eq!(change.logical_resource_id(), Some("Bucket"));
    assert_eq!(change.physical_resource_id(), Some("my-bucket"));
    assert_eq!(change.resource_type(), Some("AWS::S3::Bucket"));
    assert_eq!(change.replacement(), Some(&Replacement::Conditional));
    assert_eq!(change.scope(), Some(&[ResourceAttribute::Properties][..]));
    assert_eq!(change.details(), Some(&[detail][..]));
}

#[test]
fn stack_instance() {
    let instance = StackInstance::builder()
        .account("123456789012")
        .region("eu-west-1")
        .stack_instance_status(StackInstanceStatus::Current)
        .build();
    assert_eq!(instance.account(), Some("123456789012"));
    assert_eq!(instance.region(), Some("eu-west-1"));
    assert_eq!(
        instance.stack_instance_status(),
        Some(&StackInstanceStatus::Current)
    );
}

#[test]
fn update_provisioning_preferences() {
    let preferences = UpdateProvisioningPreferences::builder()
        .stack_set_accounts("123456789012")
        .stack_set_regions("us-east-1")
        .stack_set_regions("us-west-2")
        .stack_set_failure_tolerance_count(1)
        .stack_set_failure_tolerance_percentage(10)
        .stack_set_max_concurrency_count(2)
        .stack_set_max_concurrency_percentage(50)
        .stack_set_operation_type(StackSetOperationType::Delete)
        .build();
    assert_eq!(
        preferences.stack_set_accounts(),
        Some(&["123456789012".to_owned()][..])
    );
    assert_eq!(
        preferences.stack_set_regions(),
        Some(&["us-east-1".to_owned(), "us-west-2".to_owned()][..])
    );
    assert_eq!(preferences.stack_set_failure_tolerance_count(), Some(1));
    assert_eq!(preferences.stack_set_failure_tolerance_percentage(), Some(10));
    assert_eq!(preferences.stack_set_max_concurrency_count(), Some(2));
    assert_eq!(preferences.stack_set_max_concurrency_percentage(), Some(50));
    assert_eq!(
        preferences.stack_set_operation_type(),
        Some(&StackSetOperationType::Delete)
    );
}

#[test]
fn update_provisioning_parameter_and_tags() {
    let parameter = UpdateProvisioningParameter::builder()
        .key("InstanceType")
        .value("t3.micro")
        .use_previous_value(false)
        .build();
    assert_eq!(parameter.key(), Some("InstanceType"));
    assert_eq!(parameter.value(), Some("t3.micro"));
    assert_eq!(parameter.use_previous_value(), Some(false));

    let tag = Tag::builder().key("team").value("").build();
    assert_eq!(tag.key(), Some("team"));
    assert_eq!(tag.value(), Some(""));

    let tag = RecordTag::builder().key("cost-center").value("42").build();
    assert_eq!(tag.key(), Some("cost-center"));
    assert_eq!(tag.value(), Some("42"));
}

#[test]
fn record_detail() {
    let created = Instant::from_epoch_seconds(1576540098);
    let updated = Instant::from_secs_and_nanos(1576540158, 1);
    let error = RecordError::builder()
        .code("400")
        .description("stack rolled back")
        .build();
    assert_eq!(error.code(), Some("400"));
    assert_eq!(error.description(), Some("stack rolled back"));

    let tag = RecordTag::builder().key("team").value("platform").build();
    let detail = RecordDetail::builder()
        .record_id("rec-abc")
        .provisioned_product_name("web-tier")
        .status(RecordStatus::Failed)
        .created_time(created)
        .updated_time(updated)
        .provisioned_product_type("CFN_STACK")
        .record_type("UPDATE_PROVISIONED_PRODUCT")
        .provisioned_product_id("pp-abc")
        .product_id("prod-abc")
        .provisioning_artifact_id("pa-abc")
        .path_id("lpv2-abc")
        .record_errors(error.clone())
        .record_tags(tag.clone())
        .build();
    assert_eq!(detail.record_id(), Some("rec-abc"));
    assert_eq!(detail.provisioned_product_name(), Some("web-tier"));
    assert_eq!(detail.status(), Some(&RecordStatus::Failed));
    assert_eq!(detail.created_time(), Some(&created));
    assert_eq!(detail.updated_time(), Some(&updated));
    assert_eq!(detail.provisioned_product_type(), Some("CFN_STACK"));
    assert_eq!(detail.record_type(), Some("UPDATE_PROVISIONED_PRODUCT"));
    assert_eq!(detail.provisioned_product_id(), Some("pp-abc"));
    assert_eq!(detail.product_id(), Some("prod-abc"));
    assert_eq!(detail.provisioning_artifact_id(), Some("pa-abc"));
    assert_eq!(detail.path_id(), Some("lpv2-abc"));
    assert_eq!(detail.record_errors(), Some(&[error][..]));
    assert_eq!(detail.record_tags(), Some(&[tag][..]));
}

#[test]
fn share_details() {
    let error = ShareError::builder()
        .accounts("222222222222")
        .message("account is suspended")
        .error("InvalidAccount")
        .build();
    assert_eq!(error.accounts(), Some(&["222222222222".to_owned()][..]));
    assert_eq!(error.message(), Some("account is suspended"));
    assert_eq!(error.error(), Some("InvalidAccount"));

    let details = ShareDetails::builder()
        .successful_shares("111111111111")
        .share_errors(error.clone())
        .build();
    assert_eq!(
        details.successful_shares(),
        Some(&["111111111111".to_owned()][..])
    );
    assert_eq!(details.share_errors(), Some(&[error][..]));
}

#[test]
fn list_stack_instances_request() {
    let input = ListStackInstancesForProvisionedProductInput::builder()
        .accept_language("jp")
        .provisioned_product_id("pp-abc123")
        .page_token("page-2")
        .page_size(20)
        .build();
    assert_eq!(input.accept_language(), Some("jp"));
    assert_eq!(input.provisioned_product_id(), Some("pp-abc123"));
    assert_eq!(input.page_token(), Some("page-2"));
    assert_eq!(input.page_size(), Some(20));
    assert_eq!(input.validate(), Ok(()));
}

#[test]
fn setting_none_clears_a_member() {
    let detail = RecordDetail::builder()
        .record_id("rec-abc")
        .created_time(Instant::from_epoch_seconds(0))
        .set_created_time(None)
        .set_record_id(None)
        .build();
    assert_eq!(detail.record_id(), None);
    assert_eq!(detail.created_time(), None);
    assert_eq!(detail, RecordDetail::default());

    let input = ListStackInstancesForProvisionedProductInput::builder()
        .page_size(5)
        .set_page_size(None)
        .build();
    assert_eq!(input.page_size(), None);
}
