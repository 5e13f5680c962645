/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use pretty_assertions::assert_eq;
use servicecatalog::input::{
    DescribeProvisioningArtifactInput, SearchProductsInput, TerminateProvisionedProductInput,
    UpdateProvisionedProductInput,
};
use servicecatalog::model::{
    ProductViewFilterBy, ProductViewSortBy, ShareDetails, ShareError, ShareStatus, SortOrder,
    StackSetOperationType, Tag, UpdateProvisioningParameter, UpdateProvisioningPreferences,
};
use servicecatalog::output::DescribePortfolioShareStatusOutput;

#[test]
fn terminate_request_lists_only_present_members() {
    let input = TerminateProvisionedProductInput::builder()
        .provisioned_product_id("pp-abc123")
        .terminate_token("tok-1")
        .ignore_errors(true)
        .build();
    let rendered = input.to_string();
    assert!(rendered.contains("ProvisionedProductId: pp-abc123,TerminateToken: tok-1,IgnoreErrors: true"));
    assert!(!rendered.contains("ProvisionedProductName"));
    assert!(!rendered.contains("AcceptLanguage"));
    assert!(!rendered.contains(",}"));
}

#[test]
fn false_and_zero_are_present_values() {
    let input = DescribeProvisioningArtifactInput::builder()
        .verbose(false)
        .build();
    assert_eq!(input.to_string(), "{Verbose: false}");

    let preferences = UpdateProvisioningPreferences::builder()
        .stack_set_failure_tolerance_count(0)
        .build();
    assert_eq!(
        preferences.to_string(),
        "{StackSetFailureToleranceCount: 0}"
    );
}

#[test]
fn update_request_renders_nested_shapes() {
    let input = UpdateProvisionedProductInput::builder()
        .provisioned_product_name("web-tier")
        .provisioning_parameters(
            UpdateProvisioningParameter::builder()
                .key("InstanceType")
                .use_previous_value(true)
                .build(),
        )
        .provisioning_preferences(
            UpdateProvisioningPreferences::builder()
                .stack_set_regions("us-east-1")
                .stack_set_regions("eu-west-1")
                .stack_set_operation_type(StackSetOperationType::Update)
                .build(),
        )
        .tags(Tag::builder().key("team").value("platform").build())
        .build();
    assert_eq!(
        input.to_string(),
        "{ProvisionedProductName: web-tier,\
         ProvisioningParameters: [{Key: InstanceType,UsePreviousValue: true}],\
         ProvisioningPreferences: {StackSetRegions: [us-east-1, eu-west-1],StackSetOperationType: UPDATE},\
         Tags: [{Key: team,Value: platform}]}"
    );
}

#[test]
fn search_request_renders_enum_keys_and_values() {
    let input = SearchProductsInput::builder()
        .filters(ProductViewFilterBy::ProductType, vec!["MARKETPLACE".to_owned()])
        .unwrap()
        .sort_by(ProductViewSortBy::Title)
        .sort_order(SortOrder::Descending)
        .page_size(20)
        .build();
    assert_eq!(
        input.to_string(),
        "{Filters: {ProductType=[MARKETPLACE]},PageSize: 20,SortBy: Title,SortOrder: DESCENDING}"
    );
}

#[test]
fn share_status_output() {
    let output = DescribePortfolioShareStatusOutput::builder()
        .portfolio_share_token("share-1")
        .status(ShareStatus::CompletedWithErrors)
        .share_details(
            ShareDetails::builder()
                .successful_shares("111111111111")
                .share_errors(
                    ShareError::builder()
                        .accounts("222222222222")
                        .message("account is suspended")
                        .error("InvalidAccount")
                        .build(),
                )
                .build(),
        )
        .build();
    assert_eq!(
        output.to_string(),
        "{PortfolioShareToken: share-1,\
         Status: COMPLETED_WITH_ERRORS,\
         ShareDetails: {SuccessfulShares: [111111111111],\
         ShareErrors: [{Accounts: [222222222222],Message: account is suspended,Error: InvalidAccount}]}}"
    );
}

#[test]
fn unknown_enum_values_render_verbatim() {
    let output = DescribePortfolioShareStatusOutput::builder()
        .status("PAUSED")
        .build();
    assert_eq!(output.to_string(), "{Status: PAUSED}");
}
