/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use pretty_assertions::assert_eq;
use serde_json::json;
use servicecatalog::input::{CopyProductInput, TerminateProvisionedProductInput};
use servicecatalog::model::{
    ConstraintDetail, ConstraintType, ProvisioningArtifactPropertyName, RecordDetail,
    RecordStatus,
};
use servicecatalog::output::{DescribeConstraintOutput, TerminateProvisionedProductOutput};
use servicecatalog::Instant;
use std::collections::BTreeMap;

#[test]
fn members_use_pascal_case_and_absent_members_are_skipped() {
    let input = TerminateProvisionedProductInput::builder()
        .provisioned_product_id("pp-abc123")
        .terminate_token("tok-1")
        .ignore_errors(true)
        .build();
    assert_eq!(
        serde_json::to_value(&input).unwrap(),
        json!({
            "ProvisionedProductId": "pp-abc123",
            "TerminateToken": "tok-1",
            "IgnoreErrors": true
        })
    );
}

#[test]
fn type_member_and_enum_values() {
    let detail = ConstraintDetail::builder()
        .constraint_id("cons-1")
        .r#type(ConstraintType::Notification)
        .build();
    assert_eq!(
        serde_json::to_value(&detail).unwrap(),
        json!({"ConstraintId": "cons-1", "Type": "NOTIFICATION"})
    );
}

#[test]
fn artifact_identifier_maps_use_wire_keys() {
    let mut identifiers = BTreeMap::new();
    identifiers.insert(ProvisioningArtifactPropertyName::Id, "pa-1".to_owned());
    let input = CopyProductInput::builder()
        .source_product_arn("arn:aws:catalog:us-east-1:123456789012:product/prod-abc")
        .source_provisioning_artifact_identifiers(identifiers)
        .build();
    assert_eq!(
        serde_json::to_value(&input).unwrap(),
        json!({
            "SourceProductArn": "arn:aws:catalog:us-east-1:123456789012:product/prod-abc",
            "SourceProvisioningArtifactIdentifiers": [{"Id": "pa-1"}]
        })
    );
}

#[test]
fn results_read_from_json() {
    let output: TerminateProvisionedProductOutput = serde_json::from_str(
        r#"{
            "RecordDetail": {
                "RecordId": "rec-1",
                "Status": "IN_PROGRESS",
                "CreatedTime": 1576540098,
                "UpdatedTime": 1576540098.5,
                "RecordType": "TERMINATE_PROVISIONED_PRODUCT",
                "RecordTags": []
            }
        }"#,
    )
    .unwrap();
    let expected = TerminateProvisionedProductOutput::builder()
        .record_detail(
            RecordDetail::builder()
                .record_id("rec-1")
                .status(RecordStatus::InProgress)
                .created_time(Instant::from_epoch_seconds(1576540098))
                .updated_time(Instant::from_secs_and_nanos(1576540098, 500_000_000))
                .record_type("TERMINATE_PROVISIONED_PRODUCT")
                .set_record_tags(Some(vec![]))
                .build(),
        )
        .build();
    assert_eq!(output, expected);
}

#[test]
fn unmodeled_enum_values_survive_a_round_trip() {
    let output: DescribeConstraintOutput =
        serde_json::from_str(r#"{"Status": "DELETING", "ConstraintParameters": "{}"}"#).unwrap();
    assert_eq!(output.status().map(|s| s.as_str()), Some("DELETING"));
    assert_eq!(
        serde_json::to_value(&output).unwrap(),
        json!({"ConstraintParameters": "{}", "Status": "DELETING"})
    );
}

#[test]
fn timestamps_from_tiny_negative_floats_are_normalized() {
    let detail: RecordDetail = serde_json::from_str(r#"{"CreatedTime": -1e-20}"#).unwrap();
    let created = detail.created_time().unwrap();
    assert_eq!(created, &Instant::from_epoch_seconds(0));
    assert!(created.epoch_subsecond_nanos() < 1_000_000_000);
    assert_eq!(detail.to_string(), "{CreatedTime: 1970-01-01T00:00:00Z}");
    assert_eq!(
        detail,
        RecordDetail::builder()
            .created_time(Instant::from_epoch_seconds(0))
            .build()
    );
}
