/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use proptest::prelude::*;
use servicecatalog::input::{CopyProductInput, TerminateProvisionedProductInput};
use servicecatalog::model::{
    ConstraintDetail, ConstraintType, CopyOption, ProvisioningArtifactDetail,
    ProvisioningArtifactGuidance, RecordStatus, StackInstance, StackInstanceStatus,
};
use servicecatalog::output::UpdateProvisionedProductPropertiesOutput;
use servicecatalog::Instant;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn terminate_input() -> impl Strategy<Value = TerminateProvisionedProductInput> {
    (
        proptest::option::of("[a-z0-9-]{1,16}"),
        proptest::option::of("pp-[a-z0-9]{1,12}"),
        proptest::option::of("[a-zA-Z0-9]{1,16}"),
        proptest::option::of(any::<bool>()),
        proptest::option::of(prop_oneof![Just("en"), Just("jp"), Just("zh")]),
    )
        .prop_map(|(name, id, token, ignore_errors, language)| {
            TerminateProvisionedProductInput::builder()
                .set_provisioned_product_name(name)
                .set_provisioned_product_id(id)
                .set_terminate_token(token)
                .set_ignore_errors(ignore_errors)
                .set_accept_language(language.map(str::to_owned))
                .build()
        })
}

fn artifact_detail() -> impl Strategy<Value = ProvisioningArtifactDetail> {
    (
        proptest::option::of("pa-[a-z0-9]{1,12}"),
        proptest::option::of(0i64..4_102_444_800),
        proptest::option::of(any::<bool>()),
        proptest::option::of(prop_oneof![Just("DEFAULT"), Just("DEPRECATED"), Just("RETIRED")]),
    )
        .prop_map(|(id, created, active, guidance)| {
            ProvisioningArtifactDetail::builder()
                .set_id(id)
                .set_created_time(created.map(Instant::from_epoch_seconds))
                .set_active(active)
                .set_guidance(guidance.map(ProvisioningArtifactGuidance::from))
                .build()
        })
}

proptest! {
    #[test]
    fn equality_is_reflexive_and_survives_clone(input in terminate_input()) {
        prop_assert_eq!(&input, &input);
        let copy = input.clone();
        prop_assert_eq!(&input, &copy);
        prop_assert_eq!(hash_of(&input), hash_of(&copy));
        prop_assert_eq!(input.to_string(), copy.to_string());
    }

    #[test]
    fn nested_records_hash_consistently(detail in artifact_detail()) {
        let copy = detail.clone();
        prop_assert_eq!(&detail, &copy);
        prop_assert_eq!(hash_of(&detail), hash_of(&copy));
    }

    #[test]
    fn changing_one_member_breaks_equality(input in terminate_input(), token in "[a-z]{1,8}") {
        let mut changed = input.clone();
        changed.terminate_token = Some(format!("{}-changed", token));
        prop_assert_ne!(&input, &changed);

        let mut flipped = input.clone();
        flipped.ignore_errors = Some(!input.ignore_errors.unwrap_or(false));
        if input.ignore_errors.is_some() {
            prop_assert_ne!(&input, &flipped);
        }
    }
}

#[test]
fn absent_equals_absent() {
    assert_eq!(
        TerminateProvisionedProductInput::builder().build(),
        TerminateProvisionedProductInput::default()
    );
    assert_eq!(
        hash_of(&ConstraintDetail::builder().build()),
        hash_of(&ConstraintDetail::default())
    );
}

#[test]
fn absent_differs_from_present() {
    let absent = StackInstance::builder().build();
    let present = StackInstance::builder().region("us-east-1").build();
    assert_ne!(absent, present);
}

#[test]
fn enum_setter_matches_raw_setter() {
    let typed = ConstraintDetail::builder()
        .r#type(ConstraintType::Launch)
        .build();
    let raw = ConstraintDetail::builder().r#type("LAUNCH").build();
    assert_eq!(typed, raw);
    assert_eq!(hash_of(&typed), hash_of(&raw));
    assert_eq!(typed.r#type().map(|t| t.as_str()), Some("LAUNCH"));

    let typed = StackInstance::builder()
        .stack_instance_status(StackInstanceStatus::Inoperable)
        .build();
    let raw = StackInstance::builder()
        .stack_instance_status("INOPERABLE".to_owned())
        .build();
    assert_eq!(typed, raw);
}

#[test]
fn list_order_matters() {
    let a = CopyProductInput::builder()
        .copy_options(CopyOption::CopyTags)
        .copy_options("Other")
        .build();
    let b = CopyProductInput::builder()
        .copy_options("Other")
        .copy_options(CopyOption::CopyTags)
        .build();
    assert_ne!(a, b);
}

#[test]
fn map_insertion_order_does_not_matter() {
    let a = UpdateProvisionedProductPropertiesOutput::builder()
        .provisioned_product_properties("OWNER", "arn:aws:iam::123456789012:user/a")
        .and_then(|b| b.provisioned_product_properties("LAUNCH_ROLE", "arn:aws:iam::123456789012:role/r"))
        .unwrap()
        .status(RecordStatus::Succeeded)
        .build();
    let b = UpdateProvisionedProductPropertiesOutput::builder()
        .status("SUCCEEDED")
        .provisioned_product_properties("LAUNCH_ROLE", "arn:aws:iam::123456789012:role/r")
        .and_then(|b| b.provisioned_product_properties("OWNER", "arn:aws:iam::123456789012:user/a"))
        .unwrap()
        .build();
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
    assert_eq!(a.to_string(), b.to_string());
}
