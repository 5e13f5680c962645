/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Documented length, pattern and range constraints of request members.
//!
//! These checks only run when a caller asks for them through `validate()` on a request. The
//! service remains the authority on what it accepts. Patterns are matched against the whole
//! value.

use crate::error::{ConstraintViolation, ValidationError};
use crate::model::{Tag, UpdateProvisioningParameter, UpdateProvisioningPreferences};
use once_cell::sync::Lazy;
use regex::Regex;

pub(crate) const ID_PATTERN: &str = r"^[a-zA-Z0-9_\-]*$";
pub(crate) const PROVISIONED_PRODUCT_NAME_OR_ARN_PATTERN: &str =
    r"^(?:[a-zA-Z0-9][a-zA-Z0-9._-]{0,127}|arn:[\s\S]{0,1223})$";
pub(crate) const IDEMPOTENCY_TOKEN_PATTERN: &str = r"^[a-zA-Z0-9][a-zA-Z0-9_-]*$";
pub(crate) const PAGE_TOKEN_PATTERN: &str = r"^[\x{21}-\x{7e}]*$";
pub(crate) const PRODUCT_ARN_PATTERN: &str =
    r"^arn:[a-z0-9.-]{1,63}:[a-z0-9.-]{0,63}:[a-z0-9.-]{0,63}:[a-z0-9.-]{0,63}:[^/].{0,1023}$";
pub(crate) const ACCOUNT_ID_PATTERN: &str = r"^[0-9]{12}$";
pub(crate) const TAG_PATTERN: &str = r"^([\p{L}\p{Z}\p{N}_.:/=+\-@]*)$";

static ID: Lazy<Regex> = Lazy::new(|| Regex::new(ID_PATTERN).unwrap());
static PROVISIONED_PRODUCT_NAME_OR_ARN: Lazy<Regex> =
    Lazy::new(|| Regex::new(PROVISIONED_PRODUCT_NAME_OR_ARN_PATTERN).unwrap());
static IDEMPOTENCY_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(IDEMPOTENCY_TOKEN_PATTERN).unwrap());
static PAGE_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(PAGE_TOKEN_PATTERN).unwrap());
static PRODUCT_ARN: Lazy<Regex> = Lazy::new(|| Regex::new(PRODUCT_ARN_PATTERN).unwrap());
static ACCOUNT_ID: Lazy<Regex> = Lazy::new(|| Regex::new(ACCOUNT_ID_PATTERN).unwrap());
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(TAG_PATTERN).unwrap());

/// Collects the violations found in one request.
#[derive(Debug, Default)]
pub(crate) struct Violations {
    errors: Vec<ValidationError>,
}

impl Violations {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, field: impl Into<String>, violation: ConstraintViolation) {
        self.errors.push(ValidationError {
            field: field.into(),
            violation,
        });
    }

    /// Length is counted in characters.
    pub(crate) fn length(
        &mut self,
        field: &str,
        value: Option<&str>,
        min: usize,
        max: Option<usize>,
    ) -> &mut Self {
        if let Some(value) = value {
            let actual = value.chars().count();
            if actual < min || max.map_or(false, |max| actual > max) {
                self.push(field, ConstraintViolation::Length { min, max, actual });
            }
        }
        self
    }

    pub(crate) fn range(
        &mut self,
        field: &str,
        value: Option<i32>,
        min: i64,
        max: Option<i64>,
    ) -> &mut Self {
        if let Some(actual) = value.map(i64::from) {
            if actual < min || max.map_or(false, |max| actual > max) {
                self.push(field, ConstraintViolation::Range { min, max, actual });
            }
        }
        self
    }

    fn pattern(
        &mut self,
        field: &str,
        value: Option<&str>,
        regex: &Regex,
        pattern: &'static str,
    ) -> &mut Self {
        if let Some(value) = value {
            if !regex.is_match(value) {
                self.push(field, ConstraintViolation::Pattern { pattern });
            }
        }
        self
    }

    pub(crate) fn accept_language(&mut self, value: Option<&str>) -> &mut Self {
        self.length("AcceptLanguage", value, 0, Some(100))
    }

    /// Product, portfolio, artifact, path, plan and constraint identifiers.
    pub(crate) fn id(&mut self, field: &str, value: Option<&str>) -> &mut Self {
        self.length(field, value, 1, Some(100))
            .pattern(field, value, &ID, ID_PATTERN)
    }

    /// A plain name of up to 128 characters, or the ARN of the provisioned product.
    pub(crate) fn provisioned_product_name_or_arn(&mut self, value: Option<&str>) -> &mut Self {
        self.length("ProvisionedProductName", value, 1, Some(1224))
            .pattern(
                "ProvisionedProductName",
                value,
                &PROVISIONED_PRODUCT_NAME_OR_ARN,
                PROVISIONED_PRODUCT_NAME_OR_ARN_PATTERN,
            )
    }

    pub(crate) fn idempotency_token(&mut self, field: &str, value: Option<&str>) -> &mut Self {
        self.length(field, value, 1, Some(128)).pattern(
            field,
            value,
            &IDEMPOTENCY_TOKEN,
            IDEMPOTENCY_TOKEN_PATTERN,
        )
    }

    pub(crate) fn page_token(&mut self, value: Option<&str>) -> &mut Self {
        self.length("PageToken", value, 0, Some(2024))
            .pattern("PageToken", value, &PAGE_TOKEN, PAGE_TOKEN_PATTERN)
    }

    pub(crate) fn page_size(&mut self, value: Option<i32>) -> &mut Self {
        self.range("PageSize", value, 0, Some(20))
    }

    pub(crate) fn product_arn(&mut self, field: &str, value: Option<&str>) -> &mut Self {
        self.length(field, value, 1, Some(1224))
            .pattern(field, value, &PRODUCT_ARN, PRODUCT_ARN_PATTERN)
    }

    pub(crate) fn account_id(&mut self, field: &str, value: Option<&str>) -> &mut Self {
        self.pattern(field, value, &ACCOUNT_ID, ACCOUNT_ID_PATTERN)
    }

    pub(crate) fn tags(&mut self, field: &str, tags: Option<&[Tag]>) -> &mut Self {
        for (i, tag) in tags.unwrap_or_default().iter().enumerate() {
            let key = format!("{}[{}].Key", field, i);
            let value = format!("{}[{}].Value", field, i);
            self.length(&key, tag.key(), 1, Some(128))
                .pattern(&key, tag.key(), &TAG, TAG_PATTERN)
                .length(&value, tag.value(), 0, Some(256))
                .pattern(&value, tag.value(), &TAG, TAG_PATTERN);
        }
        self
    }

    pub(crate) fn provisioning_parameters(
        &mut self,
        field: &str,
        parameters: Option<&[UpdateProvisioningParameter]>,
    ) -> &mut Self {
        for (i, parameter) in parameters.unwrap_or_default().iter().enumerate() {
            self.length(
                &format!("{}[{}].Key", field, i),
                parameter.key(),
                1,
                Some(1000),
            )
            .length(
                &format!("{}[{}].Value", field, i),
                parameter.value(),
                0,
                Some(4096),
            );
        }
        self
    }

    pub(crate) fn provisioning_preferences(
        &mut self,
        field: &str,
        preferences: Option<&UpdateProvisioningPreferences>,
    ) -> &mut Self {
        let preferences = match preferences {
            Some(preferences) => preferences,
            None => return self,
        };
        for (i, account) in preferences
            .stack_set_accounts()
            .unwrap_or_default()
            .iter()
            .enumerate()
        {
            self.account_id(
                &format!("{}.StackSetAccounts[{}]", field, i),
                Some(account.as_str()),
            );
        }
        self.range(
            &format!("{}.StackSetFailureToleranceCount", field),
            preferences.stack_set_failure_tolerance_count(),
            0,
            None,
        )
        .range(
            &format!("{}.StackSetFailureTolerancePercentage", field),
            preferences.stack_set_failure_tolerance_percentage(),
            0,
            Some(100),
        )
        .range(
            &format!("{}.StackSetMaxConcurrencyCount", field),
            preferences.stack_set_max_concurrency_count(),
            1,
            None,
        )
        .range(
            &format!("{}.StackSetMaxConcurrencyPercentage", field),
            preferences.stack_set_max_concurrency_percentage(),
            1,
            Some(100),
        )
    }

    /// Turns the collected violations into the result of `validate()`.
    pub(crate) fn finish(&mut self, shape: &'static str) -> Result<(), Vec<ValidationError>> {
        if self.errors.is_empty() {
            return Ok(());
        }
        let errors = std::mem::take(&mut self.errors);
        tracing::debug!(
            shape,
            violations = errors.len(),
            first = %errors[0],
            "request failed validation"
        );
        Err(errors)
    }
}

#[cfg(test)]
mod test {
    use super::Violations;
    use crate::error::ConstraintViolation;
    use crate::model::{Tag, UpdateProvisioningPreferences};

    #[test]
    fn absent_members_are_not_checked() {
        let result = Violations::new()
            .id("ProductId", None)
            .page_size(None)
            .provisioned_product_name_or_arn(None)
            .finish("Empty");
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn identifiers_must_not_be_empty() {
        let errors = Violations::new()
            .id("ProductId", Some(""))
            .finish("Test")
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "ProductId");
        assert_eq!(
            errors[0].violation,
            ConstraintViolation::Length {
                min: 1,
                max: Some(100),
                actual: 0
            }
        );
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let name = "é".repeat(100);
        assert!(Violations::new()
            .length("Name", Some(name.as_str()), 0, Some(100))
            .finish("Test")
            .is_ok());
    }

    #[test]
    fn provisioned_product_names_start_alphanumeric() {
        assert!(Violations::new()
            .provisioned_product_name_or_arn(Some("my-product.v2"))
            .finish("Test")
            .is_ok());
        let errors = Violations::new()
            .provisioned_product_name_or_arn(Some("-leading-dash"))
            .finish("Test")
            .unwrap_err();
        assert!(matches!(
            errors[0].violation,
            ConstraintViolation::Pattern { .. }
        ));
    }

    #[test]
    fn provisioned_product_names_accept_arns() {
        assert!(Violations::new()
            .provisioned_product_name_or_arn(Some(
                "arn:aws:servicecatalog:us-east-1:123456789012:stack/web/pp-abc123"
            ))
            .finish("Test")
            .is_ok());

        let long_name = "a".repeat(129);
        let errors = Violations::new()
            .provisioned_product_name_or_arn(Some(long_name.as_str()))
            .finish("Test")
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            errors[0].violation,
            ConstraintViolation::Pattern { .. }
        ));

        let long_arn = format!("arn:{}", "x".repeat(1221));
        let errors = Violations::new()
            .provisioned_product_name_or_arn(Some(long_arn.as_str()))
            .finish("Test")
            .unwrap_err();
        assert_eq!(
            errors[0].violation,
            ConstraintViolation::Length {
                min: 1,
                max: Some(1224),
                actual: 1225
            }
        );
    }

    #[test]
    fn page_size_is_bounded() {
        let errors = Violations::new()
            .page_size(Some(21))
            .finish("Test")
            .unwrap_err();
        assert_eq!(errors[0].to_string(), "PageSize: 21 is outside 0..=20");
    }

    #[test]
    fn product_arns() {
        assert!(Violations::new()
            .product_arn(
                "SourceProductArn",
                Some("arn:aws:catalog:us-east-1:123456789012:product/prod-abc")
            )
            .finish("Test")
            .is_ok());
        assert!(Violations::new()
            .product_arn("SourceProductArn", Some("prod-abc"))
            .finish("Test")
            .is_err());
    }

    #[test]
    fn nested_tags_report_their_index() {
        let tags = vec![
            Tag::builder().key("team").value("core").build(),
            Tag::builder().key("").value("x").build(),
            Tag::builder().key("cost").value("a|b").build(),
        ];
        let errors = Violations::new()
            .tags("Tags", Some(tags.as_slice()))
            .finish("Test")
            .unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["Tags[1].Key", "Tags[2].Value"]);
    }

    #[test]
    fn stack_set_preferences_ranges() {
        let preferences = UpdateProvisioningPreferences::builder()
            .stack_set_accounts("123456789012")
            .stack_set_accounts("12345")
            .stack_set_failure_tolerance_percentage(101)
            .stack_set_max_concurrency_count(0)
            .build();
        let errors = Violations::new()
            .provisioning_preferences("ProvisioningPreferences", Some(&preferences))
            .finish("Test")
            .unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "ProvisioningPreferences.StackSetAccounts[1]",
                "ProvisioningPreferences.StackSetFailureTolerancePercentage",
                "ProvisioningPreferences.StackSetMaxConcurrencyCount",
            ]
        );
    }
}
