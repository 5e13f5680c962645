/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Request shapes, one per operation.

use crate::constraints::Violations;
use crate::error::ValidationError;
use crate::fmt::PresentFields;
use crate::model::{
    CopyOption, ProductViewFilterBy, ProductViewSortBy, PropertyKey,
    ProvisioningArtifactIdentifiers, SortOrder, Tag, UpdateProvisioningParameter,
    UpdateProvisioningPreferences,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CopyProductInput {
    /// <p>The language code.</p>
    /// <ul>
    /// <li><p><code>en</code> - English (default)</p></li>
    /// <li><p><code>jp</code> - Japanese</p></li>
    /// <li><p><code>zh</code> - Chinese</p></li>
    /// </ul>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept_language: Option<String>,
    /// <p>The Amazon Resource Name (ARN) of the source product.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_product_arn: Option<String>,
    /// <p>The identifier of the target product. By default, a new product is created.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_product_id: Option<String>,
    /// <p>A name for the target product. The default is the name of the source product.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_product_name: Option<String>,
    /// <p>The identifiers of the provisioning artifacts (also known as versions) of the
    /// product to copy. By default, all provisioning artifacts are copied.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_provisioning_artifact_identifiers: Option<Vec<ProvisioningArtifactIdentifiers>>,
    /// <p>The copy options. If the value is <code>CopyTags</code>, the tags from the source
    /// product are copied to the target product.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_options: Option<Vec<CopyOption>>,
    /// <p>A unique identifier that you provide to ensure idempotency. If multiple requests
    /// differ only by the idempotency token, the same response is returned for each
    /// repeated request.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotency_token: Option<String>,
}

impl CopyProductInput {
    pub fn accept_language(&self) -> Option<&str> {
        self.accept_language.as_deref()
    }
    pub fn source_product_arn(&self) -> Option<&str> {
        self.source_product_arn.as_deref()
    }
    pub fn target_product_id(&self) -> Option<&str> {
        self.target_product_id.as_deref()
    }
    pub fn target_product_name(&self) -> Option<&str> {
        self.target_product_name.as_deref()
    }
    pub fn source_provisioning_artifact_identifiers(
        &self,
    ) -> Option<&[ProvisioningArtifactIdentifiers]> {
        self.source_provisioning_artifact_identifiers.as_deref()
    }
    pub fn copy_options(&self) -> Option<&[CopyOption]> {
        self.copy_options.as_deref()
    }
    pub fn idempotency_token(&self) -> Option<&str> {
        self.idempotency_token.as_deref()
    }

    /// Checks the documented constraints of the members that are set.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        Violations::new()
            .accept_language(self.accept_language())
            .product_arn("SourceProductArn", self.source_product_arn())
            .id("TargetProductId", self.target_product_id())
            .length("TargetProductName", self.target_product_name(), 0, Some(8191))
            .idempotency_token("IdempotencyToken", self.idempotency_token())
            .finish("CopyProductInput")
    }
}

impl fmt::Display for CopyProductInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = PresentFields::new(f)?;
        out.field("AcceptLanguage", &self.accept_language)?;
        out.field("SourceProductArn", &self.source_product_arn)?;
        out.field("TargetProductId", &self.target_product_id)?;
        out.field("TargetProductName", &self.target_product_name)?;
        out.field(
            "SourceProvisioningArtifactIdentifiers",
            &self.source_provisioning_artifact_identifiers,
        )?;
        out.field("CopyOptions", &self.copy_options)?;
        out.field("IdempotencyToken", &self.idempotency_token)?;
        out.finish()
    }
}

/// See [`CopyProductInput`](crate::input::CopyProductInput)
pub mod copy_product_input {
    use crate::idempotency_token::IdempotencyTokenProvider;
    use crate::model::{CopyOption, ProvisioningArtifactIdentifiers};

    /// A builder for [`CopyProductInput`](crate::input::CopyProductInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        accept_language: Option<String>,
        source_product_arn: Option<String>,
        target_product_id: Option<String>,
        target_product_name: Option<String>,
        source_provisioning_artifact_identifiers: Option<Vec<ProvisioningArtifactIdentifiers>>,
        copy_options: Option<Vec<CopyOption>>,
        idempotency_token: Option<String>,
    }

    impl Builder {
        pub fn accept_language(mut self, input: impl Into<String>) -> Self {
            self.accept_language = Some(input.into());
            self
        }
        pub fn set_accept_language(mut self, input: Option<String>) -> Self {
            self.accept_language = input;
            self
        }
        pub fn source_product_arn(mut self, input: impl Into<String>) -> Self {
            self.source_product_arn = Some(input.into());
            self
        }
        pub fn set_source_product_arn(mut self, input: Option<String>) -> Self {
            self.source_product_arn = input;
            self
        }
        pub fn target_product_id(mut self, input: impl Into<String>) -> Self {
            self.target_product_id = Some(input.into());
            self
        }
        pub fn set_target_product_id(mut self, input: Option<String>) -> Self {
            self.target_product_id = input;
            self
        }
        pub fn target_product_name(mut self, input: impl Into<String>) -> Self {
            self.target_product_name = Some(input.into());
            self
        }
        pub fn set_target_product_name(mut self, input: Option<String>) -> Self {
            self.target_product_name = input;
            self
        }
        /// Appends one artifact identifier map to `source_provisioning_artifact_identifiers`.
        pub fn source_provisioning_artifact_identifiers(
            mut self,
            input: ProvisioningArtifactIdentifiers,
        ) -> Self {
            let mut v = self
                .source_provisioning_artifact_identifiers
                .unwrap_or_default();
            v.push(input);
            self.source_provisioning_artifact_identifiers = Some(v);
            self
        }
        pub fn set_source_provisioning_artifact_identifiers(
            mut self,
            input: Option<Vec<ProvisioningArtifactIdentifiers>>,
        ) -> Self {
            self.source_provisioning_artifact_identifiers = input;
            self
        }
        /// Appends an item to `copy_options`.
        pub fn copy_options(mut self, input: impl Into<CopyOption>) -> Self {
            let mut v = self.copy_options.unwrap_or_default();
            v.push(input.into());
            self.copy_options = Some(v);
            self
        }
        pub fn set_copy_options(mut self, input: Option<Vec<CopyOption>>) -> Self {
            self.copy_options = input;
            self
        }
        pub fn idempotency_token(mut self, input: impl Into<String>) -> Self {
            self.idempotency_token = Some(input.into());
            self
        }
        pub fn set_idempotency_token(mut self, input: Option<String>) -> Self {
            self.idempotency_token = input;
            self
        }
        /// Sets `idempotency_token` to a fresh token from `provider`.
        pub fn idempotency_token_from(self, provider: &IdempotencyTokenProvider) -> Self {
            self.idempotency_token(provider.make_idempotency_token())
        }
        /// Consumes the builder and constructs a [`CopyProductInput`](crate::input::CopyProductInput)
        pub fn build(self) -> crate::input::CopyProductInput {
            crate::input::CopyProductInput {
                accept_language: self.accept_language,
                source_product_arn: self.source_product_arn,
                target_product_id: self.target_product_id,
                target_product_name: self.target_product_name,
                source_provisioning_artifact_identifiers: self
                    .source_provisioning_artifact_identifiers,
                copy_options: self.copy_options,
                idempotency_token: self.idempotency_token,
            }
        }
    }
}

impl CopyProductInput {
    /// Creates a new builder-style object to manufacture [`CopyProductInput`](crate::input::CopyProductInput)
    pub fn builder() -> crate::input::copy_product_input::Builder {
        crate::input::copy_product_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeCopyProductStatusInput {
    /// <p>The language code.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept_language: Option<String>,
    /// <p>The token for the copy product operation. This token is returned by
    /// <code>CopyProduct</code>.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_product_token: Option<String>,
}

impl DescribeCopyProductStatusInput {
    pub fn accept_language(&self) -> Option<&str> {
        self.accept_language.as_deref()
    }
    pub fn copy_product_token(&self) -> Option<&str> {
        self.copy_product_token.as_deref()
    }

    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        Violations::new()
            .accept_language(self.accept_language())
            .id("CopyProductToken", self.copy_product_token())
            .finish("DescribeCopyProductStatusInput")
    }
}

impl fmt::Display for DescribeCopyProductStatusInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = PresentFields::new(f)?;
        out.field("AcceptLanguage", &self.accept_language)?;
        out.field("CopyProductToken", &self.copy_product_token)?;
        out.finish()
    }
}

/// See [`DescribeCopyProductStatusInput`](crate::input::DescribeCopyProductStatusInput)
pub mod describe_copy_product_status_input {
    /// A builder for [`DescribeCopyProductStatusInput`](crate::input::DescribeCopyProductStatusInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        accept_language: Option<String>,
        copy_product_token: Option<String>,
    }

    impl Builder {
        pub fn accept_language(mut self, input: impl Into<String>) -> Self {
            self.accept_language = Some(input.into());
            self
        }
        pub fn set_accept_language(mut self, input: Option<String>) -> Self {
            self.accept_language = input;
            self
        }
        pub fn copy_product_token(mut self, input: impl Into<String>) -> Self {
            self.copy_product_token = Some(input.into());
            self
        }
        pub fn set_copy_product_token(mut self, input: Option<String>) -> Self {
            self.copy_product_token = input;
            self
        }
        pub fn build(self) -> crate::input::DescribeCopyProductStatusInput {
            crate::input::DescribeCopyProductStatusInput {
                accept_language: self.accept_language,
                copy_product_token: self.copy_product_token,
            }
        }
    }
}

impl DescribeCopyProductStatusInput {
    pub fn builder() -> crate::input::describe_copy_product_status_input::Builder {
        crate::input::describe_copy_product_status_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeConstraintInput {
    /// <p>The language code.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept_language: Option<String>,
    /// <p>The identifier of the constraint.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl DescribeConstraintInput {
    pub fn accept_language(&self) -> Option<&str> {
        self.accept_language.as_deref()
    }
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        Violations::new()
            .accept_language(self.accept_language())
            .id("Id", self.id())
            .finish("DescribeConstraintInput")
    }
}

impl fmt::Display for DescribeConstraintInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = PresentFields::new(f)?;
        out.field("AcceptLanguage", &self.accept_language)?;
        out.field("Id", &self.id)?;
        out.finish()
    }
}

/// See [`DescribeConstraintInput`](crate::input::DescribeConstraintInput)
pub mod describe_constraint_input {
    /// A builder for [`DescribeConstraintInput`](crate::input::DescribeConstraintInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        accept_language: Option<String>,
        id: Option<String>,
    }

    impl Builder {
        pub fn accept_language(mut self, input: impl Into<String>) -> Self {
            self.accept_language = Some(input.into());
            self
        }
        pub fn set_accept_language(mut self, input: Option<String>) -> Self {
            self.accept_language = input;
            self
        }
        pub fn id(mut self, input: impl Into<String>) -> Self {
            self.id = Some(input.into());
            self
        }
        pub fn set_id(mut self, input: Option<String>) -> Self {
            self.id = input;
            self
        }
        pub fn build(self) -> crate::input::DescribeConstraintInput {
            crate::input::DescribeConstraintInput {
                accept_language: self.accept_language,
                id: self.id,
            }
        }
    }
}

impl DescribeConstraintInput {
    pub fn builder() -> crate::input::describe_constraint_input::Builder {
        crate::input::describe_constraint_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListConstraintsForPortfolioInput {
    /// <p>The language code.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept_language: Option<String>,
    /// <p>The portfolio identifier.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio_id: Option<String>,
    /// <p>The product identifier.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    /// <p>The maximum number of items to return with this call.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i32>,
    /// <p>The page token for the next set of results. To retrieve the first set of results,
    /// use null.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
}

impl ListConstraintsForPortfolioInput {
    pub fn accept_language(&self) -> Option<&str> {
        self.accept_language.as_deref()
    }
    pub fn portfolio_id(&self) -> Option<&str> {
        self.portfolio_id.as_deref()
    }
    pub fn product_id(&self) -> Option<&str> {
        self.product_id.as_deref()
    }
    pub fn page_size(&self) -> Option<i32> {
        self.page_size
    }
    pub fn page_token(&self) -> Option<&str> {
        self.page_token.as_deref()
    }

    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        Violations::new()
            .accept_language(self.accept_language())
            .id("PortfolioId", self.portfolio_id())
            .id("ProductId", self.product_id())
            .page_size(self.page_size())
            .page_token(self.page_token())
            .finish("ListConstraintsForPortfolioInput")
    }
}

impl fmt::Display for ListConstraintsForPortfolioInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = PresentFields::new(f)?;
        out.field("AcceptLanguage", &self.accept_language)?;
        out.field("PortfolioId", &self.portfolio_id)?;
        out.field("ProductId", &self.product_id)?;
        out.field("PageSize", &self.page_size)?;
        out.field("PageToken", &self.page_token)?;
        out.finish()
    }
}

/// See [`ListConstraintsForPortfolioInput`](crate::input::ListConstraintsForPortfolioInput)
pub mod list_constraints_for_portfolio_input {
    /// A builder for [`ListConstraintsForPortfolioInput`](crate::input::ListConstraintsForPortfolioInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        accept_language: Option<String>,
        portfolio_id: Option<String>,
        product_id: Option<String>,
        page_size: Option<i32>,
        page_token: Option<String>,
    }

    impl Builder {
        pub fn accept_language(mut self, input: impl Into<String>) -> Self {
            self.accept_language = Some(input.into());
            self
        }
        pub fn set_accept_language(mut self, input: Option<String>) -> Self {
            self.accept_language = input;
            self
        }
        pub fn portfolio_id(mut self, input: impl Into<String>) -> Self {
            self.portfolio_id = Some(input.into());
            self
        }
        pub fn set_portfolio_id(mut self, input: Option<String>) -> Self {
            self.portfolio_id = input;
            self
        }
        pub fn product_id(mut self, input: impl Into<String>) -> Self {
            self.product_id = Some(input.into());
            self
        }
        pub fn set_product_id(mut self, input: Option<String>) -> Self {
            self.product_id = input;
            self
        }
        pub fn page_size(mut self, input: i32) -> Self {
            self.page_size = Some(input);
            self
        }
        pub fn set_page_size(mut self, input: Option<i32>) -> Self {
            self.page_size = input;
            self
        }
        pub fn page_token(mut self, input: impl Into<String>) -> Self {
            self.page_token = Some(input.into());
            self
        }
        pub fn set_page_token(mut self, input: Option<String>) -> Self {
            self.page_token = input;
            self
        }
        pub fn build(self) -> crate::input::ListConstraintsForPortfolioInput {
            crate::input::ListConstraintsForPortfolioInput {
                accept_language: self.accept_language,
                portfolio_id: self.portfolio_id,
                product_id: self.product_id,
                page_size: self.page_size,
                page_token: self.page_token,
            }
        }
    }
}

impl ListConstraintsForPortfolioInput {
    pub fn builder() -> crate::input::list_constraints_for_portfolio_input::Builder {
        crate::input::list_constraints_for_portfolio_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribePortfolioShareStatusInput {
    /// <p>The token for the portfolio share operation. This token is returned either by
    /// <code>CreatePortfolioShare</code> or by <code>DeletePortfolioShare</code>.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio_share_token: Option<String>,
}

impl DescribePortfolioShareStatusInput {
    pub fn portfolio_share_token(&self) -> Option<&str> {
        self.portfolio_share_token.as_deref()
    }

    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        Violations::new()
            .id("PortfolioShareToken", self.portfolio_share_token())
            .finish("DescribePortfolioShareStatusInput")
    }
}

impl fmt::Display for DescribePortfolioShareStatusInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = PresentFields::new(f)?;
        out.field("PortfolioShareToken", &self.portfolio_share_token)?;
        out.finish()
    }
}

/// See [`DescribePortfolioShareStatusInput`](crate::input::DescribePortfolioShareStatusInput)
pub mod describe_portfolio_share_status_input {
    /// A builder for [`DescribePortfolioShareStatusInput`](crate::input::DescribePortfolioShareStatusInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        portfolio_share_token: Option<String>,
    }

    impl Builder {
        pub fn portfolio_share_token(mut self, input: impl Into<String>) -> Self {
            self.portfolio_share_token = Some(input.into());
            self
        }
        pub fn set_portfolio_share_token(mut self, input: Option<String>) -> Self {
            self.portfolio_share_token = input;
            self
        }
        pub fn build(self) -> crate::input::DescribePortfolioShareStatusInput {
            crate::input::DescribePortfolioShareStatusInput {
                portfolio_share_token: self.portfolio_share_token,
            }
        }
    }
}

impl DescribePortfolioShareStatusInput {
    pub fn builder() -> crate::input::describe_portfolio_share_status_input::Builder {
        crate::input::describe_portfolio_share_status_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeProvisioningArtifactInput {
    /// <p>The language code.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept_language: Option<String>,
    /// <p>The identifier of the provisioning artifact.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioning_artifact_id: Option<String>,
    /// <p>The product identifier.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    /// <p>The provisioning artifact name.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioning_artifact_name: Option<String>,
    /// <p>The product name.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    /// <p>Indicates whether a verbose level of detail is enabled.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verbose: Option<bool>,
}

impl DescribeProvisioningArtifactInput {
    pub fn accept_language(&self) -> Option<&str> {
        self.accept_language.as_deref()
    }
    pub fn provisioning_artifact_id(&self) -> Option<&str> {
        self.provisioning_artifact_id.as_deref()
    }
    pub fn product_id(&self) -> Option<&str> {
        self.product_id.as_deref()
    }
    pub fn provisioning_artifact_name(&self) -> Option<&str> {
        self.provisioning_artifact_name.as_deref()
    }
    pub fn product_name(&self) -> Option<&str> {
        self.product_name.as_deref()
    }
    pub fn verbose(&self) -> Option<bool> {
        self.verbose
    }

    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        Violations::new()
            .accept_language(self.accept_language())
            .id("ProvisioningArtifactId", self.provisioning_artifact_id())
            .id("ProductId", self.product_id())
            .length(
                "ProvisioningArtifactName",
                self.provisioning_artifact_name(),
                0,
                Some(8192),
            )
            .length("ProductName", self.product_name(), 0, Some(8191))
            .finish("DescribeProvisioningArtifactInput")
    }
}

impl fmt::Display for DescribeProvisioningArtifactInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = PresentFields::new(f)?;
        out.field("AcceptLanguage", &self.accept_language)?;
        out.field("ProvisioningArtifactId", &self.provisioning_artifact_id)?;
        out.field("ProductId", &self.product_id)?;
        out.field("ProvisioningArtifactName", &self.provisioning_artifact_name)?;
        out.field("ProductName", &self.product_name)?;
        out.field("Verbose", &self.verbose)?;
        out.finish()
    }
}

/// See [`DescribeProvisioningArtifactInput`](crate::input::DescribeProvisioningArtifactInput)
pub mod describe_provisioning_artifact_input {
    /// A builder for [`DescribeProvisioningArtifactInput`](crate::input::DescribeProvisioningArtifactInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        accept_language: Option<String>,
        provisioning_artifact_id: Option<String>,
        product_id: Option<String>,
        provisioning_artifact_name: Option<String>,
        product_name: Option<String>,
        verbose: Option<bool>,
    }

    impl Builder {
        pub fn accept_language(mut self, input: impl Into<String>) -> Self {
            self.accept_language = Some(input.into());
            self
        }
        pub fn set_accept_language(mut self, input: Option<String>) -> Self {
            self.accept_language = input;
            self
        }
        pub fn provisioning_artifact_id(mut self, input: impl Into<String>) -> Self {
            self.provisioning_artifact_id = Some(input.into());
            self
        }
        pub fn set_provisioning_artifact_id(mut self, input: Option<String>) -> Self {
            self.provisioning_artifact_id = input;
            self
        }
        pub fn product_id(mut self, input: impl Into<String>) -> Self {
            self.product_id = Some(input.into());
            self
        }
        pub fn set_product_id(mut self, input: Option<String>) -> Self {
            self.product_id = input;
            self
        }
        pub fn provisioning_artifact_name(mut self, input: impl Into<String>) -> Self {
            self.provisioning_artifact_name = Some(input.into());
            self
        }
        pub fn set_provisioning_artifact_name(mut self, input: Option<String>) -> Self {
            self.provisioning_artifact_name = input;
            self
        }
        pub fn product_name(mut self, input: impl Into<String>) -> Self {
            self.product_name = Some(input.into());
            self
        }
        pub fn set_product_name(mut self, input: Option<String>) -> Self {
            self.product_name = input;
            self
        }
        pub fn verbose(mut self, input: bool) -> Self {
            self.verbose = Some(input);
            self
        }
        pub fn set_verbose(mut self, input: Option<bool>) -> Self {
            self.verbose = input;
            self
        }
        pub fn build(self) -> crate::input::DescribeProvisioningArtifactInput {
            crate::input::DescribeProvisioningArtifactInput {
                accept_language: self.accept_language,
                provisioning_artifact_id: self.provisioning_artifact_id,
                product_id: self.product_id,
                provisioning_artifact_name: self.provisioning_artifact_name,
                product_name: self.product_name,
                verbose: self.verbose,
            }
        }
    }
}

impl DescribeProvisioningArtifactInput {
    pub fn builder() -> crate::input::describe_provisioning_artifact_input::Builder {
        crate::input::describe_provisioning_artifact_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeProvisionedProductPlanInput {
    /// <p>The language code.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept_language: Option<String>,
    /// <p>The plan identifier.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<String>,
    /// <p>The maximum number of items to return with this call.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i32>,
    /// <p>The page token for the next set of results.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
}

impl DescribeProvisionedProductPlanInput {
    pub fn accept_language(&self) -> Option<&str> {
        self.accept_language.as_deref()
    }
    pub fn plan_id(&self) -> Option<&str> {
        self.plan_id.as_deref()
    }
    pub fn page_size(&self) -> Option<i32> {
        self.page_size
    }
    pub fn page_token(&self) -> Option<&str> {
        self.page_token.as_deref()
    }

    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        Violations::new()
            .accept_language(self.accept_language())
            .id("PlanId", self.plan_id())
            .page_size(self.page_size())
            .page_token(self.page_token())
            .finish("DescribeProvisionedProductPlanInput")
    }
}

impl fmt::Display for DescribeProvisionedProductPlanInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = PresentFields::new(f)?;
        out.field("AcceptLanguage", &self.accept_language)?;
        out.field("PlanId", &self.plan_id)?;
        out.field("PageSize", &self.page_size)?;
        out.field("PageToken", &self.page_token)?;
        out.finish()
    }
}

/// See [`DescribeProvisionedProductPlanInput`](crate::input::DescribeProvisionedProductPlanInput)
pub mod describe_provisioned_product_plan_input {
    /// A builder for [`DescribeProvisionedProductPlanInput`](crate::input::DescribeProvisionedProductPlanInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        accept_language: Option<String>,
        plan_id: Option<String>,
        page_size: Option<i32>,
        page_token: Option<String>,
    }

    impl Builder {
        pub fn accept_language(mut self, input: impl Into<String>) -> Self {
            self.accept_language = Some(input.into());
            self
        }
        pub fn set_accept_language(mut self, input: Option<String>) -> Self {
            self.accept_language = input;
            self
        }
        pub fn plan_id(mut self, input: impl Into<String>) -> Self {
            self.plan_id = Some(input.into());
            self
        }
        pub fn set_plan_id(mut self, input: Option<String>) -> Self {
            self.plan_id = input;
            self
        }
        pub fn page_size(mut self, input: i32) -> Self {
            self.page_size = Some(input);
            self
        }
        pub fn set_page_size(mut self, input: Option<i32>) -> Self {
            self.page_size = input;
            self
        }
        pub fn page_token(mut self, input: impl Into<String>) -> Self {
            self.page_token = Some(input.into());
            self
        }
        pub fn set_page_token(mut self, input: Option<String>) -> Self {
            self.page_token = input;
            self
        }
        pub fn build(self) -> crate::input::DescribeProvisionedProductPlanInput {
            crate::input::DescribeProvisionedProductPlanInput {
                accept_language: self.accept_language,
                plan_id: self.plan_id,
                page_size: self.page_size,
                page_token: self.page_token,
            }
        }
    }
}

impl DescribeProvisionedProductPlanInput {
    pub fn builder() -> crate::input::describe_provisioned_product_plan_input::Builder {
        crate::input::describe_provisioned_product_plan_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchProductsInput {
    /// <p>The language code.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept_language: Option<String>,
    /// <p>The search filters. If no search filters are specified, the output includes all
    /// products to which the caller has access.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<BTreeMap<ProductViewFilterBy, Vec<String>>>,
    /// <p>The maximum number of items to return with this call.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i32>,
    /// <p>The sort field. If no value is specified, the results are not sorted.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<ProductViewSortBy>,
    /// <p>The sort order. If no value is specified, the results are not sorted.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
    /// <p>The page token for the next set of results.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
}

impl SearchProductsInput {
    pub fn accept_language(&self) -> Option<&str> {
        self.accept_language.as_deref()
    }
    pub fn filters(&self) -> Option<&BTreeMap<ProductViewFilterBy, Vec<String>>> {
        self.filters.as_ref()
    }
    pub fn page_size(&self) -> Option<i32> {
        self.page_size
    }
    pub fn sort_by(&self) -> Option<&ProductViewSortBy> {
        self.sort_by.as_ref()
    }
    pub fn sort_order(&self) -> Option<&SortOrder> {
        self.sort_order.as_ref()
    }
    pub fn page_token(&self) -> Option<&str> {
        self.page_token.as_deref()
    }

    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        Violations::new()
            .accept_language(self.accept_language())
            .page_size(self.page_size())
            .page_token(self.page_token())
            .finish("SearchProductsInput")
    }
}

impl fmt::Display for SearchProductsInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = PresentFields::new(f)?;
        out.field("AcceptLanguage", &self.accept_language)?;
        out.field("Filters", &self.filters)?;
        out.field("PageSize", &self.page_size)?;
        out.field("SortBy", &self.sort_by)?;
        out.field("SortOrder", &self.sort_order)?;
        out.field("PageToken", &self.page_token)?;
        out.finish()
    }
}

/// See [`SearchProductsInput`](crate::input::SearchProductsInput)
pub mod search_products_input {
    use crate::error::BuildError;
    use crate::model::{ProductViewFilterBy, ProductViewSortBy, SortOrder};
    use std::collections::btree_map::Entry;
    use std::collections::BTreeMap;

    /// A builder for [`SearchProductsInput`](crate::input::SearchProductsInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        accept_language: Option<String>,
        filters: Option<BTreeMap<ProductViewFilterBy, Vec<String>>>,
        page_size: Option<i32>,
        sort_by: Option<ProductViewSortBy>,
        sort_order: Option<SortOrder>,
        page_token: Option<String>,
    }

    impl Builder {
        pub fn accept_language(mut self, input: impl Into<String>) -> Self {
            self.accept_language = Some(input.into());
            self
        }
        pub fn set_accept_language(mut self, input: Option<String>) -> Self {
            self.accept_language = input;
            self
        }
        /// Adds one filter to `filters`.
        ///
        /// Fails if a filter for `k` was already added.
        pub fn filters(
            mut self,
            k: impl Into<ProductViewFilterBy>,
            v: Vec<String>,
        ) -> Result<Self, BuildError> {
            let mut hash_map = self.filters.unwrap_or_default();
            match hash_map.entry(k.into()) {
                Entry::Occupied(entry) => {
                    return Err(BuildError::duplicate_key("Filters", entry.key()))
                }
                Entry::Vacant(entry) => {
                    entry.insert(v);
                }
            }
            self.filters = Some(hash_map);
            Ok(self)
        }
        pub fn set_filters(
            mut self,
            input: Option<BTreeMap<ProductViewFilterBy, Vec<String>>>,
        ) -> Self {
            self.filters = input;
            self
        }
        pub fn page_size(mut self, input: i32) -> Self {
            self.page_size = Some(input);
            self
        }
        pub fn set_page_size(mut self, input: Option<i32>) -> Self {
            self.page_size = input;
            self
        }
        pub fn sort_by(mut self, input: impl Into<ProductViewSortBy>) -> Self {
            self.sort_by = Some(input.into());
            self
        }
        pub fn set_sort_by(mut self, input: Option<ProductViewSortBy>) -> Self {
            self.sort_by = input;
            self
        }
        pub fn sort_order(mut self, input: impl Into<SortOrder>) -> Self {
            self.sort_order = Some(input.into());
            self
        }
        pub fn set_sort_order(mut self, input: Option<SortOrder>) -> Self {
            self.sort_order = input;
            self
        }
        pub fn page_token(mut self, input: impl Into<String>) -> Self {
            self.page_token = Some(input.into());
            self
        }
        pub fn set_page_token(mut self, input: Option<String>) -> Self {
            self.page_token = input;
            self
        }
        /// Consumes the builder and constructs a [`SearchProductsInput`](crate::input::SearchProductsInput)
        pub fn build(self) -> crate::input::SearchProductsInput {
            crate::input::SearchProductsInput {
                accept_language: self.accept_language,
                filters: self.filters,
                page_size: self.page_size,
                sort_by: self.sort_by,
                sort_order: self.sort_order,
                page_token: self.page_token,
            }
        }
    }
}

impl SearchProductsInput {
    /// Creates a new builder-style object to manufacture [`SearchProductsInput`](crate::input::SearchProductsInput)
    pub fn builder() -> crate::input::search_products_input::Builder {
        crate::input::search_products_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListStackInstancesForProvisionedProductInput {
    /// <p>The language code.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept_language: Option<String>,
    /// <p>The identifier of the provisioned product.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioned_product_id: Option<String>,
    /// <p>The page token for the next set of results.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
    /// <p>The maximum number of items to return with this call.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i32>,
}

impl ListStackInstancesForProvisionedProductInput {
    pub fn accept_language(&self) -> Option<&str> {
        self.accept_language.as_deref()
    }
    pub fn provisioned_product_id(&self) -> Option<&str> {
        self.provisioned_product_id.as_deref()
    }
    pub fn page_token(&self) -> Option<&str> {
        self.page_token.as_deref()
    }
    pub fn page_size(&self) -> Option<i32> {
        self.page_size
    }

    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        Violations::new()
            .accept_language(self.accept_language())
            .id("ProvisionedProductId", self.provisioned_product_id())
            .page_token(self.page_token())
            .page_size(self.page_size())
            .finish("ListStackInstancesForProvisionedProductInput")
    }
}

impl fmt::Display for ListStackInstancesForProvisionedProductInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = PresentFields::new(f)?;
        out.field("AcceptLanguage", &self.accept_language)?;
        out.field("ProvisionedProductId", &self.provisioned_product_id)?;
        out.field("PageToken", &self.page_token)?;
        out.field("PageSize", &self.page_size)?;
        out.finish()
    }
}

/// See [`ListStackInstancesForProvisionedProductInput`](crate::input::ListStackInstancesForProvisionedProductInput)
pub mod list_stack_instances_for_provisioned_product_input {
    /// A builder for [`ListStackInstancesForProvisionedProductInput`](crate::input::ListStackInstancesForProvisionedProductInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        accept_language: Option<String>,
        provisioned_product_id: Option<String>,
        page_token: Option<String>,
        page_size: Option<i32>,
    }

    impl Builder {
        pub fn accept_language(mut self, input: impl Into<String>) -> Self {
            self.accept_language = Some(input.into());
            self
        }
        pub fn set_accept_language(mut self, input: Option<String>) -> Self {
            self.accept_language = input;
            self
        }
        pub fn provisioned_product_id(mut self, input: impl Into<String>) -> Self {
            self.provisioned_product_id = Some(input.into());
            self
        }
        pub fn set_provisioned_product_id(mut self, input: Option<String>) -> Self {
            self.provisioned_product_id = input;
            self
        }
        pub fn page_token(mut self, input: impl Into<String>) -> Self {
            self.page_token = Some(input.into());
            self
        }
        pub fn set_page_token(mut self, input: Option<String>) -> Self {
            self.page_token = input;
            self
        }
        pub fn page_size(mut self, input: i32) -> Self {
            self.page_size = Some(input);
            self
        }
        pub fn set_page_size(mut self, input: Option<i32>) -> Self {
            self.page_size = input;
            self
        }
        pub fn build(self) -> crate::input::ListStackInstancesForProvisionedProductInput {
            crate::input::ListStackInstancesForProvisionedProductInput {
                accept_language: self.accept_language,
                provisioned_product_id: self.provisioned_product_id,
                page_token: self.page_token,
                page_size: self.page_size,
            }
        }
    }
}

impl ListStackInstancesForProvisionedProductInput {
    pub fn builder() -> crate::input::list_stack_instances_for_provisioned_product_input::Builder
    {
        crate::input::list_stack_instances_for_provisioned_product_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TerminateProvisionedProductInput {
    /// <p>The name of the provisioned product. You cannot specify both
    /// <code>ProvisionedProductName</code> and <code>ProvisionedProductId</code>.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioned_product_name: Option<String>,
    /// <p>The identifier of the provisioned product. You cannot specify both
    /// <code>ProvisionedProductName</code> and <code>ProvisionedProductId</code>.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioned_product_id: Option<String>,
    /// <p>An idempotency token that uniquely identifies the termination request. This token
    /// is only valid during the termination process. After the provisioned product is
    /// terminated, subsequent requests to terminate the same provisioned product always
    /// return <b>ResourceNotFound</b>.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminate_token: Option<String>,
    /// <p>If set to true, AWS Service Catalog stops managing the specified provisioned
    /// product even if it cannot delete the underlying resources.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_errors: Option<bool>,
    /// <p>The language code.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept_language: Option<String>,
}

impl TerminateProvisionedProductInput {
    pub fn provisioned_product_name(&self) -> Option<&str> {
        self.provisioned_product_name.as_deref()
    }
    pub fn provisioned_product_id(&self) -> Option<&str> {
        self.provisioned_product_id.as_deref()
    }
    pub fn terminate_token(&self) -> Option<&str> {
        self.terminate_token.as_deref()
    }
    pub fn ignore_errors(&self) -> Option<bool> {
        self.ignore_errors
    }
    pub fn accept_language(&self) -> Option<&str> {
        self.accept_language.as_deref()
    }

    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        Violations::new()
            .provisioned_product_name_or_arn(self.provisioned_product_name())
            .id("ProvisionedProductId", self.provisioned_product_id())
            .idempotency_token("TerminateToken", self.terminate_token())
            .accept_language(self.accept_language())
            .finish("TerminateProvisionedProductInput")
    }
}

impl fmt::Display for TerminateProvisionedProductInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = PresentFields::new(f)?;
        out.field("ProvisionedProductName", &self.provisioned_product_name)?;
        out.field("ProvisionedProductId", &self.provisioned_product_id)?;
        out.field("TerminateToken", &self.terminate_token)?;
        out.field("IgnoreErrors", &self.ignore_errors)?;
        out.field("AcceptLanguage", &self.accept_language)?;
        out.finish()
    }
}

/// See [`TerminateProvisionedProductInput`](crate::input::TerminateProvisionedProductInput)
pub mod terminate_provisioned_product_input {
    use crate::idempotency_token::IdempotencyTokenProvider;

    /// A builder for [`TerminateProvisionedProductInput`](crate::input::TerminateProvisionedProductInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        provisioned_product_name: Option<String>,
        provisioned_product_id: Option<String>,
        terminate_token: Option<String>,
        ignore_errors: Option<bool>,
        accept_language: Option<String>,
    }

    impl Builder {
        pub fn provisioned_product_name(mut self, input: impl Into<String>) -> Self {
            self.provisioned_product_name = Some(input.into());
            self
        }
        pub fn set_provisioned_product_name(mut self, input: Option<String>) -> Self {
            self.provisioned_product_name = input;
            self
        }
        pub fn provisioned_product_id(mut self, input: impl Into<String>) -> Self {
            self.provisioned_product_id = Some(input.into());
            self
        }
        pub fn set_provisioned_product_id(mut self, input: Option<String>) -> Self {
            self.provisioned_product_id = input;
            self
        }
        pub fn terminate_token(mut self, input: impl Into<String>) -> Self {
            self.terminate_token = Some(input.into());
            self
        }
        pub fn set_terminate_token(mut self, input: Option<String>) -> Self {
            self.terminate_token = input;
            self
        }
        /// Sets `terminate_token` to a fresh token from `provider`.
        pub fn terminate_token_from(self, provider: &IdempotencyTokenProvider) -> Self {
            self.terminate_token(provider.make_idempotency_token())
        }
        pub fn ignore_errors(mut self, input: bool) -> Self {
            self.ignore_errors = Some(input);
            self
        }
        pub fn set_ignore_errors(mut self, input: Option<bool>) -> Self {
            self.ignore_errors = input;
            self
        }
        pub fn accept_language(mut self, input: impl Into<String>) -> Self {
            self.accept_language = Some(input.into());
            self
        }
        pub fn set_accept_language(mut self, input: Option<String>) -> Self {
            self.accept_language = input;
            self
        }
        /// Consumes the builder and constructs a [`TerminateProvisionedProductInput`](crate::input::TerminateProvisionedProductInput)
        pub fn build(self) -> crate::input::TerminateProvisionedProductInput {
            crate::input::TerminateProvisionedProductInput {
                provisioned_product_name: self.provisioned_product_name,
                provisioned_product_id: self.provisioned_product_id,
                terminate_token: self.terminate_token,
                ignore_errors: self.ignore_errors,
                accept_language: self.accept_language,
            }
        }
    }
}

impl TerminateProvisionedProductInput {
    /// Creates a new builder-style object to manufacture [`TerminateProvisionedProductInput`](crate::input::TerminateProvisionedProductInput)
    pub fn builder() -> crate::input::terminate_provisioned_product_input::Builder {
        crate::input::terminate_provisioned_product_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateProvisionedProductInput {
    /// <p>The language code.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept_language: Option<String>,
    /// <p>The name of the provisioned product. You cannot specify both
    /// <code>ProvisionedProductName</code> and <code>ProvisionedProductId</code>.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioned_product_name: Option<String>,
    /// <p>The identifier of the provisioned product.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioned_product_id: Option<String>,
    /// <p>The identifier of the product.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    /// <p>The identifier of the provisioning artifact.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioning_artifact_id: Option<String>,
    /// <p>The new path identifier. This value is optional if the product has a default
    /// path, and required if the product has more than one path.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_id: Option<String>,
    /// <p>The new parameters.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioning_parameters: Option<Vec<UpdateProvisioningParameter>>,
    /// <p>An object that contains information about the provisioning preferences for a stack
    /// set.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioning_preferences: Option<UpdateProvisioningPreferences>,
    /// <p>One or more tags. Requires the product to have <code>RESOURCE_UPDATE</code>
    /// constraint with <code>TagUpdatesOnProvisionedProduct</code> set to
    /// <code>ALLOWED</code>.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    /// <p>The idempotency token that uniquely identifies the provisioning update
    /// request.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_token: Option<String>,
}

impl UpdateProvisionedProductInput {
    pub fn accept_language(&self) -> Option<&str> {
        self.accept_language.as_deref()
    }
    pub fn provisioned_product_name(&self) -> Option<&str> {
        self.provisioned_product_name.as_deref()
    }
    pub fn provisioned_product_id(&self) -> Option<&str> {
        self.provisioned_product_id.as_deref()
    }
    pub fn product_id(&self) -> Option<&str> {
        self.product_id.as_deref()
    }
    pub fn provisioning_artifact_id(&self) -> Option<&str> {
        self.provisioning_artifact_id.as_deref()
    }
    pub fn path_id(&self) -> Option<&str> {
        self.path_id.as_deref()
    }
    pub fn provisioning_parameters(&self) -> Option<&[UpdateProvisioningParameter]> {
        self.provisioning_parameters.as_deref()
    }
    pub fn provisioning_preferences(&self) -> Option<&UpdateProvisioningPreferences> {
        self.provisioning_preferences.as_ref()
    }
    pub fn tags(&self) -> Option<&[Tag]> {
        self.tags.as_deref()
    }
    pub fn update_token(&self) -> Option<&str> {
        self.update_token.as_deref()
    }

    /// Checks the documented constraints of the members that are set, including the members
    /// of nested parameters, preferences and tags.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        Violations::new()
            .accept_language(self.accept_language())
            .provisioned_product_name_or_arn(self.provisioned_product_name())
            .id("ProvisionedProductId", self.provisioned_product_id())
            .id("ProductId", self.product_id())
            .id("ProvisioningArtifactId", self.provisioning_artifact_id())
            .id("PathId", self.path_id())
            .provisioning_parameters("ProvisioningParameters", self.provisioning_parameters())
            .provisioning_preferences("ProvisioningPreferences", self.provisioning_preferences())
            .tags("Tags", self.tags())
            .idempotency_token("UpdateToken", self.update_token())
            .finish("UpdateProvisionedProductInput")
    }
}

impl fmt::Display for UpdateProvisionedProductInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = PresentFields::new(f)?;
        out.field("AcceptLanguage", &self.accept_language)?;
        out.field("ProvisionedProductName", &self.provisioned_product_name)?;
        out.field("ProvisionedProductId", &self.provisioned_product_id)?;
        out.field("ProductId", &self.product_id)?;
        out.field("ProvisioningArtifactId", &self.provisioning_artifact_id)?;
        out.field("PathId", &self.path_id)?;
        out.field("ProvisioningParameters", &self.provisioning_parameters)?;
        out.field("ProvisioningPreferences", &self.provisioning_preferences)?;
        out.field("Tags", &self.tags)?;
        out.field("UpdateToken", &self.update_token)?;
        out.finish()
    }
}

/// See [`UpdateProvisionedProductInput`](crate::input::UpdateProvisionedProductInput)
pub mod update_provisioned_product_input {
    use crate::idempotency_token::IdempotencyTokenProvider;
    use crate::model::{Tag, UpdateProvisioningParameter, UpdateProvisioningPreferences};

    /// A builder for [`UpdateProvisionedProductInput`](crate::input::UpdateProvisionedProductInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        accept_language: Option<String>,
        provisioned_product_name: Option<String>,
        provisioned_product_id: Option<String>,
        product_id: Option<String>,
        provisioning_artifact_id: Option<String>,
        path_id: Option<String>,
        provisioning_parameters: Option<Vec<UpdateProvisioningParameter>>,
        provisioning_preferences: Option<UpdateProvisioningPreferences>,
        tags: Option<Vec<Tag>>,
        update_token: Option<String>,
    }

    impl Builder {
        pub fn accept_language(mut self, input: impl Into<String>) -> Self {
            self.accept_language = Some(input.into());
            self
        }
        pub fn set_accept_language(mut self, input: Option<String>) -> Self {
            self.accept_language = input;
            self
        }
        pub fn provisioned_product_name(mut self, input: impl Into<String>) -> Self {
            self.provisioned_product_name = Some(input.into());
            self
        }
        pub fn set_provisioned_product_name(mut self, input: Option<String>) -> Self {
            self.provisioned_product_name = input;
            self
        }
        pub fn provisioned_product_id(mut self, input: impl Into<String>) -> Self {
            self.provisioned_product_id = Some(input.into());
            self
        }
        pub fn set_provisioned_product_id(mut self, input: Option<String>) -> Self {
            self.provisioned_product_id = input;
            self
        }
        pub fn product_id(mut self, input: impl Into<String>) -> Self {
            self.product_id = Some(input.into());
            self
        }
        pub fn set_product_id(mut self, input: Option<String>) -> Self {
            self.product_id = input;
            self
        }
        pub fn provisioning_artifact_id(mut self, input: impl Into<String>) -> Self {
            self.provisioning_artifact_id = Some(input.into());
            self
        }
        pub fn set_provisioning_artifact_id(mut self, input: Option<String>) -> Self {
            self.provisioning_artifact_id = input;
            self
        }
        pub fn path_id(mut self, input: impl Into<String>) -> Self {
            self.path_id = Some(input.into());
            self
        }
        pub fn set_path_id(mut self, input: Option<String>) -> Self {
            self.path_id = input;
            self
        }
        /// Appends an item to `provisioning_parameters`.
        pub fn provisioning_parameters(mut self, input: UpdateProvisioningParameter) -> Self {
            let mut v = self.provisioning_parameters.unwrap_or_default();
            v.push(input);
            self.provisioning_parameters = Some(v);
            self
        }
        pub fn set_provisioning_parameters(
            mut self,
            input: Option<Vec<UpdateProvisioningParameter>>,
        ) -> Self {
            self.provisioning_parameters = input;
            self
        }
        pub fn provisioning_preferences(mut self, input: UpdateProvisioningPreferences) -> Self {
            self.provisioning_preferences = Some(input);
            self
        }
        pub fn set_provisioning_preferences(
            mut self,
            input: Option<UpdateProvisioningPreferences>,
        ) -> Self {
            self.provisioning_preferences = input;
            self
        }
        /// Appends an item to `tags`.
        pub fn tags(mut self, input: Tag) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input);
            self.tags = Some(v);
            self
        }
        pub fn set_tags(mut self, input: Option<Vec<Tag>>) -> Self {
            self.tags = input;
            self
        }
        pub fn update_token(mut self, input: impl Into<String>) -> Self {
            self.update_token = Some(input.into());
            self
        }
        pub fn set_update_token(mut self, input: Option<String>) -> Self {
            self.update_token = input;
            self
        }
        /// Sets `update_token` to a fresh token from `provider`.
        pub fn update_token_from(self, provider: &IdempotencyTokenProvider) -> Self {
            self.update_token(provider.make_idempotency_token())
        }
        /// Consumes the builder and constructs a [`UpdateProvisionedProductInput`](crate::input::UpdateProvisionedProductInput)
        pub fn build(self) -> crate::input::UpdateProvisionedProductInput {
            crate::input::UpdateProvisionedProductInput {
                accept_language: self.accept_language,
                provisioned_product_name: self.provisioned_product_name,
                provisioned_product_id: self.provisioned_product_id,
                product_id: self.product_id,
                provisioning_artifact_id: self.provisioning_artifact_id,
                path_id: self.path_id,
                provisioning_parameters: self.provisioning_parameters,
                provisioning_preferences: self.provisioning_preferences,
                tags: self.tags,
                update_token: self.update_token,
            }
        }
    }
}

impl UpdateProvisionedProductInput {
    /// Creates a new builder-style object to manufacture [`UpdateProvisionedProductInput`](crate::input::UpdateProvisionedProductInput)
    pub fn builder() -> crate::input::update_provisioned_product_input::Builder {
        crate::input::update_provisioned_product_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateProvisionedProductPropertiesInput {
    /// <p>The language code.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept_language: Option<String>,
    /// <p>The identifier of the provisioned product.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioned_product_id: Option<String>,
    /// <p>A map that contains the provisioned product properties to be updated.</p>
    /// <p>The <code>LAUNCH_ROLE</code> key accepts role ARNs. The <code>OWNER</code> key
    /// accepts user ARNs and role ARNs; the owner is the user that has permission to see,
    /// update, terminate, and execute service actions in the provisioned product.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioned_product_properties: Option<BTreeMap<PropertyKey, String>>,
    /// <p>The idempotency token that uniquely identifies the provisioning product update
    /// request.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotency_token: Option<String>,
}

impl UpdateProvisionedProductPropertiesInput {
    pub fn accept_language(&self) -> Option<&str> {
        self.accept_language.as_deref()
    }
    pub fn provisioned_product_id(&self) -> Option<&str> {
        self.provisioned_product_id.as_deref()
    }
    pub fn provisioned_product_properties(&self) -> Option<&BTreeMap<PropertyKey, String>> {
        self.provisioned_product_properties.as_ref()
    }
    pub fn idempotency_token(&self) -> Option<&str> {
        self.idempotency_token.as_deref()
    }

    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut violations = Violations::new();
        violations
            .accept_language(self.accept_language())
            .id("ProvisionedProductId", self.provisioned_product_id())
            .idempotency_token("IdempotencyToken", self.idempotency_token());
        for (key, value) in self.provisioned_product_properties.iter().flatten() {
            violations.length(
                &format!("ProvisionedProductProperties[{}]", key),
                Some(value.as_str()),
                1,
                Some(1024),
            );
        }
        violations.finish("UpdateProvisionedProductPropertiesInput")
    }
}

impl fmt::Display for UpdateProvisionedProductPropertiesInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = PresentFields::new(f)?;
        out.field("AcceptLanguage", &self.accept_language)?;
        out.field("ProvisionedProductId", &self.provisioned_product_id)?;
        out.field(
            "ProvisionedProductProperties",
            &self.provisioned_product_properties,
        )?;
        out.field("IdempotencyToken", &self.idempotency_token)?;
        out.finish()
    }
}

/// See [`UpdateProvisionedProductPropertiesInput`](crate::input::UpdateProvisionedProductPropertiesInput)
pub mod update_provisioned_product_properties_input {
    use crate::error::BuildError;
    use crate::idempotency_token::IdempotencyTokenProvider;
    use crate::model::PropertyKey;
    use std::collections::btree_map::Entry;
    use std::collections::BTreeMap;

    /// A builder for [`UpdateProvisionedProductPropertiesInput`](crate::input::UpdateProvisionedProductPropertiesInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        accept_language: Option<String>,
        provisioned_product_id: Option<String>,
        provisioned_product_properties: Option<BTreeMap<PropertyKey, String>>,
        idempotency_token: Option<String>,
    }

    impl Builder {
        pub fn accept_language(mut self, input: impl Into<String>) -> Self {
            self.accept_language = Some(input.into());
            self
        }
        pub fn set_accept_language(mut self, input: Option<String>) -> Self {
            self.accept_language = input;
            self
        }
        pub fn provisioned_product_id(mut self, input: impl Into<String>) -> Self {
            self.provisioned_product_id = Some(input.into());
            self
        }
        pub fn set_provisioned_product_id(mut self, input: Option<String>) -> Self {
            self.provisioned_product_id = input;
            self
        }
        /// Adds one property to `provisioned_product_properties`.
        ///
        /// Fails if `k` was already added.
        pub fn provisioned_product_properties(
            mut self,
            k: impl Into<PropertyKey>,
            v: impl Into<String>,
        ) -> Result<Self, BuildError> {
            let mut hash_map = self.provisioned_product_properties.unwrap_or_default();
            match hash_map.entry(k.into()) {
                Entry::Occupied(entry) => {
                    return Err(BuildError::duplicate_key(
                        "ProvisionedProductProperties",
                        entry.key(),
                    ))
                }
                Entry::Vacant(entry) => {
                    entry.insert(v.into());
                }
            }
            self.provisioned_product_properties = Some(hash_map);
            Ok(self)
        }
        pub fn set_provisioned_product_properties(
            mut self,
            input: Option<BTreeMap<PropertyKey, String>>,
        ) -> Self {
            self.provisioned_product_properties = input;
            self
        }
        pub fn idempotency_token(mut self, input: impl Into<String>) -> Self {
            self.idempotency_token = Some(input.into());
            self
        }
        pub fn set_idempotency_token(mut self, input: Option<String>) -> Self {
            self.idempotency_token = input;
            self
        }
        /// Sets `idempotency_token` to a fresh token from `provider`.
        pub fn idempotency_token_from(self, provider: &IdempotencyTokenProvider) -> Self {
            self.idempotency_token(provider.make_idempotency_token())
        }
        pub fn build(self) -> crate::input::UpdateProvisionedProductPropertiesInput {
            crate::input::UpdateProvisionedProductPropertiesInput {
                accept_language: self.accept_language,
                provisioned_product_id: self.provisioned_product_id,
                provisioned_product_properties: self.provisioned_product_properties,
                idempotency_token: self.idempotency_token,
            }
        }
    }
}

impl UpdateProvisionedProductPropertiesInput {
    pub fn builder() -> crate::input::update_provisioned_product_properties_input::Builder {
        crate::input::update_provisioned_product_properties_input::Builder::default()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::BuildError;
    use crate::idempotency_token::IdempotencyTokenProvider;
    use crate::model::ProvisioningArtifactPropertyName;
    use tracing_test::traced_test;

    #[test]
    fn terminate_renders_present_fields_in_order() {
        let input = TerminateProvisionedProductInput::builder()
            .provisioned_product_id("pp-abc123")
            .terminate_token("tok-1")
            .ignore_errors(true)
            .build();
        assert_eq!(
            input.to_string(),
            "{ProvisionedProductId: pp-abc123,TerminateToken: tok-1,IgnoreErrors: true}"
        );
    }

    #[test]
    fn empty_request_renders_braces() {
        assert_eq!(DescribeConstraintInput::builder().build().to_string(), "{}");
    }

    #[test]
    fn filters_reject_duplicate_keys() {
        let builder = SearchProductsInput::builder()
            .filters(ProductViewFilterBy::Owner, vec!["me".to_owned()])
            .unwrap();
        let err = builder
            .clone()
            .filters("Owner", vec!["you".to_owned()])
            .unwrap_err();
        assert_eq!(
            err,
            BuildError::DuplicateKey {
                field: "Filters",
                key: "Owner".to_owned()
            }
        );
        let input = builder
            .filters(ProductViewFilterBy::FullTextSearch, vec!["vpc".to_owned()])
            .unwrap()
            .build();
        assert_eq!(input.filters().map(|f| f.len()), Some(2));
        assert_eq!(
            input.to_string(),
            "{Filters: {FullTextSearch=[vpc], Owner=[me]}}"
        );
    }

    #[test]
    #[traced_test]
    fn duplicate_keys_are_logged() {
        let _ = SearchProductsInput::builder()
            .filters("SourceProductId", vec!["prod-1".to_owned()])
            .and_then(|b| b.filters("SourceProductId", vec!["prod-2".to_owned()]));
        assert!(logs_contain("rejected duplicate map entry"));
        assert!(logs_contain("SourceProductId"));
    }

    #[test]
    fn properties_reject_duplicate_keys() {
        let result = UpdateProvisionedProductPropertiesInput::builder()
            .provisioned_product_properties(PropertyKey::Owner, "arn:aws:iam::123456789012:user/a")
            .and_then(|b| {
                b.provisioned_product_properties("OWNER", "arn:aws:iam::123456789012:user/b")
            });
        assert!(matches!(
            result,
            Err(BuildError::DuplicateKey {
                field: "ProvisionedProductProperties",
                ..
            })
        ));
    }

    #[test]
    fn list_members_accumulate() {
        let mut identifiers = ProvisioningArtifactIdentifiers::new();
        identifiers.insert(ProvisioningArtifactPropertyName::Id, "pa-1".to_owned());
        let input = CopyProductInput::builder()
            .copy_options(CopyOption::CopyTags)
            .copy_options("CopyTags")
            .source_provisioning_artifact_identifiers(identifiers)
            .build();
        assert_eq!(input.copy_options().map(|c| c.len()), Some(2));
        assert_eq!(
            input.to_string(),
            "{SourceProvisioningArtifactIdentifiers: [{Id=pa-1}],CopyOptions: [CopyTags, CopyTags]}"
        );
    }

    #[test]
    fn tokens_are_drawn_from_provider() {
        let provider = IdempotencyTokenProvider::fixed("00000000-0000-4000-8000-000000000000");
        let input = UpdateProvisionedProductInput::builder()
            .provisioned_product_id("pp-abc123")
            .update_token_from(&provider)
            .build();
        assert_eq!(
            input.update_token(),
            Some("00000000-0000-4000-8000-000000000000")
        );
        assert!(input.validate().is_ok());
    }

    #[test]
    #[traced_test]
    fn validation_failures_are_logged() {
        let input = DescribeConstraintInput::builder().id("").build();
        assert!(input.validate().is_err());
        assert!(logs_contain("request failed validation"));
        assert!(logs_contain("DescribeConstraintInput"));
    }

    #[test]
    fn builds_never_validate() {
        let input = ListConstraintsForPortfolioInput::builder()
            .portfolio_id("port/abc")
            .page_size(500)
            .build();
        assert_eq!(input.page_size(), Some(500));
        let errors = input.validate().unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["PortfolioId", "PageSize"]);
    }

    #[test]
    fn property_values_are_checked_per_key() {
        let input = UpdateProvisionedProductPropertiesInput::builder()
            .provisioned_product_properties(PropertyKey::LaunchRole, "")
            .unwrap()
            .build();
        let errors = input.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "ProvisionedProductProperties[LAUNCH_ROLE]");
    }

    #[test]
    fn provisioned_products_can_be_named_by_arn() {
        let arn = "arn:aws:servicecatalog:us-east-1:123456789012:stack/web/pp-abc123";
        let terminate = TerminateProvisionedProductInput::builder()
            .provisioned_product_name(arn)
            .build();
        assert_eq!(terminate.validate(), Ok(()));
        let update = UpdateProvisionedProductInput::builder()
            .provisioned_product_name(arn)
            .build();
        assert_eq!(update.validate(), Ok(()));

        let errors = TerminateProvisionedProductInput::builder()
            .provisioned_product_name("_web")
            .build()
            .validate()
            .unwrap_err();
        assert_eq!(errors[0].field, "ProvisionedProductName");
    }

    #[test]
    fn copy_product_tokens_are_identifiers() {
        let input = DescribeCopyProductStatusInput::builder()
            .copy_product_token("_copyproduct-abc123")
            .build();
        assert_eq!(input.validate(), Ok(()));

        let errors = DescribeCopyProductStatusInput::builder()
            .copy_product_token("copy/product")
            .build()
            .validate()
            .unwrap_err();
        assert_eq!(errors[0].field, "CopyProductToken");
    }
}
