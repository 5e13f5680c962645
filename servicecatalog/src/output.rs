/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Result shapes, one per operation.

use crate::fmt::PresentFields;
use crate::model::{
    ConstraintDetail, CopyProductStatus, ProductViewAggregationValue, ProductViewSummary,
    PropertyKey, ProvisioningArtifactDetail, RecordDetail, RecordStatus, ResourceChange,
    ShareDetails, ShareStatus, StackInstance, Status,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CopyProductOutput {
    /// <p>The token to use to track the progress of the operation.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_product_token: Option<String>,
}

impl CopyProductOutput {
    pub fn copy_product_token(&self) -> Option<&str> {
        self.copy_product_token.as_deref()
    }
}

impl fmt::Display for CopyProductOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = PresentFields::new(f)?;
        out.field("CopyProductToken", &self.copy_product_token)?;
        out.finish()
    }
}

/// See [`CopyProductOutput`](crate::output::CopyProductOutput)
pub mod copy_product_output {
    /// A builder for [`CopyProductOutput`](crate::output::CopyProductOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        copy_product_token: Option<String>,
    }

    impl Builder {
        pub fn copy_product_token(mut self, input: impl Into<String>) -> Self {
            self.copy_product_token = Some(input.into());
            self
        }
        pub fn set_copy_product_token(mut self, input: Option<String>) -> Self {
            self.copy_product_token = input;
            self
        }
        pub fn build(self) -> crate::output::CopyProductOutput {
            crate::output::CopyProductOutput {
                copy_product_token: self.copy_product_token,
            }
        }
    }
}

impl CopyProductOutput {
    pub fn builder() -> crate::output::copy_product_output::Builder {
        crate::output::copy_product_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeCopyProductStatusOutput {
    /// <p>The status of the copy product operation.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_product_status: Option<CopyProductStatus>,
    /// <p>The identifier of the copied product.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_product_id: Option<String>,
    /// <p>The status message.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_detail: Option<String>,
}

impl DescribeCopyProductStatusOutput {
    pub fn copy_product_status(&self) -> Option<&CopyProductStatus> {
        self.copy_product_status.as_ref()
    }
    pub fn target_product_id(&self) -> Option<&str> {
        self.target_product_id.as_deref()
    }
    pub fn status_detail(&self) -> Option<&str> {
        self.status_detail.as_deref()
    }
}

impl fmt::Display for DescribeCopyProductStatusOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = PresentFields::new(f)?;
        out.field("CopyProductStatus", &self.copy_product_status)?;
        out.field("TargetProductId", &self.target_product_id)?;
        out.field("StatusDetail", &self.status_detail)?;
        out.finish()
    }
}

/// See [`DescribeCopyProductStatusOutput`](crate::output::DescribeCopyProductStatusOutput)
pub mod describe_copy_product_status_output {
    use crate::model::CopyProductStatus;

    /// A builder for [`DescribeCopyProductStatusOutput`](crate::output::DescribeCopyProductStatusOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        copy_product_status: Option<CopyProductStatus>,
        target_product_id: Option<String>,
        status_detail: Option<String>,
    }

    impl Builder {
        pub fn copy_product_status(mut self, input: impl Into<CopyProductStatus>) -> Self {
            self.copy_product_status = Some(input.into());
            self
        }
        pub fn set_copy_product_status(mut self, input: Option<CopyProductStatus>) -> Self {
            self.copy_product_status = input;
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
        pub fn status_detail(mut self, input: impl Into<String>) -> Self {
            self.status_detail = Some(input.into());
            self
        }
        pub fn set_status_detail(mut self, input: Option<String>) -> Self {
            self.status_detail = input;
            self
        }
        pub fn build(self) -> crate::output::DescribeCopyProductStatusOutput {
            crate::output::DescribeCopyProductStatusOutput {
                copy_product_status: self.copy_product_status,
                target_product_id: self.target_product_id,
                status_detail: self.status_detail,
            }
        }
    }
}

impl DescribeCopyProductStatusOutput {
    pub fn builder() -> crate::output::describe_copy_product_status_output::Builder {
        crate::output::describe_copy_product_status_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeConstraintOutput {
    /// <p>Information about the constraint.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraint_detail: Option<ConstraintDetail>,
    /// <p>The constraint parameters, a JSON document whose schema depends on the constraint
    /// type.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraint_parameters: Option<String>,
    /// <p>The status of the current request.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

impl DescribeConstraintOutput {
    pub fn constraint_detail(&self) -> Option<&ConstraintDetail> {
        self.constraint_detail.as_ref()
    }
    pub fn constraint_parameters(&self) -> Option<&str> {
        self.constraint_parameters.as_deref()
    }
    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }
}

impl fmt::Display for DescribeConstraintOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = PresentFields::new(f)?;
        out.field("ConstraintDetail", &self.constraint_detail)?;
        out.field("ConstraintParameters", &self.constraint_parameters)?;
        out.field("Status", &self.status)?;
        out.finish()
    }
}

/// See [`DescribeConstraintOutput`](crate::output::DescribeConstraintOutput)
pub mod describe_constraint_output {
    use crate::model::{ConstraintDetail, Status};

    /// A builder for [`DescribeConstraintOutput`](crate::output::DescribeConstraintOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        constraint_detail: Option<ConstraintDetail>,
        constraint_parameters: Option<String>,
        status: Option<Status>,
    }

    impl Builder {
        pub fn constraint_detail(mut self, input: ConstraintDetail) -> Self {
            self.constraint_detail = Some(input);
            self
        }
        pub fn set_constraint_detail(mut self, input: Option<ConstraintDetail>) -> Self {
            self.constraint_detail = input;
            self
        }
        pub fn constraint_parameters(mut self, input: impl Into<String>) -> Self {
            self.constraint_parameters = Some(input.into());
            self
        }
        pub fn set_constraint_parameters(mut self, input: Option<String>) -> Self {
            self.constraint_parameters = input;
            self
        }
        pub fn status(mut self, input: impl Into<Status>) -> Self {
            self.status = Some(input.into());
            self
        }
        pub fn set_status(mut self, input: Option<Status>) -> Self {
            self.status = input;
            self
        }
        pub fn build(self) -> crate::output::DescribeConstraintOutput {
            crate::output::DescribeConstraintOutput {
                constraint_detail: self.constraint_detail,
                constraint_parameters: self.constraint_parameters,
                status: self.status,
            }
        }
    }
}

impl DescribeConstraintOutput {
    pub fn builder() -> crate::output::describe_constraint_output::Builder {
        crate::output::describe_constraint_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListConstraintsForPortfolioOutput {
    /// <p>Information about the constraints.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraint_details: Option<Vec<ConstraintDetail>>,
    /// <p>The page token to use to retrieve the next set of results. If there are no
    /// additional results, this value is null.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

impl ListConstraintsForPortfolioOutput {
    pub fn constraint_details(&self) -> Option<&[ConstraintDetail]> {
        self.constraint_details.as_deref()
    }
    pub fn next_page_token(&self) -> Option<&str> {
        self.next_page_token.as_deref()
    }
}

impl fmt::Display for ListConstraintsForPortfolioOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = PresentFields::new(f)?;
        out.field("ConstraintDetails", &self.constraint_details)?;
        out.field("NextPageToken", &self.next_page_token)?;
        out.finish()
    }
}

/// See [`ListConstraintsForPortfolioOutput`](crate::output::ListConstraintsForPortfolioOutput)
pub mod list_constraints_for_portfolio_output {
    use crate::model::ConstraintDetail;

    /// A builder for [`ListConstraintsForPortfolioOutput`](crate::output::ListConstraintsForPortfolioOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        constraint_details: Option<Vec<ConstraintDetail>>,
        next_page_token: Option<String>,
    }

    impl Builder {
        /// Appends an item to `constraint_details`.
        pub fn constraint_details(mut self, input: ConstraintDetail) -> Self {
            let mut v = self.constraint_details.unwrap_or_default();
            v.push(input);
            self.constraint_details = Some(v);
            self
        }
        pub fn set_constraint_details(mut self, input: Option<Vec<ConstraintDetail>>) -> Self {
            self.constraint_details = input;
            self
        }
        pub fn next_page_token(mut self, input: impl Into<String>) -> Self {
            self.next_page_token = Some(input.into());
            self
        }
        pub fn set_next_page_token(mut self, input: Option<String>) -> Self {
            self.next_page_token = input;
            self
        }
        pub fn build(self) -> crate::output::ListConstraintsForPortfolioOutput {
            crate::output::ListConstraintsForPortfolioOutput {
                constraint_details: self.constraint_details,
                next_page_token: self.next_page_token,
            }
        }
    }
}

impl ListConstraintsForPortfolioOutput {
    pub fn builder() -> crate::output::list_constraints_for_portfolio_output::Builder {
        crate::output::list_constraints_for_portfolio_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribePortfolioShareStatusOutput {
    /// <p>The token for the portfolio share operation.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio_share_token: Option<String>,
    /// <p>The portfolio identifier.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio_id: Option<String>,
    /// <p>Organization node identifier. It can be either account id, organizational unit id
    /// or organization id.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_node_value: Option<String>,
    /// <p>Status of the portfolio share operation.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ShareStatus>,
    /// <p>Information about the portfolio share operation.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_details: Option<ShareDetails>,
}

impl DescribePortfolioShareStatusOutput {
    pub fn portfolio_share_token(&self) -> Option<&str> {
        self.portfolio_share_token.as_deref()
    }
    pub fn portfolio_id(&self) -> Option<&str> {
        self.portfolio_id.as_deref()
    }
    pub fn organization_node_value(&self) -> Option<&str> {
        self.organization_node_value.as_deref()
    }
    pub fn status(&self) -> Option<&ShareStatus> {
        self.status.as_ref()
    }
    pub fn share_details(&self) -> Option<&ShareDetails> {
        self.share_details.as_ref()
    }
}

impl fmt::Display for DescribePortfolioShareStatusOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = PresentFields::new(f)?;
        out.field("PortfolioShareToken", &self.portfolio_share_token)?;
        out.field("PortfolioId", &self.portfolio_id)?;
        out.field("OrganizationNodeValue", &self.organization_node_value)?;
        out.field("Status", &self.status)?;
        out.field("ShareDetails", &self.share_details)?;
        out.finish()
    }
}

/// See [`DescribePortfolioShareStatusOutput`](crate::output::DescribePortfolioShareStatusOutput)
pub mod describe_portfolio_share_status_output {
    use crate::model::{ShareDetails, ShareStatus};

    /// A builder for [`DescribePortfolioShareStatusOutput`](crate::output::DescribePortfolioShareStatusOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        portfolio_share_token: Option<String>,
        portfolio_id: Option<String>,
        organization_node_value: Option<String>,
        status: Option<ShareStatus>,
        share_details: Option<ShareDetails>,
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
        pub fn portfolio_id(mut self, input: impl Into<String>) -> Self {
            self.portfolio_id = Some(input.into());
            self
        }
        pub fn set_portfolio_id(mut self, input: Option<String>) -> Self {
            self.portfolio_id = input;
            self
        }
        pub fn organization_node_value(mut self, input: impl Into<String>) -> Self {
            self.organization_node_value = Some(input.into());
            self
        }
        pub fn set_organization_node_value(mut self, input: Option<String>) -> Self {
            self.organization_node_value = input;
            self
        }
        pub fn status(mut self, input: impl Into<ShareStatus>) -> Self {
            self.status = Some(input.into());
            self
        }
        pub fn set_status(mut self, input: Option<ShareStatus>) -> Self {
            self.status = input;
            self
        }
        pub fn share_details(mut self, input: ShareDetails) -> Self {
            self.share_details = Some(input);
            self
        }
        pub fn set_share_details(mut self, input: Option<ShareDetails>) -> Self {
            self.share_details = input;
            self
        }
        pub fn build(self) -> crate::output::DescribePortfolioShareStatusOutput {
            crate::output::DescribePortfolioShareStatusOutput {
                portfolio_share_token: self.portfolio_share_token,
                portfolio_id: self.portfolio_id,
                organization_node_value: self.organization_node_value,
                status: self.status,
                share_details: self.share_details,
            }
        }
    }
}

impl DescribePortfolioShareStatusOutput {
    pub fn builder() -> crate::output::describe_portfolio_share_status_output::Builder {
        crate::output::describe_portfolio_share_status_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeProvisioningArtifactOutput {
    /// <p>Information about the provisioning artifact.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioning_artifact_detail: Option<ProvisioningArtifactDetail>,
    /// <p>The URL of the CloudFormation template in Amazon S3.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<BTreeMap<String, String>>,
    /// <p>The status of the current request.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

impl DescribeProvisioningArtifactOutput {
    pub fn provisioning_artifact_detail(&self) -> Option<&ProvisioningArtifactDetail> {
        self.provisioning_artifact_detail.as_ref()
    }
    pub fn info(&self) -> Option<&BTreeMap<String, String>> {
        self.info.as_ref()
    }
    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }
}

impl fmt::Display for DescribeProvisioningArtifactOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = PresentFields::new(f)?;
        out.field(
            "ProvisioningArtifactDetail",
            &self.provisioning_artifact_detail,
        )?;
        out.field("Info", &self.info)?;
        out.field("Status", &self.status)?;
        out.finish()
    }
}

/// See [`DescribeProvisioningArtifactOutput`](crate::output::DescribeProvisioningArtifactOutput)
pub mod describe_provisioning_artifact_output {
    use crate::error::BuildError;
    use crate::model::{ProvisioningArtifactDetail, Status};
    use std::collections::btree_map::Entry;
    use std::collections::BTreeMap;

    /// A builder for [`DescribeProvisioningArtifactOutput`](crate::output::DescribeProvisioningArtifactOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        provisioning_artifact_detail: Option<ProvisioningArtifactDetail>,
        info: Option<BTreeMap<String, String>>,
        status: Option<Status>,
    }

    impl Builder {
        pub fn provisioning_artifact_detail(mut self, input: ProvisioningArtifactDetail) -> Self {
            self.provisioning_artifact_detail = Some(input);
            self
        }
        pub fn set_provisioning_artifact_detail(
            mut self,
            input: Option<ProvisioningArtifactDetail>,
        ) -> Self {
            self.provisioning_artifact_detail = input;
            self
        }
        /// Adds one entry to `info`. Fails if `k` is already present.
        pub fn info(
            mut self,
            k: impl Into<String>,
            v: impl Into<String>,
        ) -> Result<Self, BuildError> {
            let mut hash_map = self.info.unwrap_or_default();
            match hash_map.entry(k.into()) {
                Entry::Occupied(entry) => {
                    return Err(BuildError::duplicate_key("Info", entry.key()))
                }
                Entry::Vacant(entry) => {
                    entry.insert(v.into());
                }
            }
            self.info = Some(hash_map);
            Ok(self)
        }
        pub fn set_info(mut self, input: Option<BTreeMap<String, String>>) -> Self {
            self.info = input;
            self
        }
        pub fn status(mut self, input: impl Into<Status>) -> Self {
            self.status = Some(input.into());
            self
        }
        pub fn set_status(mut self, input: Option<Status>) -> Self {
            self.status = input;
            self
        }
        pub fn build(self) -> crate::output::DescribeProvisioningArtifactOutput {
            crate::output::DescribeProvisioningArtifactOutput {
                provisioning_artifact_detail: self.provisioning_artifact_detail,
                info: self.info,
                status: self.status,
            }
        }
    }
}

impl DescribeProvisioningArtifactOutput {
    pub fn builder() -> crate::output::describe_provisioning_artifact_output::Builder {
        crate::output::describe_provisioning_artifact_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeProvisionedProductPlanOutput {
    /// <p>Information about the resource changes that will occur when the plan is
    /// executed.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_changes: Option<Vec<ResourceChange>>,
    /// <p>The page token to use to retrieve the next set of results.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

impl DescribeProvisionedProductPlanOutput {
    pub fn resource_changes(&self) -> Option<&[ResourceChange]> {
        self.resource_changes.as_deref()
    }
    pub fn next_page_token(&self) -> Option<&str> {
        self.next_page_token.as_deref()
    }
}

impl fmt::Display for DescribeProvisionedProductPlanOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = PresentFields::new(f)?;
        out.field("ResourceChanges", &self.resource_changes)?;
        out.field("NextPageToken", &self.next_page_token)?;
        out.finish()
    }
}

/// See [`DescribeProvisionedProductPlanOutput`](crate::output::DescribeProvisionedProductPlanOutput)
pub mod describe_provisioned_product_plan_output {
    use crate::model::ResourceChange;

    /// A builder for [`DescribeProvisionedProductPlanOutput`](crate::output::DescribeProvisionedProductPlanOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        resource_changes: Option<Vec<ResourceChange>>,
        next_page_token: Option<String>,
    }

    impl Builder {
        /// Appends an item to `resource_changes`.
        pub fn resource_changes(mut self, input: ResourceChange) -> Self {
            let mut v = self.resource_changes.unwrap_or_default();
            v.push(input);
            self.resource_changes = Some(v);
            self
        }
        pub fn set_resource_changes(mut self, input: Option<Vec<ResourceChange>>) -> Self {
            self.resource_changes = input;
            self
        }
        pub fn next_page_token(mut self, input: impl Into<String>) -> Self {
            self.next_page_token = Some(input.into());
            self
        }
        pub fn set_next_page_token(mut self, input: Option<String>) -> Self {
            self.next_page_token = input;
            self
        }
        pub fn build(self) -> crate::output::DescribeProvisionedProductPlanOutput {
            crate::output::DescribeProvisionedProductPlanOutput {
                resource_changes: self.resource_changes,
                next_page_token: self.next_page_token,
            }
        }
    }
}

impl DescribeProvisionedProductPlanOutput {
    pub fn builder() -> crate::output::describe_provisioned_product_plan_output::Builder {
        crate::output::describe_provisioned_product_plan_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchProductsOutput {
    /// <p>Information about the product views.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_view_summaries: Option<Vec<ProductViewSummary>>,
    /// <p>The product view aggregations.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_view_aggregations: Option<BTreeMap<String, Vec<ProductViewAggregationValue>>>,
    /// <p>The page token to use to retrieve the next set of results.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

impl SearchProductsOutput {
    pub fn product_view_summaries(&self) -> Option<&[ProductViewSummary]> {
        self.product_view_summaries.as_deref()
    }
    pub fn product_view_aggregations(
        &self,
    ) -> Option<&BTreeMap<String, Vec<ProductViewAggregationValue>>> {
        self.product_view_aggregations.as_ref()
    }
    pub fn next_page_token(&self) -> Option<&str> {
        self.next_page_token.as_deref()
    }
}

impl fmt::Display for SearchProductsOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = PresentFields::new(f)?;
        out.field("ProductViewSummaries", &self.product_view_summaries)?;
        out.field("ProductViewAggregations", &self.product_view_aggregations)?;
        out.field("NextPageToken", &self.next_page_token)?;
        out.finish()
    }
}

/// See [`SearchProductsOutput`](crate::output::SearchProductsOutput)
pub mod search_products_output {
    use crate::error::BuildError;
    use crate::model::{ProductViewAggregationValue, ProductViewSummary};
    use std::collections::btree_map::Entry;
    use std::collections::BTreeMap;

    /// A builder for [`SearchProductsOutput`](crate::output::SearchProductsOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        product_view_summaries: Option<Vec<ProductViewSummary>>,
        product_view_aggregations: Option<BTreeMap<String, Vec<ProductViewAggregationValue>>>,
        next_page_token: Option<String>,
    }

    impl Builder {
        /// Appends an item to `product_view_summaries`.
        pub fn product_view_summaries(mut self, input: ProductViewSummary) -> Self {
            let mut v = self.product_view_summaries.unwrap_or_default();
            v.push(input);
            self.product_view_summaries = Some(v);
            self
        }
        pub fn set_product_view_summaries(
            mut self,
            input: Option<Vec<ProductViewSummary>>,
        ) -> Self {
            self.product_view_summaries = input;
            self
        }
        /// Adds one aggregation to `product_view_aggregations`. Fails if `k` is already
        /// present.
        pub fn product_view_aggregations(
            mut self,
            k: impl Into<String>,
            v: Vec<ProductViewAggregationValue>,
        ) -> Result<Self, BuildError> {
            let mut hash_map = self.product_view_aggregations.unwrap_or_default();
            match hash_map.entry(k.into()) {
                Entry::Occupied(entry) => {
                    return Err(BuildError::duplicate_key(
                        "ProductViewAggregations",
                        entry.key(),
                    ))
                }
                Entry::Vacant(entry) => {
                    entry.insert(v);
                }
            }
            self.product_view_aggregations = Some(hash_map);
            Ok(self)
        }
        pub fn set_product_view_aggregations(
            mut self,
            input: Option<BTreeMap<String, Vec<ProductViewAggregationValue>>>,
        ) -> Self {
            self.product_view_aggregations = input;
            self
        }
        pub fn next_page_token(mut self, input: impl Into<String>) -> Self {
            self.next_page_token = Some(input.into());
            self
        }
        pub fn set_next_page_token(mut self, input: Option<String>) -> Self {
            self.next_page_token = input;
            self
        }
        pub fn build(self) -> crate::output::SearchProductsOutput {
            crate::output::SearchProductsOutput {
                product_view_summaries: self.product_view_summaries,
                product_view_aggregations: self.product_view_aggregations,
                next_page_token: self.next_page_token,
            }
        }
    }
}

impl SearchProductsOutput {
    pub fn builder() -> crate::output::search_products_output::Builder {
        crate::output::search_products_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListStackInstancesForProvisionedProductOutput {
    /// <p>List of stack instances.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_instances: Option<Vec<StackInstance>>,
    /// <p>The page token to use to retrieve the next set of results.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

impl ListStackInstancesForProvisionedProductOutput {
    pub fn stack_instances(&self) -> Option<&[StackInstance]> {
        self.stack_instances.as_deref()
    }
    pub fn next_page_token(&self) -> Option<&str> {
        self.next_page_token.as_deref()
    }
}

impl fmt::Display for ListStackInstancesForProvisionedProductOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = PresentFields::new(f)?;
        out.field("StackInstances", &self.stack_instances)?;
        out.field("NextPageToken", &self.next_page_token)?;
        out.finish()
    }
}

/// See [`ListStackInstancesForProvisionedProductOutput`](crate::output::ListStackInstancesForProvisionedProductOutput)
pub mod list_stack_instances_for_provisioned_product_output {
    use crate::model::StackInstance;

    /// A builder for [`ListStackInstancesForProvisionedProductOutput`](crate::output::ListStackInstancesForProvisionedProductOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        stack_instances: Option<Vec<StackInstance>>,
        next_page_token: Option<String>,
    }

    impl Builder {
        /// Appends an item to `stack_instances`.
        pub fn stack_instances(mut self, input: StackInstance) -> Self {
            let mut v = self.stack_instances.unwrap_or_default();
            v.push(input);
            self.stack_instances = Some(v);
            self
        }
        pub fn set_stack_instances(mut self, input: Option<Vec<StackInstance>>) -> Self {
            self.stack_instances = input;
            self
        }
        pub fn next_page_token(mut self, input: impl Into<String>) -> Self {
            self.next_page_token = Some(input.into());
            self
        }
        pub fn set_next_page_token(mut self, input: Option<String>) -> Self {
            self.next_page_token = input;
            self
        }
        pub fn build(self) -> crate::output::ListStackInstancesForProvisionedProductOutput {
            crate::output::ListStackInstancesForProvisionedProductOutput {
                stack_instances: self.stack_instances,
                next_page_token: self.next_page_token,
            }
        }
    }
}

impl ListStackInstancesForProvisionedProductOutput {
    pub fn builder() -> crate::output::list_stack_instances_for_provisioned_product_output::Builder
    {
        crate::output::list_stack_instances_for_provisioned_product_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TerminateProvisionedProductOutput {
    /// <p>Information about the result of this request.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_detail: Option<RecordDetail>,
}

impl TerminateProvisionedProductOutput {
    pub fn record_detail(&self) -> Option<&RecordDetail> {
        self.record_detail.as_ref()
    }
}

impl fmt::Display for TerminateProvisionedProductOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = PresentFields::new(f)?;
        out.field("RecordDetail", &self.record_detail)?;
        out.finish()
    }
}

/// See [`TerminateProvisionedProductOutput`](crate::output::TerminateProvisionedProductOutput)
pub mod terminate_provisioned_product_output {
    use crate::model::RecordDetail;

    /// A builder for [`TerminateProvisionedProductOutput`](crate::output::TerminateProvisionedProductOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        record_detail: Option<RecordDetail>,
    }

    impl Builder {
        pub fn record_detail(mut self, input: RecordDetail) -> Self {
            self.record_detail = Some(input);
            self
        }
        pub fn set_record_detail(mut self, input: Option<RecordDetail>) -> Self {
            self.record_detail = input;
            self
        }
        pub fn build(self) -> crate::output::TerminateProvisionedProductOutput {
            crate::output::TerminateProvisionedProductOutput {
                record_detail: self.record_detail,
            }
        }
    }
}

impl TerminateProvisionedProductOutput {
    pub fn builder() -> crate::output::terminate_provisioned_product_output::Builder {
        crate::output::terminate_provisioned_product_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateProvisionedProductOutput {
    /// <p>Information about the result of the request.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_detail: Option<RecordDetail>,
}

impl UpdateProvisionedProductOutput {
    pub fn record_detail(&self) -> Option<&RecordDetail> {
        self.record_detail.as_ref()
    }
}

impl fmt::Display for UpdateProvisionedProductOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = PresentFields::new(f)?;
        out.field("RecordDetail", &self.record_detail)?;
        out.finish()
    }
}

/// See [`UpdateProvisionedProductOutput`](crate::output::UpdateProvisionedProductOutput)
pub mod update_provisioned_product_output {
    use crate::model::RecordDetail;

    /// A builder for [`UpdateProvisionedProductOutput`](crate::output::UpdateProvisionedProductOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        record_detail: Option<RecordDetail>,
    }

    impl Builder {
        pub fn record_detail(mut self, input: RecordDetail) -> Self {
            self.record_detail = Some(input);
            self
        }
        pub fn set_record_detail(mut self, input: Option<RecordDetail>) -> Self {
            self.record_detail = input;
            self
        }
        pub fn build(self) -> crate::output::UpdateProvisionedProductOutput {
            crate::output::UpdateProvisionedProductOutput {
                record_detail: self.record_detail,
            }
        }
    }
}

impl UpdateProvisionedProductOutput {
    pub fn builder() -> crate::output::update_provisioned_product_output::Builder {
        crate::output::update_provisioned_product_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateProvisionedProductPropertiesOutput {
    /// <p>The provisioned product identifier.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioned_product_id: Option<String>,
    /// <p>A map that contains the properties updated.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioned_product_properties: Option<BTreeMap<PropertyKey, String>>,
    /// <p>The identifier of the record.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,
    /// <p>The status of the request.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RecordStatus>,
}

impl UpdateProvisionedProductPropertiesOutput {
    pub fn provisioned_product_id(&self) -> Option<&str> {
        self.provisioned_product_id.as_deref()
    }
    pub fn provisioned_product_properties(&self) -> Option<&BTreeMap<PropertyKey, String>> {
        self.provisioned_product_properties.as_ref()
    }
    pub fn record_id(&self) -> Option<&str> {
        self.record_id.as_deref()
    }
    pub fn status(&self) -> Option<&RecordStatus> {
        self.status.as_ref()
    }
}

impl fmt::Display for UpdateProvisionedProductPropertiesOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = PresentFields::new(f)?;
        out.field("ProvisionedProductId", &self.provisioned_product_id)?;
        out.field(
            "ProvisionedProductProperties",
            &self.provisioned_product_properties,
        )?;
        out.field("RecordId", &self.record_id)?;
        out.field("Status", &self.status)?;
        out.finish()
    }
}

/// See [`UpdateProvisionedProductPropertiesOutput`](crate::output::UpdateProvisionedProductPropertiesOutput)
pub mod update_provisioned_product_properties_output {
    use crate::error::BuildError;
    use crate::model::{PropertyKey, RecordStatus};
    use std::collections::btree_map::Entry;
    use std::collections::BTreeMap;

    /// A builder for [`UpdateProvisionedProductPropertiesOutput`](crate::output::UpdateProvisionedProductPropertiesOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        provisioned_product_id: Option<String>,
        provisioned_product_properties: Option<BTreeMap<PropertyKey, String>>,
        record_id: Option<String>,
        status: Option<RecordStatus>,
    }

    impl Builder {
        pub fn provisioned_product_id(mut self, input: impl Into<String>) -> Self {
            self.provisioned_product_id = Some(input.into());
            self
        }
        pub fn set_provisioned_product_id(mut self, input: Option<String>) -> Self {
            self.provisioned_product_id = input;
            self
        }
        /// Adds one property to `provisioned_product_properties`. Fails if `k` is already
        /// present.
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
        pub fn record_id(mut self, input: impl Into<String>) -> Self {
            self.record_id = Some(input.into());
            self
        }
        pub fn set_record_id(mut self, input: Option<String>) -> Self {
            self.record_id = input;
            self
        }
        pub fn status(mut self, input: impl Into<RecordStatus>) -> Self {
            self.status = Some(input.into());
            self
        }
        pub fn set_status(mut self, input: Option<RecordStatus>) -> Self {
            self.status = input;
            self
        }
        pub fn build(self) -> crate::output::UpdateProvisionedProductPropertiesOutput {
            crate::output::UpdateProvisionedProductPropertiesOutput {
                provisioned_product_id: self.provisioned_product_id,
                provisioned_product_properties: self.provisioned_product_properties,
                record_id: self.record_id,
                status: self.status,
            }
        }
    }
}

impl UpdateProvisionedProductPropertiesOutput {
    pub fn builder() -> crate::output::update_provisioned_product_properties_output::Builder {
        crate::output::update_provisioned_product_properties_output::Builder::default()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::BuildError;
    use crate::model::{RecordError, ResourceChange};

    #[test]
    fn record_detail_renders_nested_lists() {
        let output = TerminateProvisionedProductOutput::builder()
            .record_detail(
                RecordDetail::builder()
                    .record_id("rec-1")
                    .status(RecordStatus::InProgressInError)
                    .record_errors(
                        RecordError::builder()
                            .code("400")
                            .description("stack deletion failed")
                            .build(),
                    )
                    .build(),
            )
            .build();
        assert_eq!(
            output.to_string(),
            "{RecordDetail: {RecordId: rec-1,Status: IN_PROGRESS_IN_ERROR,RecordErrors: [{Code: 400,Description: stack deletion failed}]}}"
        );
    }

    #[test]
    fn info_map_rejects_duplicates() {
        let builder = DescribeProvisioningArtifactOutput::builder()
            .info("TemplateUrl", "https://s3.amazonaws.com/bucket/template.json")
            .unwrap();
        assert_eq!(
            builder.clone().info("TemplateUrl", "other").unwrap_err(),
            BuildError::DuplicateKey {
                field: "Info",
                key: "TemplateUrl".to_owned()
            }
        );
        let output = builder.status(Status::Available).build();
        assert_eq!(
            output.to_string(),
            "{Info: {TemplateUrl=https://s3.amazonaws.com/bucket/template.json},Status: AVAILABLE}"
        );
    }

    #[test]
    fn aggregations_keep_their_values() {
        let output = SearchProductsOutput::builder()
            .product_view_aggregations(
                "Owner",
                vec![ProductViewAggregationValue::builder()
                    .value("IT")
                    .approximate_count(3)
                    .build()],
            )
            .unwrap()
            .next_page_token("page-2")
            .build();
        assert_eq!(
            output.to_string(),
            "{ProductViewAggregations: {Owner=[{Value: IT,ApproximateCount: 3}]},NextPageToken: page-2}"
        );
    }

    #[test]
    fn outputs_compare_structurally() {
        let a = DescribeProvisionedProductPlanOutput::builder()
            .resource_changes(ResourceChange::builder().logical_resource_id("Bucket").build())
            .build();
        let mut b = a.clone();
        assert_eq!(a, b);
        b.next_page_token = Some("next".to_owned());
        assert_ne!(a, b);
    }

    #[test]
    fn aggregations_reject_duplicate_keys() {
        let builder = SearchProductsOutput::builder()
            .product_view_aggregations("Owner", vec![])
            .unwrap();
        assert_eq!(
            builder
                .clone()
                .product_view_aggregations(
                    "Owner",
                    vec![ProductViewAggregationValue::builder().value("IT").build()],
                )
                .unwrap_err(),
            BuildError::DuplicateKey {
                field: "ProductViewAggregations",
                key: "Owner".to_owned()
            }
        );
        let output = builder
            .product_view_aggregations("Vendor", vec![])
            .unwrap()
            .build();
        assert_eq!(output.product_view_aggregations().map(|a| a.len()), Some(2));
    }

    #[test]
    fn properties_reject_duplicate_keys() {
        let builder = UpdateProvisionedProductPropertiesOutput::builder()
            .provisioned_product_properties(PropertyKey::Owner, "arn:aws:iam::123456789012:user/a")
            .unwrap();
        assert_eq!(
            builder
                .clone()
                .provisioned_product_properties("OWNER", "arn:aws:iam::123456789012:user/b")
                .unwrap_err(),
            BuildError::DuplicateKey {
                field: "ProvisionedProductProperties",
                key: "OWNER".to_owned()
            }
        );
        let output = builder.build();
        assert_eq!(
            output
                .provisioned_product_properties()
                .and_then(|p| p.get(&PropertyKey::Owner))
                .map(String::as_str),
            Some("arn:aws:iam::123456789012:user/a")
        );
    }
}
