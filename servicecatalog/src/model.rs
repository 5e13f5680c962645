/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Shapes shared between operations: enumerations and the records nested in requests and
//! results.

use crate::fmt::{render_with_display, PresentFields};
use serde::{Deserialize, Serialize};
use smithy_types::Instant;
use std::collections::BTreeMap;
use std::fmt;

string_enum! {
    /// Progress of sharing a portfolio with an organization node.
    ShareStatus {
        NotStarted => "NOT_STARTED",
        InProgress => "IN_PROGRESS",
        Completed => "COMPLETED",
        CompletedWithErrors => "COMPLETED_WITH_ERRORS",
        Error => "ERROR",
    }
}

string_enum! {
    /// The kind of rule a constraint applies to a product.
    ConstraintType {
        Launch => "LAUNCH",
        Notification => "NOTIFICATION",
        Stackset => "STACKSET",
        Template => "TEMPLATE",
    }
}

string_enum! {
    ProductType {
        CloudFormationTemplate => "CLOUD_FORMATION_TEMPLATE",
        Marketplace => "MARKETPLACE",
    }
}

string_enum! {
    ProvisioningArtifactType {
        CloudFormationTemplate => "CLOUD_FORMATION_TEMPLATE",
        MarketplaceAmi => "MARKETPLACE_AMI",
        MarketplaceCar => "MARKETPLACE_CAR",
    }
}

string_enum! {
    /// Whether end users are steered towards or away from a provisioning artifact.
    ProvisioningArtifactGuidance {
        Default => "DEFAULT",
        Deprecated => "DEPRECATED",
    }
}

string_enum! {
    ProvisioningArtifactPropertyName {
        Id => "Id",
    }
}

string_enum! {
    /// The change a plan would make to a resource.
    ChangeAction {
        Add => "ADD",
        Modify => "MODIFY",
        Remove => "REMOVE",
    }
}

string_enum! {
    /// Whether a change replaces the resource.
    Replacement {
        True => "TRUE",
        False => "FALSE",
        Conditional => "CONDITIONAL",
    }
}

string_enum! {
    ResourceAttribute {
        Properties => "PROPERTIES",
        Metadata => "METADATA",
        CreationPolicy => "CREATIONPOLICY",
        UpdatePolicy => "UPDATEPOLICY",
        DeletionPolicy => "DELETIONPOLICY",
        Tags => "TAGS",
    }
}

string_enum! {
    /// `STATIC` changes are known when the plan is created; `DYNAMIC` ones are resolved at
    /// execution.
    EvaluationType {
        Static => "STATIC",
        Dynamic => "DYNAMIC",
    }
}

string_enum! {
    RequiresRecreation {
        Never => "NEVER",
        Conditionally => "CONDITIONALLY",
        Always => "ALWAYS",
    }
}

string_enum! {
    StackInstanceStatus {
        /// The stack is up to date with the stack set.
        Current => "CURRENT",
        /// The stack is not up to date with the stack set, for example because a create or
        /// update operation failed.
        Outdated => "OUTDATED",
        /// A delete operation failed and the stack was left in an unstable state.
        Inoperable => "INOPERABLE",
    }
}

string_enum! {
    StackSetOperationType {
        Create => "CREATE",
        Update => "UPDATE",
        Delete => "DELETE",
    }
}

string_enum! {
    CopyOption {
        CopyTags => "CopyTags",
    }
}

string_enum! {
    CopyProductStatus {
        Succeeded => "SUCCEEDED",
        InProgress => "IN_PROGRESS",
        Failed => "FAILED",
    }
}

string_enum! {
    ProductViewFilterBy {
        FullTextSearch => "FullTextSearch",
        Owner => "Owner",
        ProductType => "ProductType",
        SourceProductId => "SourceProductId",
    }
}

string_enum! {
    ProductViewSortBy {
        Title => "Title",
        VersionCount => "VersionCount",
        CreationDate => "CreationDate",
    }
}

string_enum! {
    SortOrder {
        Ascending => "ASCENDING",
        Descending => "DESCENDING",
    }
}

string_enum! {
    /// Status of a constraint or provisioning artifact.
    Status {
        Available => "AVAILABLE",
        Creating => "CREATING",
        Failed => "FAILED",
    }
}

string_enum! {
    RecordStatus {
        Created => "CREATED",
        InProgress => "IN_PROGRESS",
        InProgressInError => "IN_PROGRESS_IN_ERROR",
        Succeeded => "SUCCEEDED",
        Failed => "FAILED",
    }
}

string_enum! {
    /// Provisioned product properties that can be changed without an update.
    PropertyKey {
        Owner => "OWNER",
        LaunchRole => "LAUNCH_ROLE",
    }
}

render_with_display!(
    ConstraintDetail,
    ProductViewSummary,
    ProductViewAggregationValue,
    ProvisioningArtifactDetail,
    ResourceChange,
    ResourceChangeDetail,
    ResourceTargetDefinition,
    StackInstance,
    UpdateProvisioningPreferences,
    UpdateProvisioningParameter,
    Tag,
    RecordDetail,
    RecordError,
    RecordTag,
    ShareDetails,
    ShareError,
);

/// <p>Information about a constraint.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConstraintDetail {
    /// <p>The identifier of the constraint.</p>
    /// <p>Length: 1-100. Pattern: <code>^[a-zA-Z0-9_\-]*</code></p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraint_id: Option<String>,
    /// <p>The type of constraint.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<ConstraintType>,
    /// <p>The description of the constraint.</p>
    /// <p>Length: 0-2000.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// <p>The owner of the constraint, a 12 digit account ID.</p>
    /// <p>Pattern: <code>^[0-9]{12}$</code></p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// <p>The identifier of the product the constraint applies to.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    /// <p>The identifier of the portfolio the product resides in.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio_id: Option<String>,
}

impl ConstraintDetail {
    pub fn constraint_id(&self) -> Option<&str> {
        self.constraint_id.as_deref()
    }
    pub fn r#type(&self) -> Option<&ConstraintType> {
        self.r#type.as_ref()
    }
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }
    pub fn product_id(&self) -> Option<&str> {
        self.product_id.as_deref()
    }
    pub fn portfolio_id(&self) -> Option<&str> {
        self.portfolio_id.as_deref()
    }
}

impl fmt::Display for ConstraintDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = PresentFields::new(f)?;
        out.field("ConstraintId", &self.constraint_id)?;
        out.field("Type", &self.r#type)?;
        out.field("Description", &self.description)?;
        out.field("Owner", &self.owner)?;
        out.field("ProductId", &self.product_id)?;
        out.field("PortfolioId", &self.portfolio_id)?;
        out.finish()
    }
}

/// See [`ConstraintDetail`](crate::model::ConstraintDetail)
pub mod constraint_detail {
    use crate::model::ConstraintType;

    /// A builder for [`ConstraintDetail`](crate::model::ConstraintDetail)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        constraint_id: Option<String>,
        r#type: Option<ConstraintType>,
        description: Option<String>,
        owner: Option<String>,
        product_id: Option<String>,
        portfolio_id: Option<String>,
    }

    impl Builder {
        pub fn constraint_id(mut self, input: impl Into<String>) -> Self {
            self.constraint_id = Some(input.into());
            self
        }
        pub fn set_constraint_id(mut self, input: Option<String>) -> Self {
            self.constraint_id = input;
            self
        }
        pub fn r#type(mut self, input: impl Into<ConstraintType>) -> Self {
            self.r#type = Some(input.into());
            self
        }
        pub fn set_type(mut self, input: Option<ConstraintType>) -> Self {
            self.r#type = input;
            self
        }
        pub fn description(mut self, input: impl Into<String>) -> Self {
            self.description = Some(input.into());
            self
        }
        pub fn set_description(mut self, input: Option<String>) -> Self {
            self.description = input;
            self
        }
        pub fn owner(mut self, input: impl Into<String>) -> Self {
            self.owner = Some(input.into());
            self
        }
        pub fn set_owner(mut self, input: Option<String>) -> Self {
            self.owner = input;
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
        pub fn portfolio_id(mut self, input: impl Into<String>) -> Self {
            self.portfolio_id = Some(input.into());
            self
        }
        pub fn set_portfolio_id(mut self, input: Option<String>) -> Self {
            self.portfolio_id = input;
            self
        }
        /// Consumes the builder and constructs a [`ConstraintDetail`](crate::model::ConstraintDetail)
        pub fn build(self) -> crate::model::ConstraintDetail {
            crate::model::ConstraintDetail {
                constraint_id: self.constraint_id,
                r#type: self.r#type,
                description: self.description,
                owner: self.owner,
                product_id: self.product_id,
                portfolio_id: self.portfolio_id,
            }
        }
    }
}

impl ConstraintDetail {
    /// Creates a new builder-style object to manufacture [`ConstraintDetail`](crate::model::ConstraintDetail)
    pub fn builder() -> crate::model::constraint_detail::Builder {
        crate::model::constraint_detail::Builder::default()
    }
}

/// <p>Summary information about a product view.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProductViewSummary {
    /// <p>The product view identifier.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// <p>The product identifier.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    /// <p>The name of the product.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// <p>The owner of the product. Contact the product administrator for the significance of
    /// this value.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// <p>Short description of the product.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    /// <p>The product type. <code>MARKETPLACE</code> products are managed by AWS Marketplace.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<ProductType>,
    /// <p>The distributor of the product.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distributor: Option<String>,
    /// <p>Indicates whether the product has a default path. Without one, call
    /// <code>ListLaunchPaths</code> to disambiguate between paths.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_default_path: Option<bool>,
    /// <p>The email contact information to obtain support for this product.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_email: Option<String>,
    /// <p>The description of the support for this product.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_description: Option<String>,
    /// <p>The URL information to obtain support for this product.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_url: Option<String>,
}

impl ProductViewSummary {
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
    pub fn product_id(&self) -> Option<&str> {
        self.product_id.as_deref()
    }
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }
    pub fn short_description(&self) -> Option<&str> {
        self.short_description.as_deref()
    }
    pub fn r#type(&self) -> Option<&ProductType> {
        self.r#type.as_ref()
    }
    pub fn distributor(&self) -> Option<&str> {
        self.distributor.as_deref()
    }
    pub fn has_default_path(&self) -> Option<bool> {
        self.has_default_path
    }
    pub fn support_email(&self) -> Option<&str> {
        self.support_email.as_deref()
    }
    pub fn support_description(&self) -> Option<&str> {
        self.support_description.as_deref()
    }
    pub fn support_url(&self) -> Option<&str> {
        self.support_url.as_deref()
    }
}

impl fmt::Display for ProductViewSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = PresentFields::new(f)?;
        out.field("Id", &self.id)?;
        out.field("ProductId", &self.product_id)?;
        out.field("Name", &self.name)?;
        out.field("Owner", &self.owner)?;
        out.field("ShortDescription", &self.short_description)?;
        out.field("Type", &self.r#type)?;
        out.field("Distributor", &self.distributor)?;
        out.field("HasDefaultPath", &self.has_default_path)?;
        out.field("SupportEmail", &self.support_email)?;
        out.field("SupportDescription", &self.support_description)?;
        out.field("SupportUrl", &self.support_url)?;
        out.finish()
    }
}

/// See [`ProductViewSummary`](crate::model::ProductViewSummary)
pub mod product_view_summary {
    use crate::model::ProductType;

    /// A builder for [`ProductViewSummary`](crate::model::ProductViewSummary)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        id: Option<String>,
        product_id: Option<String>,
        name: Option<String>,
        owner: Option<String>,
        short_description: Option<String>,
        r#type: Option<ProductType>,
        distributor: Option<String>,
        has_default_path: Option<bool>,
        support_email: Option<String>,
        support_description: Option<String>,
        support_url: Option<String>,
    }

    impl Builder {
        pub fn id(mut self, input: impl Into<String>) -> Self {
            self.id = Some(input.into());
            self
        }
        pub fn set_id(mut self, input: Option<String>) -> Self {
            self.id = input;
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
        pub fn name(mut self, input: impl Into<String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: Option<String>) -> Self {
            self.name = input;
            self
        }
        pub fn owner(mut self, input: impl Into<String>) -> Self {
            self.owner = Some(input.into());
            self
        }
        pub fn set_owner(mut self, input: Option<String>) -> Self {
            self.owner = input;
            self
        }
        pub fn short_description(mut self, input: impl Into<String>) -> Self {
            self.short_description = Some(input.into());
            self
        }
        pub fn set_short_description(mut self, input: Option<String>) -> Self {
            self.short_description = input;
            self
        }
        pub fn r#type(mut self, input: impl Into<ProductType>) -> Self {
            self.r#type = Some(input.into());
            self
        }
        pub fn set_type(mut self, input: Option<ProductType>) -> Self {
            self.r#type = input;
            self
        }
        pub fn distributor(mut self, input: impl Into<String>) -> Self {
            self.distributor = Some(input.into());
            self
        }
        pub fn set_distributor(mut self, input: Option<String>) -> Self {
            self.distributor = input;
            self
        }
        pub fn has_default_path(mut self, input: bool) -> Self {
            self.has_default_path = Some(input);
            self
        }
        pub fn set_has_default_path(mut self, input: Option<bool>) -> Self {
            self.has_default_path = input;
            self
        }
        pub fn support_email(mut self, input: impl Into<String>) -> Self {
            self.support_email = Some(input.into());
            self
        }
        pub fn set_support_email(mut self, input: Option<String>) -> Self {
            self.support_email = input;
            self
        }
        pub fn support_description(mut self, input: impl Into<String>) -> Self {
            self.support_description = Some(input.into());
            self
        }
        pub fn set_support_description(mut self, input: Option<String>) -> Self {
            self.support_description = input;
            self
        }
        pub fn support_url(mut self, input: impl Into<String>) -> Self {
            self.support_url = Some(input.into());
            self
        }
        pub fn set_support_url(mut self, input: Option<String>) -> Self {
            self.support_url = input;
            self
        }
        /// Consumes the builder and constructs a [`ProductViewSummary`](crate::model::ProductViewSummary)
        pub fn build(self) -> crate::model::ProductViewSummary {
            crate::model::ProductViewSummary {
                id: self.id,
                product_id: self.product_id,
                name: self.name,
                owner: self.owner,
                short_description: self.short_description,
                r#type: self.r#type,
                distributor: self.distributor,
                has_default_path: self.has_default_path,
                support_email: self.support_email,
                support_description: self.support_description,
                support_url: self.support_url,
            }
        }
    }
}

impl ProductViewSummary {
    /// Creates a new builder-style object to manufacture [`ProductViewSummary`](crate::model::ProductViewSummary)
    pub fn builder() -> crate::model::product_view_summary::Builder {
        crate::model::product_view_summary::Builder::default()
    }
}

/// <p>A value of a product view aggregation.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProductViewAggregationValue {
    /// <p>The value of the product view aggregation.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// <p>An approximate count of the products that match the value.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approximate_count: Option<i32>,
}

impl ProductViewAggregationValue {
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
    pub fn approximate_count(&self) -> Option<i32> {
        self.approximate_count
    }
}

impl fmt::Display for ProductViewAggregationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = PresentFields::new(f)?;
        out.field("Value", &self.value)?;
        out.field("ApproximateCount", &self.approximate_count)?;
        out.finish()
    }
}

/// See [`ProductViewAggregationValue`](crate::model::ProductViewAggregationValue)
pub mod product_view_aggregation_value {
    /// A builder for [`ProductViewAggregationValue`](crate::model::ProductViewAggregationValue)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        value: Option<String>,
        approximate_count: Option<i32>,
    }

    impl Builder {
        pub fn value(mut self, input: impl Into<String>) -> Self {
            self.value = Some(input.into());
            self
        }
        pub fn set_value(mut self, input: Option<String>) -> Self {
            self.value = input;
            self
        }
        pub fn approximate_count(mut self, input: i32) -> Self {
            self.approximate_count = Some(input);
            self
        }
        pub fn set_approximate_count(mut self, input: Option<i32>) -> Self {
            self.approximate_count = input;
            self
        }
        pub fn build(self) -> crate::model::ProductViewAggregationValue {
            crate::model::ProductViewAggregationValue {
                value: self.value,
                approximate_count: self.approximate_count,
            }
        }
    }
}

impl ProductViewAggregationValue {
    pub fn builder() -> crate::model::product_view_aggregation_value::Builder {
        crate::model::product_view_aggregation_value::Builder::default()
    }
}

/// <p>Information about a provisioning artifact, also known as a version, of a product.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProvisioningArtifactDetail {
    /// <p>The identifier of the provisioning artifact.</p>
    /// <p>Length: 1-100. Pattern: <code>^[a-zA-Z0-9_\-]*</code></p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// <p>The name of the provisioning artifact.</p>
    /// <p>Length: 0-8192.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// <p>The description of the provisioning artifact.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// <p>The type of provisioning artifact.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<ProvisioningArtifactType>,
    /// <p>The UTC time stamp of the creation time.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_time: Option<Instant>,
    /// <p>Indicates whether the product version is active.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// <p>Information set by the administrator to provide guidance to end users about which
    /// provisioning artifacts to use.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance: Option<ProvisioningArtifactGuidance>,
}

impl ProvisioningArtifactDetail {
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
    pub fn r#type(&self) -> Option<&ProvisioningArtifactType> {
        self.r#type.as_ref()
    }
    pub fn created_time(&self) -> Option<&Instant> {
        self.created_time.as_ref()
    }
    pub fn active(&self) -> Option<bool> {
        self.active
    }
    pub fn guidance(&self) -> Option<&ProvisioningArtifactGuidance> {
        self.guidance.as_ref()
    }
}

impl fmt::Display for ProvisioningArtifactDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = PresentFields::new(f)?;
        out.field("Id", &self.id)?;
        out.field("Name", &self.name)?;
        out.field("Description", &self.description)?;
        out.field("Type", &self.r#type)?;
        out.field("CreatedTime", &self.created_time)?;
        out.field("Active", &self.active)?;
        out.field("Guidance", &self.guidance)?;
        out.finish()
    }
}

/// See [`ProvisioningArtifactDetail`](crate::model::ProvisioningArtifactDetail)
pub mod provisioning_artifact_detail {
    use crate::model::{ProvisioningArtifactGuidance, ProvisioningArtifactType};
    use smithy_types::Instant;

    /// A builder for [`ProvisioningArtifactDetail`](crate::model::ProvisioningArtifactDetail)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        id: Option<String>,
        name: Option<String>,
        description: Option<String>,
        r#type: Option<ProvisioningArtifactType>,
        created_time: Option<Instant>,
        active: Option<bool>,
        guidance: Option<ProvisioningArtifactGuidance>,
    }

    impl Builder {
        pub fn id(mut self, input: impl Into<String>) -> Self {
            self.id = Some(input.into());
            self
        }
        pub fn set_id(mut self, input: Option<String>) -> Self {
            self.id = input;
            self
        }
        pub fn name(mut self, input: impl Into<String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: Option<String>) -> Self {
            self.name = input;
            self
        }
        pub fn description(mut self, input: impl Into<String>) -> Self {
            self.description = Some(input.into());
            self
        }
        pub fn set_description(mut self, input: Option<String>) -> Self {
            self.description = input;
            self
        }
        pub fn r#type(mut self, input: impl Into<ProvisioningArtifactType>) -> Self {
            self.r#type = Some(input.into());
            self
        }
        pub fn set_type(mut self, input: Option<ProvisioningArtifactType>) -> Self {
            self.r#type = input;
            self
        }
        pub fn created_time(mut self, input: impl Into<Instant>) -> Self {
            self.created_time = Some(input.into());
            self
        }
        pub fn set_created_time(mut self, input: Option<Instant>) -> Self {
            self.created_time = input;
            self
        }
        pub fn active(mut self, input: bool) -> Self {
            self.active = Some(input);
            self
        }
        pub fn set_active(mut self, input: Option<bool>) -> Self {
            self.active = input;
            self
        }
        pub fn guidance(mut self, input: impl Into<ProvisioningArtifactGuidance>) -> Self {
            self.guidance = Some(input.into());
            self
        }
        pub fn set_guidance(mut self, input: Option<ProvisioningArtifactGuidance>) -> Self {
            self.guidance = input;
            self
        }
        /// Consumes the builder and constructs a [`ProvisioningArtifactDetail`](crate::model::ProvisioningArtifactDetail)
        pub fn build(self) -> crate::model::ProvisioningArtifactDetail {
            crate::model::ProvisioningArtifactDetail {
                id: self.id,
                name: self.name,
                description: self.description,
                r#type: self.r#type,
                created_time: self.created_time,
                active: self.active,
                guidance: self.guidance,
            }
        }
    }
}

impl ProvisioningArtifactDetail {
    /// Creates a new builder-style object to manufacture [`ProvisioningArtifactDetail`](crate::model::ProvisioningArtifactDetail)
    pub fn builder() -> crate::model::provisioning_artifact_detail::Builder {
        crate::model::provisioning_artifact_detail::Builder::default()
    }
}

/// <p>Information about a resource change that will occur when a plan is executed.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceChange {
    /// <p>The change action.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<ChangeAction>,
    /// <p>The ID of the resource, as defined in the CloudFormation template.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logical_resource_id: Option<String>,
    /// <p>The ID of the resource, if it was already created.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_resource_id: Option<String>,
    /// <p>The type of resource.</p>
    /// <p>Length: 1-256.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    /// <p>If the change type is <code>Modify</code>, indicates whether the existing resource
    /// is deleted and replaced with a new one.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replacement: Option<Replacement>,
    /// <p>The change scope.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<Vec<ResourceAttribute>>,
    /// <p>Information about the resource changes.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<ResourceChangeDetail>>,
}

impl ResourceChange {
    pub fn action(&self) -> Option<&ChangeAction> {
        self.action.as_ref()
    }
    pub fn logical_resource_id(&self) -> Option<&str> {
        self.logical_resource_id.as_deref()
    }
    pub fn physical_resource_id(&self) -> Option<&str> {
        self.physical_resource_id.as_deref()
    }
    pub fn resource_type(&self) -> Option<&str> {
        self.resource_type.as_deref()
    }
    pub fn replacement(&self) -> Option<&Replacement> {
        self.replacement.as_ref()
    }
    pub fn scope(&self) -> Option<&[ResourceAttribute]> {
        self.scope.as_deref()
    }
    pub fn details(&self) -> Option<&[ResourceChangeDetail]> {
        self.details.as_deref()
    }
}

impl fmt::Display for ResourceChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = PresentFields::new(f)?;
        out.field("Action", &self.action)?;
        out.field("LogicalResourceId", &self.logical_resource_id)?;
        out.field("PhysicalResourceId", &self.physical_resource_id)?;
        out.field("ResourceType", &self.resource_type)?;
        out.field("Replacement", &self.replacement)?;
        out.field("Scope", &self.scope)?;
        out.field("Details", &self.details)?;
        out.finish()
    }
}

/// See [`ResourceChange`](crate::model::ResourceChange)
pub mod resource_change {
    use crate::model::{ChangeAction, Replacement, ResourceAttribute, ResourceChangeDetail};

    /// A builder for [`ResourceChange`](crate::model::ResourceChange)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        action: Option<ChangeAction>,
        logical_resource_id: Option<String>,
        physical_resource_id: Option<String>,
        resource_type: Option<String>,
        replacement: Option<Replacement>,
        scope: Option<Vec<ResourceAttribute>>,
        details: Option<Vec<ResourceChangeDetail>>,
    }

    impl Builder {
        pub fn action(mut self, input: impl Into<ChangeAction>) -> Self {
            self.action = Some(input.into());
            self
        }
        pub fn set_action(mut self, input: Option<ChangeAction>) -> Self {
            self.action = input;
            self
        }
        pub fn logical_resource_id(mut self, input: impl Into<String>) -> Self {
            self.logical_resource_id = Some(input.into());
            self
        }
        pub fn set_logical_resource_id(mut self, input: Option<String>) -> Self {
            self.logical_resource_id = input;
            self
        }
        pub fn physical_resource_id(mut self, input: impl Into<String>) -> Self {
            self.physical_resource_id = Some(input.into());
            self
        }
        pub fn set_physical_resource_id(mut self, input: Option<String>) -> Self {
            self.physical_resource_id = input;
            self
        }
        pub fn resource_type(mut self, input: impl Into<String>) -> Self {
            self.resource_type = Some(input.into());
            self
        }
        pub fn set_resource_type(mut self, input: Option<String>) -> Self {
            self.resource_type = input;
            self
        }
        pub fn replacement(mut self, input: impl Into<Replacement>) -> Self {
            self.replacement = Some(input.into());
            self
        }
        pub fn set_replacement(mut self, input: Option<Replacement>) -> Self {
            self.replacement = input;
            self
        }
        /// Appends an item to `scope`.
        pub fn scope(mut self, input: impl Into<ResourceAttribute>) -> Self {
            let mut v = self.scope.unwrap_or_default();
            v.push(input.into());
            self.scope = Some(v);
            self
        }
        pub fn set_scope(mut self, input: Option<Vec<ResourceAttribute>>) -> Self {
            self.scope = input;
            self
        }
        /// Appends an item to `details`.
        pub fn details(mut self, input: ResourceChangeDetail) -> Self {
            let mut v = self.details.unwrap_or_default();
            v.push(input);
            self.details = Some(v);
            self
        }
        pub fn set_details(mut self, input: Option<Vec<ResourceChangeDetail>>) -> Self {
            self.details = input;
            self
        }
        /// Consumes the builder and constructs a [`ResourceChange`](crate::model::ResourceChange)
        pub fn build(self) -> crate::model::ResourceChange {
            crate::model::ResourceChange {
                action: self.action,
                logical_resource_id: self.logical_resource_id,
                physical_resource_id: self.physical_resource_id,
                resource_type: self.resource_type,
                replacement: self.replacement,
                scope: self.scope,
                details: self.details,
            }
        }
    }
}

impl ResourceChange {
    /// Creates a new builder-style object to manufacture [`ResourceChange`](crate::model::ResourceChange)
    pub fn builder() -> crate::model::resource_change::Builder {
        crate::model::resource_change::Builder::default()
    }
}

/// <p>Information about a change to a resource attribute.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceChangeDetail {
    /// <p>Information about the resource attribute to be modified.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<ResourceTargetDefinition>,
    /// <p>For static evaluations, the value of the resource attribute will change and the new
    /// value is known. For dynamic evaluations, the value might change, and any new value will
    /// be determined when the plan is updated.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation: Option<EvaluationType>,
    /// <p>The ID of the entity that caused the change.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub causing_entity: Option<String>,
}

impl ResourceChangeDetail {
    pub fn target(&self) -> Option<&ResourceTargetDefinition> {
        self.target.as_ref()
    }
    pub fn evaluation(&self) -> Option<&EvaluationType> {
        self.evaluation.as_ref()
    }
    pub fn causing_entity(&self) -> Option<&str> {
        self.causing_entity.as_deref()
    }
}

impl fmt::Display for ResourceChangeDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = PresentFields::new(f)?;
        out.field("Target", &self.target)?;
        out.field("Evaluation", &self.evaluation)?;
        out.field("CausingEntity", &self.causing_entity)?;
        out.finish()
    }
}

/// See [`ResourceChangeDetail`](crate::model::ResourceChangeDetail)
pub mod resource_change_detail {
    use crate::model::{EvaluationType, ResourceTargetDefinition};

    /// A builder for [`ResourceChangeDetail`](crate::model::ResourceChangeDetail)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        target: Option<ResourceTargetDefinition>,
        evaluation: Option<EvaluationType>,
        causing_entity: Option<String>,
    }

    impl Builder {
        pub fn target(mut self, input: ResourceTargetDefinition) -> Self {
            self.target = Some(input);
            self
        }
        pub fn set_target(mut self, input: Option<ResourceTargetDefinition>) -> Self {
            self.target = input;
            self
        }
        pub fn evaluation(mut self, input: impl Into<EvaluationType>) -> Self {
            self.evaluation = Some(input.into());
            self
        }
        pub fn set_evaluation(mut self, input: Option<EvaluationType>) -> Self {
            self.evaluation = input;
            self
        }
        pub fn causing_entity(mut self, input: impl Into<String>) -> Self {
            self.causing_entity = Some(input.into());
            self
        }
        pub fn set_causing_entity(mut self, input: Option<String>) -> Self {
            self.causing_entity = input;
            self
        }
        pub fn build(self) -> crate::model::ResourceChangeDetail {
            crate::model::ResourceChangeDetail {
                target: self.target,
                evaluation: self.evaluation,
                causing_entity: self.causing_entity,
            }
        }
    }
}

impl ResourceChangeDetail {
    pub fn builder() -> crate::model::resource_change_detail::Builder {
        crate::model::resource_change_detail::Builder::default()
    }
}

/// <p>Information about a change to a resource attribute.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceTargetDefinition {
    /// <p>The attribute to be changed.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<ResourceAttribute>,
    /// <p>If the attribute is <code>Properties</code>, the value is the name of the
    /// property. Otherwise, the value is null.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// <p>If the attribute is <code>Properties</code>, indicates whether a change to this
    /// property causes the resource to be re-created.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_recreation: Option<RequiresRecreation>,
}

impl ResourceTargetDefinition {
    pub fn attribute(&self) -> Option<&ResourceAttribute> {
        self.attribute.as_ref()
    }
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
    pub fn requires_recreation(&self) -> Option<&RequiresRecreation> {
        self.requires_recreation.as_ref()
    }
}

impl fmt::Display for ResourceTargetDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = PresentFields::new(f)?;
        out.field("Attribute", &self.attribute)?;
        out.field("Name", &self.name)?;
        out.field("RequiresRecreation", &self.requires_recreation)?;
        out.finish()
    }
}

/// See [`ResourceTargetDefinition`](crate::model::ResourceTargetDefinition)
pub mod resource_target_definition {
    use crate::model::{RequiresRecreation, ResourceAttribute};

    /// A builder for [`ResourceTargetDefinition`](crate::model::ResourceTargetDefinition)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        attribute: Option<ResourceAttribute>,
        name: Option<String>,
        requires_recreation: Option<RequiresRecreation>,
    }

    impl Builder {
        pub fn attribute(mut self, input: impl Into<ResourceAttribute>) -> Self {
            self.attribute = Some(input.into());
            self
        }
        pub fn set_attribute(mut self, input: Option<ResourceAttribute>) -> Self {
            self.attribute = input;
            self
        }
        pub fn name(mut self, input: impl Into<String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: Option<String>) -> Self {
            self.name = input;
            self
        }
        pub fn requires_recreation(mut self, input: impl Into<RequiresRecreation>) -> Self {
            self.requires_recreation = Some(input.into());
            self
        }
        pub fn set_requires_recreation(mut self, input: Option<RequiresRecreation>) -> Self {
            self.requires_recreation = input;
            self
        }
        pub fn build(self) -> crate::model::ResourceTargetDefinition {
            crate::model::ResourceTargetDefinition {
                attribute: self.attribute,
                name: self.name,
                requires_recreation: self.requires_recreation,
            }
        }
    }
}

impl ResourceTargetDefinition {
    pub fn builder() -> crate::model::resource_target_definition::Builder {
        crate::model::resource_target_definition::Builder::default()
    }
}

/// <p>An AWS CloudFormation stack, in a specific account and region, that's part of a stack
/// set operation.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StackInstance {
    /// <p>The name of the AWS account that the stack instance is associated with.</p>
    /// <p>Pattern: <code>^[0-9]{12}$</code></p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    /// <p>The name of the AWS region that the stack instance is associated with.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// <p>The status of the stack instance, in terms of its synchronization with its
    /// associated stack set.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_instance_status: Option<StackInstanceStatus>,
}

impl StackInstance {
    pub fn account(&self) -> Option<&str> {
        self.account.as_deref()
    }
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
    pub fn stack_instance_status(&self) -> Option<&StackInstanceStatus> {
        self.stack_instance_status.as_ref()
    }
}

impl fmt::Display for StackInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = PresentFields::new(f)?;
        out.field("Account", &self.account)?;
        out.field("Region", &self.region)?;
        out.field("StackInstanceStatus", &self.stack_instance_status)?;
        out.finish()
    }
}

/// See [`StackInstance`](crate::model::StackInstance)
pub mod stack_instance {
    use crate::model::StackInstanceStatus;

    /// A builder for [`StackInstance`](crate::model::StackInstance)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        account: Option<String>,
        region: Option<String>,
        stack_instance_status: Option<StackInstanceStatus>,
    }

    impl Builder {
        pub fn account(mut self, input: impl Into<String>) -> Self {
            self.account = Some(input.into());
            self
        }
        pub fn set_account(mut self, input: Option<String>) -> Self {
            self.account = input;
            self
        }
        pub fn region(mut self, input: impl Into<String>) -> Self {
            self.region = Some(input.into());
            self
        }
        pub fn set_region(mut self, input: Option<String>) -> Self {
            self.region = input;
            self
        }
        pub fn stack_instance_status(mut self, input: impl Into<StackInstanceStatus>) -> Self {
            self.stack_instance_status = Some(input.into());
            self
        }
        pub fn set_stack_instance_status(mut self, input: Option<StackInstanceStatus>) -> Self {
            self.stack_instance_status = input;
            self
        }
        pub fn build(self) -> crate::model::StackInstance {
            crate::model::StackInstance {
                account: self.account,
                region: self.region,
                stack_instance_status: self.stack_instance_status,
            }
        }
    }
}

impl StackInstance {
    pub fn builder() -> crate::model::stack_instance::Builder {
        crate::model::stack_instance::Builder::default()
    }
}

/// <p>The user-defined preferences that will be applied when updating a provisioned product.
/// Not all preferences are applicable to all provisioned product types.</p>
/// <p>Every member applies only to a <code>CFN_STACKSET</code> provisioned product.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateProvisioningPreferences {
    /// <p>One or more AWS accounts that will have access to the provisioned product. They
    /// should be within the accounts of the <code>STACKSET</code> constraint; when empty, all
    /// of those accounts are used.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_set_accounts: Option<Vec<String>>,
    /// <p>One or more AWS Regions where the provisioned product will be available. They should
    /// be within the regions of the <code>STACKSET</code> constraint; when empty, all of those
    /// regions are used.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_set_regions: Option<Vec<String>>,
    /// <p>The number of accounts, per region, for which this operation can fail before AWS
    /// Service Catalog stops the operation in that region. Specify either this or
    /// <code>StackSetFailureTolerancePercentage</code>, but not both. Defaults to 0.</p>
    /// <p>Range: 0-.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_set_failure_tolerance_count: Option<i32>,
    /// <p>The percentage of accounts, per region, for which this stack operation can fail
    /// before AWS Service Catalog stops the operation in that region. Rounded down.</p>
    /// <p>Range: 0-100.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_set_failure_tolerance_percentage: Option<i32>,
    /// <p>The maximum number of accounts in which to perform this operation at one time.
    /// Specify either this or <code>StackSetMaxConcurrencyPercentage</code>, but not both.</p>
    /// <p>Range: 1-.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_set_max_concurrency_count: Option<i32>,
    /// <p>The maximum percentage of accounts in which to perform this operation at one time.
    /// Rounded down, but never below 1.</p>
    /// <p>Range: 1-100.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_set_max_concurrency_percentage: Option<i32>,
    /// <p>Determines what action AWS Service Catalog performs to a stack set or a stack
    /// instance represented by the provisioned product. The default is
    /// <code>UPDATE</code>.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_set_operation_type: Option<StackSetOperationType>,
}

impl UpdateProvisioningPreferences {
    pub fn stack_set_accounts(&self) -> Option<&[String]> {
        self.stack_set_accounts.as_deref()
    }
    pub fn stack_set_regions(&self) -> Option<&[String]> {
        self.stack_set_regions.as_deref()
    }
    pub fn stack_set_failure_tolerance_count(&self) -> Option<i32> {
        self.stack_set_failure_tolerance_count
    }
    pub fn stack_set_failure_tolerance_percentage(&self) -> Option<i32> {
        self.stack_set_failure_tolerance_percentage
    }
    pub fn stack_set_max_concurrency_count(&self) -> Option<i32> {
        self.stack_set_max_concurrency_count
    }
    pub fn stack_set_max_concurrency_percentage(&self) -> Option<i32> {
        self.stack_set_max_concurrency_percentage
    }
    pub fn stack_set_operation_type(&self) -> Option<&StackSetOperationType> {
        self.stack_set_operation_type.as_ref()
    }
}

impl fmt::Display for UpdateProvisioningPreferences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = PresentFields::new(f)?;
        out.field("StackSetAccounts", &self.stack_set_accounts)?;
        out.field("StackSetRegions", &self.stack_set_regions)?;
        out.field(
            "StackSetFailureToleranceCount",
            &self.stack_set_failure_tolerance_count,
        )?;
        out.field(
            "StackSetFailureTolerancePercentage",
            &self.stack_set_failure_tolerance_percentage,
        )?;
        out.field(
            "StackSetMaxConcurrencyCount",
            &self.stack_set_max_concurrency_count,
        )?;
        out.field(
            "StackSetMaxConcurrencyPercentage",
            &self.stack_set_max_concurrency_percentage,
        )?;
        out.field("StackSetOperationType", &self.stack_set_operation_type)?;
        out.finish()
    }
}

/// See [`UpdateProvisioningPreferences`](crate::model::UpdateProvisioningPreferences)
pub mod update_provisioning_preferences {
    use crate::model::StackSetOperationType;

    /// A builder for [`UpdateProvisioningPreferences`](crate::model::UpdateProvisioningPreferences)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        stack_set_accounts: Option<Vec<String>>,
        stack_set_regions: Option<Vec<String>>,
        stack_set_failure_tolerance_count: Option<i32>,
        stack_set_failure_tolerance_percentage: Option<i32>,
        stack_set_max_concurrency_count: Option<i32>,
        stack_set_max_concurrency_percentage: Option<i32>,
        stack_set_operation_type: Option<StackSetOperationType>,
    }

    impl Builder {
        /// Appends an item to `stack_set_accounts`.
        pub fn stack_set_accounts(mut self, input: impl Into<String>) -> Self {
            let mut v = self.stack_set_accounts.unwrap_or_default();
            v.push(input.into());
            self.stack_set_accounts = Some(v);
            self
        }
        pub fn set_stack_set_accounts(mut self, input: Option<Vec<String>>) -> Self {
            self.stack_set_accounts = input;
            self
        }
        /// Appends an item to `stack_set_regions`.
        pub fn stack_set_regions(mut self, input: impl Into<String>) -> Self {
            let mut v = self.stack_set_regions.unwrap_or_default();
            v.push(input.into());
            self.stack_set_regions = Some(v);
            self
        }
        pub fn set_stack_set_regions(mut self, input: Option<Vec<String>>) -> Self {
            self.stack_set_regions = input;
            self
        }
        pub fn stack_set_failure_tolerance_count(mut self, input: i32) -> Self {
            self.stack_set_failure_tolerance_count = Some(input);
            self
        }
        pub fn set_stack_set_failure_tolerance_count(mut self, input: Option<i32>) -> Self {
            self.stack_set_failure_tolerance_count = input;
            self
        }
        pub fn stack_set_failure_tolerance_percentage(mut self, input: i32) -> Self {
            self.stack_set_failure_tolerance_percentage = Some(input);
            self
        }
        pub fn set_stack_set_failure_tolerance_percentage(mut self, input: Option<i32>) -> Self {
            self.stack_set_failure_tolerance_percentage = input;
            self
        }
        pub fn stack_set_max_concurrency_count(mut self, input: i32) -> Self {
            self.stack_set_max_concurrency_count = Some(input);
            self
        }
        pub fn set_stack_set_max_concurrency_count(mut self, input: Option<i32>) -> Self {
            self.stack_set_max_concurrency_count = input;
            self
        }
        pub fn stack_set_max_concurrency_percentage(mut self, input: i32) -> Self {
            self.stack_set_max_concurrency_percentage = Some(input);
            self
        }
        pub fn set_stack_set_max_concurrency_percentage(mut self, input: Option<i32>) -> Self {
            self.stack_set_max_concurrency_percentage = input;
            self
        }
        pub fn stack_set_operation_type(mut self, input: impl Into<StackSetOperationType>) -> Self {
            self.stack_set_operation_type = Some(input.into());
            self
        }
        pub fn set_stack_set_operation_type(
            mut self,
            input: Option<StackSetOperationType>,
        ) -> Self {
            self.stack_set_operation_type = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateProvisioningPreferences`](crate::model::UpdateProvisioningPreferences)
        pub fn build(self) -> crate::model::UpdateProvisioningPreferences {
            crate::model::UpdateProvisioningPreferences {
                stack_set_accounts: self.stack_set_accounts,
                stack_set_regions: self.stack_set_regions,
                stack_set_failure_tolerance_count: self.stack_set_failure_tolerance_count,
                stack_set_failure_tolerance_percentage: self.stack_set_failure_tolerance_percentage,
                stack_set_max_concurrency_count: self.stack_set_max_concurrency_count,
                stack_set_max_concurrency_percentage: self.stack_set_max_concurrency_percentage,
                stack_set_operation_type: self.stack_set_operation_type,
            }
        }
    }
}

impl UpdateProvisioningPreferences {
    /// Creates a new builder-style object to manufacture [`UpdateProvisioningPreferences`](crate::model::UpdateProvisioningPreferences)
    pub fn builder() -> crate::model::update_provisioning_preferences::Builder {
        crate::model::update_provisioning_preferences::Builder::default()
    }
}

/// <p>The parameter key-value pair used to update a provisioned product.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateProvisioningParameter {
    /// <p>The parameter key.</p>
    /// <p>Length: 1-1000.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// <p>The parameter value.</p>
    /// <p>Length: 0-4096.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// <p>If set to true, <code>Value</code> is ignored and the previous parameter value is
    /// kept.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_previous_value: Option<bool>,
}

impl UpdateProvisioningParameter {
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
    pub fn use_previous_value(&self) -> Option<bool> {
        self.use_previous_value
    }
}

impl fmt::Display for UpdateProvisioningParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = PresentFields::new(f)?;
        out.field("Key", &self.key)?;
        out.field("Value", &self.value)?;
        out.field("UsePreviousValue", &self.use_previous_value)?;
        out.finish()
    }
}

/// See [`UpdateProvisioningParameter`](crate::model::UpdateProvisioningParameter)
pub mod update_provisioning_parameter {
    /// A builder for [`UpdateProvisioningParameter`](crate::model::UpdateProvisioningParameter)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        key: Option<String>,
        value: Option<String>,
        use_previous_value: Option<bool>,
    }

    impl Builder {
        pub fn key(mut self, input: impl Into<String>) -> Self {
            self.key = Some(input.into());
            self
        }
        pub fn set_key(mut self, input: Option<String>) -> Self {
            self.key = input;
            self
        }
        pub fn value(mut self, input: impl Into<String>) -> Self {
            self.value = Some(input.into());
            self
        }
        pub fn set_value(mut self, input: Option<String>) -> Self {
            self.value = input;
            self
        }
        pub fn use_previous_value(mut self, input: bool) -> Self {
            self.use_previous_value = Some(input);
            self
        }
        pub fn set_use_previous_value(mut self, input: Option<bool>) -> Self {
            self.use_previous_value = input;
            self
        }
        pub fn build(self) -> crate::model::UpdateProvisioningParameter {
            crate::model::UpdateProvisioningParameter {
                key: self.key,
                value: self.value,
                use_previous_value: self.use_previous_value,
            }
        }
    }
}

impl UpdateProvisioningParameter {
    pub fn builder() -> crate::model::update_provisioning_parameter::Builder {
        crate::model::update_provisioning_parameter::Builder::default()
    }
}

/// <p>Information about a tag. A tag is a key-value pair.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    /// <p>The tag key.</p>
    /// <p>Length: 1-128. Pattern: <code>^([\p{L}\p{Z}\p{N}_.:/=+\-@]*)$</code></p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// <p>The value for this key.</p>
    /// <p>Length: 0-256. Pattern: <code>^([\p{L}\p{Z}\p{N}_.:/=+\-@]*)$</code></p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Tag {
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = PresentFields::new(f)?;
        out.field("Key", &self.key)?;
        out.field("Value", &self.value)?;
        out.finish()
    }
}

/// See [`Tag`](crate::model::Tag)
pub mod tag {
    /// A builder for [`Tag`](crate::model::Tag)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        key: Option<String>,
        value: Option<String>,
    }

    impl Builder {
        pub fn key(mut self, input: impl Into<String>) -> Self {
            self.key = Some(input.into());
            self
        }
        pub fn set_key(mut self, input: Option<String>) -> Self {
            self.key = input;
            self
        }
        pub fn value(mut self, input: impl Into<String>) -> Self {
            self.value = Some(input.into());
            self
        }
        pub fn set_value(mut self, input: Option<String>) -> Self {
            self.value = input;
            self
        }
        pub fn build(self) -> crate::model::Tag {
            crate::model::Tag {
                key: self.key,
                value: self.value,
            }
        }
    }
}

impl Tag {
    pub fn builder() -> crate::model::tag::Builder {
        crate::model::tag::Builder::default()
    }
}

/// <p>Information about a request operation.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecordDetail {
    /// <p>The identifier of the record.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,
    /// <p>The user-friendly name of the provisioned product.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioned_product_name: Option<String>,
    /// <p>The status of the provisioned product.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RecordStatus>,
    /// <p>The UTC time stamp of the creation time.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_time: Option<Instant>,
    /// <p>The time when the record was last updated.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_time: Option<Instant>,
    /// <p>The type of provisioned product, <code>CFN_STACK</code> or
    /// <code>CFN_STACKSET</code>.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioned_product_type: Option<String>,
    /// <p>The record type: <code>PROVISION_PRODUCT</code>, <code>UPDATE_PROVISIONED_PRODUCT</code>
    /// or <code>TERMINATE_PROVISIONED_PRODUCT</code>.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_type: Option<String>,
    /// <p>The identifier of the provisioned product.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioned_product_id: Option<String>,
    /// <p>The product identifier.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    /// <p>The identifier of the provisioning artifact.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioning_artifact_id: Option<String>,
    /// <p>The path identifier.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_id: Option<String>,
    /// <p>The errors that occurred.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_errors: Option<Vec<RecordError>>,
    /// <p>One or more tags.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_tags: Option<Vec<RecordTag>>,
}

impl RecordDetail {
    pub fn record_id(&self) -> Option<&str> {
        self.record_id.as_deref()
    }
    pub fn provisioned_product_name(&self) -> Option<&str> {
        self.provisioned_product_name.as_deref()
    }
    pub fn status(&self) -> Option<&RecordStatus> {
        self.status.as_ref()
    }
    pub fn created_time(&self) -> Option<&Instant> {
        self.created_time.as_ref()
    }
    pub fn updated_time(&self) -> Option<&Instant> {
        self.updated_time.as_ref()
    }
    pub fn provisioned_product_type(&self) -> Option<&str> {
        self.provisioned_product_type.as_deref()
    }
    pub fn record_type(&self) -> Option<&str> {
        self.record_type.as_deref()
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
    pub fn record_errors(&self) -> Option<&[RecordError]> {
        self.record_errors.as_deref()
    }
    pub fn record_tags(&self) -> Option<&[RecordTag]> {
        self.record_tags.as_deref()
    }
}

impl fmt::Display for RecordDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = PresentFields::new(f)?;
        out.field("RecordId", &self.record_id)?;
        out.field("ProvisionedProductName", &self.provisioned_product_name)?;
        out.field("Status", &self.status)?;
        out.field("CreatedTime", &self.created_time)?;
        out.field("UpdatedTime", &self.updated_time)?;
        out.field("ProvisionedProductType", &self.provisioned_product_type)?;
        out.field("RecordType", &self.record_type)?;
        out.field("ProvisionedProductId", &self.provisioned_product_id)?;
        out.field("ProductId", &self.product_id)?;
        out.field("ProvisioningArtifactId", &self.provisioning_artifact_id)?;
        out.field("PathId", &self.path_id)?;
        out.field("RecordErrors", &self.record_errors)?;
        out.field("RecordTags", &self.record_tags)?;
        out.finish()
    }
}

/// See [`RecordDetail`](crate::model::RecordDetail)
pub mod record_detail {
    use crate::model::{RecordError, RecordStatus, RecordTag};
    use smithy_types::Instant;

    /// A builder for [`RecordDetail`](crate::model::RecordDetail)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        record_id: Option<String>,
        provisioned_product_name: Option<String>,
        status: Option<RecordStatus>,
        created_time: Option<Instant>,
        updated_time: Option<Instant>,
        provisioned_product_type: Option<String>,
        record_type: Option<String>,
        provisioned_product_id: Option<String>,
        product_id: Option<String>,
        provisioning_artifact_id: Option<String>,
        path_id: Option<String>,
        record_errors: Option<Vec<RecordError>>,
        record_tags: Option<Vec<RecordTag>>,
    }

    impl Builder {
        pub fn record_id(mut self, input: impl Into<String>) -> Self {
            self.record_id = Some(input.into());
            self
        }
        pub fn set_record_id(mut self, input: Option<String>) -> Self {
            self.record_id = input;
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
        pub fn status(mut self, input: impl Into<RecordStatus>) -> Self {
            self.status = Some(input.into());
            self
        }
        pub fn set_status(mut self, input: Option<RecordStatus>) -> Self {
            self.status = input;
            self
        }
        pub fn created_time(mut self, input: impl Into<Instant>) -> Self {
            self.created_time = Some(input.into());
            self
        }
        pub fn set_created_time(mut self, input: Option<Instant>) -> Self {
            self.created_time = input;
            self
        }
        pub fn updated_time(mut self, input: impl Into<Instant>) -> Self {
            self.updated_time = Some(input.into());
            self
        }
        pub fn set_updated_time(mut self, input: Option<Instant>) -> Self {
            self.updated_time = input;
            self
        }
        pub fn provisioned_product_type(mut self, input: impl Into<String>) -> Self {
            self.provisioned_product_type = Some(input.into());
            self
        }
        pub fn set_provisioned_product_type(mut self, input: Option<String>) -> Self {
            self.provisioned_product_type = input;
            self
        }
        pub fn record_type(mut self, input: impl Into<String>) -> Self {
            self.record_type = Some(input.into());
            self
        }
        pub fn set_record_type(mut self, input: Option<String>) -> Self {
            self.record_type = input;
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
        /// Appends an item to `record_errors`.
        pub fn record_errors(mut self, input: RecordError) -> Self {
            let mut v = self.record_errors.unwrap_or_default();
            v.push(input);
            self.record_errors = Some(v);
            self
        }
        pub fn set_record_errors(mut self, input: Option<Vec<RecordError>>) -> Self {
            self.record_errors = input;
            self
        }
        /// Appends an item to `record_tags`.
        pub fn record_tags(mut self, input: RecordTag) -> Self {
            let mut v = self.record_tags.unwrap_or_default();
            v.push(input);
            self.record_tags = Some(v);
            self
        }
        pub fn set_record_tags(mut self, input: Option<Vec<RecordTag>>) -> Self {
            self.record_tags = input;
            self
        }
        /// Consumes the builder and constructs a [`RecordDetail`](crate::model::RecordDetail)
        pub fn build(self) -> crate::model::RecordDetail {
            crate::model::RecordDetail {
                record_id: self.record_id,
                provisioned_product_name: self.provisioned_product_name,
                status: self.status,
                created_time: self.created_time,
                updated_time: self.updated_time,
                provisioned_product_type: self.provisioned_product_type,
                record_type: self.record_type,
                provisioned_product_id: self.provisioned_product_id,
                product_id: self.product_id,
                provisioning_artifact_id: self.provisioning_artifact_id,
                path_id: self.path_id,
                record_errors: self.record_errors,
                record_tags: self.record_tags,
            }
        }
    }
}

impl RecordDetail {
    /// Creates a new builder-style object to manufacture [`RecordDetail`](crate::model::RecordDetail)
    pub fn builder() -> crate::model::record_detail::Builder {
        crate::model::record_detail::Builder::default()
    }
}

/// <p>The error code and description resulting from an operation.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecordError {
    /// <p>The numeric value of the error.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// <p>The description of the error.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl RecordError {
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = PresentFields::new(f)?;
        out.field("Code", &self.code)?;
        out.field("Description", &self.description)?;
        out.finish()
    }
}

/// See [`RecordError`](crate::model::RecordError)
pub mod record_error {
    /// A builder for [`RecordError`](crate::model::RecordError)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        code: Option<String>,
        description: Option<String>,
    }

    impl Builder {
        pub fn code(mut self, input: impl Into<String>) -> Self {
            self.code = Some(input.into());
            self
        }
        pub fn set_code(mut self, input: Option<String>) -> Self {
            self.code = input;
            self
        }
        pub fn description(mut self, input: impl Into<String>) -> Self {
            self.description = Some(input.into());
            self
        }
        pub fn set_description(mut self, input: Option<String>) -> Self {
            self.description = input;
            self
        }
        pub fn build(self) -> crate::model::RecordError {
            crate::model::RecordError {
                code: self.code,
                description: self.description,
            }
        }
    }
}

impl RecordError {
    pub fn builder() -> crate::model::record_error::Builder {
        crate::model::record_error::Builder::default()
    }
}

/// <p>Information about a tag, which is a key-value pair.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecordTag {
    /// <p>The key for this tag.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// <p>The value for this tag.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl RecordTag {
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl fmt::Display for RecordTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = PresentFields::new(f)?;
        out.field("Key", &self.key)?;
        out.field("Value", &self.value)?;
        out.finish()
    }
}

/// See [`RecordTag`](crate::model::RecordTag)
pub mod record_tag {
    /// A builder for [`RecordTag`](crate::model::RecordTag)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        key: Option<String>,
        value: Option<String>,
    }

    impl Builder {
        pub fn key(mut self, input: impl Into<String>) -> Self {
            self.key = Some(input.into());
            self
        }
        pub fn set_key(mut self, input: Option<String>) -> Self {
            self.key = input;
            self
        }
        pub fn value(mut self, input: impl Into<String>) -> Self {
            self.value = Some(input.into());
            self
        }
        pub fn set_value(mut self, input: Option<String>) -> Self {
            self.value = input;
            self
        }
        pub fn build(self) -> crate::model::RecordTag {
            crate::model::RecordTag {
                key: self.key,
                value: self.value,
            }
        }
    }
}

impl RecordTag {
    pub fn builder() -> crate::model::record_tag::Builder {
        crate::model::record_tag::Builder::default()
    }
}

/// <p>Information about the portfolio share operation.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShareDetails {
    /// <p>List of accounts for whom the operation succeeded.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub successful_shares: Option<Vec<String>>,
    /// <p>List of errors.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_errors: Option<Vec<ShareError>>,
}

impl ShareDetails {
    pub fn successful_shares(&self) -> Option<&[String]> {
        self.successful_shares.as_deref()
    }
    pub fn share_errors(&self) -> Option<&[ShareError]> {
        self.share_errors.as_deref()
    }
}

impl fmt::Display for ShareDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = PresentFields::new(f)?;
        out.field("SuccessfulShares", &self.successful_shares)?;
        out.field("ShareErrors", &self.share_errors)?;
        out.finish()
    }
}

/// See [`ShareDetails`](crate::model::ShareDetails)
pub mod share_details {
    use crate::model::ShareError;

    /// A builder for [`ShareDetails`](crate::model::ShareDetails)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        successful_shares: Option<Vec<String>>,
        share_errors: Option<Vec<ShareError>>,
    }

    impl Builder {
        /// Appends an item to `successful_shares`.
        pub fn successful_shares(mut self, input: impl Into<String>) -> Self {
            let mut v = self.successful_shares.unwrap_or_default();
            v.push(input.into());
            self.successful_shares = Some(v);
            self
        }
        pub fn set_successful_shares(mut self, input: Option<Vec<String>>) -> Self {
            self.successful_shares = input;
            self
        }
        /// Appends an item to `share_errors`.
        pub fn share_errors(mut self, input: ShareError) -> Self {
            let mut v = self.share_errors.unwrap_or_default();
            v.push(input);
            self.share_errors = Some(v);
            self
        }
        pub fn set_share_errors(mut self, input: Option<Vec<ShareError>>) -> Self {
            self.share_errors = input;
            self
        }
        pub fn build(self) -> crate::model::ShareDetails {
            crate::model::ShareDetails {
                successful_shares: self.successful_shares,
                share_errors: self.share_errors,
            }
        }
    }
}

impl ShareDetails {
    pub fn builder() -> crate::model::share_details::Builder {
        crate::model::share_details::Builder::default()
    }
}

/// <p>Errors that occurred during the portfolio share operation.</p>
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShareError {
    /// <p>List of accounts impacted by the error.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accounts: Option<Vec<String>>,
    /// <p>Information about the error.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// <p>Error type that happened when processing the operation.</p>
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ShareError {
    pub fn accounts(&self) -> Option<&[String]> {
        self.accounts.as_deref()
    }
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl fmt::Display for ShareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = PresentFields::new(f)?;
        out.field("Accounts", &self.accounts)?;
        out.field("Message", &self.message)?;
        out.field("Error", &self.error)?;
        out.finish()
    }
}

/// See [`ShareError`](crate::model::ShareError)
pub mod share_error {
    /// A builder for [`ShareError`](crate::model::ShareError)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        accounts: Option<Vec<String>>,
        message: Option<String>,
        error: Option<String>,
    }

    impl Builder {
        /// Appends an item to `accounts`.
        pub fn accounts(mut self, input: impl Into<String>) -> Self {
            let mut v = self.accounts.unwrap_or_default();
            v.push(input.into());
            self.accounts = Some(v);
            self
        }
        pub fn set_accounts(mut self, input: Option<Vec<String>>) -> Self {
            self.accounts = input;
            self
        }
        pub fn message(mut self, input: impl Into<String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: Option<String>) -> Self {
            self.message = input;
            self
        }
        pub fn error(mut self, input: impl Into<String>) -> Self {
            self.error = Some(input.into());
            self
        }
        pub fn set_error(mut self, input: Option<String>) -> Self {
            self.error = input;
            self
        }
        pub fn build(self) -> crate::model::ShareError {
            crate::model::ShareError {
                accounts: self.accounts,
                message: self.message,
                error: self.error,
            }
        }
    }
}

impl ShareError {
    pub fn builder() -> crate::model::share_error::Builder {
        crate::model::share_error::Builder::default()
    }
}

/// Identifiers of one provisioning artifact, keyed by property name.
pub type ProvisioningArtifactIdentifiers = BTreeMap<ProvisioningArtifactPropertyName, String>;

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn enum_and_raw_string_are_interchangeable() {
        let typed = StackInstance::builder()
            .stack_instance_status(StackInstanceStatus::Outdated)
            .build();
        let raw = StackInstance::builder()
            .stack_instance_status("OUTDATED")
            .build();
        assert_eq!(typed, raw);
        assert_eq!(typed.stack_instance_status().map(|s| s.as_str()), Some("OUTDATED"));
    }

    #[test]
    fn unknown_enum_values_round_trip() {
        let status = ShareStatus::from("PAUSED");
        assert_eq!(status, ShareStatus::Unknown("PAUSED".to_owned()));
        assert_eq!(status.as_str(), "PAUSED");
        assert_eq!(ShareStatus::from_str("ERROR"), Ok(ShareStatus::Error));
    }

    #[test]
    fn enum_values_list_every_wire_string() {
        assert_eq!(
            ShareStatus::values(),
            &[
                "NOT_STARTED",
                "IN_PROGRESS",
                "COMPLETED",
                "COMPLETED_WITH_ERRORS",
                "ERROR"
            ]
        );
        for value in ConstraintType::values() {
            assert!(!matches!(ConstraintType::from(*value), ConstraintType::Unknown(_)));
        }
    }

    #[test]
    fn list_members_append() {
        let change = ResourceChange::builder()
            .scope(ResourceAttribute::Properties)
            .scope("TAGS")
            .build();
        assert_eq!(
            change.scope(),
            Some(&[ResourceAttribute::Properties, ResourceAttribute::Tags][..])
        );
        assert_eq!(change.details(), None);
    }

    #[test]
    fn nested_shapes_render_recursively() {
        let change = ResourceChange::builder()
            .action(ChangeAction::Modify)
            .details(
                ResourceChangeDetail::builder()
                    .target(
                        ResourceTargetDefinition::builder()
                            .attribute(ResourceAttribute::Properties)
                            .name("InstanceType")
                            .build(),
                    )
                    .evaluation(EvaluationType::Static)
                    .build(),
            )
            .build();
        assert_eq!(
            change.to_string(),
            "{Action: MODIFY,Details: [{Target: {Attribute: PROPERTIES,Name: InstanceType},Evaluation: STATIC}]}"
        );
    }

    #[test]
    fn timestamps_render_as_rfc3339() {
        let detail = ProvisioningArtifactDetail::builder()
            .id("pa-1234")
            .created_time(Instant::from_epoch_seconds(1576540098))
            .active(true)
            .build();
        assert_eq!(
            detail.to_string(),
            "{Id: pa-1234,CreatedTime: 2019-12-16T23:48:18Z,Active: true}"
        );
    }

    #[test]
    fn constraint_detail_type_uses_wire_name() {
        let constraint = ConstraintDetail::builder()
            .constraint_id("cons-abc")
            .r#type(ConstraintType::Launch)
            .owner("123456789012")
            .build();
        assert_eq!(
            constraint.to_string(),
            "{ConstraintId: cons-abc,Type: LAUNCH,Owner: 123456789012}"
        );
    }
}
