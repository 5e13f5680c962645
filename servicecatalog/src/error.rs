/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Errors raised while building model shapes, checking their documented constraints, and the
//! error codes the service models.

use std::fmt;
use thiserror::Error;

/// Failure to assemble a shape with a builder.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BuildError {
    /// A map entry was added under a key the map already holds.
    #[error("duplicated key `{key}` added to `{field}`")]
    DuplicateKey { field: &'static str, key: String },
}

impl BuildError {
    pub(crate) fn duplicate_key(field: &'static str, key: impl fmt::Display) -> Self {
        let key = key.to_string();
        tracing::debug!(field, key = %key, "rejected duplicate map entry");
        BuildError::DuplicateKey { field, key }
    }
}

/// What a member value broke.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConstraintViolation {
    Length { min: usize, max: Option<usize>, actual: usize },
    Pattern { pattern: &'static str },
    Range { min: i64, max: Option<i64>, actual: i64 },
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintViolation::Length { min, max, actual } => match max {
                Some(max) => write!(f, "length {} is outside {}..={}", actual, min, max),
                None => write!(f, "length {} is below {}", actual, min),
            },
            ConstraintViolation::Pattern { pattern } => {
                write!(f, "value does not match `{}`", pattern)
            }
            ConstraintViolation::Range { min, max, actual } => match max {
                Some(max) => write!(f, "{} is outside {}..={}", actual, min, max),
                None => write!(f, "{} is below {}", actual, min),
            },
        }
    }
}

/// One member of a request that breaks a documented constraint.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{field}: {violation}")]
pub struct ValidationError {
    /// Wire name of the member, with a list index when the member is nested, e.g. `Tags[1].Key`.
    pub field: String,
    pub violation: ConstraintViolation,
}

/// The error codes the service documents.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ServiceErrorKind {
    /// The specified resource is a duplicate.
    DuplicateResourceException,
    /// One or more parameters provided to the operation are not valid.
    InvalidParametersException,
    /// An attempt was made to modify a resource that is in a state that is not valid.
    InvalidStateException,
    /// The current limits of the service would have been exceeded by this operation.
    LimitExceededException,
    /// The operation is not supported.
    OperationNotSupportedException,
    /// A resource that is currently in use.
    ResourceInUseException,
    /// The specified resource was not found.
    ResourceNotFoundException,
    /// An operation requiring TagOptions failed because the TagOptions migration process has
    /// not been performed for this account.
    TagOptionNotMigratedException,
    /// A code the model does not name.
    Unhandled(String),
}

impl ServiceErrorKind {
    /// Maps an awsJson error code to its kind.
    ///
    /// The code may carry a namespace (`com.amazonaws.servicecatalog#ResourceNotFoundException`)
    /// and a trailing description after `:`; both are ignored.
    pub fn from_code(code: &str) -> Self {
        let code = code.split(':').next().unwrap_or(code);
        let code = code.rsplit('#').next().unwrap_or(code);
        match code {
            "DuplicateResourceException" => ServiceErrorKind::DuplicateResourceException,
            "InvalidParametersException" => ServiceErrorKind::InvalidParametersException,
            "InvalidStateException" => ServiceErrorKind::InvalidStateException,
            "LimitExceededException" => ServiceErrorKind::LimitExceededException,
            "OperationNotSupportedException" => ServiceErrorKind::OperationNotSupportedException,
            "ResourceInUseException" => ServiceErrorKind::ResourceInUseException,
            "ResourceNotFoundException" => ServiceErrorKind::ResourceNotFoundException,
            "TagOptionNotMigratedException" => ServiceErrorKind::TagOptionNotMigratedException,
            other => ServiceErrorKind::Unhandled(other.to_owned()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            ServiceErrorKind::DuplicateResourceException => "DuplicateResourceException",
            ServiceErrorKind::InvalidParametersException => "InvalidParametersException",
            ServiceErrorKind::InvalidStateException => "InvalidStateException",
            ServiceErrorKind::LimitExceededException => "LimitExceededException",
            ServiceErrorKind::OperationNotSupportedException => "OperationNotSupportedException",
            ServiceErrorKind::ResourceInUseException => "ResourceInUseException",
            ServiceErrorKind::ResourceNotFoundException => "ResourceNotFoundException",
            ServiceErrorKind::TagOptionNotMigratedException => "TagOptionNotMigratedException",
            ServiceErrorKind::Unhandled(code) => code,
        }
    }
}

/// An error response from the service, after the transport has extracted its code and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceError {
    pub kind: ServiceErrorKind,
    pub message: Option<String>,
    pub request_id: Option<String>,
}

impl ServiceError {
    pub fn new(code: &str, message: Option<String>, request_id: Option<String>) -> Self {
        ServiceError {
            kind: ServiceErrorKind::from_code(code),
            message,
            request_id,
        }
    }

    pub fn code(&self) -> &str {
        self.kind.code()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())?;
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ServiceError {}
