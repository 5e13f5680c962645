/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! <fullname>AWS Service Catalog</fullname>
//!
//! <p><a href="https://aws.amazon.com/servicecatalog/">AWS Service Catalog</a> enables
//! organizations to create and manage catalogs of IT services that are approved for AWS.</p>
//!
//! This crate holds the request, result and shared model shapes of the API. Every member is
//! optional; builders never check documented constraints, call `validate()` on a request to
//! do so.
//!
//! ```
//! use servicecatalog::input::TerminateProvisionedProductInput;
//!
//! let input = TerminateProvisionedProductInput::builder()
//!     .provisioned_product_id("pp-abc123")
//!     .terminate_token("tok-1")
//!     .ignore_errors(true)
//!     .build();
//! assert_eq!(
//!     input.to_string(),
//!     "{ProvisionedProductId: pp-abc123,TerminateToken: tok-1,IgnoreErrors: true}"
//! );
//! ```

#![warn(rust_2018_idioms)]

#[macro_use]
mod macros;

mod constraints;
mod fmt;

pub mod error;
pub mod idempotency_token;
pub mod input;
pub mod model;
pub mod output;

pub use crate::error::{BuildError, ServiceError, ServiceErrorKind, ValidationError};
pub use crate::idempotency_token::IdempotencyTokenProvider;
pub use smithy_types::Instant;
