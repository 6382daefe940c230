//! opnorm Core - Normalization engine for batched mutation operations
//!
//! Mutation operations arrive in two shapes: the verb-keyed native shape
//! (`{ "create": {...} }`) taken straight from the remote API, and the
//! explicit canonical shape (`{ "entity", "operation", "resource" }`). This
//! crate turns any mix of the two into canonical operations, inferring the
//! entity kind of native operations from their resource names or, for
//! creates, from the shape of their fields.
//!
//! # Main Components
//!
//! - **Inference**: resource-path lexicon, resource-name parser and the
//!   ordered shape rules
//! - **Normalization**: shape/verb classification and the batch normalizer
//! - **Executor boundary**: request/response data for the remote mutate call
//!
//! # Example
//!
//! ```
//! use opnorm_core::{normalize, EntityKind, Result};
//! use serde_json::json;
//!
//! fn example() -> Result<()> {
//!     let batch = normalize(&[
//!         json!({ "entity": "label", "operation": "remove", "resource": "customers/1/labels/2" }),
//!         json!({ "create": { "campaign": "customers/1/campaigns/3", "name": "Group A" } }),
//!     ])?;
//!
//!     assert_eq!(batch.operations[1].entity, EntityKind::AdGroup);
//!     assert_eq!(batch.warnings.len(), 1);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod config;
pub mod error;
pub mod executor;
pub mod inference;
pub mod normalization;
pub mod types;

#[cfg(test)]
mod proptest_strategies;

// Re-export main types for convenience
pub use config::NormalizerConfig;
pub use error::{Error, Result};
pub use executor::{submit, MutateRequest, MutateResponse, MutationExecutor, SubmitOutcome};
pub use inference::{infer_from_resource_name, infer_from_shape};
pub use normalization::{
    classify_shape, classify_verb, normalize, Normalizer, OperationShape, ResolutionSource,
    TransformationRecord,
};
pub use types::{CanonicalOperation, EntityKind, NormalizedBatch, Resource, Verb};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
