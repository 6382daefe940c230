//! Boundary to the remote mutation executor
//!
//! The executor itself (transport, auth, partial-failure parsing) lives
//! outside this crate. This module only defines the data handed across and a
//! helper that normalizes a batch before handing it over.

use crate::normalization::Normalizer;
use crate::types::{CanonicalOperation, NormalizedBatch};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

/// Request passed to a [`MutationExecutor`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MutateRequest {
    /// Normalized operations, exactly as the normalizer produced them
    pub operations: Vec<CanonicalOperation>,
    /// Let valid operations succeed when others in the batch fail
    pub partial_failure: bool,
    /// Validate without applying
    pub validate_only: bool,
}

/// Executor response, kept opaque
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MutateResponse {
    /// Per-operation results, in request order
    #[serde(default)]
    pub results: Vec<Value>,
    /// Errors reported in-band when `partial_failure` was requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partial_failure_errors: Option<Vec<Value>>,
}

impl MutateResponse {
    pub fn has_partial_failure(&self) -> bool {
        self.partial_failure_errors
            .as_ref()
            .is_some_and(|errors| !errors.is_empty())
    }
}

impl NormalizedBatch {
    /// Package the operations for an executor, dropping the diagnostics
    pub fn into_request(self, partial_failure: bool, validate_only: bool) -> MutateRequest {
        MutateRequest {
            operations: self.operations,
            partial_failure,
            validate_only,
        }
    }
}

/// Anything that can apply canonical operations remotely
pub trait MutationExecutor {
    fn mutate(&self, request: &MutateRequest) -> anyhow::Result<MutateResponse>;
}

/// Outcome of [`submit`]
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutcome {
    pub response: MutateResponse,
    /// Normalization warnings for the submitted batch
    pub warnings: Vec<String>,
}

/// Normalize `operations` and hand them to `executor`
///
/// Normalization errors are returned before the executor is called.
pub fn submit<E: MutationExecutor + ?Sized>(
    executor: &E,
    normalizer: &Normalizer,
    operations: &[Value],
    partial_failure: bool,
    validate_only: bool,
) -> Result<SubmitOutcome> {
    let batch = normalizer.normalize(operations)?;
    let warnings = batch.warnings.clone();
    let request = batch.into_request(partial_failure, validate_only);

    info!(
        operations = request.operations.len(),
        transformed = warnings.len(),
        partial_failure,
        validate_only,
        "submitting mutate request"
    );

    let response = executor.mutate(&request).map_err(|source| Error::Executor {
        message: format!("mutate request with {} operation(s) failed", request.operations.len()),
        source,
    })?;

    if response.has_partial_failure() {
        debug!(
            errors = response.partial_failure_errors.as_ref().map_or(0, Vec::len),
            "executor reported partial failure"
        );
    }

    Ok(SubmitOutcome { response, warnings })
}
