//! Normalizer configuration
//!
//! Field names and the identifier exemption set are data rather than
//! constants so callers talking to a differently-shaped upstream can adjust
//! them without forking the rules.

use crate::types::EntityKind;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default embedded identifier field
pub const DEFAULT_IDENTIFIER_FIELD: &str = "resource_name";

/// Default sideband override field on native operations
pub const DEFAULT_OVERRIDE_FIELD: &str = "entity";

/// Configuration for [`crate::Normalizer`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NormalizerConfig {
    /// Field holding a resource name inside create/update payloads
    pub identifier_field: String,

    /// Field on a native operation that names its entity kind explicitly
    pub override_field: String,

    /// Kinds whose create payloads keep their identifier.
    ///
    /// Budgets are created with temporary ids (`customers/1/campaignBudgets/-1`)
    /// that sibling operations in the same batch refer to.
    pub identifier_exempt_kinds: Vec<EntityKind>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            identifier_field: DEFAULT_IDENTIFIER_FIELD.to_string(),
            override_field: DEFAULT_OVERRIDE_FIELD.to_string(),
            identifier_exempt_kinds: vec![EntityKind::CampaignBudget],
        }
    }
}

impl NormalizerConfig {
    /// Parse and validate a configuration from a JSON document
    pub fn from_json_str(input: &str) -> Result<Self> {
        let config: NormalizerConfig = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a configuration from an already-parsed JSON value
    pub fn from_value(value: Value) -> Result<Self> {
        let config: NormalizerConfig = serde_json::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    /// Builder-style override of the identifier field
    pub fn with_identifier_field(mut self, field: impl Into<String>) -> Self {
        self.identifier_field = field.into();
        self
    }

    /// Builder-style override of the sideband entity field
    pub fn with_override_field(mut self, field: impl Into<String>) -> Self {
        self.override_field = field.into();
        self
    }

    /// Builder-style replacement of the exemption set
    pub fn with_identifier_exempt_kinds(mut self, kinds: impl IntoIterator<Item = EntityKind>) -> Self {
        self.identifier_exempt_kinds = kinds.into_iter().collect();
        self
    }

    pub fn is_identifier_exempt(&self, kind: EntityKind) -> bool {
        self.identifier_exempt_kinds.contains(&kind)
    }

    pub fn validate(&self) -> Result<()> {
        if self.identifier_field.is_empty() {
            return Err(Error::Configuration {
                message: "identifier_field must not be empty".to_string(),
            });
        }
        if self.override_field.is_empty() {
            return Err(Error::Configuration {
                message: "override_field must not be empty".to_string(),
            });
        }
        if self.identifier_field == self.override_field {
            return Err(Error::Configuration {
                message: format!(
                    "identifier_field and override_field are both '{}'",
                    self.identifier_field
                ),
            });
        }
        Ok(())
    }
}
