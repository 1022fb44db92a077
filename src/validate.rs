//! Collector-side request validation
//!
//! These are the checks a form performs before asking the builder for SQL.
//! A failed check means no SQL is generated and the user is told which field
//! to fill in. The builder never requires them.

use crate::builder::RequiredField;
use crate::config::{Config, Messages};
use crate::request::{GenerateRequest, InsertValues, Operation};
use thiserror::Error;
use tracing::{debug, warn};

/// Validation failure, carrying the user-facing message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Field that needs input
    pub field: RequiredField,
    /// Message to show the user
    pub message: String,
}

/// Checks a request before generation
#[derive(Debug, Clone)]
pub struct RequestValidator {
    require_statement_id: bool,
    messages: Messages,
}

impl Default for RequestValidator {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl RequestValidator {
    /// Create a validator from configuration
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            require_statement_id: config.defaults.require_statement_id,
            messages: config.messages(),
        }
    }

    /// Validate `request`, returning the first missing field
    ///
    /// Unrecognized operations pass; the builder reports those itself.
    pub fn validate(&self, request: &GenerateRequest) -> Result<(), ValidationError> {
        if request.table_name().is_empty() {
            return Err(self.missing(RequiredField::Table));
        }

        if self.require_statement_id && request.explicit_id().is_none() {
            return Err(self.missing(RequiredField::StatementId));
        }

        match request.operation() {
            Ok(Operation::Insert) => {
                if request.columns.is_empty() {
                    return Err(self.missing(RequiredField::Columns));
                }
                if let InsertValues::Literal(values) = &request.insert_values {
                    if values.trim().is_empty() {
                        return Err(self.missing(RequiredField::Values));
                    }
                }
            }
            Ok(Operation::Update) => {
                if request.set.lines(&request.columns).is_empty() {
                    return Err(self.missing(RequiredField::Set));
                }
            }
            Ok(Operation::Select | Operation::Delete) | Err(_) => {}
        }

        debug!("Request for table '{}' passed validation", request.table_name());
        Ok(())
    }

    fn missing(&self, field: RequiredField) -> ValidationError {
        warn!("Validation failed: missing {field}");
        let message = match field {
            RequiredField::Table => &self.messages.empty_table,
            RequiredField::StatementId => &self.messages.missing_statement_id,
            RequiredField::Columns => &self.messages.missing_columns,
            RequiredField::Values => &self.messages.missing_values,
            RequiredField::Set => &self.messages.missing_set,
        };
        ValidationError {
            field,
            message: message.clone(),
        }
    }
}
