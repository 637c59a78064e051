use std::borrow::Cow;

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProjectionError {
    #[error("invalid {field}: {reason}")]
    InvalidInput {
        field: &'static str,
        reason: Cow<'static, str>,
    },
}

impl ProjectionError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<Cow<'static, str>>) -> Self {
        ProjectionError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    pub fn field(&self) -> &'static str {
        match self {
            ProjectionError::InvalidInput { field, .. } => field,
        }
    }
}
