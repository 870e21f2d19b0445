//! Content identifiers as received from clients
//!
//! Site pages send ids either as JSON numbers or as strings taken from
//! query parameters, so both are accepted and normalised here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Validated content id (positive integer)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ContentId(i64);

impl ContentId {
    pub fn new(id: i64) -> Result<Self, ValidationError> {
        if id < 1 {
            return Err(ValidationError::InvalidFormat {
                field: "id",
                reason: "must be a positive integer",
            });
        }
        Ok(Self(id))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl FromStr for ContentId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().parse::<i64>().map_err(|_| ValidationError::InvalidFormat {
            field: "id",
            reason: "must be a positive integer",
        })?;
        Self::new(id)
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Id field of a JSON request body, before validation
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Int(i64),
    Text(String),
}

impl RawId {
    pub fn parse(&self) -> Result<ContentId, ValidationError> {
        match self {
            Self::Int(id) => ContentId::new(*id),
            Self::Text(s) if s.trim().is_empty() => Err(ValidationError::Missing { field: "id" }),
            Self::Text(s) => s.parse(),
        }
    }
}
