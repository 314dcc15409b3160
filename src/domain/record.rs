use crate::domain::field::{FieldDef, FieldValue};
use crate::error::{CameliaError, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Unique identifier for a record: a domain prefix plus a zero-padded
/// sequence number (e.g. ORD-003, PRC-001)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(prefix: &str, seq: u32) -> Self {
        Self(format!("{}-{:03}", prefix, seq))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The numeric sequence component, 0 if the suffix is malformed
    pub fn seq(&self) -> u32 {
        self.0
            .rsplit_once('-')
            .and_then(|(_, n)| n.parse().ok())
            .unwrap_or(0)
    }
}

impl FromStr for RecordId {
    type Err = CameliaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.rsplit_once('-') {
            Some((prefix, seq)) if !prefix.is_empty() && seq.parse::<u32>().is_ok() => {
                Ok(Self(s.to_string()))
            }
            _ => Err(CameliaError::InvalidRecordId(s.to_string())),
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A row in one of the five domain tables
///
/// Every record carries an id, a status name resolved against the status
/// registry, and a fixed set of typed columns enumerated by `Field`.
/// Generic cell access goes through `get`/`set` with a [`FieldValue`],
/// never through stringly-typed lookup.
pub trait Record: Clone {
    type Field: FieldDef;

    /// Prefix for ids minted by the owning store
    const ID_PREFIX: &'static str;

    /// Every column of this record type, in display order
    const FIELDS: &'static [Self::Field];

    fn id(&self) -> &RecordId;

    /// Overwrites the id; only the owning store assigns ids
    fn assign_id(&mut self, id: RecordId);

    fn status(&self) -> &str;

    fn set_status(&mut self, status: &str);

    fn get(&self, field: Self::Field) -> FieldValue;

    /// Writes one cell, rejecting kind mismatches and derived fields
    fn set(&mut self, field: Self::Field, value: FieldValue) -> Result<()>;

    /// Required-field check, run before a row is accepted into a store
    fn validate(&self) -> Result<()>;

    /// Re-derives computed fields after a whole-row write; default no-op
    fn normalize(&mut self) {}

    /// Case-folded text of every cell plus the id, for substring search
    fn search_text(&self) -> String {
        let mut haystack = self.id().as_str().to_lowercase();
        for field in Self::FIELDS {
            haystack.push(' ');
            haystack.push_str(&self.get(*field).to_string().to_lowercase());
        }
        haystack
    }
}

/// Shared helper for validating required text fields
pub(crate) fn require(value: &str, field: &'static str) -> Result<()> {
    if value.trim().is_empty() {
        Err(CameliaError::MissingField(field))
    } else {
        Ok(())
    }
}
