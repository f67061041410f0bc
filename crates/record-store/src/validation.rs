//! # Field Validation
//!
//! Turns a loose `name -> text` mapping, as received from a client, into a checked and
//! typed [`Fields`] set before anything reaches the store.
//!
//! A [`FieldContract`] lists the fields that must be present, the fields that may be
//! present, and how particular fields are coerced. Checks run in a fixed order:
//!
//! 1. every required field is present, else [`ValidationError::MissingFields`];
//! 2. no field outside the allowed set is present, else [`ValidationError::UnexpectedFields`];
//! 3. every coercion succeeds, else [`ValidationError::InvalidFieldFormat`].
//!
//! Record ids are not part of any contract. They are read with [`parse_id`] first.

use crate::entity::RecordId;
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};

/// Raw request input.
pub type RawFields = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),
    #[error("Contains extra fields: {}", .0.join(", "))]
    UnexpectedFields(Vec<String>),
    #[error("{field} must be {expected}")]
    InvalidFieldFormat { field: String, expected: String },
    #[error("{field} must be integer")]
    InvalidId { field: String },
}

impl ValidationError {
    pub fn missing(field: &str) -> Self {
        ValidationError::MissingFields(vec![field.to_string()])
    }
}

/// How a raw text value is converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    Integer,
    /// A calendar date in the given `chrono` format.
    Date(&'static str),
}

impl Coercion {
    fn apply(self, field: &str, raw: &str) -> Result<FieldValue, ValidationError> {
        match self {
            Coercion::Integer => raw
                .trim()
                .parse::<i64>()
                .map(FieldValue::Integer)
                .map_err(|_| invalid(field, "integer".to_string())),
            Coercion::Date(format) => NaiveDate::parse_from_str(raw.trim(), format)
                .map(FieldValue::Date)
                .map_err(|_| invalid(field, format!("in format {format}"))),
        }
    }
}

fn invalid(field: &str, expected: String) -> ValidationError {
    ValidationError::InvalidFieldFormat {
        field: field.to_string(),
        expected,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Date(NaiveDate),
}

/// Validated fields, keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields(BTreeMap<String, FieldValue>);

impl Fields {
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn text(&self, name: &str) -> Option<String> {
        match self.get(name)? {
            FieldValue::Text(value) => Some(value.clone()),
            _ => None,
        }
    }

    pub fn integer(&self, name: &str) -> Option<i64> {
        match self.get(name)? {
            FieldValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn date(&self, name: &str) -> Option<NaiveDate> {
        match self.get(name)? {
            FieldValue::Date(value) => Some(*value),
            _ => None,
        }
    }
}

/// Which fields a request must, and may, carry.
#[derive(Debug, Clone, Default)]
pub struct FieldContract {
    required: BTreeSet<&'static str>,
    allowed: BTreeSet<&'static str>,
    coercions: BTreeMap<&'static str, Coercion>,
}

impl FieldContract {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks fields as required. Required fields are always allowed.
    pub fn require(mut self, fields: &[&'static str]) -> Self {
        self.required.extend(fields);
        self.allowed.extend(fields);
        self
    }

    pub fn allow(mut self, fields: &[&'static str]) -> Self {
        self.allowed.extend(fields);
        self
    }

    pub fn coerce(mut self, field: &'static str, coercion: Coercion) -> Self {
        self.coercions.insert(field, coercion);
        self
    }

    pub fn validate(&self, raw: &RawFields) -> Result<Fields, ValidationError> {
        let missing: Vec<String> = self
            .required
            .iter()
            .filter(|field| !raw.contains_key(**field))
            .map(|field| field.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }

        let unexpected: Vec<String> = raw
            .keys()
            .filter(|key| !self.allowed.contains(key.as_str()))
            .cloned()
            .collect();
        if !unexpected.is_empty() {
            return Err(ValidationError::UnexpectedFields(unexpected));
        }

        let mut fields = BTreeMap::new();
        for (name, value) in raw {
            let typed = match self.coercions.get(name.as_str()) {
                Some(coercion) => coercion.apply(name, value)?,
                None => FieldValue::Text(value.clone()),
            };
            fields.insert(name.clone(), typed);
        }
        Ok(Fields(fields))
    }
}

/// Reads the integer id stored under `key`.
pub fn parse_id(raw: &RawFields, key: &str) -> Result<RecordId, ValidationError> {
    let value = raw.get(key).ok_or_else(|| ValidationError::missing(key))?;
    value.parse().map_err(|_| ValidationError::InvalidId {
        field: key.to_string(),
    })
}
