//! Declarative request schema for JSON bodies.
//!
//! A [`RequestSchema`] lists the fields a request may carry and the
//! constraints on each one. Validation walks every field and collects all
//! violations instead of stopping at the first, so a client sees everything
//! wrong with its request in a single response.

use serde_json::{Map, Value};
use std::collections::HashMap;

use super::dto::AudioFormat;

const STREAMING_CHOICES: &[&str] = &["true", "false"];

/// Constraints for a single string field of a JSON body
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: &'static str,
    pub required: bool,
    pub choices: Option<&'static [&'static str]>,
    pub default: Option<&'static str>,
}

impl FieldSpec {
    pub fn required(name: &'static str) -> Self {
        Self {
            name,
            required: true,
            choices: None,
            default: None,
        }
    }

    pub fn optional(name: &'static str) -> Self {
        Self {
            name,
            required: false,
            choices: None,
            default: None,
        }
    }

    pub fn choices(mut self, choices: &'static [&'static str]) -> Self {
        self.choices = Some(choices);
        self
    }

    pub fn default_value(mut self, default: &'static str) -> Self {
        self.default = Some(default);
        self
    }
}

/// A single reason a request body does not match its schema
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    #[error("missing required field '{field}'")]
    Missing { field: &'static str },

    #[error("field '{field}' must not be empty")]
    Empty { field: &'static str },

    #[error("field '{field}' must be a string")]
    InvalidType { field: &'static str },

    #[error("field '{field}' has invalid value '{value}', expected one of: {}", .allowed.join(", "))]
    InvalidChoice {
        field: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },
}

impl Violation {
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing { field }
            | Self::Empty { field }
            | Self::InvalidType { field }
            | Self::InvalidChoice { field, .. } => field,
        }
    }

    /// Stable machine-readable code for API clients
    pub fn code(&self) -> &'static str {
        match self {
            Self::Missing { .. } => "missing_field",
            Self::Empty { .. } => "empty_field",
            Self::InvalidType { .. } => "invalid_type",
            Self::InvalidChoice { .. } => "invalid_choice",
        }
    }
}

/// Field values that passed validation, with defaults filled in
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidatedFields {
    values: HashMap<&'static str, String>,
}

impl ValidatedFields {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Remove a field, handing ownership of its value to the caller
    pub fn take(&mut self, name: &str) -> Option<String> {
        self.values.remove(name)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RequestSchema {
    fields: Vec<FieldSpec>,
}

impl RequestSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }

    /// Schema for POST /speech
    pub fn speech() -> Self {
        Self::new()
            .field(FieldSpec::required("voice_id"))
            .field(
                FieldSpec::optional("streaming")
                    .choices(STREAMING_CHOICES)
                    .default_value("false"),
            )
            .field(
                FieldSpec::optional("audio_format")
                    .choices(AudioFormat::CHOICES)
                    .default_value(AudioFormat::default().as_str()),
            )
            .field(FieldSpec::required("text"))
    }

    /// Check `body` against every field of the schema.
    ///
    /// `null` counts as absent. Fields not named by the schema are ignored.
    pub fn validate(&self, body: &Map<String, Value>) -> Result<ValidatedFields, Vec<Violation>> {
        let mut values = HashMap::with_capacity(self.fields.len());
        let mut violations = Vec::new();

        for spec in &self.fields {
            match body.get(spec.name) {
                None | Some(Value::Null) => {
                    if spec.required {
                        violations.push(Violation::Missing { field: spec.name });
                    } else if let Some(default) = spec.default {
                        values.insert(spec.name, default.to_string());
                    }
                }
                Some(Value::String(value)) => match check_value(spec, value) {
                    Ok(()) => {
                        values.insert(spec.name, value.clone());
                    }
                    Err(violation) => violations.push(violation),
                },
                Some(_) => violations.push(Violation::InvalidType { field: spec.name }),
            }
        }

        if violations.is_empty() {
            Ok(ValidatedFields { values })
        } else {
            Err(violations)
        }
    }
}

fn check_value(spec: &FieldSpec, value: &str) -> Result<(), Violation> {
    if let Some(allowed) = spec.choices {
        // Case-sensitive on purpose: "True" is not "true"
        if !allowed.contains(&value) {
            return Err(Violation::InvalidChoice {
                field: spec.name,
                value: value.to_string(),
                allowed,
            });
        }
    } else if spec.required && value.trim().is_empty() {
        return Err(Violation::Empty { field: spec.name });
    }

    Ok(())
}
