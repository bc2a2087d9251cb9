//! Accumulated validation outcomes.

use serde::Serialize;
use std::fmt;

/// Which input a [`Violation`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Latitude,
    Longitude,
    Limit,
    Radius,
    Area,
    Name,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::Latitude => "latitude",
            Field::Longitude => "longitude",
            Field::Limit => "limit",
            Field::Radius => "radius",
            Field::Area => "area",
            Field::Name => "name",
        };
        f.write_str(label)
    }
}

/// The class of rule a value broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ViolationKind {
    /// The value is missing or not a finite number.
    Type,
    /// A number lies outside its valid interval.
    Range,
    /// A coordinate lies inside the global range but outside the regional bounds.
    Region,
    /// A string breaks a domain rule (empty, too long).
    Domain,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    pub field: Field,
    pub kind: ViolationKind,
    pub message: String,
}

/// Result of a validator: every violation found, in the order checked.
///
/// Validators never stop at the first problem, so one report lists everything
/// wrong with the input.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// The human-readable messages, one per violation.
    pub fn errors(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.message.as_str()).collect()
    }

    pub fn has_kind(&self, kind: ViolationKind) -> bool {
        self.violations.iter().any(|v| v.kind == kind)
    }

    pub(crate) fn push(&mut self, field: Field, kind: ViolationKind, message: impl Into<String>) {
        self.violations.push(Violation {
            field,
            kind,
            message: message.into(),
        });
    }

    pub(crate) fn merge(&mut self, other: ValidationReport) {
        self.violations.extend(other.violations);
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.errors().join("; "))
    }
}
