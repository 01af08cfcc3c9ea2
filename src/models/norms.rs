use std::fmt;

use serde::{Deserialize, Serialize};

/// Inclusive [min, max] band for one nutrient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormRange {
    pub min: f64,
    pub max: f64,
}

impl NormRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// How a blended nutrient compares to its norm range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FindingKind {
    /// Below the norm minimum.
    Deficit,

    /// Above the norm maximum.
    Excess,

    /// The norm table covers this nutrient but the blend has no value for it.
    Missing,
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FindingKind::Deficit => "deficit",
            FindingKind::Excess => "excess",
            FindingKind::Missing => "missing",
        };
        write!(f, "{}", s)
    }
}

/// One classification of a blended nutrient against its norm range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub nutrient: String,
    pub kind: FindingKind,

    /// Blended value, absent for `Missing` findings.
    pub value: Option<f64>,

    pub range: NormRange,
}

impl Finding {
    pub fn deficit(nutrient: impl Into<String>, value: f64, range: NormRange) -> Self {
        Self {
            nutrient: nutrient.into(),
            kind: FindingKind::Deficit,
            value: Some(value),
            range,
        }
    }

    pub fn excess(nutrient: impl Into<String>, value: f64, range: NormRange) -> Self {
        Self {
            nutrient: nutrient.into(),
            kind: FindingKind::Excess,
            value: Some(value),
            range,
        }
    }

    pub fn missing(nutrient: impl Into<String>, range: NormRange) -> Self {
        Self {
            nutrient: nutrient.into(),
            kind: FindingKind::Missing,
            value: None,
            range,
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.nutrient)
    }
}
