//! Educational modalities and levels.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Educational modality. Fixed set, never fetched remotely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modality {
    /// Educación Básica Regular
    #[serde(rename = "01")]
    Regular,
    /// Educación Básica Alternativa
    #[serde(rename = "03")]
    Alternative,
    /// Educación Básica Especial
    #[serde(rename = "04")]
    Special,
}

impl Modality {
    pub const ALL: [Modality; 3] = [Modality::Regular, Modality::Alternative, Modality::Special];

    /// Code the proxy expects for this modality.
    pub fn code(&self) -> &'static str {
        match self {
            Modality::Regular => "01",
            Modality::Alternative => "03",
            Modality::Special => "04",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Modality::Regular => "Educación Básica Regular",
            Modality::Alternative => "Educación Básica Alternativa",
            Modality::Special => "Educación Básica Especial",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.code() == code)
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A level scoped to one modality.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    #[serde(rename = "codNivel", default)]
    pub code: String,
    #[serde(rename = "nombre", default)]
    pub name: String,
}
