//! School search models.
//!
//! [`SearchCriteria`] is the body posted to `/colegios` and [`SearchResult`]
//! is its plain-JSON answer. Unlike the lookup endpoints, search results are
//! not wrapped in a token envelope.

use identicole_core::PageWindow;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

/// A school (colegio) record.
///
/// The proxy always sends `nombre`; every other field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct School {
    #[serde(rename = "codModular", skip_serializing_if = "Option::is_none")]
    pub modular_code: Option<String>,
    #[serde(rename = "nombre", default)]
    pub name: String,
    #[serde(rename = "direccion", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Public or private management
    #[serde(rename = "gestion", skip_serializing_if = "Option::is_none")]
    pub management: Option<String>,
    #[serde(rename = "pension", skip_serializing_if = "Option::is_none")]
    pub tuition: Option<f64>,
    #[serde(rename = "estudiantesPorAula", skip_serializing_if = "Option::is_none")]
    pub students_per_classroom: Option<f64>,
    #[serde(rename = "nivel", skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(rename = "modalidad", skip_serializing_if = "Option::is_none")]
    pub modality: Option<String>,
    #[serde(rename = "turno", skip_serializing_if = "Option::is_none")]
    pub shift: Option<String>,
    /// Student body description (mixed, boys only, girls only)
    #[serde(rename = "alumnado", skip_serializing_if = "Option::is_none")]
    pub student_body: Option<String>,
    #[serde(rename = "departamento", skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(rename = "provincia", skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(rename = "distrito", skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
}

impl School {
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(Coordinates { lat, lng }),
            _ => None,
        }
    }
}

/// A geographic point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Body of a `/colegios` search request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct SearchCriteria {
    #[serde(rename = "coddpto")]
    #[validate(length(min = 1))]
    pub department_code: String,
    #[serde(rename = "codprov")]
    #[validate(length(min = 1))]
    pub province_code: String,
    #[serde(rename = "coddist")]
    #[validate(length(min = 1))]
    pub district_code: String,
    /// Modality code, empty when no modality is selected
    #[serde(rename = "modalidad", default)]
    pub modality: String,
    /// Level code, empty when no level is selected
    #[serde(rename = "nivel", default)]
    pub level: String,
    #[serde(default)]
    pub page: u32,
    #[serde(rename = "pageSize")]
    #[validate(range(min = 1))]
    pub page_size: u32,
    /// Free-text school name filter
    #[serde(rename = "texto", default)]
    pub query: String,
    /// Human-readable "district, province, department, country"
    #[serde(rename = "ubicacionTexto", default)]
    pub location_description: String,
    #[serde(flatten)]
    pub coordinates: Option<Coordinates>,
}

impl SearchCriteria {
    /// Names the first location code a failed validation complains about.
    ///
    /// `None` when the failure lies outside the location codes.
    pub fn missing_field(errors: &ValidationErrors) -> Option<&'static str> {
        let fields = errors.field_errors();
        [
            ("department_code", "department"),
            ("province_code", "province"),
            ("district_code", "district"),
        ]
        .into_iter()
        .find(|(field, _)| fields.contains_key(*field))
        .map(|(_, label)| label)
    }
}

/// Answer of a `/colegios` search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub total: u64,
    pub page: u32,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
    #[serde(rename = "resultados", default)]
    pub results: Vec<School>,
}

impl SearchResult {
    pub fn window(&self) -> PageWindow {
        PageWindow::new(self.total, self.page, self.page_size)
    }
}
