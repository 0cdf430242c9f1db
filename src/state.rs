//! Search session state.
//!
//! [`SearchState`] is the complete, cloneable snapshot the session publishes
//! after every transition: the filter selection, the candidate lists loaded
//! for it, and the current page of results.

use identicole_core::PageWindow;
use identicole_models::{
    Coordinates, District, Level, Modality, Province, School, SearchCriteria, department_label,
};

/// The filters that parameterize the next search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub department: Option<String>,
    pub province: Option<String>,
    pub district: Option<String>,
    pub modality: Option<Modality>,
    pub level: Option<String>,
    /// Free-text school name filter
    pub query: String,
    pub coordinates: Option<Coordinates>,
}

impl Selection {
    /// First location component still unselected, if any.
    pub fn missing_location(&self) -> Option<&'static str> {
        if self.department.is_none() {
            Some("department")
        } else if self.province.is_none() {
            Some("province")
        } else if self.district.is_none() {
            Some("district")
        } else {
            None
        }
    }
}

/// Per-operation request generations. A response is applied only while the
/// generation it was issued under is still current.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Generations {
    pub(crate) search: u64,
    pub(crate) provinces: u64,
    pub(crate) districts: u64,
    pub(crate) levels: u64,
}

impl Generations {
    pub(crate) fn advance_all(&mut self) {
        self.search += 1;
        self.provinces += 1;
        self.districts += 1;
        self.levels += 1;
    }
}

/// Snapshot of a search session.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    pub selection: Selection,
    pub provinces: Vec<Province>,
    pub districts: Vec<District>,
    pub levels: Vec<Level>,
    pub schools: Vec<School>,
    pub total: u64,
    /// Zero-based page index
    pub page: u32,
    pub page_size: u32,
    /// Status line for the last completed search
    pub message: Option<String>,
    /// User-visible description of the last failure
    pub error: Option<String>,
    pub(crate) generations: Generations,
}

impl SearchState {
    pub fn new(department: Option<String>, page_size: u32) -> Self {
        Self {
            selection: Selection {
                department,
                ..Default::default()
            },
            provinces: Vec::new(),
            districts: Vec::new(),
            levels: Vec::new(),
            schools: Vec::new(),
            total: 0,
            page: 0,
            page_size,
            message: None,
            error: None,
            generations: Generations::default(),
        }
    }

    pub fn window(&self) -> PageWindow {
        PageWindow::new(self.total, self.page, self.page_size)
    }

    pub fn total_pages(&self) -> u32 {
        self.window().total_pages()
    }

    /// Drops results, total, page index and any status or error message.
    ///
    /// Also invalidates an in-flight search so its answer cannot repopulate
    /// results for filters that no longer apply.
    pub(crate) fn clear_results(&mut self) {
        self.schools.clear();
        self.total = 0;
        self.page = 0;
        self.message = None;
        self.error = None;
        self.generations.search += 1;
    }

    /// "district, province, department, country", skipping unknown parts.
    pub fn location_description(&self, country_label: &str) -> String {
        let selection = &self.selection;

        let district = selection
            .district
            .as_deref()
            .and_then(|code| self.districts.iter().find(|d| d.code == code))
            .map(|d| d.name.as_str());
        let province = selection
            .province
            .as_deref()
            .and_then(|code| self.provinces.iter().find(|p| p.code == code))
            .map(|p| p.name.as_str());
        let department = selection.department.as_deref().and_then(department_label);

        [district, province, department, Some(country_label)]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Request body for the current selection at `page`.
    pub fn criteria(&self, page: u32, country_label: &str) -> SearchCriteria {
        let selection = &self.selection;
        SearchCriteria {
            department_code: selection.department.clone().unwrap_or_default(),
            province_code: selection.province.clone().unwrap_or_default(),
            district_code: selection.district.clone().unwrap_or_default(),
            modality: selection
                .modality
                .map(|m| m.code().to_string())
                .unwrap_or_default(),
            level: selection.level.clone().unwrap_or_default(),
            page,
            page_size: self.page_size,
            query: selection.query.clone(),
            location_description: self.location_description(country_label),
            coordinates: selection.coordinates,
        }
    }

    /// Status line describing the results currently held.
    pub fn status_message(&self) -> String {
        match self.window().display_range(self.schools.len()) {
            Some((start, end)) => format!("Showing {start}–{end} of {} colegios.", self.total),
            None => "No colegios found for these filters.".to_string(),
        }
    }
}

/// Empty or whitespace-only codes mean "nothing selected".
pub(crate) fn selected(code: impl Into<String>) -> Option<String> {
    let code = code.into();
    let trimmed = code.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == code.len() {
        Some(code)
    } else {
        Some(trimmed.to_string())
    }
}
