//! Cascading filter transitions.
//!
//! department → province → district, and modality → level. Changing a filter
//! clears everything downstream of it along with the current results. A
//! department change auto-selects the first province it loads; a province
//! change never auto-selects a district, so a district is always a user
//! choice before a search can run.

use tracing::{debug, info, instrument, warn};

use identicole_core::{ClientError, Lookup};
use identicole_models::{Coordinates, Modality};

use super::SearchSession;
use crate::state::{SearchState, selected};

impl SearchSession {
    /// Loads provinces for the department selected at construction.
    pub async fn start(&self) -> Result<(), ClientError> {
        self.load_provinces().await
    }

    /// Restores the default department, clears every other selection, list,
    /// the query and results, then reloads provinces.
    pub async fn reset(&self) -> Result<(), ClientError> {
        let department = selected(self.options.default_department.as_str());
        info!(department.code = ?department, "Resetting search session");

        self.update(|state| {
            let mut generations = state.generations;
            generations.advance_all();
            let page_size = state.page_size;

            *state = SearchState::new(department, page_size);
            state.generations = generations;
        });

        self.load_provinces().await
    }

    #[instrument(skip(self, code))]
    pub async fn select_department(&self, code: impl Into<String>) -> Result<(), ClientError> {
        let department = selected(code);
        info!(department.code = ?department, "Department changed");

        self.update(|state| {
            state.selection.department = department;
            state.selection.province = None;
            state.selection.district = None;
            state.provinces.clear();
            state.districts.clear();
            state.generations.districts += 1;
            state.clear_results();
        });

        self.load_provinces().await
    }

    #[instrument(skip(self, code))]
    pub async fn select_province(&self, code: impl Into<String>) -> Result<(), ClientError> {
        let province = selected(code);
        info!(province.code = ?province, "Province changed");

        self.update(|state| {
            state.selection.province = province;
            state.selection.district = None;
            state.districts.clear();
            state.clear_results();
        });

        self.load_districts().await
    }

    pub fn select_district(&self, code: impl Into<String>) {
        let district = selected(code);
        info!(district.code = ?district, "District changed");

        self.update(|state| {
            state.selection.district = district;
            state.clear_results();
        });
    }

    #[instrument(skip(self))]
    pub async fn select_modality(&self, modality: Option<Modality>) -> Result<(), ClientError> {
        info!(modality.code = ?modality.map(|m| m.code()), "Modality changed");

        self.update(|state| {
            state.selection.modality = modality;
            state.selection.level = None;
            state.levels.clear();
            state.clear_results();
        });

        self.load_levels().await
    }

    pub fn select_level(&self, code: impl Into<String>) {
        let level = selected(code);
        info!(level.code = ?level, "Level changed");

        self.update(|state| {
            state.selection.level = level;
            state.clear_results();
        });
    }

    /// Sets the free-text school name filter used by the next search.
    pub fn set_query(&self, query: impl Into<String>) {
        let query = query.into();
        self.update(|state| state.selection.query = query);
    }

    pub fn clear_query(&self) {
        self.update(|state| state.selection.query.clear());
    }

    /// Sets or clears the point sent along with the next search.
    pub fn set_coordinates(&self, coordinates: Option<Coordinates>) {
        self.update(|state| state.selection.coordinates = coordinates);
    }

    async fn load_provinces(&self) -> Result<(), ClientError> {
        let mut generation = 0;
        let mut department = None;
        self.update(|state| {
            state.generations.provinces += 1;
            generation = state.generations.provinces;
            department = state.selection.department.clone();
            if department.is_none() {
                state.provinces.clear();
                state.districts.clear();
            }
        });

        let Some(department) = department else {
            return Ok(());
        };

        let provinces = match self.locations.list_provinces(&department).await {
            Ok(provinces) => provinces,
            Err(err) => {
                self.record_lookup_failure(Lookup::Provinces, generation, &err);
                return Err(err);
            }
        };

        let received = provinces.len();
        let provinces: Vec<_> = provinces
            .into_iter()
            .filter(|p| p.belongs_to(&department))
            .collect();
        if provinces.len() != received {
            warn!(
                department.code = %department,
                dropped = received - provinces.len(),
                "Discarded provinces belonging to another department"
            );
        }

        let mut auto_select = None;
        let applied = self.state.send_if_modified(|state| {
            if state.generations.provinces != generation {
                return false;
            }
            if state.selection.province.is_none() {
                auto_select = provinces.first().map(|p| p.code.clone());
            }
            state.provinces = provinces;
            true
        });

        if !applied {
            debug!(department.code = %department, "Discarded stale province list");
            return Ok(());
        }

        match auto_select {
            Some(code) => {
                debug!(province.code = %code, "Auto-selecting first province");
                self.select_province(code).await
            }
            None => Ok(()),
        }
    }

    async fn load_districts(&self) -> Result<(), ClientError> {
        let mut generation = 0;
        let mut parents = None;
        self.update(|state| {
            state.generations.districts += 1;
            generation = state.generations.districts;
            let selection = &state.selection;
            parents = selection.department.clone().zip(selection.province.clone());
        });

        let Some((department, province)) = parents else {
            return Ok(());
        };

        let districts = match self.locations.list_districts(&department, &province).await {
            Ok(districts) => districts,
            Err(err) => {
                self.record_lookup_failure(Lookup::Districts, generation, &err);
                return Err(err);
            }
        };

        let received = districts.len();
        let districts: Vec<_> = districts
            .into_iter()
            .filter(|d| d.belongs_to(&department, &province))
            .collect();
        if districts.len() != received {
            warn!(
                department.code = %department,
                province.code = %province,
                dropped = received - districts.len(),
                "Discarded districts belonging to another province"
            );
        }

        let applied = self.state.send_if_modified(|state| {
            if state.generations.districts != generation {
                return false;
            }
            state.districts = districts;
            true
        });

        if !applied {
            debug!(province.code = %province, "Discarded stale district list");
        }
        Ok(())
    }

    async fn load_levels(&self) -> Result<(), ClientError> {
        let mut generation = 0;
        let mut modality = None;
        self.update(|state| {
            state.generations.levels += 1;
            generation = state.generations.levels;
            modality = state.selection.modality;
        });

        let Some(modality) = modality else {
            return Ok(());
        };

        let levels = match self.locations.list_levels(modality).await {
            Ok(levels) => levels,
            Err(err) => {
                self.record_lookup_failure(Lookup::Levels, generation, &err);
                return Err(err);
            }
        };

        let applied = self.state.send_if_modified(|state| {
            if state.generations.levels != generation {
                return false;
            }
            state.levels = levels;
            true
        });

        if !applied {
            debug!(modality.code = modality.code(), "Discarded stale level list");
        }
        Ok(())
    }

    /// Empties the list the failed lookup would have filled and surfaces the
    /// error, unless a newer lookup has since been issued.
    fn record_lookup_failure(&self, lookup: Lookup, generation: u64, err: &ClientError) {
        let applied = self.state.send_if_modified(|state| {
            let current = match lookup {
                Lookup::Provinces => state.generations.provinces,
                Lookup::Districts => state.generations.districts,
                Lookup::Levels => state.generations.levels,
            };
            if current != generation {
                return false;
            }
            match lookup {
                Lookup::Provinces => state.provinces.clear(),
                Lookup::Districts => state.districts.clear(),
                Lookup::Levels => state.levels.clear(),
            }
            state.error = Some(err.user_message());
            true
        });

        if applied {
            warn!(lookup = %lookup, error = %err, "Lookup failed");
        } else {
            debug!(lookup = %lookup, "Ignored failure of a stale lookup");
        }
    }
}
