//! Search and page navigation.

use tracing::{debug, info, instrument, warn};
use validator::Validate;

use identicole_core::ClientError;
use identicole_models::{SearchCriteria, SearchResult};

use super::SearchSession;

/// What happened to a search that was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The answer was applied to the session state.
    Completed { shown: usize, total: u64 },
    /// A newer search or a filter change made the answer obsolete; it was
    /// discarded.
    Superseded,
}

impl SearchSession {
    /// Runs a fresh search from page 0 with the current filters.
    ///
    /// # Errors
    ///
    /// - `ClientError::IncompleteSelection` when department, province or
    ///   district is missing; no request is issued
    /// - `ClientError::InvalidConfig` when the criteria fail validation for
    ///   any other reason; no request is issued
    /// - `ClientError::SearchFailed` when the proxy cannot be reached or
    ///   answers with an error
    ///
    /// Either way the user-visible message is also stored in the state.
    pub async fn search(&self) -> Result<SearchOutcome, ClientError> {
        self.run_search(0).await
    }

    /// Re-issues the search for `page`. Returns `Ok(None)` without issuing a
    /// request when `page` is outside `[0, total_pages)`.
    pub async fn go_to_page(&self, page: u32) -> Result<Option<SearchOutcome>, ClientError> {
        let window = self.state.borrow().window();
        if !window.contains(page) {
            debug!(
                search.page = page,
                total_pages = window.total_pages(),
                "Ignoring navigation outside the result set"
            );
            return Ok(None);
        }

        self.run_search(page).await.map(Some)
    }

    /// Moves one page forward; `Ok(None)` on the last page.
    pub async fn next_page(&self) -> Result<Option<SearchOutcome>, ClientError> {
        let window = self.state.borrow().window();
        if !window.has_next() {
            return Ok(None);
        }
        self.run_search(window.page + 1).await.map(Some)
    }

    /// Moves one page back; `Ok(None)` on the first page.
    pub async fn previous_page(&self) -> Result<Option<SearchOutcome>, ClientError> {
        let window = self.state.borrow().window();
        if !window.has_previous() {
            return Ok(None);
        }
        self.run_search(window.page - 1).await.map(Some)
    }

    #[instrument(skip(self), fields(search.page = page))]
    async fn run_search(&self, page: u32) -> Result<SearchOutcome, ClientError> {
        let country_label = self.options.country_label.as_str();
        let mut generation = 0;
        let mut criteria = SearchCriteria::default();
        let mut failure = None;

        self.update(|state| {
            state.message = None;
            state.error = None;
            state.schools.clear();
            state.page = page;
            state.generations.search += 1;
            generation = state.generations.search;

            criteria = state.criteria(page, country_label);
            failure = match state.selection.missing_location() {
                Some(missing) => Some(ClientError::incomplete_selection(missing)),
                None => criteria.validate().err().map(|errors| {
                    match SearchCriteria::missing_field(&errors) {
                        Some(missing) => ClientError::incomplete_selection(missing),
                        None => ClientError::InvalidConfig(format!(
                            "search criteria rejected: {errors}"
                        )),
                    }
                }),
            };

            if let Some(err) = &failure {
                state.error = Some(err.user_message());
            }
        });

        if let Some(err) = failure {
            warn!(error = %err, "Search not issued");
            return Err(err);
        }

        info!(
            department.code = %criteria.department_code,
            province.code = %criteria.province_code,
            district.code = %criteria.district_code,
            search.query = %criteria.query,
            location = %criteria.location_description,
            "Searching schools"
        );

        let result = self.schools.search_schools(&criteria).await;
        self.apply_search(generation, result)
    }

    fn apply_search(
        &self,
        generation: u64,
        result: Result<SearchResult, ClientError>,
    ) -> Result<SearchOutcome, ClientError> {
        match result {
            Ok(result) => {
                let mut outcome = SearchOutcome::Superseded;
                self.state.send_if_modified(|state| {
                    if state.generations.search != generation {
                        return false;
                    }
                    state.total = result.total;
                    state.page = result.page;
                    if result.page_size > 0 {
                        state.page_size = result.page_size;
                    } else {
                        warn!(
                            page_size = state.page_size,
                            "Proxy answered without a page size, keeping the current one"
                        );
                    }
                    state.schools = result.results;
                    state.message = Some(state.status_message());
                    outcome = SearchOutcome::Completed {
                        shown: state.schools.len(),
                        total: state.total,
                    };
                    true
                });

                if outcome == SearchOutcome::Superseded {
                    debug!("Discarded stale search results");
                }
                Ok(outcome)
            }
            Err(err) => {
                let applied = self.state.send_if_modified(|state| {
                    if state.generations.search != generation {
                        return false;
                    }
                    state.schools.clear();
                    state.error = Some(err.user_message());
                    true
                });

                if !applied {
                    debug!("Ignored failure of a stale search");
                }
                Err(err)
            }
        }
    }
}
