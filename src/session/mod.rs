//! Search session: cascading filters plus search and pagination.
//!
//! A [`SearchSession`] owns the one mutable [`SearchState`] of a client. Its
//! operations take `&self` and may run concurrently; every transition is
//! published through a `watch` channel so front-ends subscribe to state
//! instead of reading shared fields.
//!
//! Each remote operation (province, district and level loads, and the school
//! search) is tagged with a generation. Starting the operation again, or
//! clearing the data it would fill, advances the generation; answers issued
//! under an older generation are discarded.
//!
//! # Example
//!
//! ```ignore
//! let session = SearchSession::from_config(&ClientConfig::from_env())?;
//! session.select_department("15").await?;   // auto-selects the first province
//! session.select_district("01");
//! session.set_query("kepler");
//! session.search().await?;
//! println!("{}", session.snapshot().message.unwrap_or_default());
//! ```

mod filters;
mod search;

use std::sync::Arc;

use tokio::sync::watch;

use identicole_client::{LocationApi, LocationClient, RemoteClient, SearchApi, SearchClient};
use identicole_config::ClientConfig;
use identicole_core::{ClientError, clamp_page_size};
use identicole_models::School;

use crate::state::{SearchState, selected};

pub use search::SearchOutcome;

/// Defaults a session starts from and returns to on reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    pub default_department: String,
    pub page_size: u32,
    pub country_label: String,
}

impl From<&ClientConfig> for SessionOptions {
    fn from(config: &ClientConfig) -> Self {
        Self {
            default_department: config.default_department.clone(),
            page_size: clamp_page_size(config.page_size),
            country_label: config.country_label.clone(),
        }
    }
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self::from(&ClientConfig::default())
    }
}

pub struct SearchSession {
    locations: Arc<dyn LocationApi>,
    schools: Arc<dyn SearchApi>,
    options: SessionOptions,
    state: watch::Sender<SearchState>,
}

impl SearchSession {
    /// A page size of 0 in `options` is raised to 1.
    pub fn new(
        locations: Arc<dyn LocationApi>,
        schools: Arc<dyn SearchApi>,
        mut options: SessionOptions,
    ) -> Self {
        options.page_size = options.page_size.max(1);
        let initial = SearchState::new(
            selected(options.default_department.as_str()),
            options.page_size,
        );
        let (state, _) = watch::channel(initial);

        Self {
            locations,
            schools,
            options,
            state,
        }
    }

    /// Session talking to the proxy described by `config`.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        let remote = RemoteClient::from_config(config)?;
        Ok(Self::new(
            Arc::new(LocationClient::new(remote.clone())),
            Arc::new(SearchClient::new(remote)),
            SessionOptions::from(config),
        ))
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Current state.
    pub fn snapshot(&self) -> SearchState {
        self.state.borrow().clone()
    }

    /// Receiver notified after every state transition.
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state.subscribe()
    }

    pub fn total_pages(&self) -> u32 {
        self.state.borrow().total_pages()
    }

    /// Records returned by the last search.
    pub fn filtered_schools(&self) -> Vec<School> {
        self.state.borrow().schools.clone()
    }

    /// The `ubicacionTexto` the next search will send.
    pub fn location_description(&self) -> String {
        self.state
            .borrow()
            .location_description(&self.options.country_label)
    }

    fn update<F>(&self, modify: F)
    where
        F: FnOnce(&mut SearchState),
    {
        self.state.send_modify(modify);
    }
}
