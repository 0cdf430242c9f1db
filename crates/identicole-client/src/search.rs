//! School search.

use async_trait::async_trait;
use tracing::{error, info, instrument, warn};

use identicole_core::ClientError;
use identicole_models::{SearchCriteria, SearchResult};

use crate::remote::RemoteClient;

/// The school search. Stateless; every call carries its full criteria.
#[async_trait]
pub trait SearchApi: Send + Sync {
    async fn search_schools(&self, criteria: &SearchCriteria) -> Result<SearchResult, ClientError>;
}

/// [`SearchApi`] backed by `POST /colegios`.
#[derive(Debug, Clone)]
pub struct SearchClient {
    remote: RemoteClient,
}

impl SearchClient {
    pub fn new(remote: RemoteClient) -> Self {
        Self { remote }
    }
}

#[async_trait]
impl SearchApi for SearchClient {
    #[instrument(
        skip(self, criteria),
        fields(
            department.code = %criteria.department_code,
            province.code = %criteria.province_code,
            district.code = %criteria.district_code,
            search.page = criteria.page,
            search.page_size = criteria.page_size
        )
    )]
    async fn search_schools(&self, criteria: &SearchCriteria) -> Result<SearchResult, ClientError> {
        let url = self
            .remote
            .endpoint(&["colegios"])
            .map_err(ClientError::search)?;

        let result: SearchResult = self
            .remote
            .post_json(url, criteria)
            .await
            .map_err(|e| {
                error!(error = %e, "School search failed");
                ClientError::search(e)
            })?;

        if result.results.len() > result.page_size as usize {
            warn!(
                returned = result.results.len(),
                page_size = result.page_size,
                "Proxy returned more records than the page size"
            );
        }

        info!(
            total = result.total,
            returned = result.results.len(),
            page = result.page,
            "School search completed"
        );

        Ok(result)
    }
}
