//! Province, district and level lookups.

use async_trait::async_trait;
use tracing::{info, instrument, warn};

use identicole_core::{ClientError, Lookup};
use identicole_models::{District, Level, Modality, Province};

use crate::remote::{RemoteClient, RemoteError};

/// Reference-data lookups. Each call is independent and retains nothing.
#[async_trait]
pub trait LocationApi: Send + Sync {
    /// Provinces of one department.
    async fn list_provinces(&self, department_code: &str) -> Result<Vec<Province>, ClientError>;

    /// Districts of one province.
    async fn list_districts(
        &self,
        department_code: &str,
        province_code: &str,
    ) -> Result<Vec<District>, ClientError>;

    /// Levels offered under one modality.
    async fn list_levels(&self, modality: Modality) -> Result<Vec<Level>, ClientError>;
}

/// [`LocationApi`] backed by the proxy's envelope endpoints:
///
/// - `POST /api/provincia/{department}`
/// - `POST /api/distrito/{department}/{province}`
/// - `POST /BuscaNivel?modalidad={modality}`
#[derive(Debug, Clone)]
pub struct LocationClient {
    remote: RemoteClient,
}

impl LocationClient {
    pub fn new(remote: RemoteClient) -> Self {
        Self { remote }
    }
}

fn lookup_failed(lookup: Lookup, err: RemoteError) -> ClientError {
    warn!(lookup = %lookup, error = %err, "Location lookup failed");
    ClientError::lookup(lookup, err)
}

#[async_trait]
impl LocationApi for LocationClient {
    #[instrument(skip(self), fields(lookup = "provinces"))]
    async fn list_provinces(&self, department_code: &str) -> Result<Vec<Province>, ClientError> {
        let url = self
            .remote
            .endpoint(&["api", "provincia", department_code])
            .map_err(|e| lookup_failed(Lookup::Provinces, e))?;

        let provinces: Vec<Province> = self
            .remote
            .post_envelope(url, &[])
            .await
            .map_err(|e| lookup_failed(Lookup::Provinces, e))?;

        info!(count = provinces.len(), "Provinces loaded");
        Ok(provinces)
    }

    #[instrument(skip(self), fields(lookup = "districts"))]
    async fn list_districts(
        &self,
        department_code: &str,
        province_code: &str,
    ) -> Result<Vec<District>, ClientError> {
        let url = self
            .remote
            .endpoint(&["api", "distrito", department_code, province_code])
            .map_err(|e| lookup_failed(Lookup::Districts, e))?;

        let districts: Vec<District> = self
            .remote
            .post_envelope(url, &[])
            .await
            .map_err(|e| lookup_failed(Lookup::Districts, e))?;

        info!(count = districts.len(), "Districts loaded");
        Ok(districts)
    }

    #[instrument(skip(self), fields(lookup = "levels", modality.code = modality.code()))]
    async fn list_levels(&self, modality: Modality) -> Result<Vec<Level>, ClientError> {
        let url = self
            .remote
            .endpoint(&["BuscaNivel"])
            .map_err(|e| lookup_failed(Lookup::Levels, e))?;

        let levels: Vec<Level> = self
            .remote
            .post_envelope(url, &[("modalidad", modality.code())])
            .await
            .map_err(|e| lookup_failed(Lookup::Levels, e))?;

        info!(count = levels.len(), "Levels loaded");
        Ok(levels)
    }
}
