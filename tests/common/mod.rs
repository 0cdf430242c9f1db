use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use fake::Fake;
use fake::faker::address::en::{CityName, StreetName};
use fake::faker::name::en::LastName;
use tokio::sync::oneshot;

use identicole::identicole_client::{LocationApi, SearchApi};
use identicole::identicole_core::{ClientError, Lookup};
use identicole::identicole_models::{
    District, Level, Modality, Province, School, SearchCriteria, SearchResult,
};
use identicole::{SearchSession, SessionOptions};

/// Backend operations the fake can fail or hold.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Provinces,
    Districts,
    Levels,
    Search,
}

/// A request the fake received, in arrival order.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Provinces(String),
    Districts(String, String),
    Levels(Modality),
    Search(SearchCriteria),
}

/// In-memory stand-in for the proxy.
///
/// Serves whatever reference data and schools it was seeded with, records
/// every call, and can fail an endpoint or hold its next answer until the
/// test releases it.
#[derive(Default)]
pub struct FakeBackend {
    provinces: Mutex<HashMap<String, Vec<Province>>>,
    districts: Mutex<HashMap<(String, String), Vec<District>>>,
    levels: Mutex<HashMap<Modality, Vec<Level>>>,
    schools: Mutex<Vec<School>>,
    page_size_override: Mutex<Option<u32>>,
    failing: Mutex<HashSet<Endpoint>>,
    gates: Mutex<HashMap<Endpoint, VecDeque<oneshot::Receiver<()>>>>,
    calls: Mutex<Vec<Call>>,
}

#[allow(dead_code)]
impl FakeBackend {
    /// Lima (15) and Amazonas (01) with a couple of provinces and districts,
    /// plus levels for the regular and alternative modalities.
    pub fn peru() -> Arc<Self> {
        let backend = Self::default();
        backend.add_provinces(
            "15",
            vec![province("15", "01", "LIMA"), province("15", "02", "BARRANCA")],
        );
        backend.add_provinces("01", vec![province("01", "01", "CHACHAPOYAS")]);
        backend.add_districts(
            "15",
            "01",
            vec![district("15", "01", "01", "LIMA"), district("15", "01", "02", "ANCON")],
        );
        backend.add_districts("15", "02", vec![district("15", "02", "01", "BARRANCA")]);
        backend.add_districts("01", "01", vec![district("01", "01", "01", "CHACHAPOYAS")]);
        backend.add_levels(
            Modality::Regular,
            vec![
                level("A2", "Inicial - Jardín"),
                level("B0", "Primaria"),
                level("F0", "Secundaria"),
            ],
        );
        backend.add_levels(
            Modality::Alternative,
            vec![level("D1", "Básica Alternativa-Inicial e Intermedio")],
        );
        Arc::new(backend)
    }

    pub fn add_provinces(&self, department: &str, provinces: Vec<Province>) {
        self.provinces
            .lock()
            .unwrap()
            .insert(department.to_string(), provinces);
    }

    pub fn add_districts(&self, department: &str, province: &str, districts: Vec<District>) {
        self.districts
            .lock()
            .unwrap()
            .insert((department.to_string(), province.to_string()), districts);
    }

    pub fn add_levels(&self, modality: Modality, levels: Vec<Level>) {
        self.levels.lock().unwrap().insert(modality, levels);
    }

    pub fn set_schools(&self, schools: Vec<School>) {
        *self.schools.lock().unwrap() = schools;
    }

    /// Answers searches with `page_size` instead of the requested one, the
    /// way a proxy with its own paging would. `Some(0)` reports a zero page
    /// size while still paging by the requested size.
    pub fn set_page_size_override(&self, page_size: Option<u32>) {
        *self.page_size_override.lock().unwrap() = page_size;
    }

    pub fn fail(&self, endpoint: Endpoint) {
        self.failing.lock().unwrap().insert(endpoint);
    }

    pub fn recover(&self, endpoint: Endpoint) {
        self.failing.lock().unwrap().remove(&endpoint);
    }

    /// Holds the next call to `endpoint` until the returned sender fires or
    /// is dropped.
    pub fn hold_next(&self, endpoint: Endpoint) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates
            .lock()
            .unwrap()
            .entry(endpoint)
            .or_default()
            .push_back(rx);
        tx
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn search_calls(&self) -> Vec<SearchCriteria> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Search(criteria) => Some(criteria),
                _ => None,
            })
            .collect()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    async fn enter(&self, endpoint: Endpoint, call: Call) -> bool {
        self.calls.lock().unwrap().push(call);

        let gate = self
            .gates
            .lock()
            .unwrap()
            .get_mut(&endpoint)
            .and_then(VecDeque::pop_front);
        if let Some(gate) = gate {
            let _ = gate.await;
        }

        self.failing.lock().unwrap().contains(&endpoint)
    }
}

fn offline() -> anyhow::Error {
    anyhow::anyhow!("connection refused")
}

#[async_trait]
impl LocationApi for FakeBackend {
    async fn list_provinces(&self, department_code: &str) -> Result<Vec<Province>, ClientError> {
        if self
            .enter(Endpoint::Provinces, Call::Provinces(department_code.to_string()))
            .await
        {
            return Err(ClientError::lookup(Lookup::Provinces, offline()));
        }
        Ok(self
            .provinces
            .lock()
            .unwrap()
            .get(department_code)
            .cloned()
            .unwrap_or_default())
    }

    async fn list_districts(
        &self,
        department_code: &str,
        province_code: &str,
    ) -> Result<Vec<District>, ClientError> {
        let key = (department_code.to_string(), province_code.to_string());
        if self
            .enter(Endpoint::Districts, Call::Districts(key.0.clone(), key.1.clone()))
            .await
        {
            return Err(ClientError::lookup(Lookup::Districts, offline()));
        }
        Ok(self
            .districts
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .unwrap_or_default())
    }

    async fn list_levels(&self, modality: Modality) -> Result<Vec<Level>, ClientError> {
        if self.enter(Endpoint::Levels, Call::Levels(modality)).await {
            return Err(ClientError::lookup(Lookup::Levels, offline()));
        }
        Ok(self
            .levels
            .lock()
            .unwrap()
            .get(&modality)
            .cloned()
            .unwrap_or_default())
    }
}

#[async_trait]
impl SearchApi for FakeBackend {
    /// Filters the seeded schools by name and answers one page of them.
    async fn search_schools(&self, criteria: &SearchCriteria) -> Result<SearchResult, ClientError> {
        if self
            .enter(Endpoint::Search, Call::Search(criteria.clone()))
            .await
        {
            return Err(ClientError::search(offline()));
        }

        let query = criteria.query.to_lowercase();
        let matching: Vec<School> = self
            .schools
            .lock()
            .unwrap()
            .iter()
            .filter(|school| query.is_empty() || school.name.to_lowercase().contains(&query))
            .cloned()
            .collect();

        let answered_size = self
            .page_size_override
            .lock()
            .unwrap()
            .unwrap_or(criteria.page_size);
        let paging_size = match answered_size {
            0 => criteria.page_size,
            size => size,
        } as usize;

        let start = (criteria.page as usize * paging_size).min(matching.len());
        let end = (start + paging_size).min(matching.len());

        Ok(SearchResult {
            total: matching.len() as u64,
            page: criteria.page,
            page_size: answered_size,
            results: matching[start..end].to_vec(),
        })
    }
}

/// Session over `backend` starting in department `01` with 12 results per
/// page.
#[allow(dead_code)]
pub fn session(backend: &Arc<FakeBackend>) -> SearchSession {
    session_with(backend, SessionOptions::default())
}

#[allow(dead_code)]
pub fn session_with(backend: &Arc<FakeBackend>, options: SessionOptions) -> SearchSession {
    SearchSession::new(backend.clone(), backend.clone(), options)
}

#[allow(dead_code)]
pub fn province(department: &str, code: &str, name: &str) -> Province {
    Province {
        department_code: department.to_string(),
        code: code.to_string(),
        district_code: None,
        name: name.to_string(),
    }
}

#[allow(dead_code)]
pub fn district(department: &str, province: &str, code: &str, name: &str) -> District {
    District {
        department_code: department.to_string(),
        province_code: province.to_string(),
        code: code.to_string(),
        name: name.to_string(),
    }
}

#[allow(dead_code)]
pub fn level(code: &str, name: &str) -> Level {
    Level {
        code: code.to_string(),
        name: name.to_string(),
    }
}

/// A school with only the given name set.
#[allow(dead_code)]
pub fn school(name: &str) -> School {
    School {
        name: name.to_string(),
        ..Default::default()
    }
}

/// `count` schools with generated names and addresses.
#[allow(dead_code)]
pub fn fake_schools(count: usize) -> Vec<School> {
    (0..count)
        .map(|i| {
            let city: String = CityName().fake();
            let surname: String = LastName().fake();
            let street: String = StreetName().fake();
            School {
                modular_code: Some(format!("{:07}", 1_000_000 + i)),
                name: format!("I.E. {} {}", surname, i),
                address: Some(format!("{} {}", street, (1..999).fake::<u32>())),
                management: Some("Privada".to_string()),
                district: Some(city),
                ..Default::default()
            }
        })
        .collect()
}
