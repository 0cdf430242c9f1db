//! # Identicole
//!
//! A client for searching Peruvian schools (colegios) through the Identicole
//! proxy, by administrative location, educational modality and level.
//!
//! ## Overview
//!
//! - **Cascading filters**: department → province → district and
//!   modality → level, each parent change clearing its descendants
//! - **Search and pagination**: offset pagination over the proxy's
//!   `/colegios` endpoint with a derived status line
//! - **Observable state**: one immutable [`SearchState`] snapshot per
//!   transition, delivered over a `tokio::sync::watch` channel
//! - **Stale-response protection**: per-operation generations discard answers
//!   that arrive after a newer request or a filter change
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── identicole-core/           # ClientError, PageWindow
//! ├── identicole-config/         # ClientConfig from environment
//! ├── identicole-token/          # token-array envelope decoder
//! ├── identicole-models/         # ubigeo, modality, school models
//! ├── identicole-client/         # LocationApi / SearchApi over reqwest
//! └── identicole-observability/  # tracing setup
//! src/
//! ├── session/                   # SearchSession (filters, search, paging)
//! ├── state.rs                   # SearchState snapshot
//! ├── cli/                       # command handlers and interactive mode
//! └── main.rs                    # `identicole` binary
//! ```
//!
//! ## Remote Contract
//!
//! | Endpoint | Answer |
//! |----------|--------|
//! | `POST /api/provincia/{dpto}` | `["<token>"]`, payload `Province[]` |
//! | `POST /api/distrito/{dpto}/{prov}` | `["<token>"]`, payload `District[]` |
//! | `POST /BuscaNivel?modalidad={code}` | `["<token>"]`, payload `Level[]` |
//! | `POST /colegios` | `{total, page, pageSize, resultados}` |
//!
//! Tokens are `<ignored>.<base64 JSON array>.<ignored>`; signatures are never
//! checked.
//!
//! ## Quick Start
//!
//! ```bash
//! IDENTICOLE_BASE_URL=https://indenticole-proxy.onrender.com
//! identicole search --department 15 --province 01 --district 01 --query kepler
//! identicole interactive
//! ```

pub mod session;
pub mod state;

pub use session::{SearchOutcome, SearchSession, SessionOptions};
pub use state::{SearchState, Selection};

// Re-export workspace crates for convenience
pub use identicole_client;
pub use identicole_config;
pub use identicole_core;
pub use identicole_models;
