//! # Identicole Models
//!
//! Domain models and wire shapes for the Identicole school search client.
//!
//! # Modules
//!
//! - [`ubigeo`]: the department catalog plus provinces and districts
//! - [`modality`]: educational modalities and the levels scoped to them
//! - [`schools`]: school records, search criteria and search results
//!
//! Field names follow the proxy's JSON (`coddpto`, `codprov`, `nombre`, ...)
//! through serde renames; Rust-side names are English.
//!
//! # Example
//!
//! ```ignore
//! use identicole_models::{Modality, department_label};
//!
//! assert_eq!(department_label("15"), Some("LIMA"));
//! assert_eq!(Modality::from_code("03"), Some(Modality::Alternative));
//! ```

pub mod modality;
pub mod schools;
pub mod ubigeo;

// Re-export commonly used types at crate root for convenience
pub use modality::{Level, Modality};
pub use schools::{Coordinates, School, SearchCriteria, SearchResult};
pub use ubigeo::{DEPARTMENTS, Department, District, Province, department_label};
