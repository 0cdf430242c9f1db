//! # Identicole Core
//!
//! Core types shared by every Identicole crate.
//!
//! - [`errors`]: the client error taxonomy and the user-visible messages
//!   derived from it
//! - [`pagination`]: zero-based page window arithmetic used by the search
//!   controller
//!
//! # Example
//!
//! ```ignore
//! use identicole_core::{ClientError, PageWindow};
//!
//! let window = PageWindow::new(25, 0, 12);
//! assert_eq!(window.total_pages(), 3);
//!
//! let err = ClientError::incomplete_selection("district");
//! println!("{}", err.user_message());
//! ```

pub mod errors;
pub mod pagination;

// Re-export commonly used types at crate root
pub use errors::{ClientError, Lookup};
pub use pagination::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageWindow, clamp_page_size};
