//! Navigation
//!
//! - **section**: The closed set of dashboard sections
//! - **state**: Active section and sidebar collapse flag
//! - **error**: Error types

pub mod error;
pub mod section;
pub mod state;

pub use error::{NavError, NavResult};
pub use section::Section;
pub use state::{NavMsg, NavState};
