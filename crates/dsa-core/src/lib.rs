//! # dsa-core - Core Domain Types
//!
//! Foundation crate for DSA Guide. Provides the static content tree types, the
//! [`Section`] trait every tutorial page implements, error handling and
//! logging setup.
//!
//! This crate has **zero internal dependencies**.
//!
//! ## Public API
//!
//! ### Content (`content`)
//! - [`Block`] - One node of a section's static content tree
//! - [`ProblemEntry`] - A tutorial problem with code, explanation and optional approach
//! - [`CodeContent`] - Single snippet or ordered per-language snippets
//! - [`Difficulty`] - Easy, Medium or Hard badge
//!
//! ### Sections (`section`)
//! - [`Section`] - Closed set of tabs on a page
//! - [`sections!`] - Declares a section enum and its `Section` impl
//! - [`SectionInfo`] - Type-erased id/label pair
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! ```rust
//! use dsa_core::prelude::*;
//! ```

pub mod content;
pub mod error;
#[cfg(feature = "file-logging")]
pub mod logging;
pub mod section;

/// Prelude for common imports used throughout all DSA Guide crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use content::{Approach, Block, CalloutKind, Card, CodeContent, Difficulty, ProblemEntry};
pub use error::{Error, Result, ResultExt};
pub use section::{Section, SectionInfo};
