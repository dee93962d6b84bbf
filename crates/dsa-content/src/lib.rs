//! dsa-content - Static tutorial pages for DSA Guide
//!
//! One module per page. Each declares its section enum with
//! [`dsa_core::sections!`] and one content function per section. Code
//! snippets are display strings only; nothing here is compiled or run.

pub mod frameworks;
pub mod page;
pub mod recursion;
pub mod strings;
pub mod trees;

pub use frameworks::FrameworksSection;
pub use page::Page;
pub use recursion::RecursionSection;
pub use strings::StringsSection;
pub use trees::TreesSection;
