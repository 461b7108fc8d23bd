pub mod config;
pub mod logging;

// Engine modules, dependency order: leaves first.
pub mod authority;
pub mod canonical;
pub mod error;
pub mod pattern;
pub mod template;

pub use authority::{split, Split};
pub use canonical::CanonicalPath;
pub use error::{FormatError, ParamScope};
pub use template::{param_map, ParamMap, UrlTemplateFormatter, ValidationMode};
