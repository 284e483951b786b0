//! PromptKit - positional placeholder templates
//!
//! Fills `[Name]` placeholders in a fixed template from one comma-separated
//! input string. Values bind to placeholders by position, never by name;
//! missing values leave their placeholder in place and surplus values are
//! dropped. Rendering cannot fail.
//!
//! Kits (a template plus its placeholder order) are embedded in the binary
//! and can be overridden or extended with YAML files:
//!
//! ```text
//! ~/.config/promptkit/
//! ├── promptkit.yml        # config
//! └── kits/
//!     ├── greeting.yml
//!     └── ...
//! ```
//!
//! # Example
//!
//! ```
//! use promptkit::Template;
//!
//! let template = Template::real_estate_followup();
//! let text = template.render("Jane");
//! assert!(text.starts_with("Hello Jane,"));
//! assert!(text.contains("[Neighborhood]"));
//! ```

pub mod cli;
pub mod config;
pub mod embedded;
pub mod kit;
pub mod projects;
mod template;

pub use kit::{Kit, KitError, KitFile, KitLoader, KitSource, KitSummary};
pub use projects::{CATEGORIES, PROJECTS, Project, ProjectLinks};
pub use template::{Template, VALUE_SEPARATOR, split_values, token};
