//! Module content model
//!
//! Holds the source text of one module together with the interface parsed
//! from it, and keeps the two consistent across edits.
//!
//! ## Edit flow
//!
//! ```text
//! set_content(text)
//!     ↓  unchanged and valid? → done, no notification
//! store text, mark invalid
//!     ↓
//! SyntaxValidator (external, optionally bounded by a timeout)
//!     ↓
//! parse_module → ModuleInterface
//!     ↓
//! name checks (grammar, keywords, ModuleNamespace)
//!     ↓
//! reconcile parameters through the AttributeBinder
//!     ↓
//! mark valid
//!     ↓  success or failure
//! notify ModelEvent::ContentSet
//! ```
//!
//! The external collaborators ([`SyntaxValidator`], [`ModuleNamespace`],
//! [`AttributeBinder`]) are injected through a [`ContentContext`].

mod attributes;
mod config;
mod content;
mod error;
mod events;
mod namespace;
mod precheck;
mod reconcile;
mod rename;
mod template;

pub use attributes::{
    ATTRIBUTE_PREFIX, AttributeBinder, AttributeHandle, AttributeRegistry, ParameterAttribute,
};
pub use config::{ContentConfig, DEFAULT_PRECHECK_TIMEOUT};
pub use content::{Appearance, ContentContext, ModuleContent};
pub use error::{ContentError, Severity};
pub use events::{EventBus, EventEmitter, ListenerId, ModelEvent};
pub use namespace::{ModuleNames, ModuleNamespace};
pub use precheck::{AcceptAll, SyntaxValidator, Validation};
pub use reconcile::{Reconciled, reconcile};
pub use rename::rename_module_text;
pub use template::{MODULE_NAME_PLACEHOLDER, render_template};
