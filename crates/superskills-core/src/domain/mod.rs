//! Domain Layer
//!
//! Reflection records, the fixed topic list and the stored document shape.
//! No I/O happens here.

mod superskill;
mod reflection;
mod field;
mod settings;
mod document;
mod lookup;

pub use superskill::Superskill;
pub use reflection::{Anwendung, Ausgangslage, Bewertung, Progress, Reflection, Transfer};
pub use field::{ReflectionField, Section};
pub use settings::{PageSettings, SettingField, DEFAULT_PAGE_DESCRIPTION, DEFAULT_PAGE_TITLE};
pub use document::{save_timestamp, Document, Snapshot, CURRENT_VERSION};
pub use lookup::Lookup;
