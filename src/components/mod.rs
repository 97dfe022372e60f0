//! UI Components
//!
//! Pages and the shared pieces they are built from.

mod layout;
mod lightbox;
mod loading_overlay;
mod toaster;
mod section_preview;
mod map_view;
mod overview_page;
mod reflection_editor;
mod reflection_page;
mod settings_page;

pub use layout::{saved_at_label, Layout};
pub use lightbox::Lightbox;
pub use loading_overlay::LoadingOverlay;
pub use toaster::Toaster;
pub use section_preview::{ImageDescriptionCard, SectionPreview};
pub use map_view::MapView;
pub use overview_page::OverviewPage;
pub use reflection_editor::ReflectionEditor;
pub use reflection_page::ReflectionPage;
pub use settings_page::SettingsPage;
