//! UI State Store
//!
//! View-only state in a reactive_stores store: which page is shown, the
//! theme, the autosave switch and pending toasts. Reflection data lives in
//! the [`crate::context::ReflectionContext`].

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::preferences::Theme;

/// Toasts disappear after this long
pub const TOAST_DURATION_MS: u32 = 4000;

/// Page currently shown in the main area
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Map,
    Overview,
    /// Editor for the record with this superskill name
    Reflection(String),
    Settings,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Info => "toast toast-info",
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Global UI state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    pub view: View,
    pub theme: Theme,
    /// Mirrors the device preference; the session holds the effective flag
    pub autosave: bool,
    pub toasts: Vec<Toast>,
    pub next_toast_id: u32,
    /// Story panel on the map page
    pub story_open: bool,
}

impl UiState {
    pub fn new(theme: Theme, autosave: bool) -> Self {
        Self {
            theme,
            autosave,
            story_open: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

/// Get the UI store from context
pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn navigate(store: &UiStore, view: View) {
    store.view().set(view);
}

/// Append a toast and return its id
pub fn push_toast(store: &UiStore, kind: ToastKind, message: impl Into<String>) -> u32 {
    let id = store.next_toast_id().get_untracked();
    store.next_toast_id().set(id.wrapping_add(1));
    store.toasts().write().push(Toast {
        id,
        kind,
        message: message.into(),
    });
    id
}

pub fn dismiss_toast(store: &UiStore, id: u32) {
    store.toasts().write().retain(|toast| toast.id != id);
}

/// Show a toast and dismiss it after [`TOAST_DURATION_MS`]
pub fn notify(store: UiStore, kind: ToastKind, message: impl Into<String>) {
    let id = push_toast(&store, kind, message);
    spawn_local(async move {
        TimeoutFuture::new(TOAST_DURATION_MS).await;
        dismiss_toast(&store, id);
    });
}
