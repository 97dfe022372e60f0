//! Reflection Context
//!
//! Shared handle to the reflection store, provided via Leptos Context API.
//! The store is plain Rust state, so views track a revision counter that is
//! bumped after every mutation.

use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use superskills_core::domain::{PageSettings, Reflection, Superskill};
use superskills_core::{
    AutosaveTicket, JsonBinClient, ReflectionSession, ReflectionStore, RemoteConfig, SaveOutcome,
    StoreResult, AUTOSAVE_DELAY_MS,
};

use crate::store::{notify, ToastKind, UiStore};

pub type SharedStore = Rc<ReflectionStore<JsonBinClient>>;

/// App-wide reflection state provided via context
#[derive(Clone, Copy)]
pub struct ReflectionContext {
    store: StoredValue<SharedStore, LocalStorage>,
    config: StoredValue<RemoteConfig>,
    /// Bumped after each session change - read
    pub revision: ReadSignal<u32>,
    /// Bumped after each session change - write
    set_revision: WriteSignal<u32>,
    ui: UiStore,
}

impl ReflectionContext {
    pub fn new(config: RemoteConfig, ui: UiStore) -> Self {
        let store = Rc::new(ReflectionStore::new(JsonBinClient::new(config.clone())));
        let (revision, set_revision) = signal(0u32);
        Self {
            store: StoredValue::new_local(store),
            config: StoredValue::new(config),
            revision,
            set_revision,
            ui,
        }
    }

    /// Read session state, re-running the caller on changes
    pub fn with<R>(&self, f: impl FnOnce(&ReflectionSession) -> R) -> R {
        self.revision.track();
        self.store.with_value(|store| store.read(f))
    }

    /// Read session state without subscribing
    pub fn with_untracked<R>(&self, f: impl FnOnce(&ReflectionSession) -> R) -> R {
        self.store.with_value(|store| store.read(f))
    }

    pub fn document_id(&self) -> String {
        self.config.with_value(|config| config.document_id.clone())
    }

    fn shared(&self) -> SharedStore {
        self.store.get_value()
    }

    fn changed(&self) {
        self.set_revision.update(|v| *v = v.wrapping_add(1));
    }

    // ========================
    // Network actions
    // ========================

    pub fn load(&self) {
        let ctx = *self;
        let store = self.shared();
        spawn_local(async move {
            let pending = store.load();
            ctx.changed();
            notify(ctx.ui, ToastKind::Info, "Daten werden geladen...");
            let result = pending.await;
            ctx.changed();
            match result {
                Ok(()) => notify(ctx.ui, ToastKind::Success, "Daten erfolgreich geladen!"),
                Err(e) => notify(ctx.ui, ToastKind::Error, format!("Fehler beim Laden der Daten ({})", e)),
            }
        });
    }

    /// Manual save; `success` is shown once the write lands
    pub fn save(&self, success: &'static str) {
        let ctx = *self;
        let store = self.shared();
        spawn_local(async move {
            let pending = store.save();
            ctx.changed();
            let result = pending.await;
            ctx.changed();
            ctx.report_save(result, Some(success));
        });
    }

    fn schedule_autosave(&self, ticket: AutosaveTicket) {
        let ctx = *self;
        let store = self.shared();
        spawn_local(async move {
            let delay = TimeoutFuture::new(AUTOSAVE_DELAY_MS);
            if let Some(result) = store.autosave_after(ticket, delay, || ctx.changed()).await {
                ctx.changed();
                ctx.report_save(result, None);
            }
        });
    }

    fn report_save(&self, result: StoreResult<SaveOutcome>, success: Option<&'static str>) {
        if let Some((kind, message)) = save_toast(result, success) {
            notify(self.ui, kind, message);
        }
    }

    // ========================
    // Mutators
    // ========================

    fn after_edit(&self, ticket: Option<AutosaveTicket>) {
        self.changed();
        if let Some(ticket) = ticket {
            self.schedule_autosave(ticket);
        }
    }

    /// Replace a whole record
    pub fn update_reflection(&self, reflection: Reflection) -> StoreResult<()> {
        let ticket = self.store.with_value(|store| store.update_reflection(reflection))?;
        self.after_edit(ticket);
        Ok(())
    }

    pub fn apply_settings(&self, settings: PageSettings) {
        let ticket = self.store.with_value(|store| store.apply_settings(settings));
        self.after_edit(ticket);
    }

    pub fn set_autosave(&self, enabled: bool) {
        let ticket = self.store.with_value(|store| store.set_autosave(enabled));
        self.after_edit(ticket);
    }

    pub fn select(&self, topic: Option<Superskill>) {
        self.store.with_value(|store| store.select(topic));
        self.changed();
    }
}

/// Get the reflection context
pub fn use_reflections() -> ReflectionContext {
    expect_context::<ReflectionContext>()
}

/// Toast for a finished save; autosaves (`success` is `None`) only speak up on errors
fn save_toast(result: StoreResult<SaveOutcome>, success: Option<&'static str>) -> Option<(ToastKind, String)> {
    match (result, success) {
        (Ok(SaveOutcome::Saved(_)), Some(message)) => Some((ToastKind::Success, message.to_string())),
        (Ok(SaveOutcome::Queued), Some(_)) => Some((
            ToastKind::Info,
            "Speichern läuft bereits, Änderungen folgen.".to_string(),
        )),
        (Ok(_), None) => None,
        (Err(e), _) => Some((ToastKind::Error, format!("Fehler beim Speichern ({})", e))),
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use superskills_core::StoreError;

    use super::*;

    #[test]
    fn test_manual_save_toasts() {
        let saved = save_toast(Ok(SaveOutcome::Saved(Utc::now())), Some("Gespeichert"));
        assert_eq!(saved, Some((ToastKind::Success, "Gespeichert".to_string())));

        let queued = save_toast(Ok(SaveOutcome::Queued), Some("Gespeichert"));
        assert_eq!(queued.map(|(kind, _)| kind), Some(ToastKind::Info));
    }

    #[test]
    fn test_autosave_stays_quiet_unless_it_fails() {
        assert_eq!(save_toast(Ok(SaveOutcome::Saved(Utc::now())), None), None);
        assert_eq!(save_toast(Ok(SaveOutcome::Queued), None), None);

        let failed = save_toast(Err(StoreError::SaveFailure("503".to_string())), None);
        assert_eq!(failed.map(|(kind, _)| kind), Some(ToastKind::Error));
    }
}
