//! Reflection Session
//!
//! In-memory state behind the whole UI: the current snapshot, the last
//! confirmed-saved snapshot, the flags derived from them and the autosave
//! debounce. Everything here is synchronous; [`crate::store::ReflectionStore`]
//! calls into it around the network awaits.

use chrono::{DateTime, Utc};

use crate::domain::{
    save_timestamp, Document, Lookup, PageSettings, Progress, Reflection, ReflectionField,
    SettingField, Snapshot, Superskill,
};
use crate::error::{StoreError, StoreResult};

/// Handle for one armed autosave timer
///
/// Only the most recently issued ticket can be claimed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutosaveTicket(u64);

/// Debounce bookkeeping: at most one pending timer at a time
#[derive(Debug, Default)]
struct Debouncer {
    generation: u64,
    armed: bool,
}

impl Debouncer {
    /// Replace any pending timer with a new one
    fn arm(&mut self) -> AutosaveTicket {
        self.generation += 1;
        self.armed = true;
        AutosaveTicket(self.generation)
    }

    fn cancel(&mut self) {
        self.armed = false;
    }

    /// Consume the pending timer if `ticket` is the current one
    fn claim(&mut self, ticket: AutosaveTicket) -> bool {
        if self.armed && ticket.0 == self.generation {
            self.armed = false;
            true
        } else {
            false
        }
    }
}

/// A write in flight: the outgoing document and the snapshot it was built from
#[derive(Debug, Clone)]
pub struct SaveRequest {
    pub document: Document,
    pub timestamp: DateTime<Utc>,
    snapshot: Snapshot,
}

#[derive(Debug, Default)]
pub struct ReflectionSession {
    current: Snapshot,
    /// `None` until the first load or bootstrap
    saved: Option<Snapshot>,
    is_loading: bool,
    /// Doubles as the single-flight guard
    is_saving: bool,
    /// A save was requested while one was in flight
    save_queued: bool,
    has_unsaved_changes: bool,
    last_saved: Option<DateTime<Utc>>,
    autosave_enabled: bool,
    selected: Option<Superskill>,
    debouncer: Debouncer,
}

impl ReflectionSession {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================
    // Load
    // ========================

    pub fn begin_load(&mut self) {
        self.is_loading = true;
        self.debouncer.cancel();
    }

    /// Apply a load result
    ///
    /// On failure the current snapshot keeps its default content and the
    /// saved snapshot is bootstrapped from it, so nothing reads as dirty.
    pub fn finish_load(&mut self, result: StoreResult<Document>) -> StoreResult<()> {
        self.is_loading = false;
        match result {
            Ok(document) => {
                self.last_saved = document.last_updated;
                self.current = document.into_snapshot();
                self.saved = Some(self.current.clone());
                self.has_unsaved_changes = false;
                Ok(())
            }
            Err(e) => {
                self.recompute_dirty();
                Err(e)
            }
        }
    }

    // ========================
    // Edits
    // ========================

    /// Replace a whole record, matched by id and topic
    pub fn update_reflection(&mut self, updated: Reflection) -> StoreResult<Option<AutosaveTicket>> {
        let slot = self
            .current
            .reflections
            .iter_mut()
            .find(|r| r.id == updated.id && r.superskill == updated.superskill)
            .ok_or_else(|| StoreError::RecordNotFound(updated.superskill.clone()))?;
        *slot = updated;
        Ok(self.after_edit())
    }

    /// Set one field of one record
    pub fn set_field(
        &mut self,
        topic: Superskill,
        field: ReflectionField,
        value: impl Into<String>,
    ) -> StoreResult<Option<AutosaveTicket>> {
        let reflection = self
            .current
            .reflection_mut(topic)
            .ok_or_else(|| StoreError::RecordNotFound(topic.as_str().to_string()))?;
        reflection.set_field(field, value);
        Ok(self.after_edit())
    }

    pub fn set_setting(&mut self, field: SettingField, value: impl Into<String>) -> Option<AutosaveTicket> {
        self.current.settings.set(field, value);
        self.after_edit()
    }

    /// Replace all page settings at once
    pub fn apply_settings(&mut self, settings: PageSettings) -> Option<AutosaveTicket> {
        self.current.settings = settings;
        self.after_edit()
    }

    /// Deep-compare current against saved
    ///
    /// Skipped while loading. The first call without a saved snapshot seeds
    /// it from the current state instead of comparing.
    pub fn recompute_dirty(&mut self) {
        if self.is_loading {
            return;
        }
        match &self.saved {
            None => {
                self.saved = Some(self.current.clone());
                self.has_unsaved_changes = false;
            }
            Some(saved) => {
                self.has_unsaved_changes = *saved != self.current;
            }
        }
    }

    fn after_edit(&mut self) -> Option<AutosaveTicket> {
        self.recompute_dirty();
        self.rearm_autosave()
    }

    // ========================
    // Autosave
    // ========================

    /// Cancel the pending timer and arm a new one if a save is due
    fn rearm_autosave(&mut self) -> Option<AutosaveTicket> {
        self.debouncer.cancel();
        if self.is_loading || !self.autosave_enabled || !self.has_unsaved_changes {
            return None;
        }
        Some(self.debouncer.arm())
    }

    /// Toggle autosave; enabling with pending changes arms a timer right away
    pub fn set_autosave(&mut self, enabled: bool) -> Option<AutosaveTicket> {
        self.autosave_enabled = enabled;
        self.rearm_autosave()
    }

    /// Called when a timer fires; true means "save now"
    pub fn claim_autosave(&mut self, ticket: AutosaveTicket) -> bool {
        if !self.debouncer.claim(ticket) {
            return false;
        }
        self.autosave_enabled && self.has_unsaved_changes && !self.is_loading
    }

    pub fn has_pending_autosave(&self) -> bool {
        self.debouncer.armed
    }

    // ========================
    // Save
    // ========================

    /// Start a write of the current snapshot
    ///
    /// Returns `None` when a write is already in flight; the request is then
    /// remembered and picked up through [`Self::take_queued_follow_up`].
    pub fn begin_save(&mut self) -> Option<SaveRequest> {
        if self.is_saving {
            self.save_queued = true;
            return None;
        }
        self.is_saving = true;
        let timestamp = save_timestamp();
        Some(SaveRequest {
            document: self.current.to_document(timestamp),
            timestamp,
            snapshot: self.current.clone(),
        })
    }

    /// Apply a save result; `is_saving` is released on both paths
    pub fn finish_save(&mut self, request: SaveRequest, result: StoreResult<()>) -> StoreResult<DateTime<Utc>> {
        self.is_saving = false;
        match result {
            Ok(()) => {
                self.last_saved = Some(request.timestamp);
                self.saved = Some(request.snapshot);
                // edits made during the flight stay dirty
                self.has_unsaved_changes = self.saved.as_ref() != Some(&self.current);
                if !self.has_unsaved_changes {
                    self.debouncer.cancel();
                }
                Ok(request.timestamp)
            }
            Err(e) => {
                self.save_queued = false;
                Err(e)
            }
        }
    }

    /// Whether a queued save should run now (clears the queue flag)
    pub fn take_queued_follow_up(&mut self) -> bool {
        let queued = std::mem::take(&mut self.save_queued);
        queued && self.has_unsaved_changes
    }

    // ========================
    // Selection (UI focus only)
    // ========================

    pub fn select(&mut self, topic: Option<Superskill>) {
        self.selected = topic;
    }

    pub fn selected(&self) -> Option<Superskill> {
        self.selected
    }

    pub fn selected_reflection(&self) -> Option<&Reflection> {
        self.selected.and_then(|t| self.current.reflection(t))
    }

    // ========================
    // Reads
    // ========================

    pub fn current(&self) -> &Snapshot {
        &self.current
    }

    pub fn saved(&self) -> Option<&Snapshot> {
        self.saved.as_ref()
    }

    pub fn reflections(&self) -> &[Reflection] {
        &self.current.reflections
    }

    pub fn settings(&self) -> &PageSettings {
        &self.current.settings
    }

    pub fn reflection(&self, topic: Superskill) -> Option<&Reflection> {
        self.current.reflection(topic)
    }

    pub fn lookup(&self, name: &str) -> Lookup {
        match self.current.find_by_name(name) {
            Some(reflection) => Lookup::Found(reflection.clone()),
            None => Lookup::NotFound(name.to_string()),
        }
    }

    pub fn progress_of(&self, topic: Superskill) -> Progress {
        self.reflection(topic)
            .map(|r| r.progress())
            .unwrap_or(Progress { filled: 0, total: 0 })
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_saving(&self) -> bool {
        self.is_saving
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.has_unsaved_changes
    }

    pub fn last_saved(&self) -> Option<DateTime<Utc>> {
        self.last_saved
    }

    pub fn autosave_enabled(&self) -> bool {
        self.autosave_enabled
    }
}
