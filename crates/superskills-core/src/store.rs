//! Reflection Store
//!
//! Binds a [`ReflectionSession`] to a [`DocumentClient`]. The store owns
//! both; callers only see session reads and store actions.
//!
//! Single-threaded: the session sits in a `RefCell` and no borrow
//! is held across an await.

use std::cell::RefCell;
use std::future::Future;

use chrono::{DateTime, Utc};

use crate::client::DocumentClient;
use crate::domain::{PageSettings, Reflection, ReflectionField, SettingField, Superskill};
use crate::error::StoreResult;
use crate::session::{AutosaveTicket, ReflectionSession};

/// What a save call ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Written; carries the stored timestamp
    Saved(DateTime<Utc>),
    /// Another save was in flight; it will write again when done
    Queued,
}

pub struct ReflectionStore<C: DocumentClient> {
    session: RefCell<ReflectionSession>,
    client: C,
}

impl<C: DocumentClient> ReflectionStore<C> {
    pub fn new(client: C) -> Self {
        Self {
            session: RefCell::new(ReflectionSession::new()),
            client,
        }
    }

    /// Read session state
    pub fn read<R>(&self, f: impl FnOnce(&ReflectionSession) -> R) -> R {
        f(&self.session.borrow())
    }

    // ========================
    // Network actions
    // ========================

    /// Fetch the document and replace the session state with it
    ///
    /// The session enters its loading state before the returned future is
    /// first polled, so views can show it right away.
    pub fn load(&self) -> impl Future<Output = StoreResult<()>> + '_ {
        self.session.borrow_mut().begin_load();
        async move {
            let result = self.client.load().await;
            match &result {
                Ok(document) => log::info!(
                    "loaded document with {} reflections (version {})",
                    document.reflections.len(),
                    document.version
                ),
                Err(e) => log::error!("{}", e),
            }
            self.session.borrow_mut().finish_load(result)
        }
    }

    /// Write the current snapshot
    ///
    /// The write is started (and `is_saving` raised) on call. A call while
    /// another write is in flight is queued; the in-flight call then writes
    /// once more if the state is still dirty afterwards.
    pub fn save(&self) -> impl Future<Output = StoreResult<SaveOutcome>> + '_ {
        let first = self.session.borrow_mut().begin_save();
        async move {
            let Some(mut request) = first else {
                log::info!("save already in flight, queued a follow-up");
                return Ok(SaveOutcome::Queued);
            };

            loop {
                let result = self.client.save(&request.document).await;
                if let Err(e) = &result {
                    log::error!("{}", e);
                }
                let saved_at = self.session.borrow_mut().finish_save(request, result)?;
                log::info!("saved document at {}", saved_at);

                let follow_up = self.session.borrow_mut().take_queued_follow_up();
                if !follow_up {
                    return Ok(SaveOutcome::Saved(saved_at));
                }
                log::info!("running queued follow-up save");
                let next = self.session.borrow_mut().begin_save();
                match next {
                    Some(next) => request = next,
                    None => return Ok(SaveOutcome::Saved(saved_at)),
                }
            }
        }
    }

    /// Wait out `delay`, then save if `ticket` is still the pending autosave
    ///
    /// `on_start` runs once the write has begun, while `is_saving` is raised.
    /// Returns `None` when the ticket was superseded or cancelled meanwhile.
    pub async fn autosave_after<F>(
        &self,
        ticket: AutosaveTicket,
        delay: F,
        on_start: impl FnOnce(),
    ) -> Option<StoreResult<SaveOutcome>>
    where
        F: Future<Output = ()>,
    {
        delay.await;
        if !self.session.borrow_mut().claim_autosave(ticket) {
            return None;
        }
        log::debug!("autosave firing");
        let pending = self.save();
        on_start();
        Some(pending.await)
    }

    // ========================
    // Mutators
    // ========================

    pub fn update_reflection(&self, reflection: Reflection) -> StoreResult<Option<AutosaveTicket>> {
        self.session.borrow_mut().update_reflection(reflection)
    }

    pub fn set_field(
        &self,
        topic: Superskill,
        field: ReflectionField,
        value: impl Into<String>,
    ) -> StoreResult<Option<AutosaveTicket>> {
        self.session.borrow_mut().set_field(topic, field, value)
    }

    pub fn set_setting(&self, field: SettingField, value: impl Into<String>) -> Option<AutosaveTicket> {
        self.session.borrow_mut().set_setting(field, value)
    }

    pub fn apply_settings(&self, settings: PageSettings) -> Option<AutosaveTicket> {
        self.session.borrow_mut().apply_settings(settings)
    }

    pub fn set_autosave(&self, enabled: bool) -> Option<AutosaveTicket> {
        self.session.borrow_mut().set_autosave(enabled)
    }

    pub fn select(&self, topic: Option<Superskill>) {
        self.session.borrow_mut().select(topic);
    }
}
