//! Autosave Tests
//!
//! Debounce coalescing and the single-flight save guard, on a paused tokio
//! clock so timings are exact.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use futures::future::join_all;
use tokio::time::{sleep, Instant};

use superskills_core::domain::{save_timestamp, Document, ReflectionField, SettingField, Snapshot, Superskill};
use superskills_core::{
    DocumentClient, MemoryClient, ReflectionStore, SaveOutcome, StoreResult, AUTOSAVE_DELAY_MS,
};

const DELAY: Duration = Duration::from_millis(AUTOSAVE_DELAY_MS as u64);

/// MemoryClient whose writes take a while
struct SlowClient {
    inner: MemoryClient,
    latency: Duration,
}

#[async_trait(?Send)]
impl DocumentClient for SlowClient {
    async fn load(&self) -> StoreResult<Document> {
        self.inner.load().await
    }

    async fn save(&self, document: &Document) -> StoreResult<()> {
        sleep(self.latency).await;
        self.inner.save(document).await
    }
}

fn seeded_document() -> Document {
    Snapshot::default().to_document(save_timestamp())
}

async fn autosaving_store(client: &Rc<MemoryClient>) -> ReflectionStore<Rc<MemoryClient>> {
    let store = ReflectionStore::new(client.clone());
    store.load().await.expect("Failed to load");
    assert_eq!(store.set_autosave(true), None);
    store
}

#[tokio::test(start_paused = true)]
async fn test_burst_of_edits_saves_once() {
    let client = Rc::new(MemoryClient::with_document(seeded_document()));
    let store = autosaving_store(&client).await;

    let start = Instant::now();
    let mut pending = Vec::new();
    for (i, text) in ["S", "Sk", "Ski", "Skiz"].into_iter().enumerate() {
        if i > 0 {
            sleep(Duration::from_millis(1000)).await;
        }
        let ticket = store
            .set_field(Superskill::Emotion, ReflectionField::Tools, text)
            .unwrap()
            .expect("autosave should arm");
        pending.push(store.autosave_after(ticket, sleep(DELAY), || ()));
    }

    let fired: Vec<_> = join_all(pending).await.into_iter().flatten().collect();
    assert_eq!(fired.len(), 1);
    assert!(matches!(fired[0], Ok(SaveOutcome::Saved(_))));
    assert_eq!(client.save_count(), 1);

    // last edit at 3s, save 3s later
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(6000), "{:?}", elapsed);
    assert!(elapsed < Duration::from_millis(6100), "{:?}", elapsed);

    let stored = client.stored().unwrap().into_snapshot();
    assert_eq!(
        stored.reflection(Superskill::Emotion).unwrap().field(ReflectionField::Tools),
        "Skiz"
    );
    assert!(!store.read(|s| s.has_unsaved_changes()));
}

#[tokio::test(start_paused = true)]
async fn test_separate_bursts_save_separately() {
    let client = Rc::new(MemoryClient::with_document(seeded_document()));
    let store = autosaving_store(&client).await;

    let first = store.set_setting(SettingField::PageTitle, "Eins").unwrap();
    assert!(store.autosave_after(first, sleep(DELAY), || ()).await.is_some());

    let second = store.set_setting(SettingField::PageTitle, "Zwei").unwrap();
    assert!(store.autosave_after(second, sleep(DELAY), || ()).await.is_some());

    assert_eq!(client.save_count(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_disabled_autosave_never_writes() {
    let client = Rc::new(MemoryClient::with_document(seeded_document()));
    let store = ReflectionStore::new(client.clone());
    store.load().await.unwrap();

    assert_eq!(store.set_setting(SettingField::PageTitle, "Neu"), None);
    sleep(DELAY * 2).await;
    assert_eq!(client.save_count(), 0);
    assert!(store.read(|s| s.has_unsaved_changes()));
}

#[tokio::test(start_paused = true)]
async fn test_manual_save_cancels_pending_autosave() {
    let client = Rc::new(MemoryClient::with_document(seeded_document()));
    let store = autosaving_store(&client).await;

    let ticket = store.set_setting(SettingField::CustomLink, "example.org").unwrap();
    store.save().await.unwrap();
    assert_eq!(store.autosave_after(ticket, sleep(DELAY), || ()).await, None);
    assert_eq!(client.save_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_disabling_autosave_cancels_timer() {
    let client = Rc::new(MemoryClient::with_document(seeded_document()));
    let store = autosaving_store(&client).await;

    let ticket = store.set_setting(SettingField::CustomLink, "example.org").unwrap();
    store.set_autosave(false);
    assert_eq!(store.autosave_after(ticket, sleep(DELAY), || ()).await, None);
    assert_eq!(client.save_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_save_while_in_flight_is_queued_and_followed_up() {
    let client = SlowClient {
        inner: MemoryClient::with_document(seeded_document()),
        latency: Duration::from_millis(500),
    };
    let store = ReflectionStore::new(client);
    store.load().await.unwrap();
    store.set_setting(SettingField::PageTitle, "Eins");

    let first = store.save();
    let second = async {
        sleep(Duration::from_millis(100)).await;
        store.set_setting(SettingField::PageTitle, "Zwei");
        store.save().await
    };
    let (first, second) = tokio::join!(first, second);

    assert!(matches!(first, Ok(SaveOutcome::Saved(_))));
    assert_eq!(second, Ok(SaveOutcome::Queued));
    store.read(|s| {
        assert!(!s.is_saving());
        assert!(!s.has_unsaved_changes());
        assert_eq!(s.saved().unwrap().settings.page_title, "Zwei");
    });
}

#[tokio::test(start_paused = true)]
async fn test_autosave_start_hook_sees_saving_state() {
    let client = Rc::new(MemoryClient::with_document(seeded_document()));
    let store = autosaving_store(&client).await;
    let started = Cell::new(0);

    let stale = store.set_setting(SettingField::PageTitle, "Eins").unwrap();
    let fresh = store.set_setting(SettingField::PageTitle, "Zwei").unwrap();

    let on_stale = || started.set(started.get() + 1);
    assert_eq!(store.autosave_after(stale, sleep(DELAY), on_stale).await, None);
    assert_eq!(started.get(), 0);

    let on_fresh = || {
        assert!(store.read(|s| s.is_saving()));
        started.set(started.get() + 1);
    };
    let fired = store.autosave_after(fresh, sleep(DELAY), on_fresh).await;
    assert!(matches!(fired, Some(Ok(SaveOutcome::Saved(_)))));
    assert_eq!(started.get(), 1);
    assert_eq!(client.save_count(), 1);
    assert!(!store.read(|s| s.is_saving()));
}
