//! Store Integration Tests
//!
//! Load and save flows of ReflectionStore against the in-memory client.

use std::rc::Rc;

use superskills_core::domain::{
    Document, PageSettings, Reflection, ReflectionField, SettingField, Snapshot, Superskill,
};
use superskills_core::{MemoryClient, ReflectionStore, SaveOutcome, StoreError};

fn seeded_client() -> Rc<MemoryClient> {
    let mut snapshot = Snapshot::default();
    snapshot.settings.custom_link = "example.org".to_string();
    let document = snapshot.to_document(superskills_core::domain::save_timestamp());
    Rc::new(MemoryClient::with_document(document))
}

async fn loaded_store(client: &Rc<MemoryClient>) -> ReflectionStore<Rc<MemoryClient>> {
    let store = ReflectionStore::new(client.clone());
    store.load().await.expect("Failed to load");
    store
}

#[tokio::test]
async fn test_load_populates_session() {
    let client = seeded_client();
    let store = loaded_store(&client).await;

    assert_eq!(client.load_count(), 1);
    store.read(|s| {
        assert!(!s.is_loading());
        assert!(!s.has_unsaved_changes());
        assert_eq!(s.reflections().len(), 10);
        assert_eq!(s.settings().custom_link, "example.org");
        assert!(s.last_saved().is_some());
    });
}

#[tokio::test]
async fn test_load_failure_leaves_default_state() {
    let client = seeded_client();
    client.set_fail_loads(true);
    let store = ReflectionStore::new(client.clone());

    let err = store.load().await.unwrap_err();
    assert!(matches!(err, StoreError::LoadFailure(_)));
    store.read(|s| {
        assert!(!s.is_loading());
        assert_eq!(s.current(), &Snapshot::default());
        assert!(!s.has_unsaved_changes());
        assert_eq!(s.last_saved(), None);
    });
}

#[tokio::test]
async fn test_load_backfills_legacy_records() {
    let legacy = r#"{
        "reflections": [
            {
                "id": 0,
                "superskill": "Kontextalisierung",
                "ausgangslage": {"verstaendnis": "Umfeld", "situationen": "", "literatur": ""},
                "anwendung": {"titel": "", "photo1": "", "beschreibung": "", "erkenntnisse": "", "photo2": "", "photo3": "", "photo4": ""},
                "bewertung": {"funktioniert": "", "uebersehen": "", "veraenderung": ""},
                "transfer": {"zukunft": "", "tools": "", "selbstverstaendnis": ""}
            }
        ],
        "customLink": "",
        "lastUpdated": "2024-05-01T10:00:00.000Z",
        "version": 1
    }"#;
    let document: Document = serde_json::from_str(legacy).unwrap();
    let client = Rc::new(MemoryClient::with_document(document));
    let store = loaded_store(&client).await;

    store.read(|s| {
        let record = s.reflection(Superskill::Kontextalisierung).unwrap();
        assert_eq!(record.wallpaper_url, "");
        assert_eq!(record.image_description, "");
        assert_eq!(record.image_description_title, "");
        assert_eq!(record.field(ReflectionField::Verstaendnis), "Umfeld");
        assert_eq!(s.reflections().len(), 10);
    });
}

#[tokio::test]
async fn test_save_then_load_round_trips() {
    let client = seeded_client();
    let store = loaded_store(&client).await;

    store
        .set_field(Superskill::Aesthetik, ReflectionField::Erkenntnisse, "Weißraum wirkt")
        .unwrap();
    store.set_setting(SettingField::PageTitle, "Meine Superskills");
    let outcome = store.save().await.unwrap();
    let saved_at = match outcome {
        SaveOutcome::Saved(at) => at,
        SaveOutcome::Queued => panic!("nothing else was in flight"),
    };
    let written = store.read(|s| s.current().clone());

    let reloaded = ReflectionStore::new(client.clone());
    reloaded.load().await.unwrap();
    reloaded.read(|s| {
        assert_eq!(s.current(), &written);
        assert_eq!(s.last_saved(), Some(saved_at));
    });
    assert_eq!(client.stored().unwrap().version, 1);
}

#[tokio::test]
async fn test_save_is_idempotent() {
    let client = seeded_client();
    let store = loaded_store(&client).await;
    store.set_setting(SettingField::CustomLinkTitle, "Portfolio");

    store.save().await.unwrap();
    let first = store.read(|s| (s.has_unsaved_changes(), s.saved().cloned()));
    store.save().await.unwrap();
    let second = store.read(|s| (s.has_unsaved_changes(), s.saved().cloned()));

    assert_eq!(client.save_count(), 2);
    assert_eq!(first, second);
    store.read(|s| {
        assert!(!s.has_unsaved_changes());
        assert_eq!(s.saved(), Some(s.current()));
    });
}

#[tokio::test]
async fn test_save_failure_keeps_changes() {
    let client = seeded_client();
    let store = loaded_store(&client).await;
    store.set_setting(SettingField::WallpaperUrl, "https://img/bg.jpg");
    client.set_fail_saves(true);

    let err = store.save().await.unwrap_err();
    assert!(matches!(err, StoreError::SaveFailure(_)));
    store.read(|s| {
        assert!(!s.is_saving());
        assert!(s.has_unsaved_changes());
        assert_eq!(s.saved().unwrap().settings.wallpaper_url, "");
    });

    // retry once the store is reachable again
    client.set_fail_saves(false);
    store.save().await.unwrap();
    store.read(|s| assert!(!s.has_unsaved_changes()));
}

#[tokio::test]
async fn test_update_reflection_and_progress() {
    let client = seeded_client();
    let store = loaded_store(&client).await;

    for topic in Superskill::ALL {
        assert_eq!(store.read(|s| s.progress_of(topic).percent()), 0);
    }

    let record: Reflection = store.read(|s| s.reflection(Superskill::Kontextalisierung).cloned().unwrap());
    let filled = record
        .with_field(ReflectionField::Verstaendnis, "Einordnung")
        .with_field(ReflectionField::Situationen, "Workshops")
        .with_field(ReflectionField::Literatur, "Norman");
    store.update_reflection(filled).unwrap();

    store.read(|s| {
        let progress = s.progress_of(Superskill::Kontextalisierung);
        assert_eq!(progress.filled, 3);
        assert_eq!(progress.total, 12);
        assert_eq!(progress.percent(), 25);
        assert!(s.has_unsaved_changes());
    });
}

#[tokio::test]
async fn test_apply_settings_marks_dirty() {
    let client = seeded_client();
    let store = loaded_store(&client).await;

    let settings = PageSettings {
        page_description: "Neue Story".to_string(),
        ..store.read(|s| s.settings().clone())
    };
    store.apply_settings(settings);
    assert!(store.read(|s| s.has_unsaved_changes()));
}
