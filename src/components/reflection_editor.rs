//! Reflection Editor
//!
//! Form over a local draft of one record. Nothing reaches the store until
//! "Speichern" replaces the whole record.

use leptos::prelude::*;

use superskills_core::domain::{Reflection, ReflectionField, Section};

use crate::components::Lightbox;
use crate::context::use_reflections;
use crate::store::{notify, use_ui_store, ToastKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EditorTab {
    Text(Section),
    Visual,
}

impl EditorTab {
    const ALL: [EditorTab; 5] = [
        EditorTab::Text(Section::Ausgangslage),
        EditorTab::Text(Section::Anwendung),
        EditorTab::Text(Section::Bewertung),
        EditorTab::Text(Section::Transfer),
        EditorTab::Visual,
    ];

    fn label(&self) -> &'static str {
        match self {
            EditorTab::Text(section) => section.tab_label(),
            EditorTab::Visual => "Visualisierung",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            EditorTab::Text(section) => section.title(),
            EditorTab::Visual => "Visualisierung",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            EditorTab::Text(section) => section.description(),
            EditorTab::Visual => "Lege ein Hintergrundbild und eine Bildbeschreibung für diesen Superskill fest.",
        }
    }

    fn fields(&self) -> Vec<ReflectionField> {
        match self {
            EditorTab::Text(section) => section.fields(),
            EditorTab::Visual => ReflectionField::VISUAL.to_vec(),
        }
    }
}

/// One labelled input bound to a draft field
#[component]
fn FieldInput(draft: RwSignal<Reflection>, field: ReflectionField) -> impl IntoView {
    let value = move || draft.with(|d| d.field(field).to_string());
    let on_input = move |ev: web_sys::Event| draft.update(|d| d.set_field(field, event_target_value(&ev)));
    let id = format!("field-{}", field.key());

    let input = if field.is_single_line() {
        view! {
            <input
                id=id.clone()
                type="text"
                class="input"
                placeholder=field.placeholder()
                prop:value=value
                on:input=on_input
            />
        }
        .into_any()
    } else {
        view! {
            <textarea
                id=id.clone()
                class="textarea"
                rows="4"
                placeholder=field.placeholder()
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any()
    };

    // Image fields get a live preview
    let shows_image = field.is_photo() || field == ReflectionField::WallpaperUrl;
    let preview = move || {
        let url = value();
        (shows_image && !url.trim().is_empty()).then(|| {
            let image = if field.is_photo() {
                view! { <Lightbox src=url alt=field.label() /> }.into_any()
            } else {
                view! { <img src=url alt="Vorschau" /> }.into_any()
            };
            view! { <div class="image-preview">{image}</div> }
        })
    };
    let clear_button = (field == ReflectionField::WallpaperUrl).then(|| {
        view! {
            <button
                class="btn outline"
                type="button"
                on:click=move |_| draft.update(|d| d.set_field(field, ""))
            >
                "Zurücksetzen"
            </button>
        }
    });

    view! {
        <div class="form-field">
            <label for=id>{field.label()}</label>
            <div class="input-row">
                {input}
                {clear_button}
            </div>
            {preview}
        </div>
    }
}

#[component]
pub fn ReflectionEditor(reflection: Reflection) -> impl IntoView {
    let ctx = use_reflections();
    let ui = use_ui_store();

    let draft = RwSignal::new(reflection);
    let tab = RwSignal::new(EditorTab::Text(Section::Ausgangslage));

    // Draft differs from the record held by the store
    let draft_pending = move || {
        let current = draft.get();
        ctx.with(|s| s.current().find_by_name(&current.superskill) != Some(&current))
    };

    let on_save = move |_| {
        let updated = draft.get_untracked();
        let name = updated.superskill.clone();
        match ctx.update_reflection(updated) {
            Ok(()) => notify(
                ui,
                ToastKind::Success,
                format!("Reflektion erfolgreich gespeichert! Änderungen für \"{}\" wurden übernommen.", name),
            ),
            Err(e) => {
                log::error!("{}", e);
                notify(
                    ui,
                    ToastKind::Error,
                    "Fehler beim Speichern. Die Reflektion konnte nicht gespeichert werden. Bitte versuche es erneut.",
                );
            }
        }
    };

    let tab_buttons = EditorTab::ALL
        .into_iter()
        .map(|t| {
            view! {
                <button
                    class="tab-trigger"
                    class:active=move || tab.get() == t
                    on:click=move |_| tab.set(t)
                >
                    {t.label()}
                </button>
            }
        })
        .collect_view();

    let tab_body = move || {
        let current = tab.get();
        let inputs = current
            .fields()
            .into_iter()
            .map(|field| view! { <FieldInput draft=draft field=field /> })
            .collect_view();
        view! {
            <div class="card editor-card">
                <h3 class="card-title">{current.title()}</h3>
                <p class="card-subtitle">{current.description()}</p>
                <div class="card-body">{inputs}</div>
            </div>
        }
    };

    view! {
        <div class="reflection-editor">
            <div class="tab-list cols-5">{tab_buttons}</div>
            <div class="tab-content">{tab_body}</div>
            <div class="editor-actions">
                <Show when=draft_pending>
                    <span class="muted">"Nicht übernommene Änderungen"</span>
                </Show>
                <button class="btn primary" on:click=on_save>"Speichern"</button>
            </div>
        </div>
    }
}
