//! Settings Page
//!
//! Page texts, wallpaper and footer link are edited as drafts and applied
//! together with an explicit save. Also hosts the autosave switch, the share
//! link and the save status.

use chrono::Local;
use leptos::prelude::*;

use superskills_core::domain::{PageSettings, SettingField};

use crate::components::saved_at_label;
use crate::context::use_reflections;
use crate::store::{notify, use_ui_store, ToastKind, UiStateStoreFields};
use crate::{location, logging, preferences};

#[derive(Clone, Copy, PartialEq, Eq)]
enum SettingsTab {
    General,
    Appearance,
    Data,
}

impl SettingsTab {
    const ALL: [SettingsTab; 3] = [SettingsTab::General, SettingsTab::Appearance, SettingsTab::Data];

    fn label(&self) -> &'static str {
        match self {
            SettingsTab::General => "Allgemein",
            SettingsTab::Appearance => "Erscheinungsbild",
            SettingsTab::Data => "Daten & Teilen",
        }
    }
}

/// Text input bound to one field of the settings draft
#[component]
fn SettingInput(
    draft: RwSignal<PageSettings>,
    field: SettingField,
    label: &'static str,
    placeholder: &'static str,
    hint: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label>{label}</label>
            <input
                type="text"
                class="input"
                placeholder=placeholder
                prop:value=move || draft.with(|d| d.get(field).to_string())
                on:input=move |ev| draft.update(|d| d.set(field, event_target_value(&ev)))
            />
            <p class="muted small">{hint}</p>
        </div>
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let ctx = use_reflections();
    let ui = use_ui_store();

    let draft = RwSignal::new(ctx.with_untracked(|s| s.settings().clone()));
    let tab = RwSignal::new(SettingsTab::General);
    let share_url = RwSignal::new(None::<String>);
    let log_lines = RwSignal::new(Vec::<String>::new());

    // Pick up the loaded settings if the page was opened mid-load
    Effect::new(move |was_loading: Option<bool>| {
        let loading = ctx.with(|s| s.is_loading());
        if was_loading == Some(true) && !loading {
            draft.set(ctx.with_untracked(|s| s.settings().clone()));
        }
        loading
    });

    let is_saving = move || ctx.with(|s| s.is_saving());
    let has_unsaved = move || ctx.with(|s| s.has_unsaved_changes());
    let last_saved = move || {
        ctx.with(|s| s.last_saved())
            .map(|at| saved_at_label(&at.with_timezone(&Local)))
    };
    let save_label = move || if is_saving() { "Wird gespeichert..." } else { "Speichern" };

    let on_save = move |_| {
        ctx.apply_settings(draft.get_untracked());
        ctx.save("Einstellungen gespeichert!");
    };

    let on_manual_save = move |_| ctx.save("Änderungen gespeichert");

    let on_autosave_toggle = move |ev: web_sys::Event| {
        let enabled = event_target_checked(&ev);
        ui.autosave().set(enabled);
        preferences::store_autosave(enabled);
        ctx.set_autosave(enabled);
        let message = if enabled { "Auto-Speichern aktiviert" } else { "Auto-Speichern deaktiviert" };
        notify(ui, ToastKind::Info, message);
    };

    let on_share = move |_| match location::shareable_url(&ctx.document_id()) {
        Some(url) => {
            share_url.set(Some(url));
            notify(
                ui,
                ToastKind::Success,
                "Link generiert! Teilen Sie den Link, um diese Daten auf einem anderen Gerät zu öffnen.",
            );
        }
        None => notify(ui, ToastKind::Error, "Link konnte nicht erstellt werden."),
    };

    let wallpaper_preview = move || {
        let url = draft.with(|d| d.wallpaper_url.clone());
        (!url.trim().is_empty()).then(|| {
            view! {
                <div class="wallpaper-preview">
                    <img
                        src=url
                        alt="Wallpaper Vorschau"
                        on:error=move |_| notify(
                            ui,
                            ToastKind::Error,
                            "Bild konnte nicht geladen werden. Überprüfen Sie die URL.",
                        )
                    />
                    <div class="wallpaper-preview-label">"Hintergrundbild Vorschau"</div>
                </div>
            }
        })
    };

    let save_button = move || {
        view! {
            <button class="btn primary" disabled=is_saving on:click=on_save>
                {save_label}
            </button>
        }
    };

    let general = move || {
        view! {
            <div class="card">
                <h3 class="card-title">"Seiteninhalte"</h3>
                <p class="card-subtitle">"Passen Sie den Titel und die Beschreibung der Hauptseite an."</p>
                <SettingInput
                    draft=draft
                    field=SettingField::PageTitle
                    label="Seitentitel"
                    placeholder="Visual Superskills"
                    hint="Dieser Titel wird oben auf der Hauptseite angezeigt."
                />
                <SettingInput
                    draft=draft
                    field=SettingField::PageDescription
                    label="Seitenbeschreibung"
                    placeholder="Hier siehst du eine visuelle Übersicht aller deiner Reflektionen..."
                    hint="Diese Beschreibung wird unter dem Titel auf der Hauptseite angezeigt."
                />
                <div class="card-footer">{save_button}</div>
            </div>

            <div class="card">
                <h3 class="card-title">"Speicheroptionen"</h3>
                <p class="card-subtitle">"Konfigurieren Sie, wie Ihre Daten gespeichert werden."</p>
                <label class="switch-row">
                    <span>
                        <strong>"Auto-Speichern"</strong>
                        <span class="muted small">" Änderungen automatisch nach 3 Sekunden speichern"</span>
                    </span>
                    <input
                        type="checkbox"
                        class="switch"
                        prop:checked=move || ui.autosave().get()
                        on:change=on_autosave_toggle
                    />
                </label>
                <p class="info-box">
                    {move || if ui.autosave().get() {
                        "Auto-Speichern ist aktiviert. Änderungen werden automatisch gespeichert."
                    } else {
                        "Auto-Speichern ist deaktiviert. Nutzen Sie den Speichern-Button, um Änderungen manuell zu speichern."
                    }}
                </p>
            </div>

            <div class="card">
                <h3 class="card-title">"Benutzerdefinierter Link"</h3>
                <p class="card-subtitle">"Dieser Link wird im Footer der Anwendung angezeigt."</p>
                <SettingInput
                    draft=draft
                    field=SettingField::CustomLinkTitle
                    label="Link Titel"
                    placeholder="Meine Website"
                    hint="Der angezeigte Text für den Link im Footer."
                />
                <SettingInput
                    draft=draft
                    field=SettingField::CustomLink
                    label="Link URL"
                    placeholder="https://meine-website.de"
                    hint="Die URL, zu der der Link führen soll."
                />
                <div class="card-footer split">
                    <span class="muted small">{last_saved}</span>
                    {save_button}
                </div>
            </div>
        }
    };

    let appearance = move || {
        view! {
            <div class="card">
                <h3 class="card-title">"Karte Hintergrundbild"</h3>
                <p class="card-subtitle">"Fügen Sie ein Hintergrundbild für die Karten-Ansicht hinzu."</p>
                <div class="form-field">
                    <label>"Bild URL"</label>
                    <div class="input-row">
                        <input
                            type="text"
                            class="input"
                            placeholder="https://example.com/wallpaper.jpg"
                            prop:value=move || draft.with(|d| d.wallpaper_url.clone())
                            on:input=move |ev| draft.update(|d| d.set(SettingField::WallpaperUrl, event_target_value(&ev)))
                        />
                        <button
                            class="btn outline"
                            type="button"
                            on:click=move |_| draft.update(|d| d.set(SettingField::WallpaperUrl, ""))
                        >
                            "Zurücksetzen"
                        </button>
                    </div>
                    <p class="muted small">
                        "Geben Sie eine URL zu einem Hintergrundbild ein, das hinter der Karte angezeigt werden soll."
                    </p>
                </div>
                {wallpaper_preview}
                <div class="info-box">
                    <p>"Empfehlungen für Hintergrundbilder:"</p>
                    <ul>
                        <li>"Verwenden Sie Bilder mit niedrigem Kontrast"</li>
                        <li>"Bilder mit dunklen Farben funktionieren am besten"</li>
                        <li>"Große Bilder (mind. 1920x1080)"</li>
                        <li>"Verwenden Sie Bilder mit freier Lizenz"</li>
                    </ul>
                </div>
                <div class="card-footer">{save_button}</div>
            </div>
        }
    };

    let data = move || {
        view! {
            <div class="card">
                <h3 class="card-title">"Daten zwischen Geräten teilen"</h3>
                <p class="card-subtitle">
                    "Erstellen Sie einen Link, mit dem Sie Ihre Daten auf einem anderen Gerät oder Browser fortsetzen können."
                </p>
                <button class="btn" on:click=on_share>"Link generieren"</button>
                {move || share_url.get().map(|url| view! {
                    <input class="input share-url" type="text" readonly=true prop:value=url />
                })}
            </div>

            <div class="card status-bar">
                <span class:warning=has_unsaved>
                    {move || if has_unsaved() { "Ungespeicherte Änderungen" } else { "Alle Änderungen gespeichert" }}
                </span>
                <span class="muted small">{last_saved}</span>
                <button class="btn primary" disabled=is_saving on:click=on_manual_save>
                    {move || if is_saving() { "Wird gespeichert..." } else { "Jetzt speichern" }}
                </button>
            </div>

            <details class="card diagnostics">
                <summary>"Protokoll"</summary>
                <button class="btn outline" on:click=move |_| log_lines.set(logging::recent_lines())>
                    "Aktualisieren"
                </button>
                <pre class="log-lines">{move || log_lines.get().join("\n")}</pre>
            </details>
        }
    };

    view! {
        <div class="settings-page">
            <h1>"Einstellungen"</h1>
            <div class="tab-list cols-3">
                {SettingsTab::ALL
                    .into_iter()
                    .map(|t| view! {
                        <button
                            class="tab-trigger"
                            class:active=move || tab.get() == t
                            on:click=move |_| tab.set(t)
                        >
                            {t.label()}
                        </button>
                    })
                    .collect_view()}
            </div>
            <div class="tab-content">
                {move || match tab.get() {
                    SettingsTab::General => general().into_any(),
                    SettingsTab::Appearance => appearance().into_any(),
                    SettingsTab::Data => data().into_any(),
                }}
            </div>
        </div>
    }
}
