//! Page Layout
//!
//! Header with save status, theme toggle and navigation; footer with the
//! custom link.

use chrono::{DateTime, Local, TimeZone};
use leptos::prelude::*;

use crate::components::LoadingOverlay;
use crate::context::use_reflections;
use crate::preferences;
use crate::store::{navigate, use_ui_store, UiStateStoreFields, View};

/// Header label for the last successful save
pub fn version_label<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("Version {}", at.format("%d.%m.%Y - %H:%M"))
}

/// Longer form used on the settings page
pub fn saved_at_label<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("Zuletzt gespeichert: {}", at.format("%d.%m.%Y, %H:%M:%S"))
}

#[component]
fn NavButton(label: &'static str, target: View) -> impl IntoView {
    let ui = use_ui_store();
    let active_target = target.clone();
    let is_active = move || match (&ui.view().get(), &active_target) {
        (View::Reflection(_), View::Overview) => true,
        (current, target) => current == target,
    };

    view! {
        <button
            class="nav-btn"
            class:active=is_active
            on:click=move |_| navigate(&ui, target.clone())
        >
            {label}
        </button>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let ctx = use_reflections();
    let ui = use_ui_store();

    let is_loading = move || ctx.with(|s| s.is_loading());
    let status = move || {
        ctx.with(|s| {
            if s.is_saving() {
                Some("Speichern...".to_string())
            } else {
                s.last_saved()
                    .map(|at| version_label(&at.with_timezone(&Local)))
            }
        })
    };
    let footer_link = move || {
        ctx.with(|s| {
            let settings = s.settings();
            settings
                .footer_href()
                .map(|href| (href, settings.footer_text().to_string()))
        })
    };

    // Title click returns to the map and clears the selection
    let on_title_click = move |_| {
        ctx.select(None);
        navigate(&ui, View::Map);
    };

    let toggle_theme = move |_| {
        let next = ui.theme().get_untracked().toggled();
        ui.theme().set(next);
        preferences::store_theme(next);
    };

    view! {
        <div class="app-layout">
            <Show when=is_loading>
                <LoadingOverlay />
            </Show>

            <header class="app-header">
                <div class="content-container header-row">
                    <h1 class="app-title" on:click=on_title_click>"Visual Superskills"</h1>
                    <nav class="header-nav">
                        <span class="save-status">{status}</span>
                        <NavButton label="Karte" target=View::Map />
                        <NavButton label="Übersicht" target=View::Overview />
                        <NavButton label="Einstellungen" target=View::Settings />
                        <button
                            class="theme-toggle"
                            title=move || ui.theme().get().toggle_label()
                            on:click=toggle_theme
                        >
                            {move || if ui.theme().get().is_dark() { "☀" } else { "☾" }}
                        </button>
                    </nav>
                </div>
            </header>

            <main class="content-container main-content">
                {children()}
            </main>

            <footer class="app-footer">
                <div class="content-container">
                    {move || match footer_link() {
                        Some((href, text)) => view! {
                            <a class="footer-link" href=href target="_blank" rel="noopener noreferrer">
                                {text}
                            </a>
                        }.into_any(),
                        None => view! {
                            <span class="footer-empty">"Kein benutzerdefinierter Link festgelegt"</span>
                        }.into_any(),
                    }}
                </div>
            </footer>
        </div>
    }
}
