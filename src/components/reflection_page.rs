//! Reflection Page
//!
//! Editor and preview for one superskill, looked up by name.

use leptos::prelude::*;

use superskills_core::domain::Lookup;

use crate::components::{ImageDescriptionCard, ReflectionEditor, SectionPreview};
use crate::context::use_reflections;
use crate::store::{navigate, use_ui_store, View};

#[derive(Clone, Copy, PartialEq, Eq)]
enum PageTab {
    Edit,
    Preview,
}

#[component]
pub fn ReflectionPage(name: String) -> impl IntoView {
    let ctx = use_reflections();
    let ui = use_ui_store();

    // Looked up once; the editor keeps its own draft from here on
    let reflection = match ctx.with_untracked(|s| s.lookup(&name)) {
        Lookup::Found(reflection) => reflection,
        Lookup::NotFound(name) => {
            log::warn!("no reflection named {}", name);
            return view! {
                <div class="card not-found">
                    <h1>"Superskill nicht gefunden"</h1>
                    <p>{format!("Für \"{}\" gibt es keine Reflektion.", name)}</p>
                    <button class="btn" on:click=move |_| navigate(&ui, View::Overview)>
                        "Zur Übersicht"
                    </button>
                </div>
            }
            .into_any();
        }
    };

    let tab = RwSignal::new(PageTab::Edit);
    let lookup_name = name.clone();
    let stored = Signal::derive(move || ctx.with(|s| s.lookup(&lookup_name).into_result().ok()));

    view! {
        <div class="reflection-page">
            <div class="page-heading">
                <h1>{name}</h1>
                <p class="muted">
                    "Reflektiere über deine Erfahrungen mit diesem Superskill und dokumentiere deine Erkenntnisse."
                </p>
            </div>

            {move || stored.get().map(|reflection| view! { <ImageDescriptionCard reflection=reflection /> })}

            <div class="tabs">
                <div class="tab-list">
                    <button
                        class="tab-trigger"
                        class:active=move || tab.get() == PageTab::Edit
                        on:click=move |_| tab.set(PageTab::Edit)
                    >
                        "Bearbeiten"
                    </button>
                    <button
                        class="tab-trigger"
                        class:active=move || tab.get() == PageTab::Preview
                        on:click=move |_| tab.set(PageTab::Preview)
                    >
                        "Vorschau"
                    </button>
                </div>
                // Both stay mounted so switching tabs keeps the draft
                <div class="tab-content" class:hidden=move || tab.get() != PageTab::Edit>
                    <ReflectionEditor reflection=reflection />
                </div>
                <div class="tab-content" class:hidden=move || tab.get() != PageTab::Preview>
                    <SectionPreview reflection=stored />
                </div>
            </div>
        </div>
    }
    .into_any()
}
