//! Overview Page
//!
//! Grid of all superskills with their completion.

use leptos::prelude::*;

use superskills_core::domain::Superskill;

use crate::context::use_reflections;
use crate::store::{navigate, use_ui_store, View};

#[component]
pub fn OverviewPage() -> impl IntoView {
    let ctx = use_reflections();
    let ui = use_ui_store();

    let cards = Superskill::ALL
        .into_iter()
        .map(|topic| {
            let percent = move || ctx.with(|s| s.progress_of(topic).percent());
            view! {
                <div
                    class="card topic-card"
                    on:click=move |_| navigate(&ui, View::Reflection(topic.as_str().to_string()))
                >
                    <h3 class="card-title">{topic.as_str()}</h3>
                    <p class="card-subtitle">"Reflektiere über diesen Superskill"</p>
                    <div class="progress-track">
                        <div class="progress-bar" style=move || format!("width: {}%;", percent())></div>
                    </div>
                    <span class="progress-label">{move || format!("{}% abgeschlossen", percent())}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="overview-page">
            <h1>"Designer Superskills Reflektion"</h1>
            <p class="intro">
                "Reflektiere und dokumentiere deine Erfahrungen zu 10 Superskills für Visual Designer. "
                "Wähle einen Superskill aus, um deine Reflektion zu beginnen oder fortzusetzen."
            </p>
            <div class="topic-grid">{cards}</div>
            <div class="centered">
                <button class="btn primary" on:click=move |_| navigate(&ui, View::Map)>
                    "Zur Landkarte"
                </button>
            </div>
        </div>
    }
}
