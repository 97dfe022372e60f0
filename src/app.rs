//! Visual Superskills App
//!
//! Root component: provides the stores and switches between pages.

use leptos::prelude::*;
use reactive_stores::Store;

use superskills_core::RemoteConfig;

use crate::components::{Layout, MapView, OverviewPage, ReflectionPage, SettingsPage, Toaster};
use crate::context::ReflectionContext;
use crate::store::{UiState, UiStateStoreFields, View};
use crate::{location, preferences};

#[component]
pub fn App() -> impl IntoView {
    // Device preferences, read once
    let theme = preferences::load_theme();
    let autosave = preferences::load_autosave();

    let ui = Store::new(UiState::new(theme, autosave));
    provide_context(ui);

    let config = RemoteConfig::from_build_env();
    log::info!("using document {} at {}", config.document_id, config.api_url);
    let reflections = ReflectionContext::new(config, ui);
    provide_context(reflections);

    // Keep the root element's theme class in sync
    Effect::new(move |_| {
        preferences::apply_theme(ui.theme().get());
    });

    // Load on mount
    Effect::new(move |_| {
        reflections.set_autosave(autosave);
        location::mirror_document_id(&reflections.document_id());
        reflections.load();
    });

    view! {
        <Layout>
            {move || match ui.view().get() {
                View::Map => view! { <MapView /> }.into_any(),
                View::Overview => view! { <OverviewPage /> }.into_any(),
                View::Reflection(name) => view! { <ReflectionPage name=name /> }.into_any(),
                View::Settings => view! { <SettingsPage /> }.into_any(),
            }}
        </Layout>
        <Toaster />
    }
}
