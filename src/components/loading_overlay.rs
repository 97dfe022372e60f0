//! Loading Overlay
//!
//! Full-screen blocker shown while the document loads.

use leptos::prelude::*;

#[component]
pub fn LoadingOverlay() -> impl IntoView {
    view! {
        <div class="loading-overlay">
            <div class="loading-card">
                <div class="spinner"></div>
                <p>"Daten werden geladen..."</p>
            </div>
        </div>
    }
}
