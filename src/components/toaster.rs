//! Toaster
//!
//! Stack of transient notifications. Each toast dismisses itself; a click
//! dismisses it early.

use leptos::prelude::*;

use crate::store::{dismiss_toast, use_ui_store, UiStateStoreFields};

#[component]
pub fn Toaster() -> impl IntoView {
    let ui = use_ui_store();

    view! {
        <div class="toaster">
            <For
                each=move || ui.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() on:click=move |_| dismiss_toast(&ui, id)>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
