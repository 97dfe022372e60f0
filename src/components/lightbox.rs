//! Lightbox
//!
//! Thumbnail that opens the full image in an in-page overlay. Escape, the
//! close button or a click beside the image close it again.

use leptos::ev;
use leptos::prelude::*;

fn closes_lightbox(key: &str) -> bool {
    key == "Escape"
}

fn set_page_scroll_locked(locked: bool) {
    let body = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body());
    if let Some(body) = body {
        let value = if locked { "hidden" } else { "" };
        if let Err(e) = body.style().set_property("overflow", value) {
            log::warn!("could not toggle page scrolling: {:?}", e);
        }
    }
}

#[component]
pub fn Lightbox(
    src: String,
    alt: &'static str,
    #[prop(optional)] thumbnail_class: &'static str,
) -> impl IntoView {
    let open = RwSignal::new(false);
    let loaded = RwSignal::new(false);

    let show = move |_| {
        loaded.set(false);
        open.set(true);
        set_page_scroll_locked(true);
    };
    let close = move || {
        open.set(false);
        set_page_scroll_locked(false);
    };

    let keys = window_event_listener(ev::keydown, move |ev| {
        if open.get_untracked() && closes_lightbox(&ev.key()) {
            close();
        }
    });
    on_cleanup(move || {
        keys.remove();
        set_page_scroll_locked(false);
    });

    let full = src.clone();

    view! {
        <img
            class=format!("lightbox-thumb {}", thumbnail_class)
            src=src
            alt=alt
            loading="lazy"
            on:click=show
        />
        <Show when=move || open.get()>
            <div class="lightbox-overlay" on:click=move |_| close()>
                <Show when=move || !loaded.get()>
                    <div class="spinner lightbox-spinner"></div>
                </Show>
                <div class="lightbox-content" on:click=|ev| ev.stop_propagation()>
                    <img
                        class="lightbox-image"
                        class:loaded=move || loaded.get()
                        src=full.clone()
                        alt=alt
                        draggable="false"
                        on:load=move |_| loaded.set(true)
                    />
                    <button class="lightbox-close" aria-label="Schliessen" on:click=move |_| close()>
                        "✕"
                    </button>
                </div>
                <div class="lightbox-instructions">"ESC oder ausserhalb klicken zum Schliessen"</div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_escape_closes() {
        assert!(closes_lightbox("Escape"));
        assert!(!closes_lightbox("Enter"));
        assert!(!closes_lightbox("Esc "));
    }
}
