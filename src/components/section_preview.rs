//! Section Preview
//!
//! Read-only tabs over the four text sections of one record, plus the image
//! description card. Shared by the map details and the reflection page.

use leptos::prelude::*;

use superskills_core::domain::{Reflection, ReflectionField, Section};

use crate::components::Lightbox;

const EMPTY_ANSWER: &str = "Keine Angabe";

/// The first photo is shown large, the others as a row of thumbnails
fn photo_frame_class(field: ReflectionField) -> &'static str {
    if field == ReflectionField::Photo1 {
        "preview-photo main"
    } else {
        "preview-photo"
    }
}

/// Card with the record's image description; renders nothing without one
#[component]
pub fn ImageDescriptionCard(reflection: Reflection) -> impl IntoView {
    reflection.has_image_description().then(|| {
        let body = (!reflection.image_description.is_empty()).then(|| {
            view! { <p class="image-description-text">{reflection.image_description.clone()}</p> }
        });
        view! {
            <div class="card image-description-card">
                <span class="image-description-icon">"🖹"</span>
                <div>
                    <h4>{reflection.description_heading()}</h4>
                    {body}
                </div>
            </div>
        }
    })
}

fn field_block(reflection: &Reflection, field: ReflectionField) -> Option<AnyView> {
    let value = reflection.field(field).to_string();
    if field.is_photo() {
        if value.is_empty() {
            return None;
        }
        return Some(
            view! {
                <div class=photo_frame_class(field)>
                    <Lightbox src=value alt=field.label() />
                </div>
            }
            .into_any(),
        );
    }
    let text = if value.trim().is_empty() { EMPTY_ANSWER.to_string() } else { value };
    Some(
        view! {
            <div class="preview-field">
                <h3>{field.preview_label()}</h3>
                <p class="preview-text">{text}</p>
            </div>
        }
        .into_any(),
    )
}

fn section_card(reflection: &Reflection, section: Section) -> impl IntoView {
    // The application title is shown as the card subtitle
    let subtitle = (section == Section::Anwendung && !reflection.anwendung.titel.is_empty())
        .then(|| view! { <p class="card-subtitle">{reflection.anwendung.titel.clone()}</p> });
    let blocks = section
        .fields()
        .into_iter()
        .filter(|field| *field != ReflectionField::Titel)
        .filter_map(|field| field_block(reflection, field))
        .collect_view();

    view! {
        <div class="card section-card">
            <h3 class="card-title">{section.title()}</h3>
            {subtitle}
            <div class="card-body">{blocks}</div>
        </div>
    }
}

/// Tabbed read-only view; `reflection` is re-read on every change
#[component]
pub fn SectionPreview(#[prop(into)] reflection: Signal<Option<Reflection>>) -> impl IntoView {
    let active = RwSignal::new(Section::Ausgangslage);

    view! {
        <div class="tabs">
            <div class="tab-list cols-4">
                {Section::ALL
                    .into_iter()
                    .map(|section| view! {
                        <button
                            class="tab-trigger"
                            class:active=move || active.get() == section
                            on:click=move |_| active.set(section)
                        >
                            {section.tab_label()}
                        </button>
                    })
                    .collect_view()}
            </div>
            <div class="tab-content">
                {move || reflection.with(|r| r.as_ref().map(|r| section_card(r, active.get())))}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_photo_frame_class() {
        assert_eq!(photo_frame_class(ReflectionField::Photo1), "preview-photo main");
        assert_eq!(photo_frame_class(ReflectionField::Photo3), "preview-photo");
    }
}
