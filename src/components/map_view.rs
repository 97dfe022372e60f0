//! Map View
//!
//! Radial map of the ten superskills. Node colour follows progress, node
//! size follows how much was written. Selecting a node shows its details.

use leptos::prelude::*;

use superskills_core::domain::{Reflection, Superskill};

use crate::components::{ImageDescriptionCard, SectionPreview};
use crate::context::use_reflections;
use crate::map_layout::{color_tier, connection_lines, line_stroke, node_position, node_size_px, size_tier};
use crate::store::{use_ui_store, UiStateStoreFields};

/// What a map node needs to render
#[derive(Clone, Debug, PartialEq)]
struct MapNode {
    id: u32,
    name: String,
    topic: Option<Superskill>,
    color_tier: u8,
    size_px: u32,
}

impl MapNode {
    fn from_reflection(reflection: &Reflection) -> Self {
        Self {
            id: reflection.id,
            name: reflection.superskill.clone(),
            topic: reflection.topic(),
            color_tier: color_tier(reflection.progress().percent()),
            size_px: node_size_px(size_tier(reflection.text_length())),
        }
    }
}

#[component]
pub fn MapView() -> impl IntoView {
    let ctx = use_reflections();
    let ui = use_ui_store();

    let page_title = move || ctx.with(|s| s.settings().page_title.clone());
    let page_description = move || ctx.with(|s| s.settings().page_description.clone());
    let selected = Signal::derive(move || ctx.with(|s| s.selected_reflection().cloned()));
    let selected_id = move || selected.with(|r| r.as_ref().map(|r| r.id));
    let nodes = move || ctx.with(|s| s.reflections().iter().map(MapNode::from_reflection).collect::<Vec<_>>());

    // Selected record's wallpaper wins over the page wallpaper
    let active_wallpaper = move || {
        ctx.with(|s| {
            s.selected_reflection()
                .map(|r| r.wallpaper_url.clone())
                .filter(|url| !url.is_empty())
                .or_else(|| Some(s.settings().wallpaper_url.clone()).filter(|url| !url.is_empty()))
        })
    };
    let is_dark = move || ui.theme().get().is_dark();

    let container_style = move || match active_wallpaper() {
        Some(url) => format!(
            "background-image: url('{}'); background-size: cover; background-position: center; background-repeat: no-repeat;",
            url.replace('\'', "%27")
        ),
        None => String::new(),
    };

    let show_story = move || selected_id().is_none() && !page_description().is_empty();

    let lines = move || {
        let count = ctx.with(|s| s.reflections().len());
        let (stroke, width) = line_stroke(active_wallpaper().is_some(), is_dark());
        connection_lines(count)
            .into_iter()
            .map(|(i, j)| {
                let a = node_position(i, count);
                let b = node_position(j, count);
                view! {
                    <line
                        x1=format!("{}%", a.left)
                        y1=format!("{}%", a.top)
                        x2=format!("{}%", b.left)
                        y2=format!("{}%", b.top)
                        stroke=stroke
                        stroke-width=width
                    />
                }
            })
            .collect_view()
    };

    let node_views = move || {
        let nodes = nodes();
        let count = nodes.len();
        let current = selected_id();
        nodes
            .into_iter()
            .enumerate()
            .map(|(index, node)| {
                let position = node_position(index, count);
                let style = format!(
                    "left: {}%; top: {}%; width: {}px; height: {}px;",
                    position.left, position.top, node.size_px, node.size_px
                );
                let class = format!("map-node tier-{}", node.color_tier);
                let is_selected = current == Some(node.id);
                let topic = node.topic;
                view! {
                    <div
                        class=class
                        class:selected=is_selected
                        style=style
                        on:click=move |_| {
                            if !is_selected {
                                ctx.select(topic);
                            }
                        }
                    >
                        <p class="map-node-label">{node.name}</p>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="map-page">
            <div class="map-heading">
                <h1>{page_title}</h1>
                <Show when=show_story>
                    <div class="story">
                        <button class="story-toggle" on:click=move |_| ui.story_open().update(|open| *open = !*open)>
                            <span>"Story"</span>
                            {move || if ui.story_open().get() { " ▴" } else { " ▾" }}
                        </button>
                        <Show when=move || ui.story_open().get()>
                            <p class="story-text">{page_description}</p>
                        </Show>
                    </div>
                </Show>
            </div>

            <div class="map-container" class:with-wallpaper=move || active_wallpaper().is_some() style=container_style>
                <div class="map-square">
                    <svg class="map-lines">{lines}</svg>
                    {node_views}
                </div>
            </div>

            {move || selected.get().map(|reflection| view! { <ImageDescriptionCard reflection=reflection /> })}

            <Show
                when=move || selected_id().is_some()
                fallback=|| view! {
                    <div class="card empty-hint">
                        <p>"Wähle einen Superskill aus der Karte aus, um die Details anzuzeigen."</p>
                    </div>
                }
            >
                <div class="card details">
                    <h2>{move || selected.with(|r| r.as_ref().map(|r| r.superskill.clone()))}</h2>
                    <SectionPreview reflection=selected />
                </div>
            </Show>
        </div>
    }
}
