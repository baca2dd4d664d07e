use leptos::ev;
use leptos::html;
use leptos::prelude::*;

use crate::frontend::zoom::ZoomController;
use crate::models::{Attribution, ImageDescriptor};

/// Image with a caption that enlarges into an overlay when clicked.
///
/// The caption ends with "Source: <label>" linking to the attribution, if
/// any. Only the image is a zoom target, so the caption link stays
/// clickable. The class props are passed straight through to the zoom region,
/// the `<figure>`, the `<img>` and the `<figcaption>`.
#[component]
pub fn Figure(
    image: ImageDescriptor,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] figure_class: String,
    #[prop(optional, into)] caption_class: String,
    #[prop(optional, into)] container_class: String,
) -> impl IntoView {
    let zoom = ZoomController::use_or_local();
    let id = zoom.register();

    let trigger = NodeRef::<html::Button>::new();
    let minimize = NodeRef::<html::Button>::new();
    let state = move || zoom.state_of(id);

    let restore_focus = move || {
        if let Some(button) = trigger.get_untracked() {
            let _ = button.focus();
        }
    };

    let dismiss = move || {
        zoom.dismiss(id);
        restore_focus();
    };

    // Escape closes the overlay wherever focus is.
    let escape = window_event_listener(ev::keydown, move |ev| {
        if zoom.dismiss_on_key(id, &ev.key()) {
            restore_focus();
        }
    });

    on_cleanup(move || {
        escape.remove();
        zoom.unregister(id);
    });

    Effect::new(move |_| {
        if state().is_zoomed() {
            if let Some(button) = minimize.get() {
                let _ = button.focus();
            }
        }
    });

    let ImageDescriptor {
        src,
        alt,
        caption,
        attribution,
    } = image;

    let source = match attribution {
        Attribution::Source { link, label } => Some(view! {
            " Source: "
            <a href=link target="_blank" rel="noopener noreferrer">{label}</a>
        }),
        Attribution::None => None,
    };

    let overlay_src = src.clone();
    let overlay_alt = alt.clone();

    view! {
        <div class=container_class data-zoom-state=move || state().as_str()>
            <figure class=figure_class>
                <div class="zoom-image">
                    <img src=src alt=alt class=class/>
                    <button
                        type="button"
                        class="zoom-trigger"
                        aria-label="Expand image"
                        aria-haspopup="dialog"
                        aria-expanded=move || state().is_zoomed().to_string()
                        node_ref=trigger
                        on:click=move |_| zoom.activate(id)
                    ></button>
                </div>
                <figcaption class=caption_class>
                    <i>{caption}{source}</i>
                </figcaption>
            </figure>
            <Show when=move || state().is_zoomed()>
                <div
                    class="zoom-overlay"
                    role="dialog"
                    aria-modal="true"
                    aria-label=overlay_alt.clone()
                    on:click=move |_| dismiss()
                >
                    <img src=overlay_src.clone() alt=overlay_alt.clone() class="zoom-overlay-image"/>
                    <button
                        type="button"
                        class="zoom-dismiss"
                        aria-label="Minimize image"
                        node_ref=minimize
                    ></button>
                </div>
            </Show>
        </div>
    }
}
