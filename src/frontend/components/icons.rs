use leptos::prelude::*;

use crate::models::{BrandGlyph, Icon};

/// Sprite sheet holding every [`BrandGlyph`], one `<symbol>` per slug.
pub const BRAND_SPRITE: &str = "/svgs/brands.svg";

#[component]
pub fn ArrowRight(#[prop(default = 14)] size: u32) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size.to_string()
            height=size.to_string()
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d="M5 12h14"/>
            <path d="m12 5 7 7-7 7"/>
        </svg>
    }
}

#[component]
pub fn BrandMark(glyph: BrandGlyph, #[prop(optional, into)] class: String) -> impl IntoView {
    let sprite_ref = format!(r#"<use href="{}#{}"></use>"#, BRAND_SPRITE, glyph.as_str());

    view! {
        <svg
            class=format!("{} {}", class, glyph.tone_class())
            viewBox="0 0 24 24"
            fill="currentColor"
            role="img"
            aria-label=glyph.label()
            data-glyph=glyph.as_str()
            inner_html=sprite_ref
        ></svg>
    }
}

/// Renders either kind of card icon at the given size classes.
#[component]
pub fn CardIcon(icon: Icon, #[prop(into)] class: String) -> impl IntoView {
    match icon {
        Icon::Glyph { glyph } => view! { <BrandMark glyph=glyph class=class/> }.into_any(),
        Icon::Image { src, alt } => view! { <img src=src alt=alt class=class/> }.into_any(),
    }
}
