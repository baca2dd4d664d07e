#![allow(dead_code)]

use std::sync::Arc;

use hydration_context::SsrSharedContext;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use scraper::{ElementRef, Html, Selector};

/// Renders a view to HTML inside a fresh reactive owner and parses it.
pub fn render<F, V>(build: F) -> Html
where
    F: FnOnce() -> V,
    V: RenderHtml,
{
    let owner = Owner::new_root(Some(Arc::new(SsrSharedContext::new())));
    let html = owner.with(|| build().to_html());
    Html::parse_fragment(&html)
}

pub fn select<'a>(doc: &'a Html, css: &str) -> Vec<ElementRef<'a>> {
    let selector = Selector::parse(css).expect("Invalid selector in test helper");
    doc.select(&selector).collect()
}

pub fn select_in<'a>(el: ElementRef<'a>, css: &str) -> Vec<ElementRef<'a>> {
    let selector = Selector::parse(css).expect("Invalid selector in test helper");
    el.select(&selector).collect()
}

pub fn text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>()
}

pub fn attr<'a>(el: ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value().attr(name)
}

pub fn classes(el: ElementRef<'_>) -> Vec<String> {
    attr(el, "class")
        .unwrap_or_default()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
