use leptos::prelude::*;

use super::{ArrowRight, CardIcon};
use crate::models::IconCardDescriptor;

pub const DEFAULT_GRID_COLS: &str = "grid-cols-2 sm:grid-cols-3 md:grid-cols-4";
pub const DEFAULT_VIEW_ALL_HREF: &str = "/docs/";

#[component]
pub fn IconCard(card: IconCardDescriptor, #[prop(into)] section_name: String) -> impl IntoView {
    let IconCardDescriptor {
        name,
        href,
        icon,
        click_name,
    } = card;

    view! {
        <a
            href=href
            class="icon-card group flex flex-col items-center justify-center gap-3 rounded-lg border border-slate-800 bg-slate-900/50 p-4 text-center transition-colors hover:border-slate-600"
            data-analytics-label=click_name
            data-section=section_name
        >
            <span class="icon-card-icon flex h-10 w-10 items-center justify-center">
                <CardIcon icon=icon class="h-7 w-7"/>
            </span>
            <span class="icon-card-name text-sm font-medium">{name}</span>
        </a>
    }
}

/// Responsive grid of integration cards followed by a "view all" link.
///
/// Cards are laid out in the order given. Names are expected to be unique
/// since they double as analytics labels.
#[component]
pub fn IconCardGrid(
    cards: Vec<IconCardDescriptor>,
    #[prop(into)] section_name: String,
    #[prop(into)] view_all_text: String,
    #[prop(into, default = DEFAULT_GRID_COLS.to_string())] grid_cols: String,
    #[prop(into, default = DEFAULT_VIEW_ALL_HREF.to_string())] view_all_href: String,
) -> impl IntoView {
    let cards_view = cards
        .into_iter()
        .map(|card| view! { <IconCard card=card section_name=section_name.clone()/> })
        .collect_view();

    view! {
        <section class="icon-card-section my-6" data-section=section_name.clone() aria-label=section_name.clone()>
            <div class=format!("icon-card-grid grid gap-4 {}", grid_cols)>
                {cards_view}
            </div>
            <div class="mt-4 flex justify-end">
                <a
                    href=view_all_href
                    class="view-all inline-flex items-center gap-1 text-sm font-medium text-sky-400 hover:text-sky-500"
                    data-analytics-label=view_all_text.clone()
                >
                    {view_all_text.clone()}
                    <ArrowRight size=14/>
                </a>
            </div>
        </section>
    }
}
