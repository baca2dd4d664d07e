use leptos::prelude::*;

use super::{ArrowRight, Figure};
use crate::models::{FeatureDescriptor, ImageDescriptor};

/// One page of the feature carousel: title, blurb, screenshot and a link.
#[component]
pub fn FeatureCard(feature: FeatureDescriptor) -> impl IntoView {
    let FeatureDescriptor {
        title,
        description,
        href,
        cta_label,
        image,
    } = feature;
    let key = title.clone();

    view! {
        <section
            class="flex w-full flex-shrink-0 snap-start flex-col gap-4 md:w-8/12"
            data-key=key
        >
            <h4 class="text-lg font-semibold">{title}</h4>
            <p class="text-sm text-slate-500 dark:text-slate-400">{description}</p>
            <Figure
                image=ImageDescriptor::from(image)
                class="h-48 w-full object-cover md:h-56"
                figure_class="m-0 flex flex-col gap-2 overflow-hidden rounded-lg border border-slate-200/60 bg-slate-100/60 shadow-sm dark:border-slate-500/40 dark:bg-slate-900/50"
                caption_class="px-4 pb-4 text-xs italic text-slate-500 dark:text-slate-400"
                container_class="zoom-region"
            />
            <a
                href=href
                class="feature-cta inline-flex items-center gap-1 text-sm font-medium text-sky-400 transition-colors hover:text-sky-500"
            >
                {cta_label}
                <ArrowRight size=14/>
            </a>
        </section>
    }
}
