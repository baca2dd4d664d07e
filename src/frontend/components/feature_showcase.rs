use leptos::prelude::*;

use super::FeatureCard;
use crate::catalog::FEATURES;
use crate::models::FeatureDescriptor;

/// Horizontal carousel of feature cards.
///
/// Paging is left to the browser: the track snaps to card edges and scrolls
/// smoothly, so there is no current-index state here.
#[component]
pub fn FeatureShowcase(features: Vec<FeatureDescriptor>) -> impl IntoView {
    view! {
        <div class="relative w-full overflow-hidden">
            <div class="feature-track flex snap-x snap-mandatory gap-6 overflow-x-auto scroll-smooth pb-4">
                {features
                    .into_iter()
                    .map(|feature| view! { <FeatureCard feature=feature/> })
                    .collect_view()}
            </div>
        </div>
    }
}

/// The product feature carousel used on the landing page.
#[component]
pub fn ProductFeatureShowcase() -> impl IntoView {
    view! { <FeatureShowcase features=FEATURES.to_vec()/> }
}
