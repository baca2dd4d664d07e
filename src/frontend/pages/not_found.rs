//! Fallback page for unknown routes

use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    log::debug!("rendering not-found page");

    view! {
        <div class="min-h-screen flex items-center justify-center px-6">
            <div class="text-center">
                <h1 class="text-8xl font-bold text-sky-400 mb-4">"404"</h1>
                <p class="text-2xl font-semibold mb-2">"This page doesn't exist"</p>
                <p class="text-slate-400 mb-8 max-w-md">
                    "Try the documentation or head back to the product overview."
                </p>
                <div class="flex gap-4 justify-center">
                    <a href="/" class="btn-primary">"Overview"</a>
                    <a href="/docs/" class="btn-ghost">"Documentation"</a>
                </div>
            </div>
        </div>
    }
}
