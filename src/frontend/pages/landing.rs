use leptos::prelude::*;

use crate::frontend::components::{Footer, LlmMonitoringListicle, Nav, ProductFeatureShowcase};

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col">
            <Nav/>

            <section class="pt-32 pb-16 px-6 flex flex-col items-center text-center">
                <h1 class="text-5xl md:text-6xl font-bold mb-6 leading-tight">
                    "One place for "
                    <span class="bg-gradient-to-r from-sky-400 via-indigo-400 to-sky-500 bg-clip-text text-transparent">
                        "all your telemetry"
                    </span>
                </h1>
                <p class="text-xl text-slate-400 max-w-2xl">
                    "Traces, metrics, logs and LLM observability, correlated out of the box."
                </p>
            </section>

            // Features Section
            <section id="features" class="py-16 px-6 bg-slate-900/30">
                <div class="max-w-6xl mx-auto">
                    <h2 class="text-3xl md:text-4xl font-bold mb-10">"Product features"</h2>
                    <ProductFeatureShowcase/>
                </div>
            </section>

            // Integrations Section
            <section id="integrations" class="py-16 px-6">
                <div class="max-w-6xl mx-auto">
                    <h2 class="text-3xl md:text-4xl font-bold mb-10">"LLM monitoring integrations"</h2>
                    <LlmMonitoringListicle/>
                </div>
            </section>

            <div class="flex-grow"></div>
            <Footer/>
        </div>
    }
    .into_any()
}
