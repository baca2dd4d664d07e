use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-slate-800 bg-slate-900/50">
            <div class="max-w-6xl mx-auto px-6 py-12 text-center">
                <p class="text-2xl font-bold mb-2">"Sitefront"</p>
                <p class="text-slate-400 mb-6">"Metrics, traces and logs in one place."</p>
                <div class="flex justify-center gap-4 text-sm text-slate-500">
                    <a href="/docs/" class="hover:text-slate-300">"Documentation"</a>
                    <span>"|"</span>
                    <a href="/docs/llm-observability/" class="hover:text-slate-300">"LLM Observability"</a>
                </div>
            </div>
        </footer>
    }
}
