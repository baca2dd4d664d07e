pub mod components;
pub mod pages;
pub mod zoom;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use pages::{LandingPage, NotFound};
use zoom::ZoomController;

/// HTML shell for SSR - provides the full document structure
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root component: metadata, the shared zoom controller and routes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ZoomController::new());

    view! {
        <Stylesheet id="leptos" href="/pkg/sitefront.css"/>
        <Title text="Sitefront - Observability, one place"/>
        <Meta name="description" content="Application performance monitoring, distributed tracing, logs and LLM observability in a single product"/>

        <Router>
            <main>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=LandingPage/>
                </Routes>
            </main>
        </Router>
    }
}
