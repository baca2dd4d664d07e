#![recursion_limit = "256"]

mod web;

use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::{web::Data, App, HttpServer};
use leptos::config::get_configuration;
use leptos_actix::{generate_route_list, handle_server_fns, LeptosRoutes};

use sitefront::catalog::validate_catalog;
use sitefront::common::config::SiteConfig;
use sitefront::common::logging::init_logging;
use sitefront::frontend::{shell, App as SiteApp};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = SiteConfig::from_env().map_err(std::io::Error::other)?;
    init_logging(&config.log_filter).map_err(std::io::Error::other)?;

    validate_catalog().map_err(|e| {
        log::error!("Catalog validation failed: {}", e);
        std::io::Error::other(e)
    })?;

    let conf = get_configuration(None).map_err(std::io::Error::other)?;
    let addr = config.bind_addr.unwrap_or(conf.leptos_options.site_addr);

    log::info!(
        "Serving on http://{} (static assets from {})",
        addr,
        config.static_dir.display()
    );

    HttpServer::new(move || {
        let routes = generate_route_list(SiteApp);
        let leptos_options = conf.leptos_options.clone();
        let site_root = leptos_options.site_root.to_string();

        App::new()
            .wrap(Logger::default())
            .configure(|cfg| web::routes::configure(cfg, &config))
            .route("/api/{tail:.*}", handle_server_fns())
            .service(Files::new("/pkg", format!("{site_root}/pkg")))
            .leptos_routes(routes, {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            })
            .app_data(Data::new(leptos_options))
    })
    .bind(addr)?
    .run()
    .await
}
