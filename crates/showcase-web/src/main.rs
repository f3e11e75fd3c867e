#![recursion_limit = "256"]

#[cfg(feature = "ssr")]
#[derive(clap::Parser, Debug)]
#[command(name = "showcase-web", about = "Serve the services landing page")]
struct Args {
    /// TOML file of [[services]] entries; the built-in catalog is used when omitted
    #[arg(long, env = "SHOWCASE_CATALOG")]
    catalog: Option<std::path::PathBuf>,
}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use axum::Router;
    use clap::Parser;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use showcase_web::catalog::{self, ServiceCatalog};
    use showcase_web::config::CONFIG;
    use tower_http::compression::CompressionLayer;
    use tower_http::services::ServeDir;
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let services = match &args.catalog {
        Some(path) => ServiceCatalog::load(path).map_err(|e| {
            tracing::error!("{:#}", e);
            e
        })?,
        None => {
            tracing::info!("no catalog configured, using built-in services");
            ServiceCatalog::builtin()
        }
    };
    if !catalog::install(services) {
        tracing::warn!("service catalog already installed, keeping the existing one");
    }

    let conf = get_configuration(None).map_err(|e| {
        tracing::error!("Failed to load Leptos configuration: {}", e);
        e
    })?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(showcase_web::app::App);

    let site_root = leptos_options.site_root.clone();
    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || {
                use showcase_web::app::App;
                view! {
                    <!DOCTYPE html>
                    <html lang="en">
                        <head>
                            <meta charset="utf-8" />
                            <meta name="viewport" content="width=device-width, initial-scale=1" />
                            <meta name="theme-color" content="#0a0a0b" />
                            <meta name="description" content=CONFIG.description />
                            <link rel="stylesheet" href="/pkg/showcase-web.css" />
                            <HydrationScripts options=leptos_options.clone() />
                        </head>
                        <body class="bg-premium-black">
                            <App />
                        </body>
                    </html>
                }
            }
        })
        .fallback_service(ServeDir::new(&*site_root))
        .layer(CompressionLayer::new())
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        tracing::error!("Failed to bind to {}: {}", addr, e);
        e
    })?;

    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app).await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        e
    })?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // Client builds enter through `showcase_web::hydrate`
}
