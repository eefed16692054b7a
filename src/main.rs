use actix_web::{middleware, web, App, HttpServer};
use solid_calc::config::{LoggingSettings, Settings};
use solid_calc::routes::info::{ENDPOINTS, SERVICE_NAME};
use solid_calc::routes::{self, AppState};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match logging.format.as_str() {
        "pretty" => subscriber.pretty().init(),
        "json" => subscriber.json().init(),
        _ => subscriber.init(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    init_logging(&settings.logging);

    info!("Starting {} v{}", SERVICE_NAME, env!("CARGO_PKG_VERSION"));

    let app_state = AppState::default();
    let cors_settings = settings.server.cors.clone();
    let bind_address = settings.bind_address();

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors_settings.build())
            .wrap(middleware::Logger::default())
            .configure(routes::configure_routes)
    });

    if let Some(workers) = settings.server.workers {
        server = server.workers(workers);
    }

    let server = server.bind(&bind_address).map_err(|e| {
        error!("Failed to bind {}: {}", bind_address, e);
        e
    })?;

    info!("Server running on http://{}", bind_address);
    for (path, description) in ENDPOINTS {
        info!("  {} {}", path, description);
    }

    server.run().await
}
