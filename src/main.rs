use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;

use notes_backend::notes::NoteStore;
use notes_backend::{config, controllers, AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    log::info!("Notes backend v{}", env!("CARGO_PKG_VERSION"));

    let notes_file = config::notes_file();
    let store = NoteStore::open(&notes_file)
        .map_err(|e| std::io::Error::other(format!("Failed to open note store: {}", e)))?;
    let store = Arc::new(store);
    log::info!("Using notes file: {}", store.path().display());

    // One shared state for all workers, so uptime has a single epoch.
    let state = web::Data::new(AppState {
        store,
        started_at: std::time::Instant::now(),
    });

    let port = config::port();
    log::info!("Listening on http://0.0.0.0:{}", port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .wrap(cors)
            .configure(controllers::health::config_routes)
            .configure(controllers::notes::config)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
