//! Bind-mount logging demo — appends every request to a host-visible log
//! file and serves a single greeting route.

use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use dotenv::dotenv;

use notes_backend::config;
use notes_backend::middleware::RequestLog;

async fn index() -> impl Responder {
    HttpResponse::Ok().body("Hello from Docker bind mount! Try editing this message.")
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let log_file = config::request_log_file();
    log::info!("Appending request log to {}", log_file.display());
    // One append handle shared across workers; lines stay whole under its lock.
    let request_log = RequestLog::open(&log_file)?;

    let port = config::port();
    log::info!("Listening on http://0.0.0.0:{}", port);

    HttpServer::new(move || {
        App::new()
            .wrap(request_log.clone())
            .route("/", web::get().to(index))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
