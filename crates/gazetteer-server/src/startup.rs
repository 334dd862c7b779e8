use std::net::TcpListener;
use std::time::Instant;

use actix_web::{
    dev::Server,
    web::{self, Data, ServiceConfig},
    App, HttpServer,
};
use anyhow::Context;
use gazetteer_core::{DefaultGazetteer, PlaceSearch};
use tracing::info;
use tracing_actix_web::TracingLogger;

use crate::config::ServerConfig;
use crate::routes::{
    cities::{autocomplete, compare_cities, read_cities_page, read_city},
    health_check::health_check,
    ApiError,
};

/// Gazetteer HTTP application.
///
/// The dataset is loaded and indexed before the listener starts accepting
/// connections; every worker shares the same read-only copy.
pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    /// Loads the dataset, binds the listener and prepares the server.
    ///
    /// Must be called from within the actix runtime.
    pub fn build(config: &ServerConfig) -> anyhow::Result<Self> {
        let data_path = config.data_path();
        let started = Instant::now();
        let db = DefaultGazetteer::load_from_path(&data_path)
            .with_context(|| format!("loading gazetteer from {}", data_path.display()))?;
        let stats = db.stats();
        info!(
            records = stats.records,
            distinct_names = stats.distinct_names,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "dataset ready"
        );

        let listener = TcpListener::bind(config.address())
            .with_context(|| format!("binding {}", config.address()))?;
        let port = listener.local_addr()?.port();
        info!(host = %config.host, port, "listening");

        let server = run(listener, Data::new(db))?;

        Ok(Self { port, server })
    }

    /// Returns the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Runs the server until it receives a shutdown signal.
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

/// Registers the routes and the shared query-error handling.
pub fn configure(cfg: &mut ServiceConfig) {
    let query_config = web::QueryConfig::default()
        .error_handler(|err, _req| ApiError::Validation(err.to_string()).into());

    cfg.app_data(query_config)
        .service(health_check)
        .service(read_city)
        .service(read_cities_page)
        .service(compare_cities)
        .service(autocomplete);
}

/// Creates the HTTP server over an already bound listener.
pub fn run(listener: TcpListener, db: Data<DefaultGazetteer>) -> Result<Server, std::io::Error> {
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(db.clone())
            .configure(configure)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
