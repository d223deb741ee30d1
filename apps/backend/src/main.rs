use actix_web::{web, App, HttpServer};
use expenses::config::db::DbKind;
use expenses::config::server::ServerConfig;
use expenses::infra::state::build_state;
use expenses::middleware::{RequestLog, RequestTrace};
use expenses::{routes, telemetry};
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Configuration comes from the process environment only:
    // EXPENSES_HOST / EXPENSES_PORT, EXPENSES_DB, EXPENSES_SQLITE_PATH,
    // DATABASE_URL or POSTGRES_*.
    let server = match ServerConfig::from_env() {
        Ok(server) => server,
        Err(e) => {
            error!(error = %e, "invalid server configuration");
            std::process::exit(1);
        }
    };

    let db_kind = match DbKind::from_env() {
        Ok(kind) => kind,
        Err(e) => {
            error!(error = %e, "invalid database configuration");
            std::process::exit(1);
        }
    };

    let app_state = match build_state().with_db(db_kind).build().await {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, db_kind = ?db_kind, "failed to build application state");
            std::process::exit(1);
        }
    };

    info!(db_kind = ?db_kind, "database ready");
    info!(host = %server.host, port = server.port, "starting expenses service");

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(RequestLog)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((server.host.as_str(), server.port))?
    .run()
    .await
}
