use actix_web::web;

pub mod expenses;
pub mod health;

/// Register every route of the service.
///
/// Used by `main.rs` and by the integration tests so both see the same
/// surface.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes);
    cfg.configure(expenses::configure_routes);
}
