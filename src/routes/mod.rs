// Route exports
pub mod matches;

use actix_web::web;

pub use matches::{handle_match_request, match_request, AppState};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(matches::configure),
    );
}
