use axum::{Router, routing::get};

use super::handlers::{show_calculator::show_calculator, submit_calculator::submit_calculator};
use crate::application::http::server::{app_state::AppState, http_server::catch_panics_as_page};

pub fn calculator_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    catch_panics_as_page(
        Router::new().route(
            &format!("{}/", root_path),
            get(show_calculator).post(submit_calculator),
        ),
        root_path,
    )
}
