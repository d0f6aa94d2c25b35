use super::handlers::get_dish_composition::{__path_get_dish_composition, get_dish_composition};
use super::handlers::get_dishes::{__path_get_dishes, get_dishes};
use super::handlers::scale_dish::{__path_scale_dish, scale_dish};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_dishes, get_dish_composition, scale_dish))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/api/dishes", root_path), get(get_dishes))
        .route(
            &format!("{}/api/dishes/{{dish_name}}/composition", root_path),
            get(get_dish_composition),
        )
        .route(&format!("{}/api/dishes/scale", root_path), post(scale_dish))
}
