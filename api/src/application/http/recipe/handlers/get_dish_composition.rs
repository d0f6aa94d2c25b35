use axum::extract::{Path, Query, State};
use dishscale_core::domain::recipe::{
    entities::DishComposition,
    ports::RecipeService,
    value_objects::{ScaleDishInput, Weight},
};

use crate::application::http::{
    recipe::validators::GetDishCompositionParams,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/{dish_name}/composition",
    tag = "recipe",
    summary = "Scale a dish",
    description = "Mass of every ingredient of the dish at the requested weight, heaviest first.",
    params(
        ("dish_name" = String, Path, description = "Dish name, matched exactly"),
        GetDishCompositionParams,
    ),
    responses(
        (status = 200, body = DishComposition),
        (status = 400, description = "Invalid weight"),
        (status = 404, description = "Dish not found"),
    ),
)]
pub async fn get_dish_composition(
    Path(dish_name): Path<String>,
    Query(params): Query<GetDishCompositionParams>,
    State(state): State<AppState>,
) -> Result<Response<DishComposition>, ApiError> {
    let weight = Weight::parse(&params.weight).map_err(ApiError::from)?;

    let composition = state
        .service
        .scale_dish(ScaleDishInput { dish_name, weight })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(composition))
}
