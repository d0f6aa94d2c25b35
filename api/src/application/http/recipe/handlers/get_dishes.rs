use axum::extract::State;
use dishscale_core::domain::recipe::ports::RecipeService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetDishesResponse {
    pub data: Vec<String>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "recipe",
    summary = "List dishes",
    description = "Distinct dish names of the loaded recipe table, sorted ascending.",
    responses(
        (status = 200, body = GetDishesResponse)
    ),
)]
pub async fn get_dishes(
    State(state): State<AppState>,
) -> Result<Response<GetDishesResponse>, ApiError> {
    let dishes = state.service.list_dishes().await.map_err(ApiError::from)?;

    Ok(Response::OK(GetDishesResponse { data: dishes }))
}
