use axum::extract::State;
use dishscale_core::domain::recipe::{
    entities::DishComposition,
    ports::RecipeService,
    value_objects::{ScaleDishInput, Weight},
};

use crate::application::http::{
    recipe::validators::ScaleDishValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/scale",
    tag = "recipe",
    summary = "Scale a dish",
    description = "Same as the composition endpoint, with the query in a JSON body.",
    request_body = ScaleDishValidator,
    responses(
        (status = 200, body = DishComposition),
        (status = 400, description = "Invalid weight or missing dish"),
        (status = 404, description = "Dish not found"),
    ),
)]
pub async fn scale_dish(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ScaleDishValidator>,
) -> Result<Response<DishComposition>, ApiError> {
    let weight = Weight::try_from(payload.weight).map_err(ApiError::from)?;

    let composition = state
        .service
        .scale_dish(ScaleDishInput {
            dish_name: payload.dish,
            weight,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(composition))
}
