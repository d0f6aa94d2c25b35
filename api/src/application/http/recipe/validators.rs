use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ScaleDishValidator {
    #[validate(length(min = 1, message = "dish is required"))]
    pub dish: String,

    #[validate(range(min = 1, message = "weight must be a positive whole number of grams"))]
    #[schema(example = 200, minimum = 1)]
    pub weight: u64,
}

#[derive(Debug, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct GetDishCompositionParams {
    /// Target weight in grams.
    #[serde(default)]
    #[schema(example = "200")]
    pub weight: String,
}
