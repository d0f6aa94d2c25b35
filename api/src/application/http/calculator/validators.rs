use serde::{Deserialize, Serialize};
use validator::Validate;

/// Fields posted by the calculator form. Both arrive as raw text so that a
/// bad weight can be reported on the page instead of rejecting the request.
#[derive(Debug, Default, Serialize, Deserialize, Validate)]
pub struct CalculatorForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "Please choose a dish"))]
    pub dish: String,

    #[serde(default)]
    pub weight: String,
}
