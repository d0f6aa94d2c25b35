use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    response::Html,
};
use dishscale_core::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::DishComposition,
        ports::RecipeService,
        value_objects::{ScaleDishInput, Weight},
    },
};
use tracing::{debug, error, info};
use validator::Validate;

use crate::application::http::{
    calculator::{page::CalculatorPage, validators::CalculatorForm},
    server::app_state::AppState,
};

pub const INVALID_WEIGHT_MESSAGE: &str =
    "Please enter a valid weight (a positive whole number of grams)";

pub async fn submit_calculator(
    State(state): State<AppState>,
    form: Result<Form<CalculatorForm>, FormRejection>,
) -> Html<String> {
    let dishes = state.service.list_dishes().await.unwrap_or_else(|e| {
        error!("Failed to list dishes: {}", e);
        Vec::new()
    });

    let mut page = CalculatorPage {
        root_path: state.args.server.root_path.clone(),
        dishes,
        ..CalculatorPage::default()
    };

    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            debug!("Rejected calculator form: {}", rejection.body_text());
            page.error = Some(INVALID_WEIGHT_MESSAGE.to_string());
            return page.render();
        }
    };

    page.selected_dish = Some(form.dish.clone()).filter(|dish| !dish.is_empty());
    page.weight_input = Some(form.weight.clone());

    match calculate(&state, form).await {
        Ok(composition) => page.result = Some(composition),
        Err(message) => page.error = Some(message),
    }

    page.render()
}

async fn calculate(state: &AppState, form: CalculatorForm) -> Result<DishComposition, String> {
    if let Err(errors) = form.validate() {
        return Err(first_message(&errors).unwrap_or_else(|| errors.to_string()));
    }

    let weight = Weight::parse(&form.weight).map_err(|e| user_message(&e))?;

    let composition = state
        .service
        .scale_dish(ScaleDishInput {
            dish_name: form.dish,
            weight,
        })
        .await
        .map_err(|e| user_message(&e))?;

    info!(
        dish = %composition.dish_name,
        weight = composition.weight.grams(),
        "calculated dish composition"
    );

    Ok(composition)
}

fn user_message(error: &CoreError) -> String {
    match error {
        CoreError::InvalidWeight(_) => INVALID_WEIGHT_MESSAGE.to_string(),
        CoreError::DishNotFound(_)
        | CoreError::MissingDishName
        | CoreError::UnknownPercentage { .. } => error.to_string(),
    }
}

fn first_message(errors: &validator::ValidationErrors) -> Option<String> {
    errors
        .field_errors()
        .values()
        .flat_map(|errors| errors.iter())
        .find_map(|error| error.message.as_ref().map(|m| m.to_string()))
}
