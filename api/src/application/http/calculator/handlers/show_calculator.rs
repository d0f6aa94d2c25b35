use axum::{extract::State, response::Html};
use dishscale_core::domain::recipe::ports::RecipeService;
use tracing::error;

use crate::application::http::{calculator::page::CalculatorPage, server::app_state::AppState};

pub async fn show_calculator(State(state): State<AppState>) -> Html<String> {
    let mut page = CalculatorPage {
        root_path: state.args.server.root_path.clone(),
        ..CalculatorPage::default()
    };

    match state.service.list_dishes().await {
        Ok(dishes) => page.dishes = dishes,
        Err(e) => {
            error!("Failed to list dishes: {}", e);
            page.error = Some(format!("An error occurred: {e}"));
        }
    }

    page.render()
}
