use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::{entities::TableHealthStatus, ports::HealthCheckService},
    recipe::ports::RecipeRepository,
};

impl<RR> HealthCheckService for Service<RR>
where
    RR: RecipeRepository,
{
    async fn readiness(&self) -> Result<TableHealthStatus, CoreError> {
        let table = self.recipe_repository.table();

        Ok(TableHealthStatus {
            rows: table.len(),
            dishes: table.dish_names().len(),
            source: table.source().map(|path| path.display().to_string()),
            loaded_at: table.loaded_at(),
            is_empty: table.is_empty(),
        })
    }
}
