use crate::{
    domain::common::{DishscaleConfig, services::Service},
    infrastructure::recipe::{CsvRecipeLoader, InMemoryRecipeRepository},
};

pub type DishscaleService = Service<InMemoryRecipeRepository>;

/// Loads the recipe table once and wires it into the service.
///
/// Never fails on a bad source: the table is empty instead and every dish
/// lookup reports not found.
pub fn create_service(config: DishscaleConfig) -> DishscaleService {
    let table = CsvRecipeLoader::new(config.recipe_source).load();

    Service::new(
        InMemoryRecipeRepository::new(table),
        config.unknown_percentage_policy,
    )
}
