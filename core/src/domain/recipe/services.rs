use tracing::debug;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    recipe::{
        entities::DishComposition,
        ports::{RecipeRepository, RecipeService},
        scaling::scale_dish,
        value_objects::ScaleDishInput,
    },
};

impl<RR> RecipeService for Service<RR>
where
    RR: RecipeRepository,
{
    async fn list_dishes(&self) -> Result<Vec<String>, CoreError> {
        Ok(self.recipe_repository.table().dish_names())
    }

    async fn scale_dish(&self, input: ScaleDishInput) -> Result<DishComposition, CoreError> {
        let table = self.recipe_repository.table();

        let ingredients = scale_dish(
            &table,
            &input.dish_name,
            input.weight,
            self.unknown_percentage_policy,
        )?;

        debug!(
            dish = %input.dish_name,
            weight = input.weight.grams(),
            ingredients = ingredients.len(),
            "scaled dish"
        );

        Ok(DishComposition::new(input.dish_name, input.weight, ingredients))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::recipe::{
        entities::{RecipeRow, RecipeTable},
        ports::MockRecipeRepository,
        value_objects::{NumericCell, UnknownPercentagePolicy, Weight},
    };

    fn repository_with(rows: Vec<RecipeRow>) -> MockRecipeRepository {
        let table = Arc::new(RecipeTable::from_iter(rows));
        let mut repository = MockRecipeRepository::new();
        repository
            .expect_table()
            .returning(move || Arc::clone(&table));
        repository
    }

    fn soup_rows() -> Vec<RecipeRow> {
        vec![
            RecipeRow::new("Soup", "Water", NumericCell::Known(70.0)),
            RecipeRow::new("Soup", "Salt", NumericCell::Known(5.0)),
            RecipeRow::new("Soup", "Vegetables", NumericCell::Known(25.0)),
            RecipeRow::new("Soup", "Herbs", NumericCell::Unknown),
            RecipeRow::new("Pie", "Flour", NumericCell::Known(55.0)),
        ]
    }

    #[tokio::test]
    async fn test_list_dishes_sorted() {
        let service = Service::new(repository_with(soup_rows()), UnknownPercentagePolicy::Retain);
        assert_eq!(service.list_dishes().await.unwrap(), vec!["Pie", "Soup"]);
    }

    #[tokio::test]
    async fn test_scale_dish_builds_composition() {
        let service = Service::new(repository_with(soup_rows()), UnknownPercentagePolicy::Retain);

        let composition = service
            .scale_dish(ScaleDishInput {
                dish_name: "Soup".to_string(),
                weight: Weight::try_from(200).unwrap(),
            })
            .await
            .unwrap();

        assert_eq!(composition.dish_name, "Soup");
        assert_eq!(composition.weight.grams(), 200);
        assert_eq!(composition.ingredients.len(), 4);
        assert_eq!(composition.ingredients[0].ingredient_name, "Water");
        assert_eq!(composition.ingredients[3].mass, None);
        assert_eq!(composition.total_mass, 200.0);
    }

    #[tokio::test]
    async fn test_scale_dish_uses_configured_policy() {
        let service = Service::new(repository_with(soup_rows()), UnknownPercentagePolicy::Reject);

        let result = service
            .scale_dish(ScaleDishInput {
                dish_name: "Soup".to_string(),
                weight: Weight::try_from(100).unwrap(),
            })
            .await;

        assert!(matches!(result, Err(CoreError::UnknownPercentage { .. })));
    }

    #[tokio::test]
    async fn test_scale_dish_not_found() {
        let service = Service::new(repository_with(Vec::new()), UnknownPercentagePolicy::Retain);

        let result = service
            .scale_dish(ScaleDishInput {
                dish_name: "Soup".to_string(),
                weight: Weight::try_from(100).unwrap(),
            })
            .await;

        assert_eq!(result, Err(CoreError::DishNotFound("Soup".to_string())));
    }
}
