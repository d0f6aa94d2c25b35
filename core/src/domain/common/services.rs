use crate::domain::recipe::{ports::RecipeRepository, value_objects::UnknownPercentagePolicy};

#[derive(Clone)]
pub struct Service<RR>
where
    RR: RecipeRepository,
{
    pub(crate) recipe_repository: RR,
    pub(crate) unknown_percentage_policy: UnknownPercentagePolicy,
}

impl<RR> Service<RR>
where
    RR: RecipeRepository,
{
    pub fn new(recipe_repository: RR, unknown_percentage_policy: UnknownPercentagePolicy) -> Self {
        Self {
            recipe_repository,
            unknown_percentage_policy,
        }
    }
}
