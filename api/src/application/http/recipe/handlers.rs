pub mod get_dish_composition;
pub mod get_dishes;
pub mod scale_dish;
