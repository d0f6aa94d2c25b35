pub mod dish_composition;
pub mod errors;
pub mod recipe_row;
pub mod recipe_table;

pub use dish_composition::*;
pub use errors::*;
pub use recipe_row::*;
pub use recipe_table::*;
