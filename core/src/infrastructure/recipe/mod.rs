pub mod csv_loader;
pub mod mappers;
pub mod repositories;

pub use csv_loader::CsvRecipeLoader;
pub use repositories::InMemoryRecipeRepository;
