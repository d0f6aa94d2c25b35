use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser};
use dishscale_core::domain::{
    common::{DishscaleConfig, RecipeSourceConfig},
    recipe::value_objects::UnknownPercentagePolicy,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "dishscale-api", version, about = "Recipe composition calculator")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub recipes: RecipeArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long, env = "SERVER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, env = "SERVER_PORT", default_value_t = 5000)]
    pub port: u16,

    /// Prefix mounted in front of every route, e.g. `/calculator`.
    #[arg(long, env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5000"
    )]
    pub allowed_origins: Vec<String>,

    /// Expose Prometheus metrics on `/metrics`.
    #[arg(long, env = "SERVER_METRICS", default_value_t = true, action = clap::ArgAction::Set)]
    pub metrics: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct RecipeArgs {
    #[arg(long = "recipes-path", env = "RECIPES_PATH", default_value = "РК.csv")]
    pub path: PathBuf,

    #[arg(long = "recipes-delimiter", env = "RECIPES_DELIMITER", default_value_t = ';')]
    pub delimiter: char,

    #[arg(long = "recipes-skip-rows", env = "RECIPES_SKIP_ROWS", default_value_t = 10)]
    pub skip_rows: usize,

    #[arg(long = "recipes-column-limit", env = "RECIPES_COLUMN_LIMIT", default_value_t = 19)]
    pub column_limit: usize,

    /// retain | exclude | treat_as_zero | reject
    #[arg(
        long = "unknown-percentage",
        env = "UNKNOWN_PERCENTAGE_POLICY",
        default_value = "retain"
    )]
    pub unknown_percentage: UnknownPercentagePolicy,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for DishscaleConfig {
    fn from(args: Args) -> Self {
        DishscaleConfig {
            recipe_source: RecipeSourceConfig {
                path: args.recipes.path,
                // ASCII is checked by `Args::validate`
                delimiter: args.recipes.delimiter as u8,
                skip_rows: args.recipes.skip_rows,
                column_limit: args.recipes.column_limit,
            },
            unknown_percentage_policy: args.recipes.unknown_percentage,
        }
    }
}

impl Args {
    pub fn validate(&self) -> Result<(), String> {
        if !self.recipes.delimiter.is_ascii() {
            return Err(format!(
                "recipes delimiter must be a single ASCII character, got '{}'",
                self.recipes.delimiter
            ));
        }
        if self.recipes.column_limit == 0 {
            return Err("recipes column limit must be at least 1".to_string());
        }
        Ok(())
    }
}
