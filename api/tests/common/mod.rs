use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use axum_test::TestServer;
use clap::Parser;
use dishscale_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use tempfile::NamedTempFile;
use test_context::AsyncTestContext;

const PREAMBLE_LINES: usize = 10;

const HEADER: &str = "Название;Состав;Масса;%;г;Вес ингр-тов;р;Цена за 1 кг;Траты всего;\
Потери, %;ЧП;Маржа;Ссылка ПК;;;;;;";

const ROWS: &[&str] = &[
    "Soup;Water;1000;70 %;700;1000;0 ₽;0 ₽;0 ₽;0%;0 ₽;0%;;;;;;;",
    "Soup;Salt;1000;5 %;50;1000;1,20 ₽;24 ₽;1,20 ₽;0%;1,20 ₽;10%;;;;;;;",
    "Soup;Vegetables;1000;25 %;250;1000;12,50 ₽;50 ₽;12,50 ₽;15,3 %;10,00 ₽;20 %;;;;;;;",
    "Fish & Chips;Fish;400;60%;;;;;;;;;;;;;;;",
    "Fish & Chips;Chips;400;40%;;;;;;;;;;;;;;;",
    "Stew;Spice;;#ЗНАЧ!;;;;;;;;;;;;;;;",
    "Stew;Meat;;60%;;;;;;;;;;;;;;;",
    "Stew;Potato;;40%;;;;;;;;;;;;;;;",
];

pub fn recipes_export() -> String {
    let mut content = String::new();
    for i in 1..=PREAMBLE_LINES {
        content.push_str(&format!("Технологическая карта;{i};;\n"));
    }
    content.push_str(HEADER);
    content.push('\n');
    for row in ROWS {
        content.push_str(row);
        content.push('\n');
    }
    content
}

pub fn server_for(recipes_path: &Path, extra_args: &[&str]) -> TestServer {
    let mut argv = vec![
        "dishscale-api".to_string(),
        "--recipes-path".to_string(),
        recipes_path.display().to_string(),
        "--metrics".to_string(),
        "false".to_string(),
    ];
    argv.extend(extra_args.iter().map(|arg| arg.to_string()));

    let args = Arc::new(Args::parse_from(argv));
    let app = router(state(args)).unwrap();

    TestServer::new(app).unwrap()
}

pub struct RecipeApiContext {
    pub server: TestServer,
    _recipes: NamedTempFile,
}

impl AsyncTestContext for RecipeApiContext {
    async fn setup() -> Self {
        let mut recipes = NamedTempFile::new().unwrap();
        recipes.write_all(recipes_export().as_bytes()).unwrap();
        recipes.flush().unwrap();

        let server = server_for(recipes.path(), &[]);

        Self {
            server,
            _recipes: recipes,
        }
    }
}
