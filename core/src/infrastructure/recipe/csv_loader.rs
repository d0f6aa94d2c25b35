use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::PathBuf;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, error, info};

use crate::{
    domain::{
        common::RecipeSourceConfig,
        recipe::entities::{LoadError, RecipeTable},
    },
    infrastructure::recipe::mappers::ColumnLayout,
};

/// Reads the recipe spreadsheet export into a [`RecipeTable`].
#[derive(Debug, Clone)]
pub struct CsvRecipeLoader {
    config: RecipeSourceConfig,
}

impl CsvRecipeLoader {
    pub fn new(config: RecipeSourceConfig) -> Self {
        Self { config }
    }

    /// Loads the configured file, falling back to an empty table on any error.
    pub fn load(&self) -> RecipeTable {
        match self.try_load() {
            Ok(table) => table,
            Err(e) => {
                error!(
                    path = %self.config.path.display(),
                    "Failed to load recipes, serving an empty table: {}", e
                );
                RecipeTable::empty()
            }
        }
    }

    pub fn try_load(&self) -> Result<RecipeTable, LoadError> {
        let file = File::open(&self.config.path)?;
        self.load_from_reader(file, Some(self.config.path.clone()))
    }

    pub fn load_from_reader<R: Read>(
        &self,
        reader: R,
        source: Option<PathBuf>,
    ) -> Result<RecipeTable, LoadError> {
        let mut reader = BufReader::new(reader);
        self.skip_preamble(&mut reader)?;

        let mut reader = ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut records = reader.records();

        let header: StringRecord = records.next().transpose()?.ok_or(LoadError::MissingHeader {
            skip_rows: self.config.skip_rows,
        })?;
        let layout = ColumnLayout::from_header(&header, self.config.column_limit)?;

        let mut rows = Vec::new();
        let mut skipped = 0usize;
        for record in records {
            match layout.to_row(&record?) {
                Some(row) => rows.push(row),
                None => skipped += 1,
            }
        }

        if skipped > 0 {
            debug!("Skipped {} recipe lines without a dish name", skipped);
        }

        let unknown_percentages = rows.iter().filter(|row| !row.percentage.is_known()).count();
        let table = RecipeTable::new(rows, source);

        info!(
            rows = table.len(),
            dishes = table.dish_names().len(),
            unknown_percentages,
            "Loaded recipe table"
        );

        Ok(table)
    }

    /// Skips `skip_rows` physical lines, blank ones included.
    fn skip_preamble<R: BufRead>(&self, reader: &mut R) -> Result<(), LoadError> {
        let mut line = Vec::new();
        for _ in 0..self.config.skip_rows {
            line.clear();
            if reader.read_until(b'\n', &mut line)? == 0 {
                return Err(LoadError::MissingHeader {
                    skip_rows: self.config.skip_rows,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::domain::{
        common::entities::app_errors::CoreError,
        recipe::{
            scaling::scale_dish,
            value_objects::{NumericCell, UnknownPercentagePolicy, Weight},
        },
    };

    const HEADER: &str = "Название;Состав;Масса;%;г;Вес ингр-тов;р;Цена за 1 кг;Траты всего;\
Потери, %;ЧП;Маржа;Ссылка ПК;;;;;;";

    fn preamble() -> String {
        (1..=10).map(|i| format!("Техкарта;строка {i};;\n")).collect()
    }

    fn export(lines: &[&str]) -> String {
        let mut content = preamble();
        content.push_str(HEADER);
        content.push('\n');
        for line in lines {
            content.push_str(line);
            content.push('\n');
        }
        content
    }

    fn write_temp(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file.flush().unwrap();
        file
    }

    fn loader_for(path: impl Into<PathBuf>) -> CsvRecipeLoader {
        CsvRecipeLoader::new(RecipeSourceConfig {
            path: path.into(),
            ..RecipeSourceConfig::default()
        })
    }

    fn soup_export() -> String {
        export(&[
            "Soup;Water;1000;70 %;700;1000;0 ₽;0 ₽;0 ₽;0%;0 ₽;0%;http://x;;;;;;",
            "Soup;Salt;1000;5 %;50;1000;1,20 ₽;24 ₽;1,20 ₽;0%;1,20 ₽;10%;;;;;;;",
            "Soup;Vegetables;1000;25 %;250;1000;12,50 ₽;50 ₽;12,50 ₽;15,3 %;10,00 ₽;20 %;;;;;;;",
            ";;;;;;;;;;;;;;;;;;",
            "Pie;Flour;500;#ЗНАЧ!;;500;;;;;;;;;;;;;",
        ])
    }

    #[test]
    fn test_load_normalizes_currency_and_percentage_cells() {
        let file = write_temp(soup_export().as_bytes());
        let table = loader_for(file.path()).try_load().unwrap();

        assert_eq!(table.len(), 4);
        assert_eq!(table.dish_names(), vec!["Pie", "Soup"]);
        assert_eq!(table.source().map(|p| p.as_path()), Some(file.path()));

        let vegetables = &table.rows()[2];
        assert_eq!(vegetables.ingredient_name, "Vegetables");
        assert_eq!(vegetables.percentage, NumericCell::Known(25.0));
        assert_eq!(vegetables.cost, NumericCell::Known(12.5));
        assert_eq!(vegetables.price_per_kg, NumericCell::Known(50.0));
        assert_eq!(vegetables.net_price, NumericCell::Known(10.0));
        assert_eq!(vegetables.loss_percentage, NumericCell::Known(15.3));
        assert_eq!(vegetables.margin_percentage, NumericCell::Known(20.0));
    }

    #[test]
    fn test_malformed_cells_keep_the_row() {
        let file = write_temp(soup_export().as_bytes());
        let table = loader_for(file.path()).try_load().unwrap();

        let flour = &table.rows()[3];
        assert_eq!(flour.dish_name, "Pie");
        assert_eq!(flour.percentage, NumericCell::Unknown);
        assert_eq!(flour.cost, NumericCell::Unknown);
    }

    #[test]
    fn test_loaded_table_scales() {
        let file = write_temp(soup_export().as_bytes());
        let table = loader_for(file.path()).load();

        let scaled = scale_dish(
            &table,
            "Soup",
            Weight::try_from(200).unwrap(),
            UnknownPercentagePolicy::Retain,
        )
        .unwrap();
        let masses: Vec<(&str, Option<f64>)> = scaled
            .iter()
            .map(|i| (i.ingredient_name.as_str(), i.mass))
            .collect();
        assert_eq!(
            masses,
            vec![
                ("Water", Some(140.0)),
                ("Vegetables", Some(50.0)),
                ("Salt", Some(10.0)),
            ]
        );
    }

    #[test]
    fn test_missing_file_degrades_to_empty_table() {
        let dir = tempfile::tempdir().unwrap();
        let loader = loader_for(dir.path().join("missing.csv"));

        assert!(matches!(loader.try_load(), Err(LoadError::Io(_))));

        let table = loader.load();
        assert!(table.is_empty());
        for dish in ["Soup", "Pie", "Anything"] {
            let result = scale_dish(
                &table,
                dish,
                Weight::try_from(100).unwrap(),
                UnknownPercentagePolicy::Retain,
            );
            assert_eq!(result, Err(CoreError::DishNotFound(dish.to_string())));
        }
    }

    #[test]
    fn test_missing_column_degrades_to_empty_table() {
        let mut content = preamble();
        content.push_str("Название;Состав;Масса\nSoup;Water;100\n");
        let file = write_temp(content.as_bytes());
        let loader = loader_for(file.path());

        assert!(matches!(loader.try_load(), Err(LoadError::MissingColumn(_))));
        assert!(loader.load().is_empty());
    }

    #[test]
    fn test_short_file_has_no_header() {
        let file = write_temp(b"only;one;line\n");
        let loader = loader_for(file.path());

        assert!(matches!(
            loader.try_load(),
            Err(LoadError::MissingHeader { skip_rows: 10 })
        ));
        assert!(loader.load().is_empty());
    }

    #[test]
    fn test_invalid_utf8_degrades_to_empty_table() {
        let mut content = soup_export().into_bytes();
        content.extend_from_slice(b"Soup;\xff\xfe;1;1%\n");
        let file = write_temp(&content);
        let loader = loader_for(file.path());

        assert!(matches!(loader.try_load(), Err(LoadError::Csv(_))));
        assert!(loader.load().is_empty());
    }

    #[test]
    fn test_blank_preamble_lines_count_as_rows() {
        let mut content = String::new();
        for i in 0..10 {
            if i % 3 == 0 {
                content.push('\n');
            } else {
                content.push_str(&format!("Техкарта;строка {i};;\n"));
            }
        }
        content.push_str(HEADER);
        content.push_str("\nSoup;Water;;70%;;;;;;;;;;;;;;;\n");

        let table = loader_for("unused.csv")
            .load_from_reader(content.as_bytes(), None)
            .unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0].ingredient_name, "Water");
        assert_eq!(table.rows()[0].percentage, NumericCell::Known(70.0));
    }

    #[test]
    fn test_preamble_shorter_than_skip_rows_has_no_header() {
        let content = "Техкарта;1\n\n\n";

        let result = loader_for("unused.csv").load_from_reader(content.as_bytes(), None);

        assert!(matches!(result, Err(LoadError::MissingHeader { skip_rows: 10 })));
    }

    #[test]
    fn test_load_from_reader_honours_skip_rows() {
        let loader = CsvRecipeLoader::new(RecipeSourceConfig {
            skip_rows: 0,
            ..RecipeSourceConfig::default()
        });
        let content = format!("{HEADER}\nSoup;Water;;70%;;;;;;;;;;;;;;;\n");

        let table = loader
            .load_from_reader(content.as_bytes(), None)
            .unwrap();

        assert_eq!(table.len(), 1);
        assert!(table.source().is_none());
    }
}
