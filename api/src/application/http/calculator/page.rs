use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use dishscale_core::domain::recipe::entities::DishComposition;

pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Everything the calculator page shows for one request.
#[derive(Debug, Default)]
pub struct CalculatorPage {
    pub root_path: String,
    pub dishes: Vec<String>,
    pub selected_dish: Option<String>,
    pub weight_input: Option<String>,
    pub error: Option<String>,
    pub result: Option<DishComposition>,
}

const STYLE: &str = "body { font-family: Arial, sans-serif; padding: 20px; max-width: 800px; margin: 0 auto; }
select, input, button { padding: 10px; margin: 5px 0; width: 100%; box-sizing: border-box; }
button { background-color: #4CAF50; color: white; border: none; cursor: pointer; }
button:hover { background-color: #45a049; }
.table { width: 100%; border-collapse: collapse; margin-top: 20px; }
.table th, .table td { border: 1px solid #ddd; padding: 8px; text-align: left; }
.table th { background-color: #f2f2f2; }
.error { color: red; margin: 10px 0; }";

impl CalculatorPage {
    pub fn render(&self) -> Html<String> {
        let mut html = String::with_capacity(4096);

        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        html.push_str("<title>Recipe calculator</title>\n");
        html.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
        );
        html.push_str(&format!("<style>\n{STYLE}\n</style>\n"));
        html.push_str("</head>\n<body>\n<h1>Dish composition</h1>\n");

        let action = if self.root_path.is_empty() {
            "/".to_string()
        } else {
            format!("{}/", self.root_path)
        };
        html.push_str(&format!(
            "<form method=\"POST\" action=\"{}\">\n",
            escape(&action)
        ));
        self.render_dish_select(&mut html);
        html.push_str(&format!(
            "<input type=\"number\" name=\"weight\" placeholder=\"Weight (g)\" required min=\"1\" value=\"{}\">\n",
            escape(self.weight_input.as_deref().unwrap_or(""))
        ));
        html.push_str("<button type=\"submit\">Calculate</button>\n</form>\n");

        if let Some(error) = &self.error {
            html.push_str(&format!("<div class=\"error\">{}</div>\n", escape(error)));
        }

        if let Some(result) = &self.result {
            render_result(&mut html, result);
        }

        html.push_str("</body>\n</html>\n");
        Html(html)
    }

    fn render_dish_select(&self, html: &mut String) {
        html.push_str("<select name=\"dish\" required>\n");

        let nothing_selected = self.selected_dish.is_none();
        html.push_str(&format!(
            "<option value=\"\" disabled{}>Choose a dish</option>\n",
            if nothing_selected { " selected" } else { "" }
        ));

        for dish in &self.dishes {
            let selected = self.selected_dish.as_deref() == Some(dish.as_str());
            html.push_str(&format!(
                "<option value=\"{0}\"{1}>{0}</option>\n",
                escape(dish),
                if selected { " selected" } else { "" }
            ));
        }

        html.push_str("</select>\n");
    }
}

fn render_result(html: &mut String, result: &DishComposition) {
    html.push_str(&format!(
        "<h2>Result: {} ({} g)</h2>\n",
        escape(&result.dish_name),
        result.weight
    ));
    html.push_str("<div class=\"table-container\">\n<table class=\"table table-striped\">\n");
    html.push_str("<thead><tr><th>Ingredient</th><th>g</th></tr></thead>\n<tbody>\n");

    for ingredient in &result.ingredients {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td></tr>\n",
            escape(&ingredient.ingredient_name),
            format_mass(ingredient.mass)
        ));
    }

    html.push_str("</tbody>\n</table>\n</div>\n");
}

/// Calculator page answered with a 500 and a generic message.
pub fn unexpected_error_page(root_path: &str) -> Response {
    let page = CalculatorPage {
        root_path: root_path.to_string(),
        error: Some(UNEXPECTED_ERROR_MESSAGE.to_string()),
        ..CalculatorPage::default()
    };

    (StatusCode::INTERNAL_SERVER_ERROR, page.render()).into_response()
}

/// Grams with at most two decimals, trailing zeros dropped.
pub fn format_mass(mass: Option<f64>) -> String {
    match mass {
        Some(grams) => {
            let formatted = format!("{grams:.2}");
            let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
            if trimmed == "-0" {
                "0".to_string()
            } else {
                trimmed.to_string()
            }
        }
        None => "n/a".to_string(),
    }
}

pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
