pub mod show_calculator;
pub mod submit_calculator;
