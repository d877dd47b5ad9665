pub mod json;
pub mod text;

pub use json::{JsonConfig, to_json};
pub use text::{TextConfig, TextFormatter, current_to_text, days_to_text, hours_to_text};
