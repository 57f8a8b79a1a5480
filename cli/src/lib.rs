pub mod app;
pub mod args;
pub mod colors;
pub mod display;
pub mod json_output;
pub mod search;
pub mod utils;

// Re-export commonly used items
pub use args::{Args, Command};
pub use search::find_best_city_match;
pub use utils::format_number;
