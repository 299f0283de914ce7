pub mod color;
pub mod config;
pub mod constants;
pub mod key_value_stores;
pub mod user_color;
pub mod utils;

pub use color::{generate_random_color, generate_random_color_with, Color, ColorParseError};
pub use key_value_stores::{JsonFileStore, KeyValueStore, MemoryStore, StoreError};
pub use user_color::{get_user_color, UserColorProvider};
