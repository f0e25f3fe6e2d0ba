pub mod configuration;
pub mod core;
pub mod order_page;
pub mod order_panel;
pub mod utils;

pub use reqwest::Client;
