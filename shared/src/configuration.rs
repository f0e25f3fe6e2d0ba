use figment::providers::Env;
use figment::Figment;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Configuration {
    /// Order details page, the order number is appended as-is.
    pub order_details_url: String,
    #[serde(default = "default_session_cookie_name")]
    pub session_cookie_name: String,
    #[serde(default = "default_session_id_header")]
    pub session_id_header: String,
    #[serde(default = "default_order_number_param")]
    pub order_number_param: String,
    #[serde(default = "default_album_order_number_param")]
    pub album_order_number_param: String,
    /// Attribute carrying the album order number on the order page rows.
    #[serde(default = "default_row_id_attribute")]
    pub row_id_attribute: String,
    /// Exact cell text the panel renders for a zero price.
    #[serde(default = "default_price_zero_value")]
    pub price_zero_value: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_session_cookie_name() -> String {
    "PHPSESSID".to_string()
}

fn default_session_id_header() -> String {
    "x-session-id".to_string()
}

fn default_order_number_param() -> String {
    "orderNumber".to_string()
}

fn default_album_order_number_param() -> String {
    "albumOrderNumber".to_string()
}

fn default_row_id_attribute() -> String {
    "id".to_string()
}

fn default_price_zero_value() -> String {
    "0.00".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl Configuration {
    /// Builds a configuration pointing at `order_details_url` with every other
    /// value left at its default.
    pub fn new(order_details_url: &str) -> Self {
        Self {
            order_details_url: order_details_url.to_string(),
            session_cookie_name: default_session_cookie_name(),
            session_id_header: default_session_id_header(),
            order_number_param: default_order_number_param(),
            album_order_number_param: default_album_order_number_param(),
            row_id_attribute: default_row_id_attribute(),
            price_zero_value: default_price_zero_value(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }

    pub fn load() -> Result<Self, figment::Error> {
        Figment::new().merge(Env::prefixed("APP_")).extract()
    }
}

impl std::fmt::Display for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "order details url: {}, session header: {}",
            self.order_details_url, self.session_id_header
        )
    }
}
