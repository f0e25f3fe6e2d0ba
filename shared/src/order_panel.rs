use crate::configuration::Configuration;
use crate::core::OrderPanel;
use async_trait::async_trait;
use lambda_http::tracing;
use reqwest::header::COOKIE;
use reqwest::{Client, Request};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrderPanelError {
    #[error("request to order panel failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("order panel responded with status {0}")]
    UnexpectedStatus(u16),
}

#[derive(Debug)]
pub struct HttpOrderPanel {
    http_client: Client,
    order_details_url: String,
    session_cookie_name: String,
}

impl HttpOrderPanel {
    pub fn new(http_client: Client, config: &Configuration) -> Self {
        Self {
            http_client,
            order_details_url: config.order_details_url.clone(),
            session_cookie_name: config.session_cookie_name.clone(),
        }
    }

    pub fn build_request(&self, order_number: &str, session_id: &str) -> Result<Request, reqwest::Error> {
        self.http_client
            .get(format!("{}{}", self.order_details_url, order_number))
            .header(COOKIE, format!("{}={}", self.session_cookie_name, session_id))
            .build()
    }
}

#[async_trait]
impl OrderPanel for HttpOrderPanel {
    async fn fetch_order_page(
        &self,
        order_number: &str,
        session_id: &str,
    ) -> Result<String, OrderPanelError> {
        let request = self.build_request(order_number, session_id)?;
        let response = self.http_client.execute(request).await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Order panel returned {} for order {}", status, order_number);
            return Err(OrderPanelError::UnexpectedStatus(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}
