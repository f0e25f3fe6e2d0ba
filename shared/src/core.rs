use crate::configuration::Configuration;
use crate::order_page::{evaluate_page, LayoutMismatch};
use crate::order_panel::OrderPanelError;
use async_trait::async_trait;
use serde::Serialize;
use std::fmt::Debug;
use thiserror::Error;

#[cfg(any(test, feature = "mocks"))]
use mockall::automock;

/// Identifiers and credentials for one payment check, taken from the inbound request.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PaymentCheckRequest {
    pub order_number: String,
    pub album_order_number: String,
    pub session_id: String,
}

impl PaymentCheckRequest {
    pub fn is_complete(&self) -> bool {
        !self.order_number.is_empty()
            && !self.album_order_number.is_empty()
            && !self.session_id.is_empty()
    }
}

#[derive(Debug, Serialize)]
pub struct PriceZeroResponse {
    pub price_zero: bool,
}

#[cfg_attr(any(test, feature = "mocks"), automock)]
#[async_trait]
pub trait OrderPanel: Debug {
    async fn fetch_order_page(
        &self,
        order_number: &str,
        session_id: &str,
    ) -> Result<String, OrderPanelError>;
}

#[derive(Debug, Error)]
pub enum PaymentCheckError {
    #[error("order panel unavailable: {0}")]
    Upstream(#[from] OrderPanelError),
    #[error("unexpected order page layout: {0}")]
    Layout(#[from] LayoutMismatch),
}

#[derive(Debug)]
pub struct PaymentChecker<P: OrderPanel> {
    order_panel: P,
    row_id_attribute: String,
    price_zero_value: String,
}

impl<P: OrderPanel> PaymentChecker<P> {
    pub fn new(order_panel: P, config: &Configuration) -> Self {
        Self {
            order_panel,
            row_id_attribute: config.row_id_attribute.clone(),
            price_zero_value: config.price_zero_value.clone(),
        }
    }

    /// `Ok(None)` when the order page has no row for the album order number.
    pub async fn check_price_zero(
        &self,
        req: &PaymentCheckRequest,
    ) -> Result<Option<bool>, PaymentCheckError> {
        let page = self
            .order_panel
            .fetch_order_page(&req.order_number, &req.session_id)
            .await?;

        let price_zero = evaluate_page(
            &page,
            &self.row_id_attribute,
            &req.album_order_number,
            &self.price_zero_value,
        )?;

        Ok(price_zero)
    }
}
