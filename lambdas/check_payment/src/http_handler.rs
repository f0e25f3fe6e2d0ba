use lambda_http::{http::StatusCode, tracing, Error, IntoResponse, Request, RequestExt};
use shared::configuration::Configuration;
use shared::core::{
    OrderPanel, PaymentCheckError, PaymentCheckRequest, PaymentChecker, PriceZeroResponse,
};
use shared::utils::{empty_response, json_response, server_error_response};

/// Where the identifiers and session id live on the inbound request.
pub(crate) struct RequestFields {
    order_number_param: String,
    album_order_number_param: String,
    session_id_header: String,
}

impl RequestFields {
    pub fn new(config: &Configuration) -> Self {
        Self {
            order_number_param: config.order_number_param.clone(),
            album_order_number_param: config.album_order_number_param.clone(),
            session_id_header: config.session_id_header.clone(),
        }
    }

    fn extract(&self, event: &Request) -> PaymentCheckRequest {
        let query_params = event.query_string_parameters();
        let param = |name: &str| query_params.first(name).unwrap_or_default().to_string();

        PaymentCheckRequest {
            order_number: param(&self.order_number_param),
            album_order_number: param(&self.album_order_number_param),
            session_id: event
                .headers()
                .get(self.session_id_header.as_str())
                .and_then(|h| h.to_str().ok())
                .unwrap_or_default()
                .to_string(),
        }
    }
}

pub(crate) struct HandlerDeps<P: OrderPanel> {
    pub request_fields: RequestFields,
    pub payment_checker: PaymentChecker<P>,
}

pub(crate) async fn function_handler<P: OrderPanel>(
    deps: &HandlerDeps<P>,
    event: Request,
) -> Result<impl IntoResponse, Error> {
    let check_request = deps.request_fields.extract(&event);
    tracing::info!(
        "checking payment for {}/{}",
        check_request.order_number,
        check_request.album_order_number
    );

    if !check_request.is_complete() {
        return empty_response(&StatusCode::NO_CONTENT);
    }

    match deps.payment_checker.check_price_zero(&check_request).await {
        Ok(Some(price_zero)) => json_response(&StatusCode::OK, &PriceZeroResponse { price_zero }),
        Ok(None) => empty_response(&StatusCode::NO_CONTENT),
        Err(PaymentCheckError::Upstream(e)) => {
            tracing::error!("Failed to fetch order page: {:?}", e);
            empty_response(&StatusCode::BAD_GATEWAY)
        }
        Err(e) => {
            tracing::error!("Failed to check payment: {}", e);
            server_error_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{function_handler, HandlerDeps, RequestFields};
    use lambda_http::http::Request;
    use lambda_http::{Body, IntoResponse, RequestExt};
    use mockall::predicate;
    use shared::configuration::Configuration;
    use shared::core::{MockOrderPanel, PaymentChecker};
    use shared::order_panel::OrderPanelError;
    use std::collections::HashMap;

    const ORDER_PAGE: &str = r#"<html><body><table><tbody>
<tr><td><span>0.00</span></td><td id="A-1">A-1</td></tr>
<tr><td><span>24.90</span></td><td id="A-2">A-2</td></tr>
<tr><td id="A-3">A-3</td></tr>
</tbody></table></body></html>"#;

    fn deps(order_panel: MockOrderPanel) -> HandlerDeps<MockOrderPanel> {
        let config = Configuration::new("https://panel.test/orders/");
        HandlerDeps {
            request_fields: RequestFields::new(&config),
            payment_checker: PaymentChecker::new(order_panel, &config),
        }
    }

    fn panel_returning(page: &'static str) -> MockOrderPanel {
        let mut order_panel = MockOrderPanel::default();
        order_panel
            .expect_fetch_order_page()
            .times(1)
            .with(predicate::eq("123".to_string()), predicate::eq("abc".to_string()))
            .returning(move |_order_number, _session_id| Ok(page.to_string()));
        order_panel
    }

    fn request(
        order_number: Option<&str>,
        album_order_number: Option<&str>,
        session_id: Option<&str>,
    ) -> lambda_http::Request {
        let mut query_string = HashMap::new();
        if let Some(order_number) = order_number {
            query_string.insert("orderNumber".to_string(), order_number.to_string());
        }
        if let Some(album_order_number) = album_order_number {
            query_string.insert("albumOrderNumber".to_string(), album_order_number.to_string());
        }

        let mut builder = Request::builder();
        if let Some(session_id) = session_id {
            builder = builder.header("x-session-id", session_id);
        }
        builder
            .body(Body::Empty)
            .unwrap()
            .with_query_string_parameters(query_string)
    }

    fn body_text(body: &Body) -> String {
        match body {
            Body::Empty => String::new(),
            Body::Text(text) => text.clone(),
            Body::Binary(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        }
    }

    #[tokio::test]
    async fn when_price_is_zero_should_return_true() {
        let deps = deps(panel_returning(ORDER_PAGE));

        let result = function_handler(&deps, request(Some("123"), Some("A-1"), Some("abc"))).await;

        assert!(result.is_ok());
        let data = result.unwrap().into_response().await;
        assert_eq!(data.status(), 200);
        assert_eq!(body_text(data.body()), r#"{"price_zero":true}"#);
    }

    #[tokio::test]
    async fn when_price_is_not_zero_should_return_false() {
        let deps = deps(panel_returning(ORDER_PAGE));

        let result = function_handler(&deps, request(Some("123"), Some("A-2"), Some("abc"))).await;

        assert!(result.is_ok());
        let data = result.unwrap().into_response().await;
        assert_eq!(data.status(), 200);
        assert_eq!(body_text(data.body()), r#"{"price_zero":false}"#);
    }

    #[tokio::test]
    async fn when_album_order_not_on_page_should_return_204() {
        let deps = deps(panel_returning(ORDER_PAGE));

        let result = function_handler(&deps, request(Some("123"), Some("A-9"), Some("abc"))).await;

        assert!(result.is_ok());
        let data = result.unwrap().into_response().await;
        assert_eq!(data.status(), 204);
        assert_eq!(body_text(data.body()), "");
    }

    #[tokio::test]
    async fn when_any_input_is_missing_should_return_204_without_fetching() {
        let cases = [
            request(None, Some("A-1"), Some("abc")),
            request(Some("123"), None, Some("abc")),
            request(Some("123"), Some("A-1"), None),
            request(Some(""), Some("A-1"), Some("abc")),
            request(Some("123"), Some("A-1"), Some("")),
            request(None, None, None),
        ];

        for event in cases {
            let mut order_panel = MockOrderPanel::default();
            order_panel.expect_fetch_order_page().never();
            let deps = deps(order_panel);

            let result = function_handler(&deps, event).await;

            assert!(result.is_ok());
            let data = result.unwrap().into_response().await;
            assert_eq!(data.status(), 204);
            assert_eq!(body_text(data.body()), "");
        }
    }

    #[tokio::test]
    async fn when_order_panel_fails_should_return_502() {
        let mut order_panel = MockOrderPanel::default();
        order_panel
            .expect_fetch_order_page()
            .times(1)
            .returning(|_order_number, _session_id| Err(OrderPanelError::UnexpectedStatus(401)));
        let deps = deps(order_panel);

        let result = function_handler(&deps, request(Some("123"), Some("A-1"), Some("abc"))).await;

        assert!(result.is_ok());
        let data = result.unwrap().into_response().await;
        assert_eq!(data.status(), 502);
    }

    #[tokio::test]
    async fn when_row_layout_changed_should_return_500() {
        let deps = deps(panel_returning(ORDER_PAGE));

        let result = function_handler(&deps, request(Some("123"), Some("A-3"), Some("abc"))).await;

        assert!(result.is_ok());
        let data = result.unwrap().into_response().await;
        assert_eq!(data.status(), 500);
        assert_eq!(body_text(data.body()), "Internal Server Error");
    }

    #[tokio::test]
    async fn should_read_inputs_from_configured_names() {
        let mut config = Configuration::new("https://panel.test/orders/");
        config.order_number_param = "order".to_string();
        config.album_order_number_param = "album".to_string();
        config.session_id_header = "x-panel-session".to_string();
        let deps = HandlerDeps {
            request_fields: RequestFields::new(&config),
            payment_checker: PaymentChecker::new(panel_returning(ORDER_PAGE), &config),
        };
        let mut query_string = HashMap::new();
        query_string.insert("order".to_string(), "123".to_string());
        query_string.insert("album".to_string(), "A-1".to_string());
        let event = Request::builder()
            .header("X-Panel-Session", "abc")
            .body(Body::Empty)
            .unwrap()
            .with_query_string_parameters(query_string);

        let result = function_handler(&deps, event).await;

        assert!(result.is_ok());
        let data = result.unwrap().into_response().await;
        assert_eq!(data.status(), 200);
        assert_eq!(body_text(data.body()), r#"{"price_zero":true}"#);
    }
}
