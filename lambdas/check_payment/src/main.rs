use crate::http_handler::{function_handler, HandlerDeps, RequestFields};
use lambda_http::{run, service_fn, tracing, Error};
use shared::configuration::Configuration;
use shared::core::PaymentChecker;
use shared::order_panel::HttpOrderPanel;
use std::time::Duration;

mod http_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();
    let config = Configuration::load()?;
    tracing::info!("{}", config);

    let http_client = shared::Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()?;

    let order_panel = HttpOrderPanel::new(http_client, &config);
    let deps = HandlerDeps {
        request_fields: RequestFields::new(&config),
        payment_checker: PaymentChecker::new(order_panel, &config),
    };

    run(service_fn(|event| function_handler(&deps, event))).await
}
