use mkfly_webhook::WebhookClient;

use crate::form::ContactFormHandler;

use super::ConsoleNotifier;

/// Posts the fixed test submission. Returns whether the webhook accepted it.
pub async fn test_webhook(config: crate::config::Config) -> anyhow::Result<bool> {
    let client = WebhookClient::new(&config.webhook)?;
    let handler = ContactFormHandler::new(client, config.ui.locale);

    let result = handler.test_webhook(&mut ConsoleNotifier).await;

    Ok(result.is_success())
}

/// Prints the effective configuration.
pub fn check(config: &crate::config::Config) -> anyhow::Result<()> {
    let client = WebhookClient::new(&config.webhook)?;

    println!("webhook.url = {}", client.url());
    match config.webhook.timeout_secs {
        Some(secs) => println!("webhook.timeout_secs = {secs}"),
        None => println!("webhook.timeout_secs = none"),
    }
    println!("ui.locale = {}", config.ui.locale);
    println!("ui.submit_label = {}", config.ui.submit_label);
    println!("observability.log_level = {}", config.observability.log_level);

    Ok(())
}
