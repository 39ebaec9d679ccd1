use reqwest::Client;
use std::time::Duration;
use serde::Serialize;
use tracing::error;

/// Posts JSON payloads to the incoming webhooks of the messaging integrations
#[derive(Clone)]
pub struct WebhookClient {
    client: Client,
}

impl WebhookClient {
    /// Requests that get no complete response within `timeout` fail
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                error!("Unable to build the webhook client, requests will not time out: {:?}", e);
                Client::new()
            });
        Self { client }
    }

    pub async fn post_json(&self, url: &str, body: &impl Serialize) -> anyhow::Result<()> {
        let res = match self.client.post(url).json(body).send().await {
            Ok(res) => res,
            Err(e) => {
                error!(
                    "[Network Error] Webhook POST to {} failed. Error message: {:?}",
                    url, e
                );
                return Err(anyhow::Error::new(e));
            }
        };

        if let Err(e) = res.error_for_status_ref() {
            error!(
                "[Unexpected Response] Webhook POST to {} returned status {}",
                url,
                res.status()
            );
            return Err(anyhow::Error::new(e));
        }
        Ok(())
    }
}
