#![allow(dead_code)]

use delay_service::config::DelayConfig;
use delay_service::services::DelayPredictor;
use delay_service::startup::Application;
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawn the service with the built-in model on a random port.
    pub async fn spawn() -> Self {
        let app = Application::build(test_config())
            .await
            .expect("Failed to build test application");
        Self::launch(app).await
    }

    /// Spawn the service around a custom model.
    pub async fn spawn_with_model(model: Arc<dyn DelayPredictor>) -> Self {
        let app = Application::build_with_model(test_config(), model)
            .await
            .expect("Failed to build test application");
        Self::launch(app).await
    }

    async fn launch(app: Application) -> Self {
        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            client,
        }
    }

    pub async fn post_predict(&self, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}/predict", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}

pub fn test_config() -> DelayConfig {
    let mut config = DelayConfig::default();
    config.host = "127.0.0.1".to_string();
    config.common.port = 0; // Random port for testing
    config
}
