use hospital_directory_service::config::ServiceConfig;
use hospital_directory_service::services::MongoDb;
use hospital_directory_service::startup::Application;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub db: MongoDb,
    pub db_name: String,
}

impl TestApp {
    pub async fn spawn() -> Self {
        std::env::set_var("DATABASE_URL", "mongodb://localhost:27017");

        let db_name = format!("hospital_test_{}", Uuid::new_v4());

        let mut config = ServiceConfig::load().expect("Failed to load configuration");
        config.common.port = 0; // Random port for testing
        config.mongodb.database = db_name.clone();

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let db = app
            .db()
            .expect("Test application started without a database connection")
            .clone();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the root endpoint
        let client = reqwest::Client::new();
        let root_url = format!("{}/", address);
        for _ in 0..50 {
            if client.get(&root_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            db,
            db_name,
        }
    }

    /// POST a JSON payload and return the generated identifier.
    pub async fn create(&self, path: &str, payload: &serde_json::Value) -> String {
        let client = reqwest::Client::new();
        let response = client
            .post(format!("{}{}", self.address, path))
            .json(payload)
            .send()
            .await
            .expect("Failed to execute request");
        assert!(
            response.status().is_success(),
            "create {} failed: {}",
            path,
            response.status()
        );
        let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
        body["_id"]
            .as_str()
            .expect("create response missing _id")
            .to_string()
    }

    /// GET a path and return the `items` array.
    pub async fn list(&self, path: &str) -> Vec<serde_json::Value> {
        let client = reqwest::Client::new();
        let response = client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request");
        assert!(
            response.status().is_success(),
            "list {} failed: {}",
            path,
            response.status()
        );
        let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
        body["items"]
            .as_array()
            .expect("list response missing items")
            .clone()
    }

    /// Cleanup test resources (drop the per-test database).
    pub async fn cleanup(&self) {
        let _ = self.db.client().database(&self.db_name).drop(None).await;
    }
}
