use marketplace_stub::{AppState, create_app_state, serve};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub struct TestStub {
    pub base_url: String,
    pub state: AppState,
    handle: JoinHandle<std::io::Result<()>>,
}

impl TestStub {
    pub async fn start() -> Result<Self, Box<dyn std::error::Error>> {
        let _ = env_logger::builder().is_test(true).try_init();

        // Bind to port 0 to let the OS choose an available port
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = create_app_state();
        let handle = tokio::spawn(serve(listener, state.clone()));
        Ok(Self {
            base_url: format!("http://{addr}"),
            state,
            handle,
        })
    }
}

impl Drop for TestStub {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub struct TestClient {
    pub client: reqwest::Client,
    pub base_url: String,
}

#[allow(dead_code)]
impl TestClient {
    pub fn new(stub: &TestStub) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: stub.base_url.clone(),
        }
    }

    pub async fn create(&self, body: &Value) -> reqwest::Result<reqwest::Response> {
        self.client
            .post(format!("{}/api/1/item", self.base_url))
            .json(body)
            .send()
            .await
    }

    pub async fn get(&self, path: &str) -> reqwest::Result<reqwest::Response> {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
    }

    pub async fn delete(&self, path: &str) -> reqwest::Result<reqwest::Response> {
        self.client
            .delete(format!("{}{}", self.base_url, path))
            .send()
            .await
    }

    /// Creates an item and returns the response body, asserting a 200.
    pub async fn create_ok(&self, seller_id: i64, name: &str) -> Value {
        let response = self
            .create(&item_body(seller_id, name, 1000))
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        response.json().await.unwrap()
    }
}

pub fn item_body(seller_id: i64, name: &str, price: i64) -> Value {
    json!({
        "sellerID": seller_id,
        "name": name,
        "price": price,
        "statistics": {"likes": 10, "viewCount": 100, "contacts": 5}
    })
}
