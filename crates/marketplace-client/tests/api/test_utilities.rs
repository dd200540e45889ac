use marketplace_client::config::BASE_URL_ENV;
use marketplace_client::{
    ApiResponse, ClientConfig, Item, ItemFixture, MarketplaceClient, TestDataGenerator, telemetry,
};
use serde::Serialize;
use marketplace_stub::{create_app_state, serve};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Where a test sends its requests: a live deployment when
/// `MARKETPLACE_BASE_URL` is set, otherwise a stub bound to an ephemeral port.
pub struct TestTarget {
    pub client: MarketplaceClient,
    seed: Option<u64>,
    stub: Option<JoinHandle<std::io::Result<()>>>,
}

impl TestTarget {
    pub async fn start() -> Result<Self, Box<dyn std::error::Error>> {
        telemetry::init();

        let config = ClientConfig::from_env()?;
        if std::env::var(BASE_URL_ENV).is_ok_and(|url| !url.trim().is_empty()) {
            let client = MarketplaceClient::new(&config)?;
            return Ok(Self {
                client,
                seed: config.seed,
                stub: None,
            });
        }

        // Bind to port 0 to let the OS choose an available port
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let stub = tokio::spawn(serve(listener, create_app_state()));

        let config = config.with_base_url(format!("http://{addr}"));
        let client = MarketplaceClient::new(&config)?;
        Ok(Self {
            client,
            seed: config.seed,
            stub: Some(stub),
        })
    }

    /// True when requests go to a deployment shared with other runs.
    pub fn is_live(&self) -> bool {
        self.stub.is_none()
    }

    pub fn fixture(&self) -> ItemFixture {
        ItemFixture::new(self.client.clone())
    }

    /// Per-test generator. With a session seed each test thread gets its own
    /// reproducible stream.
    pub fn generator(&self) -> TestDataGenerator {
        match self.seed {
            Some(seed) => {
                let thread = std::thread::current();
                TestDataGenerator::derived(seed, thread.name().unwrap_or("main"))
            }
            None => TestDataGenerator::from_entropy(),
        }
    }
}

impl Drop for TestTarget {
    fn drop(&mut self) {
        if let Some(stub) = self.stub.take() {
            stub.abort();
        }
    }
}

/// Panics with the violation's status and body when a contract check fails.
#[track_caller]
pub fn assert_contract<T>(result: Result<T, marketplace_client::ContractViolation>) -> T {
    match result {
        Ok(value) => value,
        Err(violation) => panic!("{violation}"),
    }
}

pub fn describe(response: &ApiResponse) -> String {
    format!("status {}, body: {}", response.status(), response.body().trim())
}

/// Tracks the id of an item the service created from a request it should
/// have rejected, so the surrounding scope deletes it.
pub fn track_if_created(fixture: &ItemFixture, response: &ApiResponse) {
    if response.is_success() {
        if let Ok(item) = response.json::<Item>() {
            fixture.track(&item.id);
        }
    }
}

/// Sends a create request expected to fail, tracking anything it created.
pub async fn create_untrusted<T>(fixture: &ItemFixture, body: &T) -> ApiResponse
where
    T: Serialize + ?Sized,
{
    let response = fixture.client().create_item(body).await.unwrap();
    track_if_created(fixture, &response);
    response
}
