//! HTTP server for the stub marketplace

use crate::routes::create_router;
use crate::store::ItemStore;
use log::info;
use std::sync::Arc;
use tokio::net::TcpListener;

pub type AppState = Arc<AppStateInner>;

#[derive(Debug, Default)]
pub struct AppStateInner {
    pub store: ItemStore,
}

pub fn create_app_state() -> AppState {
    Arc::new(AppStateInner::default())
}

/// Serves the router on an already bound listener until the task is dropped.
pub async fn serve(listener: TcpListener, app_state: AppState) -> std::io::Result<()> {
    let app = create_router(app_state);
    axum::serve(listener, app).await
}

pub async fn start_server(addr: &str, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let bind_address = format!("{addr}:{port}");
    let listener = TcpListener::bind(&bind_address)
        .await
        .map_err(|e| format!("Failed to bind to address {bind_address}: {e}"))?;
    info!("Stub marketplace starting on http://{bind_address}");
    serve(listener, create_app_state())
        .await
        .map_err(|e| format!("Stub marketplace failed to start: {e}"))?;
    Ok(())
}
