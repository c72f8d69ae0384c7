//! Shared helpers for harness integration tests

use shared::HarnessConfig;

/// Spawn a fresh seeded mock API and a config pointed at it.
pub async fn spawn_target() -> (mockapi::MockApi, HarnessConfig) {
    let server = mockapi::spawn().await.expect("mock api should bind");
    let config = HarnessConfig::from_base_url(&server.base_url()).expect("mock base url is valid");
    (server, config)
}
