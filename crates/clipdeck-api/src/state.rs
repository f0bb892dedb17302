//! Application state.
//!
//! The two store handles and the configuration are constructed once during
//! startup and injected into handlers through axum state - there are no
//! ambient globals.

use std::sync::Arc;

use clipdeck_core::Config;
use clipdeck_db::VideoStore;
use clipdeck_storage::Storage;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub videos: Arc<dyn VideoStore>,
    pub storage: Arc<dyn Storage>,
}

fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}
