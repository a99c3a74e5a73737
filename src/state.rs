/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 * - Clone 前提で持つ (内部は Arc なので cheap)
 */
use std::sync::Arc;

use crate::services::hostname::{HostnameSource, SystemHostname};

#[derive(Clone)]
pub struct AppState {
    pub hostname: Arc<dyn HostnameSource>,
}

impl AppState {
    pub fn new(hostname: Arc<dyn HostnameSource>) -> Self {
        Self { hostname }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(SystemHostname))
    }
}
