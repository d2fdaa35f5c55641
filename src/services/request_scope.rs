use std::collections::HashMap;
use std::sync::Mutex;

use tokio::sync::OnceCell;

use crate::models::NetworkView;
use crate::services::tenant_directory::TenantLookup;

/// Per-request memoization cache. Created fresh for each incoming page
/// request, passed alongside it, and dropped when the response is
/// produced. Never stored on anything that outlives the request.
#[derive(Default)]
pub struct RequestScope {
    pub(crate) tenants: OnceCell<TenantLookup>,
    pub(crate) network_details: Mutex<HashMap<String, NetworkView>>,
}

impl RequestScope {
    pub fn new() -> Self {
        Self::default()
    }
}
