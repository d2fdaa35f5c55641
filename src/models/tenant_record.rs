use serde::{Deserialize, Serialize};

/// One entry of the identity service's tenant directory. Request-scoped,
/// never persisted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TenantRecord {
    pub id: String,
    pub name: String,
    pub enabled: bool,
}
