use std::collections::HashMap;

use crate::api::IdentityApi;
use crate::models::TenantRecord;
use crate::services::request_scope::RequestScope;

pub const TENANT_LIST_WARNING: &str = "Unable to retrieve instance tenant information.";

/// Outcome of the per-request tenant directory fetch. When the identity
/// service was unreachable the mapping is empty and `warning` carries the
/// message to surface; every tenant then resolves as unknown.
pub struct TenantLookup {
    pub tenants: HashMap<String, TenantRecord>,
    pub warning: Option<String>,
}

impl TenantLookup {
    pub fn tenant_name(&self, tenant_id: &str) -> Option<String> {
        self.tenants.get(tenant_id).map(|t| t.name.clone())
    }
}

/// Resolves the tenant directory for this request, fetching it from the
/// identity service at most once per scope. `admin` is the privileged
/// directory capability and must be granted explicitly by the caller.
pub async fn tenant_lookup<'a>(
    identity: &dyn IdentityApi,
    scope: &'a RequestScope,
    admin: bool,
) -> &'a TenantLookup {
    scope
        .tenants
        .get_or_init(|| async {
            match identity.tenant_list(admin).await {
                Ok(tenants) => {
                    let tenants = tenants.into_iter().map(|t| (t.id.clone(), t)).collect();
                    TenantLookup { tenants, warning: None }
                }
                Err(err) => {
                    tracing::warn!(error = %err, "tenant list fetch failed");
                    TenantLookup {
                        tenants: HashMap::new(),
                        warning: Some(TENANT_LIST_WARNING.to_string()),
                    }
                }
            }
        })
        .await
}
