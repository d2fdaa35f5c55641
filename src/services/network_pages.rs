use crate::api::{IdentityApi, NetworkApi};
use crate::models::{
    FatalPageError, Listing, NetworkDetailPage, NetworkIndexPage, NetworkView, PortView, SubnetView,
};
use crate::services::request_scope::RequestScope;
use crate::services::tenant_directory::tenant_lookup;

pub const NETWORK_LIST_WARNING: &str = "Network list can not be retrieved.";
pub const SUBNET_LIST_WARNING: &str = "Subnet list can not be retrieved.";
pub const PORT_LIST_WARNING: &str = "Port list can not be retrieved.";

/// Route the host redirects to when a detail page cannot be built.
pub const NETWORKS_INDEX: &str = "/networks";

/// Substituted ids on list pages are shortened to this many characters.
pub const DEFAULT_LIST_FALLBACK_ID_LENGTH: usize = 8;

/// Options for the list operations. `fallback_id_length` controls how
/// much of the id is substituted for an empty name, 0 meaning all of it.
#[derive(Clone, Debug)]
pub struct ListOptions {
    pub admin_tenants: bool,
    pub fallback_id_length: usize,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            admin_tenants: true,
            fallback_id_length: DEFAULT_LIST_FALLBACK_ID_LENGTH,
        }
    }
}

/// Options for the single-network detail fetch. Detail pages show the
/// full id by default, unlike list rows.
#[derive(Clone, Debug, Default)]
pub struct DetailOptions {
    pub fallback_id_length: usize,
}

/// Fetch all networks visible to the caller and annotate each with its
/// owning tenant's name. A failed fetch degrades to an empty listing plus
/// one warning; the tenant directory is only consulted when there is at
/// least one network to annotate.
pub async fn list_networks(
    network_api: &dyn NetworkApi,
    identity_api: &dyn IdentityApi,
    scope: &RequestScope,
    opts: &ListOptions,
) -> Listing<NetworkView> {
    let mut warnings = Vec::new();
    let mut items = match network_api.network_list().await {
        Ok(items) => items,
        Err(err) => {
            tracing::warn!(error = %err, "network list fetch failed");
            warnings.push(NETWORK_LIST_WARNING.to_string());
            Vec::new()
        }
    };

    if !items.is_empty() {
        let lookup = tenant_lookup(identity_api, scope, opts.admin_tenants).await;
        if let Some(warning) = &lookup.warning {
            warnings.push(warning.clone());
        }
        for network in &mut items {
            network.tenant_name = lookup.tenant_name(&network.tenant_id);
            network.apply_name_fallback(opts.fallback_id_length);
        }
    }

    Listing { items, warnings }
}

/// Fetch the subnets of one network. Same degradation policy as
/// [`list_networks`]; subnets carry no tenant annotation.
pub async fn list_subnets(
    network_api: &dyn NetworkApi,
    network_id: &str,
    opts: &ListOptions,
) -> Listing<SubnetView> {
    let mut warnings = Vec::new();
    let mut items = match network_api.subnet_list(network_id).await {
        Ok(items) => items,
        Err(err) => {
            tracing::warn!(error = %err, network_id, "subnet list fetch failed");
            warnings.push(SUBNET_LIST_WARNING.to_string());
            Vec::new()
        }
    };
    for subnet in &mut items {
        subnet.apply_name_fallback(opts.fallback_id_length);
    }
    Listing { items, warnings }
}

/// Fetch the ports of one network. Same degradation policy as
/// [`list_networks`].
pub async fn list_ports(
    network_api: &dyn NetworkApi,
    network_id: &str,
    opts: &ListOptions,
) -> Listing<PortView> {
    let mut warnings = Vec::new();
    let mut items = match network_api.port_list(network_id).await {
        Ok(items) => items,
        Err(err) => {
            tracing::warn!(error = %err, network_id, "port list fetch failed");
            warnings.push(PORT_LIST_WARNING.to_string());
            Vec::new()
        }
    };
    for port in &mut items {
        port.apply_name_fallback(opts.fallback_id_length);
    }
    Listing { items, warnings }
}

/// Fetch one network by id, memoized in the request scope. Unlike the
/// list operations a failure here is fatal to the page: the detail page
/// has nothing to show without its subject, so the caller gets a message
/// naming the id and a redirect back to the index.
pub async fn get_network_detail(
    network_api: &dyn NetworkApi,
    scope: &RequestScope,
    network_id: &str,
    opts: &DetailOptions,
) -> Result<NetworkView, FatalPageError> {
    if let Some(hit) = scope.network_details.lock().unwrap().get(network_id) {
        return Ok(hit.clone());
    }
    match network_api.network_get(network_id).await {
        Ok(mut network) => {
            network.apply_name_fallback(opts.fallback_id_length);
            scope
                .network_details
                .lock()
                .unwrap()
                .insert(network_id.to_string(), network.clone());
            Ok(network)
        }
        Err(err) => {
            tracing::warn!(error = %err, network_id, "network detail fetch failed");
            Err(FatalPageError {
                message: format!("Unable to retrieve details for network \"{}\".", network_id),
                redirect: NETWORKS_INDEX.to_string(),
            })
        }
    }
}

/// Assemble the index page view model.
pub async fn network_index_page(
    network_api: &dyn NetworkApi,
    identity_api: &dyn IdentityApi,
    scope: &RequestScope,
    opts: &ListOptions,
) -> NetworkIndexPage {
    let listing = list_networks(network_api, identity_api, scope, opts).await;
    NetworkIndexPage {
        networks: listing.items,
        warnings: listing.warnings,
    }
}

/// Assemble the detail page view model for one network. The subject
/// network is required; its subnet and port listings are independent of
/// each other and fetched concurrently, with every warning surfaced.
pub async fn network_detail_page(
    network_api: &dyn NetworkApi,
    scope: &RequestScope,
    network_id: &str,
    detail_opts: &DetailOptions,
    list_opts: &ListOptions,
) -> Result<NetworkDetailPage, FatalPageError> {
    let network = get_network_detail(network_api, scope, network_id, detail_opts).await?;
    let (subnets, ports) = tokio::join!(
        list_subnets(network_api, network_id, list_opts),
        list_ports(network_api, network_id, list_opts),
    );
    let mut warnings = subnets.warnings;
    warnings.extend(ports.warnings);
    Ok(NetworkDetailPage {
        network,
        subnets: subnets.items,
        ports: ports.items,
        warnings,
    })
}
