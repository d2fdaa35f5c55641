pub mod network_actions;
pub mod network_pages;
pub mod request_scope;
pub mod tenant_directory;

// Re-export commonly used functions
pub use network_actions::{create_network, delete_network, update_network};
pub use network_pages::{
    get_network_detail, list_networks, list_ports, list_subnets, network_detail_page,
    network_index_page, DetailOptions, ListOptions, DEFAULT_LIST_FALLBACK_ID_LENGTH,
    NETWORKS_INDEX, NETWORK_LIST_WARNING, PORT_LIST_WARNING, SUBNET_LIST_WARNING,
};
pub use request_scope::RequestScope;
pub use tenant_directory::{tenant_lookup, TenantLookup, TENANT_LIST_WARNING};
