pub mod network_params;
pub mod network_view;
pub mod page;
pub mod port_view;
pub mod subnet_view;
pub mod tenant_record;

// Re-export commonly used types
pub use network_params::NetworkParams;
pub use network_view::NetworkView;
pub use page::{FatalPageError, Listing, NetworkDetailPage, NetworkIndexPage};
pub use port_view::PortView;
pub use subnet_view::SubnetView;
pub use tenant_record::TenantRecord;
