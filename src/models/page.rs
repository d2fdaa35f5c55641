use serde::Serialize;
use thiserror::Error;

use crate::models::{NetworkView, PortView, SubnetView};

/// One fetched collection plus the non-fatal warnings recorded while
/// producing it. A failed fetch yields empty `items` and one warning;
/// it never surfaces as an error.
#[derive(Clone, Debug, Serialize)]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub warnings: Vec<String>,
}

/// View model of the network index page.
#[derive(Clone, Debug, Serialize)]
pub struct NetworkIndexPage {
    pub networks: Vec<NetworkView>,
    pub warnings: Vec<String>,
}

/// View model of a single network's detail page.
#[derive(Clone, Debug, Serialize)]
pub struct NetworkDetailPage {
    pub network: NetworkView,
    pub subnets: Vec<SubnetView>,
    pub ports: Vec<PortView>,
    pub warnings: Vec<String>,
}

/// Unrecoverable page failure: the detail page has no content without its
/// subject resource, so the host is told where to send the user instead.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct FatalPageError {
    pub message: String,
    pub redirect: String,
}
