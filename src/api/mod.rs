// Remote service clients
pub mod client;
pub mod error;
pub mod networks;
pub mod ports;
pub mod subnets;
pub mod tenants;

use async_trait::async_trait;

use crate::config;
use crate::models::{NetworkParams, NetworkView, PortView, SubnetView, TenantRecord};

// Re-export commonly used items
pub use client::api_call;
pub use error::ApiError;

/// Management API surface consumed by the page services.
///
/// The production implementation talks HTTP; tests substitute stubs to
/// exercise the degradation paths without a live service.
#[async_trait]
pub trait NetworkApi: Send + Sync {
    async fn network_list(&self) -> Result<Vec<NetworkView>, ApiError>;
    async fn network_get(&self, network_id: &str) -> Result<NetworkView, ApiError>;
    async fn network_create(&self, params: &NetworkParams) -> Result<NetworkView, ApiError>;
    async fn network_update(
        &self,
        network_id: &str,
        params: &NetworkParams,
    ) -> Result<NetworkView, ApiError>;
    async fn network_delete(&self, network_id: &str) -> Result<(), ApiError>;
    async fn subnet_list(&self, network_id: &str) -> Result<Vec<SubnetView>, ApiError>;
    async fn port_list(&self, network_id: &str) -> Result<Vec<PortView>, ApiError>;
}

/// Identity service surface: tenant directory lookups only.
#[async_trait]
pub trait IdentityApi: Send + Sync {
    /// `admin` requests the privileged listing covering all tenants.
    async fn tenant_list(&self, admin: bool) -> Result<Vec<TenantRecord>, ApiError>;
}

/// reqwest-backed [`NetworkApi`].
#[derive(Clone)]
pub struct HttpNetworkApi {
    pub client: reqwest::Client,
    pub base_url: String,
    pub token: String,
}

impl HttpNetworkApi {
    pub fn new(client: reqwest::Client, base_url: String, token: String) -> Self {
        Self { client, base_url, token }
    }

    pub fn from_env(client: reqwest::Client) -> Self {
        Self::new(client, config::get_network_api_base_url(), config::get_network_api_token())
    }
}

#[async_trait]
impl NetworkApi for HttpNetworkApi {
    async fn network_list(&self) -> Result<Vec<NetworkView>, ApiError> {
        networks::network_list(&self.client, &self.base_url, &self.token).await
    }

    async fn network_get(&self, network_id: &str) -> Result<NetworkView, ApiError> {
        networks::network_get(&self.client, &self.base_url, &self.token, network_id).await
    }

    async fn network_create(&self, params: &NetworkParams) -> Result<NetworkView, ApiError> {
        networks::network_create(&self.client, &self.base_url, &self.token, params).await
    }

    async fn network_update(
        &self,
        network_id: &str,
        params: &NetworkParams,
    ) -> Result<NetworkView, ApiError> {
        networks::network_update(&self.client, &self.base_url, &self.token, network_id, params).await
    }

    async fn network_delete(&self, network_id: &str) -> Result<(), ApiError> {
        networks::network_delete(&self.client, &self.base_url, &self.token, network_id).await
    }

    async fn subnet_list(&self, network_id: &str) -> Result<Vec<SubnetView>, ApiError> {
        subnets::subnet_list(&self.client, &self.base_url, &self.token, network_id).await
    }

    async fn port_list(&self, network_id: &str) -> Result<Vec<PortView>, ApiError> {
        ports::port_list(&self.client, &self.base_url, &self.token, network_id).await
    }
}

/// reqwest-backed [`IdentityApi`].
#[derive(Clone)]
pub struct HttpIdentityApi {
    pub client: reqwest::Client,
    pub base_url: String,
    pub token: String,
}

impl HttpIdentityApi {
    pub fn new(client: reqwest::Client, base_url: String, token: String) -> Self {
        Self { client, base_url, token }
    }

    pub fn from_env(client: reqwest::Client) -> Self {
        Self::new(client, config::get_identity_api_base_url(), config::get_identity_api_token())
    }
}

#[async_trait]
impl IdentityApi for HttpIdentityApi {
    async fn tenant_list(&self, admin: bool) -> Result<Vec<TenantRecord>, ApiError> {
        tenants::tenant_list(&self.client, &self.base_url, &self.token, admin).await
    }
}
