use crate::api::{ApiError, NetworkApi};
use crate::models::{NetworkParams, NetworkView};

/// Create a network on the management API. Presentation of the outcome
/// (flash message, redirect) stays with the host; this layer only logs it
/// and hands back the typed result.
pub async fn create_network(
    network_api: &dyn NetworkApi,
    params: &NetworkParams,
) -> Result<NetworkView, ApiError> {
    match network_api.network_create(params).await {
        Ok(network) => {
            tracing::info!(network_id = %network.id, name = %network.name, "network created");
            Ok(network)
        }
        Err(err) => {
            tracing::warn!(error = %err, name = %params.name, "network create failed");
            Err(err)
        }
    }
}

pub async fn update_network(
    network_api: &dyn NetworkApi,
    network_id: &str,
    params: &NetworkParams,
) -> Result<NetworkView, ApiError> {
    match network_api.network_update(network_id, params).await {
        Ok(network) => {
            tracing::info!(network_id = %network.id, "network updated");
            Ok(network)
        }
        Err(err) => {
            tracing::warn!(error = %err, network_id, "network update failed");
            Err(err)
        }
    }
}

pub async fn delete_network(
    network_api: &dyn NetworkApi,
    network_id: &str,
) -> Result<(), ApiError> {
    match network_api.network_delete(network_id).await {
        Ok(()) => {
            tracing::info!(network_id, "network deleted");
            Ok(())
        }
        Err(err) => {
            tracing::warn!(error = %err, network_id, "network delete failed");
            Err(err)
        }
    }
}
