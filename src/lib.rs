//! Data layer for the networks section of a cloud administration panel.
//!
//! Fetches networks, subnets, ports and tenant names from the remote
//! management and identity services and assembles per-page view models.
//! Collection fetches degrade to an empty listing plus a recorded warning
//! when the remote call fails; only the single-network detail fetch is
//! fatal to its page (it carries a redirect back to the index).

pub mod api;
pub mod config;
pub mod models;
pub mod services;
pub mod utils;
