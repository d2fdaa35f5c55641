use serde::{Deserialize, Serialize};

/// Payload of a network create/update form, forwarded to the management
/// API as-is.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NetworkParams {
    pub name: String,
    pub admin_state_up: bool,
    pub shared: bool,
}

impl Default for NetworkParams {
    fn default() -> Self {
        Self {
            name: String::new(),
            admin_state_up: true,
            shared: false,
        }
    }
}
