use serde::Serialize;

use crate::utils::id_as_name;

#[derive(Clone, Debug, Serialize)]
pub struct PortView {
    pub id: String,
    pub name: String,
    pub network_id: String,
    pub device_id: String,
    pub device_owner: String,
    pub mac_address: Option<String>,
    pub status: String,
}

impl PortView {
    pub fn apply_name_fallback(&mut self, id_length: usize) {
        self.name = id_as_name(&self.name, &self.id, id_length);
    }
}
