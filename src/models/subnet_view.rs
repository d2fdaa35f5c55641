use serde::Serialize;

use crate::utils::id_as_name;

#[derive(Clone, Debug, Serialize)]
pub struct SubnetView {
    pub id: String,
    pub name: String,
    pub network_id: String,
    pub cidr: String,
    pub ip_version: i64,
    pub gateway_ip: Option<String>,
}

impl SubnetView {
    pub fn apply_name_fallback(&mut self, id_length: usize) {
        self.name = id_as_name(&self.name, &self.id, id_length);
    }
}
