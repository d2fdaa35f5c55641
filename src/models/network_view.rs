use serde::Serialize;

use crate::utils::id_as_name;

/// A network as shown on the panel. `tenant_name` is filled in by the
/// page services from the tenant directory; it stays `None` whenever the
/// owning tenant cannot be resolved.
#[derive(Clone, Debug, Serialize)]
pub struct NetworkView {
    pub id: String,
    pub name: String,
    pub tenant_id: String,
    pub tenant_name: Option<String>,
    pub admin_state_up: bool,
    pub shared: bool,
    pub status: String,
}

impl NetworkView {
    /// Substitutes the id for an empty name. `id_length` of 0 keeps the
    /// full id, any other value truncates the substitute.
    pub fn apply_name_fallback(&mut self, id_length: usize) {
        self.name = id_as_name(&self.name, &self.id, id_length);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network(id: &str, name: &str) -> NetworkView {
        NetworkView {
            id: id.to_string(),
            name: name.to_string(),
            tenant_id: "t1".to_string(),
            tenant_name: None,
            admin_state_up: true,
            shared: false,
            status: "ACTIVE".to_string(),
        }
    }

    #[test]
    fn fallback_keeps_existing_name() {
        let mut n = network("n1", "private");
        n.apply_name_fallback(0);
        assert_eq!(n.name, "private");
    }

    #[test]
    fn fallback_substitutes_full_id() {
        let mut n = network("3f1b2c4d-90ab-41ef-8d2e-6a7b8c9d0e1f", "");
        n.apply_name_fallback(0);
        assert_eq!(n.name, "3f1b2c4d-90ab-41ef-8d2e-6a7b8c9d0e1f");
    }

    #[test]
    fn fallback_truncates_when_length_given() {
        let mut n = network("3f1b2c4d-90ab-41ef-8d2e-6a7b8c9d0e1f", "");
        n.apply_name_fallback(8);
        assert_eq!(n.name, "3f1b2c4d");
    }
}
