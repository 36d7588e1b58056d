use std::collections::HashMap;

/// Named pool memberships for one entity kind.
///
/// Members keep insertion order so the host enumerates a pool the same way on
/// every run.
#[derive(Debug, Default)]
pub struct Pools {
    members: HashMap<String, Vec<String>>,
}

impl Pools {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `entity_id` to `pool_id`. Returns false if it was already a member.
    pub fn insert(&mut self, pool_id: &str, entity_id: &str) -> bool {
        let members = self.members.entry(pool_id.to_string()).or_default();
        if members.iter().any(|member| member == entity_id) {
            return false;
        }
        members.push(entity_id.to_string());
        true
    }

    /// Members of `pool_id`, empty for a pool nobody has joined.
    pub fn members(&self, pool_id: &str) -> &[String] {
        self.members.get(pool_id).map(|v| v.as_slice()).unwrap_or(&[])
    }

    pub fn is_member(&self, pool_id: &str, entity_id: &str) -> bool {
        self.members(pool_id).iter().any(|member| member == entity_id)
    }

    /// Every pool `entity_id` belongs to, sorted by pool ID.
    pub fn pools_of(&self, entity_id: &str) -> Vec<&str> {
        let mut pools: Vec<&str> = self
            .members
            .iter()
            .filter(|(_, members)| members.iter().any(|member| member == entity_id))
            .map(|(pool, _)| pool.as_str())
            .collect();
        pools.sort_unstable();
        pools
    }

    /// Every pool with at least one member, sorted.
    pub fn pool_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.members.keys().map(|k| k.as_str()).collect();
        ids.sort_unstable();
        ids
    }
}
