//! Registries of finished entities and their pool memberships.
//!
//! A [`Registry`] owns every entity of one kind, keyed by its entity ID. Once
//! registered an entity is never replaced. Registries are plain values held by
//! a [`Catalog`] so tests can run with as many independent stores as they like.

mod catalog;
mod pools;
mod registry_error;

pub use catalog::Catalog;
pub use pools::Pools;
pub use registry_error::RegistryError;

use crate::data::FallbackData;
use crate::record::Record;
use once_cell::unsync::OnceCell;
use std::collections::HashMap;
use std::rc::Rc;

/// A record that can be stored in a [`Registry`].
pub trait Registered: Record {
    /// Stable identifier, unique per kind.
    fn entity_id(&self) -> &str;

    /// Template data this entity can donate to later entities of its kind.
    fn fallback_data(&self) -> Option<&FallbackData> {
        None
    }
}

/// Process-scoped store for one entity kind.
pub struct Registry<R> {
    entries: HashMap<String, Rc<R>>,
    order: Vec<String>,
    pools: Pools,
    fallback: OnceCell<FallbackData>,
}

impl<R: Registered> Registry<R> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            order: Vec::new(),
            pools: Pools::new(),
            fallback: OnceCell::new(),
        }
    }

    /// Store `entity` under its ID and add it to each pool in `pool_ids`.
    ///
    /// A duplicate ID leaves the registry untouched.
    pub fn register(&mut self, entity: Rc<R>, pool_ids: &[String]) -> Result<(), RegistryError> {
        let id = entity.entity_id().to_string();
        if self.entries.contains_key(&id) {
            return Err(RegistryError::DuplicateId { kind: R::KIND, id });
        }

        if let Some(fallback) = entity.fallback_data() {
            self.capture_fallback(fallback.clone());
        }

        for pool_id in pool_ids {
            if self.pools.insert(pool_id, &id) {
                tracing::trace!(kind = R::KIND, %id, pool = %pool_id, "joined pool");
            }
        }

        self.order.push(id.clone());
        self.entries.insert(id, entity);
        Ok(())
    }

    /// Store `fallback` if no template has been captured yet.
    ///
    /// Returns false when a template was already present; it is never replaced.
    pub fn capture_fallback(&mut self, fallback: FallbackData) -> bool {
        let captured = self.fallback.set(fallback).is_ok();
        if captured {
            tracing::info!(kind = R::KIND, "captured fallback template");
        }
        captured
    }

    pub fn fallback(&self) -> Option<&FallbackData> {
        self.fallback.get()
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Rc<R>> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Entities in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Rc<R>> {
        self.order.iter().filter_map(|id| self.entries.get(id))
    }

    pub fn pools(&self) -> &Pools {
        &self.pools
    }

    pub fn pool_members(&self, pool_id: &str) -> &[String] {
        self.pools.members(pool_id)
    }

    pub fn pools_of(&self, id: &str) -> Vec<&str> {
        self.pools.pools_of(id)
    }

    pub fn is_member(&self, pool_id: &str, id: &str) -> bool {
        self.pools.is_member(pool_id, id)
    }
}

impl<R: Registered> Default for Registry<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::Prefab;
    use crate::define_record;
    use crate::record::{blank, inject};

    #[derive(Debug, Default)]
    struct Relic {
        id: String,
        fallback_data: Option<FallbackData>,
    }

    define_record!(Relic, "Relic", {
        id: String,
        fallback_data: Option<FallbackData>,
    });

    impl Registered for Relic {
        fn entity_id(&self) -> &str {
            &self.id
        }

        fn fallback_data(&self) -> Option<&FallbackData> {
            self.fallback_data.as_ref()
        }
    }

    fn relic(id: &str, template: Option<&str>) -> Rc<Relic> {
        let mut relic = blank::<Relic>();
        inject(&mut relic, "id", id.to_string()).unwrap();
        inject(
            &mut relic,
            "fallback_data",
            template.map(|name| FallbackData::new(Prefab::new(name))),
        )
        .unwrap();
        Rc::new(relic)
    }

    fn template_name(registry: &Registry<Relic>) -> Option<String> {
        registry
            .fallback()
            .and_then(|f| f.default_character_prefab())
            .map(|p| p.name().to_string())
    }

    #[test]
    fn test_register_then_lookup() {
        let mut registry = Registry::new();
        let first = relic("relic_a", None);
        registry
            .register(Rc::clone(&first), &["RelicPool".to_string()])
            .unwrap();

        assert!(Rc::ptr_eq(registry.get_by_id("relic_a").unwrap(), &first));
        assert!(registry.get_by_id("relic_b").is_none());
        assert!(registry.is_member("RelicPool", "relic_a"));
        assert_eq!(registry.pools().pool_ids(), vec!["RelicPool"]);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_duplicate_id_fails_and_keeps_original() {
        let mut registry = Registry::new();
        let first = relic("relic_a", None);
        let second = relic("relic_a", None);
        registry.register(Rc::clone(&first), &[]).unwrap();

        let err = registry
            .register(Rc::clone(&second), &["Late".to_string()])
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateId {
                kind: "Relic",
                id: "relic_a".to_string(),
            }
        );
        assert!(Rc::ptr_eq(registry.get_by_id("relic_a").unwrap(), &first));
        assert!(!Rc::ptr_eq(registry.get_by_id("relic_a").unwrap(), &second));
        assert!(registry.pool_members("Late").is_empty());
        assert!(registry.pools().pool_ids().is_empty());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_fallback_captured_once() {
        let mut registry = Registry::new();
        registry.register(relic("plain", None), &[]).unwrap();
        assert!(registry.fallback().is_none());

        registry.register(relic("first", Some("first_template")), &[]).unwrap();
        registry.register(relic("second", Some("second_template")), &[]).unwrap();

        assert_eq!(template_name(&registry).as_deref(), Some("first_template"));
        assert!(!registry.capture_fallback(FallbackData::new(Prefab::new("late"))));
        assert_eq!(template_name(&registry).as_deref(), Some("first_template"));
    }

    #[test]
    fn test_duplicate_does_not_donate_fallback() {
        let mut registry = Registry::new();
        registry.register(relic("a", None), &[]).unwrap();
        assert!(registry.register(relic("a", Some("dup")), &[]).is_err());
        assert!(registry.fallback().is_none());
    }

    #[test]
    fn test_iter_in_registration_order() {
        let mut registry = Registry::new();
        for id in ["c", "a", "b"] {
            registry.register(relic(id, None), &[]).unwrap();
        }
        let ids: Vec<_> = registry.iter().map(|r| r.entity_id().to_string()).collect();
        assert_eq!(ids, ["c", "a", "b"]);
    }
}
