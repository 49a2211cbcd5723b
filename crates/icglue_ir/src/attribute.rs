//! Per-object name/value attributes with write-once constants.

use icglue_common::{StringArena, Sym};
use std::collections::HashMap;

/// One attribute value and whether it may still change.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Attribute {
    /// The value, stored in the owning object's arena.
    pub value: Sym,
    /// Once `true`, the attribute can no longer be written.
    pub constant: bool,
}

/// The attributes of one object.
///
/// Names and values live in the object's [`StringArena`]; the store only keeps
/// handles, so every call takes the arena alongside. There is no
/// way to list the stored names.
#[derive(Debug, Default)]
pub struct AttributeStore {
    entries: HashMap<Sym, Attribute>,
}

impl AttributeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes an attribute, copying `name` and `value` into `arena`.
    ///
    /// Returns `false` without touching anything if `name` is already
    /// constant. A mutable attribute may be rewritten as constant, after which
    /// it is frozen.
    pub fn set(&mut self, arena: &mut StringArena, name: &str, value: &str, constant: bool) -> bool {
        if self.lookup(arena, name).is_some_and(|attr| attr.constant) {
            return false;
        }

        let name = arena.insert(name);
        let value = arena.insert(value);
        self.entries.insert(name, Attribute { value, constant });
        true
    }

    /// Returns the value stored under `name`.
    pub fn get<'a>(&self, arena: &'a StringArena, name: &str) -> Option<&'a str> {
        let attr = self.lookup(arena, name)?;
        arena.resolve(attr.value)
    }

    /// Returns the raw attribute stored under `name`.
    pub fn lookup(&self, arena: &StringArena, name: &str) -> Option<Attribute> {
        let key = arena.lookup(name)?;
        self.entries.get(&key).copied()
    }

    /// Returns `true` if `name` exists and is constant.
    pub fn is_constant(&self, arena: &StringArena, name: &str) -> bool {
        self.lookup(arena, name).is_some_and(|attr| attr.constant)
    }

    /// Returns the number of stored attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no attribute is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (AttributeStore, StringArena) {
        (AttributeStore::new(), StringArena::new())
    }

    #[test]
    fn set_then_get() {
        let (mut store, mut arena) = setup();
        assert!(store.set(&mut arena, "width", "8", false));
        assert_eq!(store.get(&arena, "width"), Some("8"));
    }

    #[test]
    fn missing_attribute_is_none() {
        let (store, arena) = setup();
        assert!(store.get(&arena, "width").is_none());
        assert!(!store.is_constant(&arena, "width"));
    }

    #[test]
    fn mutable_attribute_keeps_latest_write() {
        let (mut store, mut arena) = setup();
        for value in ["1", "2", "3", "4"] {
            assert!(store.set(&mut arena, "foo", value, false));
        }
        assert_eq!(store.get(&arena, "foo"), Some("4"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn constant_attribute_rejects_writes() {
        let (mut store, mut arena) = setup();
        assert!(store.set(&mut arena, "foo", "1", true));
        assert!(!store.set(&mut arena, "foo", "2", false));
        assert!(!store.set(&mut arena, "foo", "3", true));
        assert_eq!(store.get(&arena, "foo"), Some("1"));
    }

    #[test]
    fn mutable_attribute_can_be_frozen() {
        let (mut store, mut arena) = setup();
        assert!(store.set(&mut arena, "foo", "1", false));
        assert!(store.set(&mut arena, "foo", "2", true));
        assert!(store.is_constant(&arena, "foo"));
        assert!(!store.set(&mut arena, "foo", "3", false));
        assert_eq!(store.get(&arena, "foo"), Some("2"));
    }

    #[test]
    fn attribute_values_may_share_storage() {
        let (mut store, mut arena) = setup();
        store.set(&mut arena, "ilm", "true", true);
        store.set(&mut arena, "resource", "true", true);
        assert_eq!(store.get(&arena, "ilm"), Some("true"));
        assert_eq!(store.get(&arena, "resource"), Some("true"));
        assert_eq!(
            store.lookup(&arena, "ilm").map(|a| a.value),
            store.lookup(&arena, "resource").map(|a| a.value)
        );
    }

    #[test]
    fn values_stored_in_arena_but_not_attributes_are_not_found() {
        let (store, mut arena) = setup();
        arena.insert("ghost");
        assert!(store.get(&arena, "ghost").is_none());
    }
}
