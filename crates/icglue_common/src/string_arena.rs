//! Append-only string storage handing out stable [`Sym`] handles.

use crate::sym::Sym;
use lasso::Rodeo;
use std::fmt;

/// Append-only storage for the strings of one object tree.
///
/// Every [`insert`](Self::insert) copies its input and returns a [`Sym`] that
/// stays valid until the arena is dropped. Nothing is ever removed. Identical
/// text inserted twice shares one slot, which is invisible to callers since
/// the stored text can never change.
///
/// The arena is single-threaded; it is owned by exactly one object and
/// borrowed (by handle) by its descendants.
pub struct StringArena {
    rodeo: Rodeo<Sym>,
}

impl StringArena {
    /// Creates a new, empty arena.
    pub fn new() -> Self {
        Self {
            rodeo: Rodeo::new(),
        }
    }

    /// Copies `text` into the arena and returns its handle.
    pub fn insert(&mut self, text: &str) -> Sym {
        self.rodeo.get_or_intern(text)
    }

    /// Returns the handle of `text` if it was inserted before, without
    /// inserting it.
    pub fn lookup(&self, text: &str) -> Option<Sym> {
        self.rodeo.get(text)
    }

    /// Resolves a handle back to its text.
    ///
    /// Returns `None` if the handle was not issued by this arena.
    pub fn resolve(&self, sym: Sym) -> Option<&str> {
        self.rodeo.try_resolve(&sym)
    }

    /// Returns the number of distinct strings stored.
    pub fn len(&self) -> usize {
        self.rodeo.len()
    }

    /// Returns `true` if nothing was inserted yet.
    pub fn is_empty(&self) -> bool {
        self.rodeo.is_empty()
    }
}

impl fmt::Debug for StringArena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringArena")
            .field("len", &self.rodeo.len())
            .finish()
    }
}

impl Default for StringArena {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_resolve_roundtrip() {
        let mut arena = StringArena::new();
        let sym = arena.insert("adder");
        assert_eq!(arena.resolve(sym), Some("adder"));
    }

    #[test]
    fn handles_survive_later_inserts() {
        let mut arena = StringArena::new();
        let first = arena.insert("clk");
        for i in 0..1000 {
            arena.insert(&format!("sig_{i}"));
        }
        assert_eq!(arena.resolve(first), Some("clk"));
    }

    #[test]
    fn insert_copies_caller_text() {
        let mut arena = StringArena::new();
        let sym = {
            let temp = String::from("transient");
            arena.insert(&temp)
        };
        assert_eq!(arena.resolve(sym), Some("transient"));
    }

    #[test]
    fn identical_text_shares_handle() {
        let mut arena = StringArena::new();
        let a = arena.insert("true");
        let b = arena.insert("true");
        assert_eq!(a, b);
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn lookup_does_not_insert() {
        let mut arena = StringArena::new();
        assert!(arena.lookup("missing").is_none());
        assert!(arena.is_empty());
        let sym = arena.insert("present");
        assert_eq!(arena.lookup("present"), Some(sym));
    }

    #[test]
    fn foreign_handle_does_not_resolve() {
        let arena = StringArena::new();
        assert!(arena.resolve(Sym::from_raw(3)).is_none());
    }

    #[test]
    fn empty_string_is_storable() {
        let mut arena = StringArena::new();
        let sym = arena.insert("");
        assert_eq!(arena.resolve(sym), Some(""));
    }
}
