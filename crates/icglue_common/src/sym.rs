//! Copyable handles to strings stored in a [`StringArena`](crate::StringArena).

/// A handle to a string inserted into a [`StringArena`](crate::StringArena).
///
/// A `Sym` is only meaningful together with the arena that issued it. It stays
/// valid until that arena is destroyed; resolving it against any other arena
/// yields an unrelated string or nothing.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Sym(u32);

impl Sym {
    /// Creates a `Sym` from a raw `u32` index.
    ///
    /// Intended for tests. Real handles come from
    /// [`StringArena::insert`](crate::StringArena::insert).
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw `u32` index of this handle.
    pub fn as_raw(self) -> u32 {
        self.0
    }
}

// SAFETY: `Sym` wraps a `u32`, which always fits in `usize` on supported
// platforms. `try_from_usize` rejects indices that don't fit in `u32`.
unsafe impl lasso::Key for Sym {
    fn into_usize(self) -> usize {
        self.0 as usize
    }

    fn try_from_usize(int: usize) -> Option<Self> {
        u32::try_from(int).ok().map(Sym)
    }
}
