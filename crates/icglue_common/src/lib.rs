//! Shared foundational types used across the icglue crates.
//!
//! This crate provides the [`Sym`] string handle and the [`StringArena`] that
//! backs every attribute name and value stored in the IR.

#![warn(missing_docs)]

pub mod string_arena;
pub mod sym;

pub use string_arena::StringArena;
pub use sym::Sym;
