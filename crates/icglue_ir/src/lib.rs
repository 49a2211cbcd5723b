//! icglue IR: the object/attribute graph behind HDL generation.
//!
//! A [`Design`] holds modules, instances, ports, parameters, declarations,
//! codesections, pins, adjustments and register files. Every entity wraps a
//! generic [`Object`] whose id is composed as `<kind>::[<parent>.]<name>` and
//! whose identity attributes are written once, as constants. The tree is built
//! by a front end and read by an emitter; this crate does neither.

#![warn(missing_docs)]

pub mod arena;
pub mod attribute;
pub mod code;
pub mod decl;
pub mod design;
pub mod helpers;
pub mod ids;
pub mod instance;
pub mod module;
pub mod object;
pub mod param;
pub mod pin;
pub mod port;
pub mod regfile;

pub use arena::{Arena, ArenaId};
pub use attribute::{Attribute, AttributeStore};
pub use code::CodeSection;
pub use decl::Declaration;
pub use design::Design;
pub use ids::*;
pub use instance::Instance;
pub use module::Module;
pub use object::{compose_id, Entity, EntityKind, EntityRef, Object, StorageHandle};
pub use param::Parameter;
pub use pin::{Adjustment, Pin};
pub use port::{Port, PortDirection};
pub use regfile::{Regfile, RegfileEntry, RegfileRegister};

pub use icglue_common::{StringArena, Sym};
