//! The generic object envelope shared by every entity.
//!
//! An [`Object`] carries the derived id, the attribute store, and the handle of
//! the string arena its strings live in. Its [`EntityRef`] payload links back
//! to the typed entity that wraps it.

use crate::attribute::AttributeStore;
use crate::ids::{
    AdjustmentId, CodeId, DeclId, InstanceId, ModuleId, ObjectId, ParamId, PinId, PortId,
    RegfileEntryId, RegfileId, RegfileRegId, StorageId,
};
use icglue_common::Sym;
use std::fmt;

/// The kind of an IR entity.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum EntityKind {
    /// A module port.
    Port,
    /// An instance pin connection.
    Pin,
    /// A module parameter.
    Parameter,
    /// A per-instance adjustment.
    Adjustment,
    /// A declaration inside a module.
    Declaration,
    /// A free-form code block.
    CodeSection,
    /// A module.
    Module,
    /// A module instance.
    Instance,
    /// A register in a regfile entry.
    RegfileRegister,
    /// An entry in a regfile.
    RegfileEntry,
    /// A register file.
    Regfile,
}

impl EntityKind {
    /// Returns the lowercase label used in ids and the `type` attribute.
    pub fn label(self) -> &'static str {
        match self {
            EntityKind::Port => "port",
            EntityKind::Pin => "pin",
            EntityKind::Parameter => "parameter",
            EntityKind::Adjustment => "adjustment",
            EntityKind::Declaration => "declaration",
            EntityKind::CodeSection => "codesection",
            EntityKind::Module => "module",
            EntityKind::Instance => "instance",
            EntityKind::RegfileRegister => "register",
            EntityKind::RegfileEntry => "regfile-entry",
            EntityKind::Regfile => "regfile",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Composes an object id: `<kind>::[<parent>.]<name>`.
///
/// `parent` is the structural parent's name; without one the parent segment
/// and its dot are left out.
pub fn compose_id(kind: EntityKind, parent: Option<&str>, name: &str) -> String {
    match parent {
        Some(parent) => format!("{}::{parent}.{name}", kind.label()),
        None => format!("{}::{name}", kind.label()),
    }
}

/// The typed entity an object belongs to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum EntityRef {
    /// See [`Port`](crate::Port).
    Port(PortId),
    /// See [`Pin`](crate::Pin).
    Pin(PinId),
    /// See [`Parameter`](crate::Parameter).
    Parameter(ParamId),
    /// See [`Adjustment`](crate::Adjustment).
    Adjustment(AdjustmentId),
    /// See [`Declaration`](crate::Declaration).
    Declaration(DeclId),
    /// See [`CodeSection`](crate::CodeSection).
    CodeSection(CodeId),
    /// See [`Module`](crate::Module).
    Module(ModuleId),
    /// See [`Instance`](crate::Instance).
    Instance(InstanceId),
    /// See [`RegfileRegister`](crate::RegfileRegister).
    RegfileRegister(RegfileRegId),
    /// See [`RegfileEntry`](crate::RegfileEntry).
    RegfileEntry(RegfileEntryId),
    /// See [`Regfile`](crate::Regfile).
    Regfile(RegfileId),
}

impl EntityRef {
    /// Returns the kind of the referenced entity.
    pub fn kind(self) -> EntityKind {
        match self {
            EntityRef::Port(_) => EntityKind::Port,
            EntityRef::Pin(_) => EntityKind::Pin,
            EntityRef::Parameter(_) => EntityKind::Parameter,
            EntityRef::Adjustment(_) => EntityKind::Adjustment,
            EntityRef::Declaration(_) => EntityKind::Declaration,
            EntityRef::CodeSection(_) => EntityKind::CodeSection,
            EntityRef::Module(_) => EntityKind::Module,
            EntityRef::Instance(_) => EntityKind::Instance,
            EntityRef::RegfileRegister(_) => EntityKind::RegfileRegister,
            EntityRef::RegfileEntry(_) => EntityKind::RegfileEntry,
            EntityRef::Regfile(_) => EntityKind::Regfile,
        }
    }

    /// Returns the module id if this refers to a module.
    pub fn as_module(self) -> Option<ModuleId> {
        match self {
            EntityRef::Module(id) => Some(id),
            _ => None,
        }
    }

    /// Returns the instance id if this refers to an instance.
    pub fn as_instance(self) -> Option<InstanceId> {
        match self {
            EntityRef::Instance(id) => Some(id),
            _ => None,
        }
    }
}

/// How an object holds its string arena.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StorageHandle {
    /// Created together with the object and destroyed with it.
    Owned(StorageId),
    /// Handed down from an ancestor; never destroyed by this object.
    Borrowed(StorageId),
}

impl StorageHandle {
    /// Returns the arena id regardless of ownership.
    pub fn id(self) -> StorageId {
        match self {
            StorageHandle::Owned(id) | StorageHandle::Borrowed(id) => id,
        }
    }

    /// Returns `true` if the object owns the arena.
    pub fn is_owned(self) -> bool {
        matches!(self, StorageHandle::Owned(_))
    }
}

/// The envelope behind every entity.
///
/// The `type`, `id` and `name` attributes (and `parent`, when there is a
/// structural parent) are written as constants on construction.
#[derive(Debug)]
pub struct Object {
    pub(crate) id: Sym,
    pub(crate) name: Sym,
    pub(crate) attributes: AttributeStore,
    pub(crate) storage: StorageHandle,
    pub(crate) payload: EntityRef,
}

impl Object {
    /// Returns the entity kind.
    pub fn kind(&self) -> EntityKind {
        self.payload.kind()
    }

    /// Returns the typed entity this object belongs to.
    pub fn payload(&self) -> EntityRef {
        self.payload
    }

    /// Returns the cached handle of the `id` attribute.
    pub fn id_sym(&self) -> Sym {
        self.id
    }

    /// Returns the cached handle of the `name` attribute.
    pub fn name_sym(&self) -> Sym {
        self.name
    }

    /// Returns the arena handle.
    pub fn storage(&self) -> StorageHandle {
        self.storage
    }

    /// Returns the attribute store.
    pub fn attributes(&self) -> &AttributeStore {
        &self.attributes
    }
}

/// Implemented by every typed entity.
pub trait Entity {
    /// The kind of this entity.
    const KIND: EntityKind;

    /// Returns the entity's generic object.
    fn object(&self) -> ObjectId;

    /// Returns the handle of the entity's name.
    fn name(&self) -> Sym;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(EntityKind::Port.label(), "port");
        assert_eq!(EntityKind::RegfileRegister.label(), "register");
        assert_eq!(EntityKind::RegfileEntry.label(), "regfile-entry");
        assert_eq!(EntityKind::CodeSection.to_string(), "codesection");
    }

    #[test]
    fn compose_without_parent() {
        assert_eq!(compose_id(EntityKind::Module, None, "adder"), "module::adder");
        assert_eq!(
            compose_id(EntityKind::Regfile, None, "csr"),
            "regfile::csr"
        );
    }

    #[test]
    fn compose_with_parent() {
        assert_eq!(
            compose_id(EntityKind::Port, Some("adder"), "a"),
            "port::adder.a"
        );
        assert_eq!(
            compose_id(EntityKind::RegfileEntry, Some("csr"), "ctrl"),
            "regfile-entry::csr.ctrl"
        );
    }

    #[test]
    fn payload_kind() {
        assert_eq!(
            EntityRef::Module(ModuleId::from_raw(0)).kind(),
            EntityKind::Module
        );
        assert_eq!(
            EntityRef::RegfileRegister(RegfileRegId::from_raw(0)).kind(),
            EntityKind::RegfileRegister
        );
    }

    #[test]
    fn payload_downcasts() {
        let module = EntityRef::Module(ModuleId::from_raw(3));
        assert_eq!(module.as_module(), Some(ModuleId::from_raw(3)));
        assert!(module.as_instance().is_none());
    }

    #[test]
    fn storage_handle_ownership() {
        let owned = StorageHandle::Owned(StorageId::from_raw(1));
        let borrowed = StorageHandle::Borrowed(StorageId::from_raw(1));
        assert!(owned.is_owned());
        assert!(!borrowed.is_owned());
        assert_eq!(owned.id(), borrowed.id());
    }
}
