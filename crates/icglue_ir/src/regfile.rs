//! Register-file metadata: `Regfile -> RegfileEntry -> RegfileRegister`.
//!
//! A regfile hangs off a generative module, but its object has no structural
//! parent, so regfile ids form their own namespace (`regfile::<name>`) apart
//! from the module tree.

use crate::design::Design;
use crate::ids::{ModuleId, ObjectId, RegfileEntryId, RegfileId, RegfileRegId, StorageId};
use crate::object::{Entity, EntityKind, EntityRef};
use icglue_common::Sym;
use icglue_log::LogId;

/// A register file attached to a module.
#[derive(Debug)]
pub struct Regfile {
    /// The generic object.
    pub object: ObjectId,
    /// The regfile name.
    pub name: Sym,
    /// The module the regfile belongs to.
    pub parent: ModuleId,
    /// Entries, in creation order.
    pub entries: Vec<RegfileEntryId>,
}

/// One addressable entry of a regfile.
#[derive(Debug)]
pub struct RegfileEntry {
    /// The generic object.
    pub object: ObjectId,
    /// The entry name.
    pub name: Sym,
    /// The owning regfile.
    pub parent: RegfileId,
    /// Registers, in creation order.
    pub regs: Vec<RegfileRegId>,
}

/// One register (bit field) of a regfile entry.
#[derive(Debug)]
pub struct RegfileRegister {
    /// The generic object.
    pub object: ObjectId,
    /// The register name.
    pub name: Sym,
    /// The owning entry.
    pub parent: RegfileEntryId,
}

impl Entity for Regfile {
    const KIND: EntityKind = EntityKind::Regfile;

    fn object(&self) -> ObjectId {
        self.object
    }

    fn name(&self) -> Sym {
        self.name
    }
}

impl Entity for RegfileEntry {
    const KIND: EntityKind = EntityKind::RegfileEntry;

    fn object(&self) -> ObjectId {
        self.object
    }

    fn name(&self) -> Sym {
        self.name
    }
}

impl Entity for RegfileRegister {
    const KIND: EntityKind = EntityKind::RegfileRegister;

    fn object(&self) -> ObjectId {
        self.object
    }

    fn name(&self) -> Sym {
        self.name
    }
}

impl Design {
    /// Adds a regfile to the generative module `parent`.
    ///
    /// Resource modules take no regfiles; trying to add one logs an error and
    /// returns `None`.
    pub fn new_regfile(
        &mut self,
        name: &str,
        parent: ModuleId,
        storage: Option<StorageId>,
    ) -> Option<RegfileId> {
        let parent_module = self.modules.get(parent)?;
        if parent_module.regfiles.is_none() {
            self.logger.error(
                LogId::REGFILE_NEW,
                "Cannot add regfile to resource module",
            );
            return None;
        }

        let id = self.regfiles.next_id();
        let object = self.new_object(name, None, EntityRef::Regfile(id), storage)?;
        let name = self.objects.get(object)?.name;
        self.regfiles.alloc(Regfile {
            object,
            name,
            parent,
            entries: Vec::new(),
        });
        self.modules.get_mut(parent)?.regfiles.as_mut()?.push(id);
        Some(id)
    }

    /// Frees a regfile's object and its entry list.
    pub fn free_regfile(&mut self, id: Option<RegfileId>) {
        if let Some(regfile) = id.and_then(|id| self.regfiles.free(id)) {
            self.free_object(Some(regfile.object));
        }
    }

    /// Adds an entry to regfile `parent`.
    pub fn new_regfile_entry(
        &mut self,
        name: &str,
        parent: RegfileId,
        storage: Option<StorageId>,
    ) -> Option<RegfileEntryId> {
        let parent_object = self.regfiles.get(parent)?.object;

        let id = self.regfile_entries.next_id();
        let object =
            self.new_object(name, Some(parent_object), EntityRef::RegfileEntry(id), storage)?;
        let name = self.objects.get(object)?.name;
        self.regfile_entries.alloc(RegfileEntry {
            object,
            name,
            parent,
            regs: Vec::new(),
        });
        self.regfiles.get_mut(parent)?.entries.push(id);
        Some(id)
    }

    /// Frees an entry's object and its register list.
    pub fn free_regfile_entry(&mut self, id: Option<RegfileEntryId>) {
        if let Some(entry) = id.and_then(|id| self.regfile_entries.free(id)) {
            self.free_object(Some(entry.object));
        }
    }

    /// Adds a register to entry `parent`.
    pub fn new_regfile_register(
        &mut self,
        name: &str,
        parent: RegfileEntryId,
        storage: Option<StorageId>,
    ) -> Option<RegfileRegId> {
        let parent_object = self.regfile_entries.get(parent)?.object;

        let id = self.regfile_regs.next_id();
        let object = self.new_object(
            name,
            Some(parent_object),
            EntityRef::RegfileRegister(id),
            storage,
        )?;
        let name = self.objects.get(object)?.name;
        self.regfile_regs.alloc(RegfileRegister {
            object,
            name,
            parent,
        });
        self.regfile_entries.get_mut(parent)?.regs.push(id);
        Some(id)
    }

    /// Frees a register's object.
    pub fn free_regfile_register(&mut self, id: Option<RegfileRegId>) {
        if let Some(reg) = id.and_then(|id| self.regfile_regs.free(id)) {
            self.free_object(Some(reg.object));
        }
    }
}
