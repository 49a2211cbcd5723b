//! Top-level container of one IR build session.
//!
//! A [`Design`] owns every string arena, object and typed entity, plus the
//! [`Logger`] that construction reports to. Entities refer to each other by
//! copyable ids; freeing an entity empties its slot and leaves every other id
//! intact.

use crate::arena::Arena;
use crate::attribute::AttributeStore;
use crate::code::CodeSection;
use crate::decl::Declaration;
use crate::ids::{
    AdjustmentId, CodeId, DeclId, InstanceId, ModuleId, ObjectId, ParamId, PinId, PortId,
    RegfileEntryId, RegfileId, RegfileRegId, StorageId,
};
use crate::instance::Instance;
use crate::module::Module;
use crate::object::{compose_id, Entity, EntityRef, Object, StorageHandle};
use crate::param::Parameter;
use crate::pin::{Adjustment, Pin};
use crate::port::Port;
use crate::regfile::{Regfile, RegfileEntry, RegfileRegister};
use icglue_common::{StringArena, Sym};
use icglue_log::{LogId, Logger};

/// A complete IR tree (or forest) under construction.
#[derive(Debug, Default)]
pub struct Design {
    pub(crate) strings: Arena<StorageId, StringArena>,
    pub(crate) objects: Arena<ObjectId, Object>,
    pub(crate) modules: Arena<ModuleId, Module>,
    pub(crate) instances: Arena<InstanceId, Instance>,
    pub(crate) ports: Arena<PortId, Port>,
    pub(crate) params: Arena<ParamId, Parameter>,
    pub(crate) decls: Arena<DeclId, Declaration>,
    pub(crate) code: Arena<CodeId, CodeSection>,
    pub(crate) pins: Arena<PinId, Pin>,
    pub(crate) adjustments: Arena<AdjustmentId, Adjustment>,
    pub(crate) regfiles: Arena<RegfileId, Regfile>,
    pub(crate) regfile_entries: Arena<RegfileEntryId, RegfileEntry>,
    pub(crate) regfile_regs: Arena<RegfileRegId, RegfileRegister>,
    pub(crate) logger: Logger,
}

impl Design {
    /// Creates an empty design reporting to `logger`.
    pub fn new(logger: Logger) -> Self {
        Self {
            logger,
            ..Self::default()
        }
    }

    /// Returns the logger.
    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Returns the logger mutably, e.g. to change thresholds mid-build.
    pub fn logger_mut(&mut self) -> &mut Logger {
        &mut self.logger
    }

    /// Consumes the design and returns its logger.
    pub fn into_logger(self) -> Logger {
        self.logger
    }

    /// Creates the generic object of a new entity.
    ///
    /// Without `storage` the object gets a fresh arena it owns; otherwise it
    /// borrows the given one, which must still exist. Returns `None` if the
    /// parent object or the borrowed arena is gone.
    pub(crate) fn new_object(
        &mut self,
        name: &str,
        parent: Option<ObjectId>,
        payload: EntityRef,
        storage: Option<StorageId>,
    ) -> Option<ObjectId> {
        let kind = payload.kind();

        let parent_info = match parent {
            Some(parent) => Some((
                self.object_name(parent)?.to_string(),
                self.object_id(parent)?.to_string(),
            )),
            None => None,
        };

        self.logger.debug(
            LogId::OBJECT_NEW,
            format!(
                "Creating object of type {kind}, name {name}, parent {}",
                parent_info.as_ref().map_or("<none>", |(_, id)| id.as_str())
            ),
        );

        let storage = match storage {
            Some(id) if self.strings.contains(id) => StorageHandle::Borrowed(id),
            Some(_) => return None,
            None => StorageHandle::Owned(self.strings.alloc(StringArena::new())),
        };
        let arena = self.strings.get_mut(storage.id())?;

        let id_text = compose_id(kind, parent_info.as_ref().map(|(name, _)| name.as_str()), name);

        let mut attributes = AttributeStore::new();
        attributes.set(arena, "type", kind.label(), true);
        attributes.set(arena, "id", &id_text, true);
        attributes.set(arena, "name", name, true);
        if let Some((_, parent_id)) = &parent_info {
            attributes.set(arena, "parent", parent_id, true);
        }

        let object = Object {
            id: arena.insert(&id_text),
            name: arena.insert(name),
            attributes,
            storage,
            payload,
        };
        Some(self.objects.alloc(object))
    }

    /// Releases an object and, if it owns one, its arena.
    pub(crate) fn free_object(&mut self, object: Option<ObjectId>) {
        let Some(object) = object.and_then(|id| self.objects.free(id)) else {
            return;
        };
        if let StorageHandle::Owned(storage) = object.storage {
            self.strings.free(storage);
        }
    }

    /// Writes a constant attribute on a freshly built object and returns the
    /// value handle.
    ///
    /// Only fails if the object's arena disappeared, which construction rules
    /// out; that case is reported as an internal error.
    pub(crate) fn seal_attr(&mut self, object: ObjectId, name: &str, value: &str) -> Option<Sym> {
        if self.set_attr(object, name, value, true) {
            if let Some(attr) = self.lookup_attr(object, name) {
                return Some(attr.value);
            }
        }
        self.logger.internal_error(
            LogId::OBJECT_NEW,
            format!("could not store constant attribute {name}"),
        );
        None
    }

    fn lookup_attr(&self, object: ObjectId, name: &str) -> Option<crate::attribute::Attribute> {
        let obj = self.objects.get(object)?;
        let arena = self.strings.get(obj.storage.id())?;
        obj.attributes.lookup(arena, name)
    }

    /// Sets an attribute on an object.
    ///
    /// Returns `false` if the object is gone or the attribute is constant.
    pub fn set_attr(&mut self, object: ObjectId, name: &str, value: &str, constant: bool) -> bool {
        let Some(obj) = self.objects.get_mut(object) else {
            return false;
        };
        let Some(arena) = self.strings.get_mut(obj.storage.id()) else {
            return false;
        };
        obj.attributes.set(arena, name, value, constant)
    }

    /// Returns an attribute value of an object.
    pub fn attr(&self, object: ObjectId, name: &str) -> Option<&str> {
        let obj = self.objects.get(object)?;
        let arena = self.strings.get(obj.storage.id())?;
        obj.attributes.get(arena, name)
    }

    /// Returns `true` if the attribute exists and is constant.
    pub fn is_constant_attr(&self, object: ObjectId, name: &str) -> bool {
        self.lookup_attr(object, name).is_some_and(|attr| attr.constant)
    }

    /// Returns the generic object.
    pub fn object(&self, object: ObjectId) -> Option<&Object> {
        self.objects.get(object)
    }

    /// Returns the composed id of an object.
    pub fn object_id(&self, object: ObjectId) -> Option<&str> {
        let obj = self.objects.get(object)?;
        self.strings.get(obj.storage.id())?.resolve(obj.id)
    }

    /// Returns the name of an object.
    pub fn object_name(&self, object: ObjectId) -> Option<&str> {
        let obj = self.objects.get(object)?;
        self.strings.get(obj.storage.id())?.resolve(obj.name)
    }

    /// Returns the arena an object's strings live in, for handing down to
    /// child entities.
    pub fn storage_of(&self, object: ObjectId) -> Option<StorageId> {
        Some(self.objects.get(object)?.storage.id())
    }

    /// Returns the number of live string arenas.
    pub fn storage_count(&self) -> usize {
        self.strings.len()
    }

    /// Resolves a handle stored in one of `entity`'s typed fields.
    pub fn resolve<E: Entity>(&self, entity: &E, sym: Sym) -> Option<&str> {
        let obj = self.objects.get(entity.object())?;
        self.strings.get(obj.storage.id())?.resolve(sym)
    }

    /// Returns the name of a typed entity.
    pub fn name_of<E: Entity>(&self, entity: &E) -> Option<&str> {
        self.resolve(entity, entity.name())
    }

    /// Returns the composed id of a typed entity.
    pub fn id_of<E: Entity>(&self, entity: &E) -> Option<&str> {
        self.object_id(entity.object())
    }

    /// Returns a module.
    pub fn module(&self, id: ModuleId) -> Option<&Module> {
        self.modules.get(id)
    }

    /// Iterates over all live modules in creation order.
    pub fn modules(&self) -> impl Iterator<Item = (ModuleId, &Module)> {
        self.modules.iter()
    }

    /// Returns an instance.
    pub fn instance(&self, id: InstanceId) -> Option<&Instance> {
        self.instances.get(id)
    }

    /// Returns a port.
    pub fn port(&self, id: PortId) -> Option<&Port> {
        self.ports.get(id)
    }

    /// Returns a parameter.
    pub fn param(&self, id: ParamId) -> Option<&Parameter> {
        self.params.get(id)
    }

    /// Returns a declaration.
    pub fn decl(&self, id: DeclId) -> Option<&Declaration> {
        self.decls.get(id)
    }

    /// Returns a codesection.
    pub fn code(&self, id: CodeId) -> Option<&CodeSection> {
        self.code.get(id)
    }

    /// Returns a pin.
    pub fn pin(&self, id: PinId) -> Option<&Pin> {
        self.pins.get(id)
    }

    /// Returns an adjustment.
    pub fn adjustment(&self, id: AdjustmentId) -> Option<&Adjustment> {
        self.adjustments.get(id)
    }

    /// Returns a regfile.
    pub fn regfile(&self, id: RegfileId) -> Option<&Regfile> {
        self.regfiles.get(id)
    }

    /// Returns a regfile entry.
    pub fn regfile_entry(&self, id: RegfileEntryId) -> Option<&RegfileEntry> {
        self.regfile_entries.get(id)
    }

    /// Returns a regfile register.
    pub fn regfile_register(&self, id: RegfileRegId) -> Option<&RegfileRegister> {
        self.regfile_regs.get(id)
    }
}
