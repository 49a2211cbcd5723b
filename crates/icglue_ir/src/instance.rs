//! Module instances and their two independent relations.
//!
//! An [`Instance`] *instantiates* one module (it is listed in that module's
//! `mod_instances`) and is optionally *contained in* another (listed in the
//! structural parent's `child_instances`). The two edges are maintained
//! separately: a module is used in many places, and where an instance lives
//! says nothing about what it instantiates.

use crate::design::Design;
use crate::ids::{AdjustmentId, InstanceId, ModuleId, ObjectId, PinId, StorageId};
use crate::object::{Entity, EntityKind, EntityRef};
use icglue_common::Sym;
use icglue_log::LogId;

/// One use of a module.
#[derive(Debug)]
pub struct Instance {
    /// The generic object.
    pub object: ObjectId,
    /// The instance name.
    pub name: Sym,
    /// The instantiated module.
    pub module: ModuleId,
    /// The module this instance is placed in, if any.
    pub parent: Option<ModuleId>,
    /// Per-instance adjustments, in creation order.
    pub adjustments: Vec<AdjustmentId>,
    /// Pin connections, in creation order.
    pub pins: Vec<PinId>,
}

impl Entity for Instance {
    const KIND: EntityKind = EntityKind::Instance;

    fn object(&self) -> ObjectId {
        self.object
    }

    fn name(&self) -> Sym {
        self.name
    }
}

impl Design {
    /// Creates an instance of `module`, optionally placed inside `parent`.
    ///
    /// The instance is appended to `parent.child_instances` (when given) and
    /// to `module.mod_instances`. Returns `None` if either module is gone, or
    /// (with an error log) if `parent` is a resource module.
    pub fn new_instance(
        &mut self,
        name: &str,
        module: ModuleId,
        parent: Option<ModuleId>,
        storage: Option<StorageId>,
    ) -> Option<InstanceId> {
        let module_object = self.modules.get(module)?.object;
        let module_id = self.object_id(module_object)?.to_string();

        let parent_object = match parent {
            Some(parent) => {
                let parent_module = self.modules.get(parent)?;
                if parent_module.child_instances.is_none() {
                    let parent_name = self.name_of(parent_module).unwrap_or("<unknown>");
                    let message =
                        format!("Cannot add instance {name} to resource module {parent_name}");
                    self.logger.error(LogId::INSTANCE_IN_RESOURCE, message);
                    return None;
                }
                Some(parent_module.object)
            }
            None => None,
        };

        self.logger
            .debug(LogId::INSTANCE_NEW, format!("Generating instance {name}"));

        let id = self.instances.next_id();
        let object = self.new_object(name, parent_object, EntityRef::Instance(id), storage)?;
        if self.seal_attr(object, "module", &module_id).is_none() {
            self.free_object(Some(object));
            return None;
        }

        let name = self.objects.get(object)?.name;
        self.instances.alloc(Instance {
            object,
            name,
            module,
            parent,
            adjustments: Vec::new(),
            pins: Vec::new(),
        });

        if let Some(children) = parent
            .and_then(|parent| self.modules.get_mut(parent))
            .and_then(|parent| parent.child_instances.as_mut())
        {
            children.push(id);
        }
        if let Some(module) = self.modules.get_mut(module) {
            module.mod_instances.push(id);
        }

        Some(id)
    }

    /// Frees an instance's object and its pin/adjustment lists.
    pub fn free_instance(&mut self, id: Option<InstanceId>) {
        if let Some(instance) = id.and_then(|id| self.instances.free(id)) {
            self.free_object(Some(instance.object));
        }
    }
}
