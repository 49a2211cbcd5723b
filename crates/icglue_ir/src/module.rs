//! Modules, the unit everything else hangs off.
//!
//! A module is either a *resource* (a pre-built leaf: ports and parameters
//! only) or *generative* (it may also hold declarations, codesections, child
//! instances and regfiles). The choice is made once, at construction.

use crate::design::Design;
use crate::ids::{
    CodeId, DeclId, InstanceId, ModuleId, ObjectId, ParamId, PortId, RegfileId, StorageId,
};
use crate::object::{Entity, EntityKind, EntityRef};
use icglue_common::Sym;
use icglue_log::LogId;

/// A hardware module.
///
/// For resource modules, `decls`, `code`, `child_instances`, `regfiles` and
/// `default_instance` are all `None`. For generative modules they are all
/// `Some`, and `default_instance` is the module instantiating itself.
#[derive(Debug)]
pub struct Module {
    /// The generic object.
    pub object: ObjectId,
    /// The module name.
    pub name: Sym,
    /// Passthrough flag marking a pre-compiled macro.
    pub ilm: bool,
    /// Whether this is a resource (leaf) module.
    pub resource: bool,
    /// Parameters, in creation order.
    pub params: Vec<ParamId>,
    /// Ports, in creation order.
    pub ports: Vec<PortId>,
    /// Every instance of this module, wherever it is placed.
    pub mod_instances: Vec<InstanceId>,
    /// Declarations.
    pub decls: Option<Vec<DeclId>>,
    /// Codesections.
    pub code: Option<Vec<CodeId>>,
    /// Instances placed inside this module.
    pub child_instances: Option<Vec<InstanceId>>,
    /// Register files.
    pub regfiles: Option<Vec<RegfileId>>,
    /// The instance representing the module itself.
    pub default_instance: Option<InstanceId>,
}

impl Entity for Module {
    const KIND: EntityKind = EntityKind::Module;

    fn object(&self) -> ObjectId {
        self.object
    }

    fn name(&self) -> Sym {
        self.name
    }
}

pub(crate) fn bool_text(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

impl Design {
    /// Creates a module.
    ///
    /// A generative module (`resource == false`) immediately gets its default
    /// instance, named like the module and without structural parent.
    pub fn new_module(
        &mut self,
        name: &str,
        ilm: bool,
        resource: bool,
        storage: Option<StorageId>,
    ) -> Option<ModuleId> {
        self.logger
            .debug(LogId::MODULE_NEW, format!("Generating module {name}"));

        let id = self.modules.next_id();
        let object = self.new_object(name, None, EntityRef::Module(id), storage)?;
        self.set_attr(object, "ilm", bool_text(ilm), true);
        self.set_attr(object, "resource", bool_text(resource), true);

        let generative = !resource;
        let module = Module {
            object,
            name: self.objects.get(object)?.name,
            ilm,
            resource,
            params: Vec::new(),
            ports: Vec::new(),
            mod_instances: Vec::new(),
            decls: generative.then(Vec::new),
            code: generative.then(Vec::new),
            child_instances: generative.then(Vec::new),
            regfiles: generative.then(Vec::new),
            default_instance: None,
        };
        self.modules.alloc(module);

        if generative {
            let default_instance = self.new_instance(name, id, None, storage);
            if let Some(module) = self.modules.get_mut(id) {
                module.default_instance = default_instance;
            }
        }

        Some(id)
    }

    /// Frees a module's object and its collections.
    ///
    /// The entities in those collections, including the default instance, are
    /// left alone. `None` or an already freed id is a no-op.
    pub fn free_module(&mut self, id: Option<ModuleId>) {
        if let Some(module) = id.and_then(|id| self.modules.free(id)) {
            self.free_object(Some(module.object));
        }
    }
}
