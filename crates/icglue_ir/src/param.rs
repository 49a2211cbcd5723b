//! Module parameters.

use crate::design::Design;
use crate::ids::{ModuleId, ObjectId, ParamId, StorageId};
use crate::module::bool_text;
use crate::object::{Entity, EntityKind, EntityRef};
use icglue_common::Sym;

/// A module parameter with its default value.
#[derive(Debug)]
pub struct Parameter {
    /// The generic object.
    pub object: ObjectId,
    /// The parameter name.
    pub name: Sym,
    /// The value text.
    pub value: Sym,
    /// Whether this is a local (non-overridable) parameter.
    pub local: bool,
    /// The owning module.
    pub parent: ModuleId,
}

impl Entity for Parameter {
    const KIND: EntityKind = EntityKind::Parameter;

    fn object(&self) -> ObjectId {
        self.object
    }

    fn name(&self) -> Sym {
        self.name
    }
}

impl Design {
    /// Adds a parameter to `parent`.
    pub fn new_param(
        &mut self,
        name: &str,
        value: &str,
        local: bool,
        parent: ModuleId,
        storage: Option<StorageId>,
    ) -> Option<ParamId> {
        let parent_object = self.modules.get(parent)?.object;

        let id = self.params.next_id();
        let object =
            self.new_object(name, Some(parent_object), EntityRef::Parameter(id), storage)?;
        let (Some(value), Some(_)) = (
            self.seal_attr(object, "value", value),
            self.seal_attr(object, "local", bool_text(local)),
        ) else {
            self.free_object(Some(object));
            return None;
        };

        let name = self.objects.get(object)?.name;
        self.params.alloc(Parameter {
            object,
            name,
            value,
            local,
            parent,
        });
        self.modules.get_mut(parent)?.params.push(id);
        Some(id)
    }

    /// Frees a parameter's object.
    pub fn free_param(&mut self, id: Option<ParamId>) {
        if let Some(param) = id.and_then(|id| self.params.free(id)) {
            self.free_object(Some(param.object));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn param_value_and_locality() {
        let mut design = Design::default();
        let m = design.new_module("fifo", false, false, None).unwrap();
        let p = design.new_param("DEPTH", "16", false, m, None).unwrap();
        let lp = design.new_param("AW", "4", true, m, None).unwrap();

        let param = design.param(p).unwrap();
        assert_eq!(design.id_of(param), Some("parameter::fifo.DEPTH"));
        assert_eq!(design.resolve(param, param.value), Some("16"));
        assert_eq!(design.attr(param.object, "local"), Some("false"));
        assert!(!param.local);

        let local = design.param(lp).unwrap();
        assert!(local.local);
        assert_eq!(design.attr(local.object, "local"), Some("true"));

        assert_eq!(design.module(m).unwrap().params, vec![p, lp]);
    }

    #[test]
    fn resource_modules_take_params() {
        let mut design = Design::default();
        let m = design.new_module("ram", false, true, None).unwrap();
        assert!(design.new_param("WIDTH", "32", false, m, None).is_some());
    }

    #[test]
    fn value_is_constant_but_extra_attributes_are_not() {
        let mut design = Design::default();
        let m = design.new_module("fifo", false, false, None).unwrap();
        let p = design.new_param("DEPTH", "16", false, m, None).unwrap();
        let object = design.param(p).unwrap().object;
        assert!(!design.set_attr(object, "value", "32", false));
        assert!(design.set_attr(object, "comment", "entries", false));
        assert_eq!(design.attr(object, "value"), Some("16"));
        design.free_param(Some(p));
        design.free_param(Some(p));
        assert!(design.param(p).is_none());
    }
}
