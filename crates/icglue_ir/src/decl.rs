//! Signal declarations inside generative modules.

use crate::design::Design;
use crate::ids::{DeclId, ModuleId, ObjectId, StorageId};
use crate::module::bool_text;
use crate::object::{Entity, EntityKind, EntityRef};
use icglue_common::Sym;
use icglue_log::LogId;

/// A declaration with an optional default assignment.
#[derive(Debug)]
pub struct Declaration {
    /// The generic object.
    pub object: ObjectId,
    /// The declared name.
    pub name: Sym,
    /// The default assignment, stored as the `assign` attribute.
    pub default_assignment: Option<Sym>,
    /// Whether the emitter should use its default signal type.
    pub default_type: bool,
    /// The owning module.
    pub parent: ModuleId,
}

impl Entity for Declaration {
    const KIND: EntityKind = EntityKind::Declaration;

    fn object(&self) -> ObjectId {
        self.object
    }

    fn name(&self) -> Sym {
        self.name
    }
}

impl Design {
    /// Adds a declaration to the generative module `parent`.
    ///
    /// Resource modules have no declarations; trying to add one logs an error
    /// and returns `None`.
    pub fn new_decl(
        &mut self,
        name: &str,
        assign: Option<&str>,
        default_type: bool,
        parent: ModuleId,
        storage: Option<StorageId>,
    ) -> Option<DeclId> {
        let parent_module = self.modules.get(parent)?;
        if parent_module.decls.is_none() {
            self.logger.error(
                LogId::DECLARATION_NEW,
                "Cannot add declaration to resource module",
            );
            return None;
        }
        let parent_object = parent_module.object;

        let id = self.decls.next_id();
        let object =
            self.new_object(name, Some(parent_object), EntityRef::Declaration(id), storage)?;
        if self
            .seal_attr(object, "default_type", bool_text(default_type))
            .is_none()
        {
            self.free_object(Some(object));
            return None;
        }
        let default_assignment = match assign {
            Some(assign) => {
                let Some(sym) = self.seal_attr(object, "assign", assign) else {
                    self.free_object(Some(object));
                    return None;
                };
                Some(sym)
            }
            None => None,
        };

        let name = self.objects.get(object)?.name;
        self.decls.alloc(Declaration {
            object,
            name,
            default_assignment,
            default_type,
            parent,
        });
        self.modules.get_mut(parent)?.decls.as_mut()?.push(id);
        Some(id)
    }

    /// Frees a declaration's object.
    pub fn free_decl(&mut self, id: Option<DeclId>) {
        if let Some(decl) = id.and_then(|id| self.decls.free(id)) {
            self.free_object(Some(decl.object));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use icglue_log::Level;

    #[test]
    fn declaration_with_assignment() {
        let mut design = Design::default();
        let m = design.new_module("top", false, false, None).unwrap();
        let d = design.new_decl("sum", Some("a + b"), true, m, None).unwrap();
        let decl = design.decl(d).unwrap();
        assert_eq!(design.id_of(decl), Some("declaration::top.sum"));
        assert_eq!(
            decl.default_assignment.and_then(|s| design.resolve(decl, s)),
            Some("a + b")
        );
        assert_eq!(design.attr(decl.object, "default_type"), Some("true"));
        assert_eq!(design.module(m).unwrap().decls.as_deref(), Some(&[d][..]));
    }

    #[test]
    fn declaration_without_assignment_has_no_assign_attribute() {
        let mut design = Design::default();
        let m = design.new_module("top", false, false, None).unwrap();
        let d = design.new_decl("tmp", None, false, m, None).unwrap();
        let decl = design.decl(d).unwrap();
        assert!(decl.default_assignment.is_none());
        assert!(design.attr(decl.object, "assign").is_none());
        assert_eq!(design.attr(decl.object, "default_type"), Some("false"));
    }

    #[test]
    fn resource_module_rejects_declarations() {
        let mut design = Design::default();
        let m = design.new_module("rom", false, true, None).unwrap();
        design.logger_mut().take_all();
        assert!(design.new_decl("x", None, false, m, None).is_none());
        assert!(design.module(m).unwrap().decls.is_none());
        assert_eq!(design.logger().count_at_least(Level::Error), 1);
        assert_eq!(design.logger().records()[0].id, LogId::DECLARATION_NEW);
        design.free_decl(None);
    }
}
