//! Free-form code blocks inside generative modules.

use crate::design::Design;
use crate::ids::{CodeId, ModuleId, ObjectId, StorageId};
use crate::object::{Entity, EntityKind, EntityRef};
use icglue_common::Sym;
use icglue_log::LogId;

/// A literal block of HDL code copied verbatim by the emitter.
#[derive(Debug)]
pub struct CodeSection {
    /// The generic object.
    pub object: ObjectId,
    /// The section name, `_cs_<n>` if none was given.
    pub name: Sym,
    /// The code text.
    pub code: Sym,
    /// The owning module.
    pub parent: ModuleId,
}

impl Entity for CodeSection {
    const KIND: EntityKind = EntityKind::CodeSection;

    fn object(&self) -> ObjectId {
        self.object
    }

    fn name(&self) -> Sym {
        self.name
    }
}

impl Design {
    /// Adds a codesection to the generative module `parent`.
    ///
    /// Without a name, the section is called `_cs_<n>` where `n` is the number
    /// of codesections `parent` already has. Resource modules take no code;
    /// trying to add some logs an error and returns `None`.
    pub fn new_code(
        &mut self,
        name: Option<&str>,
        code: &str,
        parent: ModuleId,
        storage: Option<StorageId>,
    ) -> Option<CodeId> {
        let parent_module = self.modules.get(parent)?;
        let Some(sections) = parent_module.code.as_ref() else {
            self.logger.error(
                LogId::CODESECTION_NEW,
                "Cannot add codesection to resource module",
            );
            return None;
        };
        let name = match name {
            Some(name) => name.to_string(),
            None => format!("_cs_{}", sections.len()),
        };
        let parent_object = parent_module.object;

        let id = self.code.next_id();
        let object =
            self.new_object(&name, Some(parent_object), EntityRef::CodeSection(id), storage)?;
        let Some(code) = self.seal_attr(object, "code", code) else {
            self.free_object(Some(object));
            return None;
        };

        let name = self.objects.get(object)?.name;
        self.code.alloc(CodeSection {
            object,
            name,
            code,
            parent,
        });
        self.modules.get_mut(parent)?.code.as_mut()?.push(id);
        Some(id)
    }

    /// Frees a codesection's object.
    pub fn free_code(&mut self, id: Option<CodeId>) {
        if let Some(section) = id.and_then(|id| self.code.free(id)) {
            self.free_object(Some(section.object));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use icglue_log::Level;

    #[test]
    fn unnamed_sections_are_numbered() {
        let mut design = Design::default();
        let m = design.new_module("adder", false, false, None).unwrap();
        let first = design.new_code(None, "assign x = 1;", m, None).unwrap();
        let second = design.new_code(None, "assign y = 0;", m, None).unwrap();
        assert_eq!(design.name_of(design.code(first).unwrap()), Some("_cs_0"));
        assert_eq!(design.name_of(design.code(second).unwrap()), Some("_cs_1"));
        assert_eq!(
            design.id_of(design.code(second).unwrap()),
            Some("codesection::adder._cs_1")
        );
    }

    #[test]
    fn numbering_counts_named_sections_too() {
        let mut design = Design::default();
        let m = design.new_module("adder", false, false, None).unwrap();
        design.new_code(Some("header"), "// hi", m, None).unwrap();
        let unnamed = design.new_code(None, "// body", m, None).unwrap();
        assert_eq!(design.name_of(design.code(unnamed).unwrap()), Some("_cs_1"));
    }

    #[test]
    fn code_text_is_kept() {
        let mut design = Design::default();
        let m = design.new_module("adder", false, false, None).unwrap();
        let c = design.new_code(Some("body"), "assign s = a ^ b;", m, None).unwrap();
        let section = design.code(c).unwrap();
        assert_eq!(design.resolve(section, section.code), Some("assign s = a ^ b;"));
        assert_eq!(design.attr(section.object, "code"), Some("assign s = a ^ b;"));
        assert_eq!(design.module(m).unwrap().code.as_deref(), Some(&[c][..]));
    }

    #[test]
    fn resource_module_rejects_code() {
        let mut design = Design::default();
        let m = design.new_module("rom", false, true, None).unwrap();
        design.logger_mut().take_all();
        assert!(design.new_code(None, "x", m, None).is_none());
        assert!(design.module(m).unwrap().code.is_none());
        let records = design.logger().records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].level, Level::Error);
        assert_eq!(records[0].id, LogId::CODESECTION_NEW);
        design.free_code(None);
    }
}
