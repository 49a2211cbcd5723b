//! Ports of a module interface.

use crate::design::Design;
use crate::ids::{ModuleId, ObjectId, PortId, StorageId};
use crate::object::{Entity, EntityKind, EntityRef};
use icglue_common::Sym;
use std::fmt;

/// The direction of a port on a module boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PortDirection {
    /// Data flows into the module.
    Input,
    /// Data flows out of the module.
    Output,
    /// Data flows both ways.
    Bidirectional,
}

impl PortDirection {
    /// Returns the text stored in the `direction` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            PortDirection::Input => "input",
            PortDirection::Output => "output",
            PortDirection::Bidirectional => "bidirectional",
        }
    }
}

impl fmt::Display for PortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A port in a module's interface.
#[derive(Debug)]
pub struct Port {
    /// The generic object.
    pub object: ObjectId,
    /// The port name.
    pub name: Sym,
    /// The direction of data flow.
    pub direction: PortDirection,
    /// The owning module.
    pub parent: ModuleId,
}

impl Entity for Port {
    const KIND: EntityKind = EntityKind::Port;

    fn object(&self) -> ObjectId {
        self.object
    }

    fn name(&self) -> Sym {
        self.name
    }
}

impl Design {
    /// Adds a port to `parent`. Works on resource and generative modules.
    pub fn new_port(
        &mut self,
        name: &str,
        direction: PortDirection,
        parent: ModuleId,
        storage: Option<StorageId>,
    ) -> Option<PortId> {
        let parent_object = self.modules.get(parent)?.object;

        let id = self.ports.next_id();
        let object = self.new_object(name, Some(parent_object), EntityRef::Port(id), storage)?;
        if self.seal_attr(object, "direction", direction.as_str()).is_none() {
            self.free_object(Some(object));
            return None;
        }

        let name = self.objects.get(object)?.name;
        self.ports.alloc(Port {
            object,
            name,
            direction,
            parent,
        });
        self.modules.get_mut(parent)?.ports.push(id);
        Some(id)
    }

    /// Frees a port's object.
    pub fn free_port(&mut self, id: Option<PortId>) {
        if let Some(port) = id.and_then(|id| self.ports.free(id)) {
            self.free_object(Some(port.object));
        }
    }
}
