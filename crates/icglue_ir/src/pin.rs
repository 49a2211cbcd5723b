//! Per-instance pin connections and adjustments.

use crate::design::Design;
use crate::ids::{AdjustmentId, InstanceId, ObjectId, PinId, StorageId};
use crate::object::{Entity, EntityKind, EntityRef};
use icglue_common::Sym;

/// A pin of an instance and what it connects to.
#[derive(Debug)]
pub struct Pin {
    /// The generic object.
    pub object: ObjectId,
    /// The pin (port) name.
    pub name: Sym,
    /// The connected expression or signal.
    pub connection: Sym,
    /// The owning instance.
    pub parent: InstanceId,
}

impl Entity for Pin {
    const KIND: EntityKind = EntityKind::Pin;

    fn object(&self) -> ObjectId {
        self.object
    }

    fn name(&self) -> Sym {
        self.name
    }
}

/// A named override applied to one instance, e.g. a parameter value.
#[derive(Debug)]
pub struct Adjustment {
    /// The generic object.
    pub object: ObjectId,
    /// The adjusted name.
    pub name: Sym,
    /// The override value.
    pub value: Sym,
    /// The owning instance.
    pub parent: InstanceId,
}

impl Entity for Adjustment {
    const KIND: EntityKind = EntityKind::Adjustment;

    fn object(&self) -> ObjectId {
        self.object
    }

    fn name(&self) -> Sym {
        self.name
    }
}

impl Design {
    /// Connects pin `name` of instance `parent` to `connection`.
    pub fn new_pin(
        &mut self,
        name: &str,
        connection: &str,
        parent: InstanceId,
        storage: Option<StorageId>,
    ) -> Option<PinId> {
        let parent_object = self.instances.get(parent)?.object;

        let id = self.pins.next_id();
        let object = self.new_object(name, Some(parent_object), EntityRef::Pin(id), storage)?;
        let Some(connection) = self.seal_attr(object, "connection", connection) else {
            self.free_object(Some(object));
            return None;
        };

        let name = self.objects.get(object)?.name;
        self.pins.alloc(Pin {
            object,
            name,
            connection,
            parent,
        });
        self.instances.get_mut(parent)?.pins.push(id);
        Some(id)
    }

    /// Frees a pin's object.
    pub fn free_pin(&mut self, id: Option<PinId>) {
        if let Some(pin) = id.and_then(|id| self.pins.free(id)) {
            self.free_object(Some(pin.object));
        }
    }

    /// Adds an adjustment `name = value` to instance `parent`.
    pub fn new_adjustment(
        &mut self,
        name: &str,
        value: &str,
        parent: InstanceId,
        storage: Option<StorageId>,
    ) -> Option<AdjustmentId> {
        let parent_object = self.instances.get(parent)?.object;

        let id = self.adjustments.next_id();
        let object =
            self.new_object(name, Some(parent_object), EntityRef::Adjustment(id), storage)?;
        let Some(value) = self.seal_attr(object, "value", value) else {
            self.free_object(Some(object));
            return None;
        };

        let name = self.objects.get(object)?.name;
        self.adjustments.alloc(Adjustment {
            object,
            name,
            value,
            parent,
        });
        self.instances.get_mut(parent)?.adjustments.push(id);
        Some(id)
    }

    /// Frees an adjustment's object.
    pub fn free_adjustment(&mut self, id: Option<AdjustmentId>) {
        if let Some(adjustment) = id.and_then(|id| self.adjustments.free(id)) {
            self.free_object(Some(adjustment.object));
        }
    }
}
