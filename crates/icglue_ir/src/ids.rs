//! Opaque id newtypes for every IR entity.
//!
//! Each id is a thin `u32` wrapper that is `Copy` and `Hash`. Ids are created
//! by [`Arena::alloc`](crate::arena::Arena::alloc) and are only meaningful for
//! the [`Design`](crate::Design) that issued them.

use crate::arena::ArenaId;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        pub struct $name(u32);

        impl $name {
            /// Creates an id from a raw `u32` index.
            pub fn from_raw(index: u32) -> Self {
                Self(index)
            }

            /// Returns the raw `u32` index.
            pub fn as_raw(self) -> u32 {
                self.0
            }
        }

        impl ArenaId for $name {
            fn from_raw(index: u32) -> Self {
                Self(index)
            }

            fn as_raw(self) -> u32 {
                self.0
            }
        }
    };
}

define_id!(
    /// Handle to a string arena owned by one object and borrowed by others.
    StorageId
);

define_id!(
    /// Id of the generic object envelope behind every entity.
    ObjectId
);

define_id!(
    /// Id of a module.
    ModuleId
);

define_id!(
    /// Id of a module instance.
    InstanceId
);

define_id!(
    /// Id of a module port.
    PortId
);

define_id!(
    /// Id of a module parameter.
    ParamId
);

define_id!(
    /// Id of a declaration inside a module.
    DeclId
);

define_id!(
    /// Id of a free-form codesection inside a module.
    CodeId
);

define_id!(
    /// Id of an instance pin connection.
    PinId
);

define_id!(
    /// Id of a per-instance adjustment.
    AdjustmentId
);

define_id!(
    /// Id of a register file.
    RegfileId
);

define_id!(
    /// Id of a register file entry.
    RegfileEntryId
);

define_id!(
    /// Id of a register inside a register file entry.
    RegfileRegId
);
