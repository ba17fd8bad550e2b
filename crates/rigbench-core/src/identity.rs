//! Identity types for catalog rows
//!
//! Every stored row draws its id from one shared sequence, so the raw
//! numbers never collide across row types. The wrappers exist to keep a
//! build id from being passed where a component id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! row_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            /// Create a new id
            pub fn new(id: u64) -> Self {
                Self(id)
            }

            /// Get the raw id value
            pub fn raw(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, ":{}"), self.0)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }
    };
}

row_id!(
    /// Identifier of a catalog component (any kind)
    ComponentId,
    "component"
);
row_id!(
    /// Identifier of a build
    BuildId,
    "build"
);
row_id!(
    /// Identifier of a build group ("machine")
    GroupId,
    "group"
);
row_id!(
    /// Identifier of a relation row
    EdgeId,
    "edge"
);
row_id!(
    /// Identifier of a retailer product link
    LinkId,
    "link"
);
