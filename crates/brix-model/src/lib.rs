//! Typed access to an opaque building-model instance store.
//!
//! The store plays the role of the external data source: it hands out opaque
//! [`InstanceId`] handles and answers named attribute reads with [`AttrValue`]
//! tagged values. The [`accessor`] module layers the typed reads the geometry
//! pipeline consumes on top of it.

pub mod accessor;
pub mod attr;
pub mod instance;
pub mod introspect;

pub use attr::AttrValue;
pub use instance::{Instance, InstanceId, Model};
pub use introspect::{AttrDef, AttrKind, DumpReport, EntityDef, Schema};
