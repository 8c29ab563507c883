use std::collections::HashMap;

use brix_core::{BrixError, Result};

use crate::attr::AttrValue;

/// Opaque handle to a model instance. Ownership of the underlying entity
/// stays with the store; the handle is only ever resolved, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(u64);

impl InstanceId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One entity of the building model: a type name plus named attribute values
/// in declaration order.
#[derive(Debug, Clone)]
pub struct Instance {
    id: InstanceId,
    type_name: String,
    attributes: Vec<(String, AttrValue)>,
}

impl Instance {
    pub fn id(&self) -> InstanceId {
        self.id
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Named attribute lookup. Attribute names are matched case-insensitively,
    /// the way the source schema addresses them.
    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attributes
            .iter()
            .find(|(attr_name, _)| attr_name.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    }

    /// All attributes in declaration order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }
}

/// In-memory instance store standing in for the external data source.
#[derive(Debug, Clone, Default)]
pub struct Model {
    instances: HashMap<InstanceId, Instance>,
    next_id: u64,
}

impl Model {
    pub fn new() -> Self {
        Self {
            instances: HashMap::new(),
            next_id: 1,
        }
    }

    /// Insert an instance, assigning it the next handle.
    pub fn insert(&mut self, type_name: &str, attributes: Vec<(&str, AttrValue)>) -> InstanceId {
        let id = InstanceId(self.next_id);
        self.next_id += 1;
        self.instances.insert(
            id,
            Instance {
                id,
                type_name: type_name.to_string(),
                attributes: attributes
                    .into_iter()
                    .map(|(name, value)| (name.to_string(), value))
                    .collect(),
            },
        );
        id
    }

    pub fn get(&self, id: InstanceId) -> Option<&Instance> {
        self.instances.get(&id)
    }

    /// Resolve a handle, failing if it does not open to an instance.
    pub fn open(&self, id: InstanceId) -> Result<&Instance> {
        self.instances
            .get(&id)
            .ok_or_else(|| BrixError::Resolution(format!("Instance {id} cannot be opened")))
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Handles of every instance with the given type name, in handle order.
    pub fn instances_of_type(&self, type_name: &str) -> Vec<InstanceId> {
        let mut ids: Vec<InstanceId> = self
            .instances
            .values()
            .filter(|inst| inst.type_name.eq_ignore_ascii_case(type_name))
            .map(|inst| inst.id)
            .collect();
        ids.sort();
        ids
    }
}
