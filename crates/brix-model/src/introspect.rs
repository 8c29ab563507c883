//! Schema introspection: entity definitions and attribute dumping.
//!
//! Entity definitions form a directed acyclic graph through their immediate
//! supertypes. The chain walk is iterative with a visited set, so a malformed
//! schema with a cycle terminates instead of recursing without bound, and a
//! diamond-shaped hierarchy dumps each definition once.

use std::collections::{HashMap, HashSet};

use brix_core::{BrixError, Result};

use crate::attr::AttrValue;
use crate::instance::Instance;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrKind {
    Explicit,
    Inverse,
    Derived,
}

#[derive(Debug, Clone)]
pub struct AttrDef {
    pub name: String,
    pub kind: AttrKind,
}

impl AttrDef {
    pub fn new(name: &str, kind: AttrKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
        }
    }
}

/// One entity definition: immediate supertypes plus declared attributes.
#[derive(Debug, Clone)]
pub struct EntityDef {
    pub name: String,
    pub instantiable: bool,
    pub supertypes: Vec<String>,
    pub attributes: Vec<AttrDef>,
}

/// Entity definitions keyed by name.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    entities: HashMap<String, EntityDef>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn define(&mut self, def: EntityDef) {
        self.entities.insert(def.name.clone(), def);
    }

    pub fn entity(&self, name: &str) -> Option<&EntityDef> {
        self.entities.get(name)
    }

    /// Definitions contributing to `name`, supertypes before subtypes, each
    /// visited exactly once.
    pub fn supertype_chain(&self, name: &str) -> Result<Vec<&EntityDef>> {
        let root = self
            .entity(name)
            .ok_or_else(|| BrixError::NotFound(format!("Entity definition '{name}'")))?;

        let mut order = Vec::new();
        let mut visited: HashSet<&str> = HashSet::new();
        visited.insert(root.name.as_str());

        // Depth-first post-order with an explicit stack of (definition,
        // index of the next supertype to expand)
        let mut stack: Vec<(&EntityDef, usize)> = vec![(root, 0)];
        while let Some(frame) = stack.last_mut() {
            let def = frame.0;
            let next = frame.1;
            if next < def.supertypes.len() {
                frame.1 += 1;
                let super_name = def.supertypes[next].as_str();
                if visited.insert(super_name) {
                    let super_def = self.entity(super_name).ok_or_else(|| {
                        BrixError::NotFound(format!(
                            "Supertype '{super_name}' of '{}'",
                            def.name
                        ))
                    })?;
                    stack.push((super_def, 0));
                }
            } else {
                order.push(def);
                stack.pop();
            }
        }

        Ok(order)
    }
}

/// Outcome of dumping one instance against its schema definition.
///
/// The aggregate counters are explicit results rather than process-wide
/// state: `ref_aggregates` counts attribute values that are aggregates made
/// purely of references, `empty_ref_aggregates` counts the empty ones.
#[derive(Debug, Clone, Default)]
pub struct DumpReport {
    pub lines: Vec<String>,
    pub ref_aggregates: usize,
    pub empty_ref_aggregates: usize,
}

/// Format every attribute of `inst` along its supertype chain.
pub fn dump_instance(schema: &Schema, inst: &Instance) -> Result<DumpReport> {
    let mut report = DumpReport::default();

    for def in schema.supertype_chain(inst.type_name())? {
        let marker = if def.instantiable {
            "INSTANTIABLE"
        } else {
            "ABSTRACT"
        };
        report.lines.push(format!("{marker} {}", def.name));

        for attr in &def.attributes {
            let kind = match attr.kind {
                AttrKind::Explicit => "EXPLICIT",
                AttrKind::Inverse => "INVERSE",
                AttrKind::Derived => "DERIVED",
            };

            if attr.kind == AttrKind::Derived {
                report.lines.push(format!("  {kind} .{} = *", attr.name));
                continue;
            }

            let line = match inst.attr(&attr.name) {
                None | Some(AttrValue::Null) => format!("  {kind} .{} = UNSET", attr.name),
                Some(value) => {
                    if let AttrValue::List(members) = value {
                        if members.iter().all(|m| matches!(m, AttrValue::Ref(_))) {
                            if members.is_empty() {
                                report.empty_ref_aggregates += 1;
                            } else {
                                report.ref_aggregates += 1;
                            }
                        }
                    }
                    format!("  {kind} .{} = {value}", attr.name)
                }
            };
            report.lines.push(line);
        }
    }

    Ok(report)
}
