//! Typed attribute reads over model instances.
//!
//! Every read fails hard on a missing or mismatched attribute, with one
//! documented exception: the `*_attr_via` reads return a zero vector when
//! their path attribute is unset or does not resolve to an instance. Optional
//! placement references lean on that default; everything else propagates.

use brix_core::{BrixError, Result};
use brix_math::{DVec2, DVec3};

use crate::attr::AttrValue;
use crate::instance::{Instance, Model};

/// Read a named attribute as a floating value (Real or Integer).
pub fn scalar_attr(inst: &Instance, name: &str) -> Result<f64> {
    match inst.attr(name) {
        Some(AttrValue::Real(v)) => Ok(*v),
        Some(AttrValue::Integer(v)) => Ok(*v as f64),
        Some(other) => Err(BrixError::Attribute(format!(
            "Attribute '{name}' on {} is not a floating value: {other}",
            inst.type_name()
        ))),
        None => Err(BrixError::Attribute(format!(
            "Attribute '{name}' is unset on {}",
            inst.type_name()
        ))),
    }
}

/// Ordered numeric members of an aggregate attribute, truncated to `dim`.
fn numeric_members(inst: &Instance, name: &str, dim: usize) -> Result<Vec<f64>> {
    let members = match inst.attr(name) {
        Some(AttrValue::List(members)) => members,
        Some(other) => {
            return Err(BrixError::Attribute(format!(
                "Attribute '{name}' on {} is not an aggregate: {other}",
                inst.type_name()
            )))
        }
        None => {
            return Err(BrixError::Attribute(format!(
                "Attribute '{name}' is unset on {}",
                inst.type_name()
            )))
        }
    };

    // Excess members beyond `dim` are ignored by design
    let mut values = Vec::with_capacity(dim);
    for member in members.iter().take(dim) {
        match member {
            AttrValue::Real(v) => values.push(*v),
            AttrValue::Integer(v) => values.push(*v as f64),
            other => {
                return Err(BrixError::Attribute(format!(
                    "Aggregate '{name}' on {} holds a non-numeric member: {other}",
                    inst.type_name()
                )))
            }
        }
    }

    if values.len() < dim {
        return Err(BrixError::Attribute(format!(
            "Aggregate '{name}' on {} has {} members, expected {dim}",
            inst.type_name(),
            values.len()
        )));
    }

    Ok(values)
}

/// Read an aggregate attribute as a 2D vector.
pub fn vec2_attr(inst: &Instance, name: &str) -> Result<DVec2> {
    let v = numeric_members(inst, name, 2)?;
    Ok(DVec2::new(v[0], v[1]))
}

/// Read an aggregate attribute as a 3D vector.
pub fn vec3_attr(inst: &Instance, name: &str) -> Result<DVec3> {
    let v = numeric_members(inst, name, 3)?;
    Ok(DVec3::new(v[0], v[1], v[2]))
}

/// Follow a reference attribute to its target, or None if the attribute is
/// unset, not a reference, or dangling.
fn optional_target<'a>(model: &'a Model, inst: &Instance, name: &str) -> Option<&'a Instance> {
    match inst.attr(name)? {
        AttrValue::Ref(id) => model.get(*id),
        _ => None,
    }
}

/// Read a 2D vector through a referenced instance's component aggregate.
///
/// Returns a zero vector, not an error, when `path_attr` is unset or does not
/// resolve; failures reading `components_attr` on a resolved target still
/// propagate.
pub fn vec2_attr_via(
    model: &Model,
    inst: &Instance,
    path_attr: &str,
    components_attr: &str,
) -> Result<DVec2> {
    match optional_target(model, inst, path_attr) {
        Some(target) => vec2_attr(target, components_attr),
        None => Ok(DVec2::ZERO),
    }
}

/// Read a 3D vector through a referenced instance's component aggregate.
/// Same permissive default as [`vec2_attr_via`].
pub fn vec3_attr_via(
    model: &Model,
    inst: &Instance,
    path_attr: &str,
    components_attr: &str,
) -> Result<DVec3> {
    match optional_target(model, inst, path_attr) {
        Some(target) => vec3_attr(target, components_attr),
        None => Ok(DVec3::ZERO),
    }
}

/// Resolve a single-reference attribute to its target instance.
pub fn instance_attr<'a>(model: &'a Model, inst: &Instance, name: &str) -> Result<&'a Instance> {
    match inst.attr(name) {
        Some(AttrValue::Ref(id)) => model.open(*id),
        Some(other) => Err(BrixError::Resolution(format!(
            "Attribute '{name}' on {} is not a reference: {other}",
            inst.type_name()
        ))),
        None => Err(BrixError::Resolution(format!(
            "Attribute '{name}' is unset on {}",
            inst.type_name()
        ))),
    }
}

/// Resolve an aggregate-of-references attribute to its targets in source
/// order. An empty aggregate yields an empty list.
pub fn instance_list_attr<'a>(
    model: &'a Model,
    inst: &Instance,
    name: &str,
) -> Result<Vec<&'a Instance>> {
    let members = match inst.attr(name) {
        Some(AttrValue::List(members)) => members,
        Some(other) => {
            return Err(BrixError::Resolution(format!(
                "Attribute '{name}' on {} is not a reference aggregate: {other}",
                inst.type_name()
            )))
        }
        None => {
            return Err(BrixError::Resolution(format!(
                "Attribute '{name}' is unset on {}",
                inst.type_name()
            )))
        }
    };

    members
        .iter()
        .map(|member| match member {
            AttrValue::Ref(id) => model.open(*id),
            other => Err(BrixError::Resolution(format!(
                "Aggregate '{name}' on {} holds a non-reference member: {other}",
                inst.type_name()
            ))),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::InstanceId;

    fn reals(values: &[f64]) -> AttrValue {
        AttrValue::List(values.iter().map(|&v| AttrValue::Real(v)).collect())
    }

    #[test]
    fn test_scalar_attr() {
        let mut model = Model::new();
        let id = model.insert("profile", vec![
            ("radius", AttrValue::Real(5.0)),
            ("count", AttrValue::Integer(3)),
            ("name", AttrValue::Text("circle".into())),
        ]);
        let inst = model.open(id).unwrap();

        assert_eq!(scalar_attr(inst, "radius").unwrap(), 5.0);
        assert_eq!(scalar_attr(inst, "count").unwrap(), 3.0);
        assert!(scalar_attr(inst, "name").is_err());
        assert!(scalar_attr(inst, "missing").is_err());
    }

    #[test]
    fn test_vector_reads() {
        let mut model = Model::new();
        let id = model.insert("point", vec![
            ("coordinates", reals(&[1.0, 2.0, 3.0])),
            ("short", reals(&[1.0])),
        ]);
        let inst = model.open(id).unwrap();

        // Excess members are ignored for the 2D read
        assert_eq!(vec2_attr(inst, "coordinates").unwrap(), DVec2::new(1.0, 2.0));
        assert_eq!(
            vec3_attr(inst, "coordinates").unwrap(),
            DVec3::new(1.0, 2.0, 3.0)
        );
        assert!(vec2_attr(inst, "short").is_err());
        assert!(vec3_attr(inst, "missing").is_err());
    }

    #[test]
    fn test_vector_via_permissive_default() {
        let mut model = Model::new();
        let id = model.insert("placement", vec![]);
        let inst = model.open(id).unwrap();

        // Missing path attribute: zero vector, no error
        assert_eq!(
            vec3_attr_via(&model, inst, "refdirection", "directionratios").unwrap(),
            DVec3::ZERO
        );
    }

    #[test]
    fn test_vector_via_dangling_reference() {
        let mut model = Model::new();
        let id = model.insert("placement", vec![
            ("axis", AttrValue::Ref(InstanceId::new(999))),
        ]);
        let inst = model.open(id).unwrap();

        assert_eq!(
            vec3_attr_via(&model, inst, "axis", "directionratios").unwrap(),
            DVec3::ZERO
        );
    }

    #[test]
    fn test_vector_via_delegated_failure_propagates() {
        let mut model = Model::new();
        let target = model.insert("direction", vec![("directionratios", reals(&[1.0]))]);
        let id = model.insert("placement", vec![("axis", AttrValue::Ref(target))]);
        let inst = model.open(id).unwrap();

        // The path resolves, so the short aggregate is a hard failure
        assert!(vec3_attr_via(&model, inst, "axis", "directionratios").is_err());
    }

    #[test]
    fn test_instance_attr() {
        let mut model = Model::new();
        let target = model.insert("axisplacement", vec![]);
        let id = model.insert("solid", vec![
            ("position", AttrValue::Ref(target)),
            ("depth", AttrValue::Real(1.0)),
        ]);
        let inst = model.open(id).unwrap();

        assert_eq!(instance_attr(&model, inst, "position").unwrap().id(), target);
        assert!(instance_attr(&model, inst, "depth").is_err());
        assert!(instance_attr(&model, inst, "missing").is_err());
    }

    #[test]
    fn test_instance_list_attr() {
        let mut model = Model::new();
        let a = model.insert("face", vec![]);
        let b = model.insert("face", vec![]);
        let id = model.insert("boundary", vec![
            (
                "cfsfaces",
                AttrValue::List(vec![AttrValue::Ref(a), AttrValue::Ref(b)]),
            ),
            ("empty", AttrValue::List(vec![])),
        ]);
        let inst = model.open(id).unwrap();

        let faces = instance_list_attr(&model, inst, "cfsfaces").unwrap();
        assert_eq!(faces.len(), 2);
        assert_eq!(faces[0].id(), a);
        assert_eq!(faces[1].id(), b);

        // Empty aggregate is an empty list, not an error
        assert!(instance_list_attr(&model, inst, "empty").unwrap().is_empty());
    }

    #[test]
    fn test_instance_list_attr_dangling_member_fails() {
        let mut model = Model::new();
        let id = model.insert("boundary", vec![
            (
                "cfsfaces",
                AttrValue::List(vec![AttrValue::Ref(InstanceId::new(404))]),
            ),
        ]);
        let inst = model.open(id).unwrap();
        assert!(instance_list_attr(&model, inst, "cfsfaces").is_err());
    }
}
