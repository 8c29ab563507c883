//! Scene walk: products to accumulated bodies to the written document.

use std::path::Path;

use rayon::prelude::*;

use brix_core::{BrixError, Result};
use brix_geometry::{Axis2Placement3, DeviationParams};
use brix_mesh::{write_document, GeometryKind, SceneAccumulator};
use brix_model::accessor::{instance_attr, instance_list_attr, vec3_attr_via};
use brix_model::{Instance, InstanceId, Model};
use brix_topology::Body;

use crate::builder::{build_surface_body, build_swept_solid};

/// Resolve a product's placement chain to its local frame.
pub fn placement_of(model: &Model, product: &Instance) -> Result<Axis2Placement3> {
    let object_placement = instance_attr(model, product, "objectplacement")?;
    let relative = instance_attr(model, object_placement, "relativeplacement")?;

    let location = vec3_attr_via(model, relative, "location", "coordinates")?;
    let axis = vec3_attr_via(model, relative, "axis", "directionratios")?;
    let ref_direction = vec3_attr_via(model, relative, "refdirection", "directionratios")?;
    Ok(Axis2Placement3::new(location, axis, ref_direction))
}

/// Items of a product's first shape representation.
pub fn representation_items<'a>(model: &'a Model, product: &Instance) -> Result<Vec<&'a Instance>> {
    let representation = instance_attr(model, product, "representation")?;
    let representations = instance_list_attr(model, representation, "representations")?;
    let first = representations.first().ok_or_else(|| {
        BrixError::Resolution(format!(
            "Product {} has no shape representations",
            product.id()
        ))
    })?;
    instance_list_attr(model, first, "items")
}

/// Resolve a mapped representation item to the items of its mapping source.
pub fn mapped_items<'a>(model: &'a Model, item: &Instance) -> Result<Vec<&'a Instance>> {
    let source = instance_attr(model, item, "mappingsource")?;
    let mapped_representation = instance_attr(model, source, "mappedrepresentation")?;
    instance_list_attr(model, mapped_representation, "items")
}

fn kind_of(item: &Instance) -> Result<GeometryKind> {
    match item.type_name().to_ascii_lowercase().as_str() {
        "extrudedareasolid" => Ok(GeometryKind::Solid),
        "shellbasedsurfacemodel" => Ok(GeometryKind::Surface),
        other => Err(BrixError::Resolution(format!(
            "Unsupported mapped item type '{other}' ({})",
            item.id()
        ))),
    }
}

/// Walk each product's representation items, build every mapped geometry,
/// and accumulate the bodies in resolution order.
///
/// Body construction has no shared mutable state across entities and runs in
/// parallel; the collected order is preserved and accumulation stays
/// sequential, so global vertex indexing is deterministic.
pub fn extract_products(
    model: &Model,
    products: &[InstanceId],
    params: &DeviationParams,
) -> Result<SceneAccumulator> {
    let mut tasks: Vec<(&Instance, GeometryKind)> = Vec::new();

    for &product_id in products {
        let product = model.open(product_id)?;
        let items = representation_items(model, product)?;
        eprintln!("Product {}: {} representation items", product.id(), items.len());

        for item in items {
            for mapped in mapped_items(model, item)? {
                tasks.push((mapped, kind_of(mapped)?));
            }
        }
    }

    let bodies: Vec<(Body, GeometryKind)> = tasks
        .par_iter()
        .map(|&(entity, kind)| {
            let body = match kind {
                GeometryKind::Solid => build_swept_solid(model, entity, params)?,
                GeometryKind::Surface => build_surface_body(model, entity)?,
            };
            Ok((body, kind))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut scene = SceneAccumulator::new();
    for (body, kind) in bodies {
        scene.add(body, kind);
    }
    Ok(scene)
}

/// Extract, finalize, and write the document in one pass.
pub fn extract_to_file(
    model: &Model,
    products: &[InstanceId],
    params: &DeviationParams,
    path: &Path,
) -> Result<()> {
    let scene = extract_products(model, products, params)?;
    eprintln!("Accumulated {} bodies", scene.len());
    write_document(&scene.finalize(), path)
}
