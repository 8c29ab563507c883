//! Build a small in-memory scene and write its indexed mesh document.
//!
//! Usage: extract_scene [output.json]

use std::path::PathBuf;

use brix_extract::{extract_to_file, placement_of};
use brix_geometry::DeviationParams;
use brix_model::{AttrValue, InstanceId, Model};

fn reals(values: &[f64]) -> AttrValue {
    AttrValue::List(values.iter().map(|&v| AttrValue::Real(v)).collect())
}

fn refs(ids: &[InstanceId]) -> AttrValue {
    AttrValue::List(ids.iter().map(|&id| AttrValue::Ref(id)).collect())
}

fn cartesian_point(model: &mut Model, coords: &[f64]) -> InstanceId {
    model.insert("cartesianpoint", vec![("coordinates", reals(coords))])
}

fn direction(model: &mut Model, ratios: &[f64]) -> InstanceId {
    model.insert("direction", vec![("directionratios", reals(ratios))])
}

/// One column-like product: a swept circular solid plus a two-triangle
/// surface patch, both behind mapped representation items.
fn build_scene(model: &mut Model) -> InstanceId {
    // Swept solid: radius 0.3 column, 3m tall
    let base_location = cartesian_point(model, &[0.0, 0.0]);
    let base_direction = direction(model, &[1.0, 0.0]);
    let area_position = model.insert("axis2placement2d", vec![
        ("location", AttrValue::Ref(base_location)),
        ("refdirection", AttrValue::Ref(base_direction)),
    ]);
    let swept_area = model.insert("circleprofiledef", vec![
        ("position", AttrValue::Ref(area_position)),
        ("radius", AttrValue::Real(0.3)),
    ]);
    let extruded_direction = direction(model, &[0.0, 0.0, 1.0]);
    let location = cartesian_point(model, &[0.0, 0.0, 0.0]);
    let axis = direction(model, &[0.0, 0.0, 1.0]);
    let ref_direction = direction(model, &[1.0, 0.0, 0.0]);
    let position = model.insert("axis2placement3d", vec![
        ("location", AttrValue::Ref(location)),
        ("axis", AttrValue::Ref(axis)),
        ("refdirection", AttrValue::Ref(ref_direction)),
    ]);
    let solid = model.insert("extrudedareasolid", vec![
        ("sweptarea", AttrValue::Ref(swept_area)),
        ("depth", AttrValue::Real(3.0)),
        ("extrudeddirection", AttrValue::Ref(extruded_direction)),
        ("position", AttrValue::Ref(position)),
    ]);

    // Surface patch: two triangles of a 1x1 panel
    let triangles = [
        [[2.0, 0.0, 0.0], [3.0, 0.0, 0.0], [3.0, 0.0, 1.0]],
        [[2.0, 0.0, 0.0], [3.0, 0.0, 1.0], [2.0, 0.0, 1.0]],
    ];
    let mut face_ids = Vec::new();
    for triangle in &triangles {
        let points: Vec<InstanceId> = triangle
            .iter()
            .map(|coords| cartesian_point(model, coords))
            .collect();
        let bound_loop = model.insert("polyloop", vec![("polygon", refs(&points))]);
        let bound = model.insert("faceouterbound", vec![
            ("bound", AttrValue::Ref(bound_loop)),
        ]);
        face_ids.push(model.insert("face", vec![("bounds", refs(&[bound]))]));
    }
    let shell = model.insert("openshell", vec![("cfsfaces", refs(&face_ids))]);
    let surface = model.insert("shellbasedsurfacemodel", vec![
        ("sbsmboundary", refs(&[shell])),
    ]);

    // Mapped representation chain around each geometry
    let mut items = Vec::new();
    for geometry in [surface, solid] {
        let mapped_representation = model.insert("shaperepresentation", vec![
            ("items", refs(&[geometry])),
        ]);
        let source = model.insert("representationmap", vec![
            ("mappedrepresentation", AttrValue::Ref(mapped_representation)),
        ]);
        items.push(model.insert("mappeditem", vec![
            ("mappingsource", AttrValue::Ref(source)),
        ]));
    }

    // The product itself
    let product_location = cartesian_point(model, &[10.0, 5.0, 0.0]);
    let product_axis = direction(model, &[0.0, 0.0, 1.0]);
    let product_ref = direction(model, &[1.0, 0.0, 0.0]);
    let relative = model.insert("axis2placement3d", vec![
        ("location", AttrValue::Ref(product_location)),
        ("axis", AttrValue::Ref(product_axis)),
        ("refdirection", AttrValue::Ref(product_ref)),
    ]);
    let object_placement = model.insert("localplacement", vec![
        ("relativeplacement", AttrValue::Ref(relative)),
    ]);
    let shape = model.insert("shaperepresentation", vec![("items", refs(&items))]);
    let representation = model.insert("productdefinitionshape", vec![
        ("representations", refs(&[shape])),
    ]);
    model.insert("buildingelementproxy", vec![
        ("objectplacement", AttrValue::Ref(object_placement)),
        ("representation", AttrValue::Ref(representation)),
    ])
}

fn main() {
    let output: PathBuf = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "scene_brep.json".to_string())
        .into();

    let mut model = Model::new();
    let product_id = build_scene(&mut model);
    eprintln!("Model holds {} instances", model.len());

    let product = match model.open(product_id) {
        Ok(inst) => inst,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    if let Ok(frame) = placement_of(&model, product) {
        eprintln!(
            "Product {} placed at ({}, {}, {})",
            product.id(),
            frame.location.x,
            frame.location.y,
            frame.location.z
        );
    }

    match extract_to_file(&model, &[product_id], &DeviationParams::default(), &output) {
        Ok(()) => eprintln!("Wrote {}", output.display()),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
