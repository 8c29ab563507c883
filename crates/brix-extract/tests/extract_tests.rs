//! End-to-end extraction over in-memory models.

use std::collections::HashSet;

use brix_core::BrixError;
use brix_extract::{
    build_surface_body, build_swept_solid, extract_products, extract_to_file, placement_of,
};
use brix_geometry::DeviationParams;
use brix_mesh::{GeometryKind, GeometryRecord, SceneAccumulator};
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

fn placement_2d(model: &mut Model, location: &[f64], ref_direction: &[f64]) -> InstanceId {
    let location = cartesian_point(model, location);
    let ref_direction = direction(model, ref_direction);
    model.insert("axis2placement2d", vec![
        ("location", AttrValue::Ref(location)),
        ("refdirection", AttrValue::Ref(ref_direction)),
    ])
}

fn placement_3d(
    model: &mut Model,
    location: &[f64],
    axis: &[f64],
    ref_direction: &[f64],
) -> InstanceId {
    let location = cartesian_point(model, location);
    let axis = direction(model, axis);
    let ref_direction = direction(model, ref_direction);
    model.insert("axis2placement3d", vec![
        ("location", AttrValue::Ref(location)),
        ("axis", AttrValue::Ref(axis)),
        ("refdirection", AttrValue::Ref(ref_direction)),
    ])
}

/// A swept circular solid: radius and depth with the standard frame
/// (base circle at the 2D origin, extrusion along +Z).
fn swept_solid(model: &mut Model, radius: f64, depth: f64) -> InstanceId {
    let area_position = placement_2d(model, &[0.0, 0.0], &[1.0, 0.0]);
    let swept_area = model.insert("circleprofiledef", vec![
        ("position", AttrValue::Ref(area_position)),
        ("radius", AttrValue::Real(radius)),
    ]);
    let extruded_direction = direction(model, &[0.0, 0.0, 1.0]);
    let position = placement_3d(model, &[0.0, 0.0, 0.0], &[0.0, 0.0, 1.0], &[1.0, 0.0, 0.0]);
    model.insert("extrudedareasolid", vec![
        ("sweptarea", AttrValue::Ref(swept_area)),
        ("depth", AttrValue::Real(depth)),
        ("extrudeddirection", AttrValue::Ref(extruded_direction)),
        ("position", AttrValue::Ref(position)),
    ])
}

/// A shell-based surface model with the given boundary structure: one shell
/// per outer entry, one face per triangle, one bound per face.
fn surface_model(model: &mut Model, shells: &[Vec<[[f64; 3]; 3]>]) -> InstanceId {
    let mut shell_ids = Vec::new();
    for faces in shells {
        let mut face_ids = Vec::new();
        for triangle in faces {
            let point_ids: Vec<InstanceId> = triangle
                .iter()
                .map(|coords| cartesian_point(model, coords))
                .collect();
            let bound_loop = model.insert("polyloop", vec![("polygon", refs(&point_ids))]);
            let bound = model.insert("faceouterbound", vec![
                ("bound", AttrValue::Ref(bound_loop)),
            ]);
            let face = model.insert("face", vec![("bounds", refs(&[bound]))]);
            face_ids.push(face);
        }
        let shell = model.insert("openshell", vec![("cfsfaces", refs(&face_ids))]);
        shell_ids.push(shell);
    }
    model.insert("shellbasedsurfacemodel", vec![
        ("sbsmboundary", refs(&shell_ids)),
    ])
}

/// Wrap a geometry instance in the mapped-representation chain.
fn mapped_item(model: &mut Model, items: &[InstanceId]) -> InstanceId {
    let mapped_representation = model.insert("shaperepresentation", vec![
        ("items", refs(items)),
    ]);
    let source = model.insert("representationmap", vec![
        ("mappedrepresentation", AttrValue::Ref(mapped_representation)),
    ]);
    model.insert("mappeditem", vec![("mappingsource", AttrValue::Ref(source))])
}

/// A product carrying the given representation items plus a placement chain.
fn product(model: &mut Model, items: &[InstanceId]) -> InstanceId {
    let relative = placement_3d(model, &[0.0, 0.0, 0.0], &[0.0, 0.0, 1.0], &[1.0, 0.0, 0.0]);
    let object_placement = model.insert("localplacement", vec![
        ("relativeplacement", AttrValue::Ref(relative)),
    ]);
    let shape = model.insert("shaperepresentation", vec![("items", refs(items))]);
    let representation = model.insert("productdefinitionshape", vec![
        ("representations", refs(&[shape])),
    ]);
    model.insert("buildingelementproxy", vec![
        ("objectplacement", AttrValue::Ref(object_placement)),
        ("representation", AttrValue::Ref(representation)),
    ])
}

#[test]
fn swept_solid_end_to_end() {
    let mut model = Model::new();
    let solid = swept_solid(&mut model, 5.0, 10.0);
    let item = mapped_item(&mut model, &[solid]);
    let product_id = product(&mut model, &[item]);

    let scene = extract_products(&model, &[product_id], &DeviationParams::default()).unwrap();
    assert_eq!(scene.kinds(), &[GeometryKind::Solid]);

    let doc = scene.finalize();
    assert_eq!(doc.geometries, vec![GeometryRecord::Solids { solids: 0 }]);

    // Vertices are globally deduplicated: no position appears twice
    assert!(!doc.vertices.is_empty());
    let distinct: HashSet<[u64; 3]> = doc
        .vertices
        .iter()
        .map(|v| [
            v.position[0].to_bits(),
            v.position[1].to_bits(),
            v.position[2].to_bits(),
        ])
        .collect();
    assert_eq!(distinct.len(), doc.vertices.len());

    // A vertical extrusion edge of the full depth exists
    assert!(doc
        .edges
        .iter()
        .any(|e| (e.arc_length - 10.0).abs() < 1e-6));
}

#[test]
fn surface_model_end_to_end() {
    let mut model = Model::new();
    let surface = surface_model(
        &mut model,
        &[vec![[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]]],
    );
    let item = mapped_item(&mut model, &[surface]);
    let product_id = product(&mut model, &[item]);

    let scene = extract_products(&model, &[product_id], &DeviationParams::default()).unwrap();
    assert_eq!(scene.kinds(), &[GeometryKind::Surface]);

    let doc = scene.finalize();
    assert_eq!(doc.vertices.len(), 3);
    assert_eq!(doc.faces.len(), 1);
    assert!((doc.faces[0].area - 0.5).abs() < 1e-9);
}

#[test]
fn surface_triangle_count_invariant() {
    // 2 boundaries x 2 faces x 1 bound x 1 polygon = 4 triangles
    let mut model = Model::new();
    let shells: Vec<Vec<[[f64; 3]; 3]>> = (0..2)
        .map(|s| {
            (0..2)
                .map(|f| {
                    let x = (s * 2 + f) as f64 * 10.0;
                    [[x, 0.0, 0.0], [x + 1.0, 0.0, 0.0], [x, 1.0, 0.0]]
                })
                .collect()
        })
        .collect();
    let surface = surface_model(&mut model, &shells);

    let entity = model.open(surface).unwrap();
    let body = build_surface_body(&model, entity).unwrap();
    assert_eq!(body.face_count(), 4);
}

#[test]
fn mixed_scene_preserves_group_order() {
    let mut model = Model::new();
    let surface = surface_model(
        &mut model,
        &[vec![[[0.0, 0.0, 5.0], [1.0, 0.0, 5.0], [0.0, 1.0, 5.0]]]],
    );
    let solid = swept_solid(&mut model, 2.0, 4.0);
    let surface_item = mapped_item(&mut model, &[surface]);
    let solid_item = mapped_item(&mut model, &[solid]);
    let product_id = product(&mut model, &[surface_item, solid_item]);

    let scene = extract_products(&model, &[product_id], &DeviationParams::default()).unwrap();
    assert_eq!(scene.kinds(), &[GeometryKind::Surface, GeometryKind::Solid]);

    let doc = scene.finalize();
    assert_eq!(doc.geometries.len(), 2);
    assert_eq!(
        doc.geometries[0],
        GeometryRecord::Shells {
            shells: vec![0, 1, 2, 93]
        }
    );
    assert_eq!(doc.geometries[1], GeometryRecord::Solids { solids: 0 });
}

#[test]
fn extract_to_file_writes_parseable_json() {
    let mut model = Model::new();
    let solid = swept_solid(&mut model, 1.0, 2.0);
    let item = mapped_item(&mut model, &[solid]);
    let product_id = product(&mut model, &[item]);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scene_brep.json");
    extract_to_file(&model, &[product_id], &DeviationParams::default(), &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    for key in ["geometries", "vertices", "edges", "faces"] {
        assert!(value[key].is_array(), "missing array '{key}'");
    }
    assert_eq!(value["geometries"][0]["solids"], 0);
}

#[test]
fn zero_radius_solid_fails_construction() {
    let mut model = Model::new();
    let solid = swept_solid(&mut model, 0.0, 10.0);

    let entity = model.open(solid).unwrap();
    let result = build_swept_solid(&model, entity, &DeviationParams::default());
    assert!(matches!(result, Err(BrixError::MeshConstruction(_))));
}

#[test]
fn missing_swept_area_fails_resolution() {
    let mut model = Model::new();
    let entity_id = model.insert("extrudedareasolid", vec![
        ("depth", AttrValue::Real(1.0)),
    ]);
    let entity = model.open(entity_id).unwrap();
    let result = build_swept_solid(&model, entity, &DeviationParams::default());
    assert!(matches!(result, Err(BrixError::Resolution(_))));
}

#[test]
fn unsupported_mapped_type_fails() {
    let mut model = Model::new();
    let odd = model.insert("trimmedcurve", vec![]);
    let item = mapped_item(&mut model, &[odd]);
    let product_id = product(&mut model, &[item]);

    let result = extract_products(&model, &[product_id], &DeviationParams::default());
    assert!(matches!(result, Err(BrixError::Resolution(_))));
}

#[test]
fn placement_chain_resolves() {
    let mut model = Model::new();
    let relative = placement_3d(
        &mut model,
        &[1.0, 2.0, 3.0],
        &[0.0, 0.0, 1.0],
        &[1.0, 0.0, 0.0],
    );
    let object_placement = model.insert("localplacement", vec![
        ("relativeplacement", AttrValue::Ref(relative)),
    ]);
    let product_id = model.insert("column", vec![
        ("objectplacement", AttrValue::Ref(object_placement)),
    ]);

    let inst = model.open(product_id).unwrap();
    let frame = placement_of(&model, inst).unwrap();
    assert_eq!(frame.location, brix_math::DVec3::new(1.0, 2.0, 3.0));
    assert_eq!(frame.axis, brix_math::DVec3::Z);
    assert_eq!(frame.ref_direction, brix_math::DVec3::X);
}

#[test]
fn solid_counter_skips_surface_groups() {
    // Accumulator-level check with builder-produced bodies: S, D, D, S
    let mut model = Model::new();
    let surface = surface_model(
        &mut model,
        &[vec![[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]]],
    );
    let solid = swept_solid(&mut model, 1.0, 1.0);

    let surface_entity = model.open(surface).unwrap();
    let solid_entity = model.open(solid).unwrap();
    let params = DeviationParams::default();

    let mut scene = SceneAccumulator::new();
    scene.add(
        build_surface_body(&model, surface_entity).unwrap(),
        GeometryKind::Surface,
    );
    scene.add(
        build_swept_solid(&model, solid_entity, &params).unwrap(),
        GeometryKind::Solid,
    );
    scene.add(
        build_swept_solid(&model, solid_entity, &params).unwrap(),
        GeometryKind::Solid,
    );
    scene.add(
        build_surface_body(&model, surface_entity).unwrap(),
        GeometryKind::Surface,
    );

    let doc = scene.finalize();
    let solids: Vec<_> = doc
        .geometries
        .iter()
        .filter_map(|g| match g {
            GeometryRecord::Solids { solids } => Some(*solids),
            _ => None,
        })
        .collect();
    assert_eq!(solids, vec![0, 1]);
}
