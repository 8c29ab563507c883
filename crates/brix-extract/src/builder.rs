//! Entity-level geometry builders.
//!
//! Both builders read their parameters through the typed accessor and fail
//! hard on anything missing or mismatched; no geometry is produced from
//! partial data. The one exception is the placement-derived vectors, whose
//! reads fall back to zero when the referenced placement attribute is unset.

use brix_core::Result;
use brix_geometry::{extrude_profile, surface_from_polygons, Axis2Placement3, DeviationParams, Profile2D};
use brix_model::accessor::{instance_attr, instance_list_attr, scalar_attr, vec2_attr_via, vec3_attr, vec3_attr_via};
use brix_model::{Instance, Model};
use brix_topology::Body;

/// Materialize a swept circular solid entity.
///
/// The base circle lives on the entity's swept-area sub-instance (radius plus
/// a 2D placement); depth, extrusion direction, and the 3D placement frame
/// live on the entity itself. The profile is the circle as two diameter
/// vertices with semicircular arcs, extruded through the placement frame.
pub fn build_swept_solid(
    model: &Model,
    entity: &Instance,
    params: &DeviationParams,
) -> Result<Body> {
    // Base circle
    let swept_area = instance_attr(model, entity, "sweptarea")?;
    let area_position = instance_attr(model, swept_area, "position")?;
    let radius = scalar_attr(swept_area, "radius")?;
    let base_center = vec2_attr_via(model, area_position, "location", "coordinates")?;
    let base_direction = vec2_attr_via(model, area_position, "refdirection", "directionratios")?;

    // Extrusion and placement frame
    let depth = scalar_attr(entity, "depth")?;
    let direction = vec3_attr_via(model, entity, "extrudeddirection", "directionratios")?;
    let position = instance_attr(model, entity, "position")?;
    let location = vec3_attr_via(model, position, "location", "coordinates")?;
    let axis = vec3_attr_via(model, position, "axis", "directionratios")?;
    let ref_direction = vec3_attr_via(model, position, "refdirection", "directionratios")?;

    let placement = Axis2Placement3::new(location, axis, ref_direction).to_transform();
    let profile = Profile2D::circle(base_center, base_direction, radius);

    extrude_profile(&profile, &placement, direction, depth, params)
}

/// Materialize a shell-based surface model entity.
///
/// Resolves the nested boundary structure (boundaries, their faces, each
/// face's bounds, each bound's loop) down to polygon loops of 3D points, then
/// hands the flattened loops to the surface constructor.
pub fn build_surface_body(model: &Model, entity: &Instance) -> Result<Body> {
    let mut polygons: Vec<Vec<brix_math::Point3>> = Vec::new();

    for boundary in instance_list_attr(model, entity, "sbsmboundary")? {
        for face in instance_list_attr(model, boundary, "cfsfaces")? {
            for bound in instance_list_attr(model, face, "bounds")? {
                let bound_loop = instance_attr(model, bound, "bound")?;
                let mut points = Vec::new();
                for point in instance_list_attr(model, bound_loop, "polygon")? {
                    points.push(vec3_attr(point, "coordinates")?);
                }
                polygons.push(points);
            }
        }
    }

    surface_from_polygons(&polygons)
}
