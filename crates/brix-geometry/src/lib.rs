//! Brix geometry: parametric profiles, sweeps, and surface bodies.

pub mod deviation;
pub mod extrude;
pub mod placement;
pub mod profile;
pub mod surface;

pub use deviation::DeviationParams;
pub use extrude::extrude_profile;
pub use placement::Axis2Placement3;
pub use profile::{Contour2D, Profile2D, ProfileVertex};
pub use surface::surface_from_polygons;
