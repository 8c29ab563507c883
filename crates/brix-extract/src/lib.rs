//! Extraction pipeline: walks building-model entities through the typed
//! attribute accessor, materializes their geometry as bodies, and emits the
//! consolidated indexed mesh document.

pub mod builder;
pub mod pipeline;

pub use builder::{build_surface_body, build_swept_solid};
pub use pipeline::{
    extract_products, extract_to_file, mapped_items, placement_of, representation_items,
};
