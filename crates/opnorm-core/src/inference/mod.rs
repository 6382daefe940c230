//! Entity-kind inference for operations that do not declare one
//!
//! Two independent strategies, consulted by the normalizer in this order:
//! parsing a resource name, then inspecting the payload's field shape.

pub mod lexicon;
pub mod resource_name;
pub mod shape;

pub use resource_name::infer_from_resource_name;
pub use shape::{infer_from_shape, ShapeRule, SHAPE_RULES};
