//! Shape-sniffing over untyped upstream payloads
//!
//! The exercise API guarantees no response schema, so everything in this
//! module works on raw `serde_json::Value`s: discovering the result list,
//! flattening muscle-group names, and picking a usable image URL out of a
//! record.

pub mod fields;
mod groups;
mod image;
mod normalize;

pub use groups::{aggregate_groups, GROUP_FIELDS};
pub use image::{resolve_image, IMAGE_FIELDS, IMAGE_PROXY_PATH};
pub use normalize::find_result_list;
