//! Catalog construction: record building, title handling, assembly

pub mod builder;
#[allow(clippy::module_inception)]
pub mod catalog;
pub mod titles;

pub use builder::{RecordBuilder, RecordReport, DEFAULT_IMAGES_DIR};
pub use catalog::Catalog;
pub use titles::{file_name_from_url, filter_image_titles, has_image_extension};
