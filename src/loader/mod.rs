//! Loading card pages from disk into a catalog

pub mod pages;
pub mod pages_async;

pub use pages::{Anomaly, LoadOutcome, PageLoader, PAGE_EXTENSION};
pub use pages_async::AsyncPageLoader;
