#[allow(clippy::module_inception)]
pub mod catalog;
