/// Catalog module
///
/// This module owns the read-only photographer/media catalog:
/// - Loading and validating the JSON document (loader.rs)
/// - Filtered, sorted views over the loaded data (query.rs)
///
/// The document is fetched exactly once per run; every view the
/// UI needs afterwards is re-derived from the cached catalog.

pub mod loader;
pub mod query;
