//! Catalog: the loaded tool list, the fixed category registry, and the
//! filter engine.
//!
//! The catalog is loaded once (`loader`), immutable afterwards. Categories
//! are compiled in (`registry`) and never derived from the data. Filtering
//! (`filter`) is a pure function over the loaded items.

pub mod filter;
pub mod loader;
pub mod registry;
pub mod types;

pub use filter::{filter, FilterState};
pub use loader::{load, CatalogSource, MAX_CATALOG_BYTES};
pub use registry::Category;
pub use types::{Item, LoadError};
