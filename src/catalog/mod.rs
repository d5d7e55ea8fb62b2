//! Card catalog: the static card pool, loaded once and indexed by series.

pub mod card;
pub mod loader;

pub use card::{Card, CardId};
pub use loader::{Catalog, CatalogError};
