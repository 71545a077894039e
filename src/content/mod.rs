//! Content loading and normalization
//!
//! Turns a directory of content files into typed entity collections.
//!
//! # Layout
//!
//! ```text
//! content/
//! ├── projects/
//! │   └── <id>.json     # one Project per file
//! └── skills/
//!     └── <id>.json     # one Skill per file
//! ```

pub mod loader;
pub mod normalize;

use std::path::Path;

use tracing::info;

use crate::entity::Entity;
use crate::Result;

pub use loader::{load_records, RawRecord};
pub use normalize::{apply_aliases, derive_id, normalize, normalize_all};

/// Load and normalize every record of kind `T` found in `dir`
pub fn load_entities<T: Entity>(dir: &Path, extensions: &[String]) -> Result<Vec<T>> {
    let records = load_records(dir, extensions)?;
    let entities = normalize_all::<T>(records)?;
    info!("Normalized {} {} entities", entities.len(), T::KIND);
    Ok(entities)
}
