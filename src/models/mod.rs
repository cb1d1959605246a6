pub mod active_set;
pub mod image_record;
pub mod loaders;

pub use active_set::ActiveSet;
pub use image_record::{ImageRecord, ERROR_SENTINEL};
pub use loaders::{load_manifest, BatchManifest};
