pub mod dataset_error;
pub mod loader;
pub mod normalize;
pub mod store;

pub use dataset_error::DatasetError;
pub use loader::load_path;
pub use store::{CityPair, DatasetStore};
