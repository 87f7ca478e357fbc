pub mod serialization;
pub mod snapshot;
pub mod store;
pub mod traits;

pub use serialization::JsonSerializer;
pub use snapshot::{load, load_with, save, save_with};
pub use store::{AtomicWriter, JsonFileStore, MemoryStore};
pub use traits::{KeyValueStore, Serializer};
