pub mod csv_export;
pub mod file;
pub mod store;

pub use csv_export::export_csv;
pub use file::{export_dataset, import_dataset, load_dataset, save_dataset};
pub use store::{DatasetStore, JsonFileStore, MemoryStore};
