pub mod error;
pub mod flatten;
pub mod html;
pub mod writer;

pub use error::ExportError;
pub use flatten::{flatten, FlattenedRow};
pub use html::strip_tags;
pub use writer::{export_profiles, CSV_FILE_NAME, JSON_FILE_NAME};
