//! Core descriptor construction: typed record blocks and the assembly
//! routine that turns one DIMAP scene into a `DatasetRecord`.
pub mod record;

pub use record::{DatasetRecord, prepare_dataset};
