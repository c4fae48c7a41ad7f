//! Adapter implementations that handle I/O
//!
//! - `file/` - Revision documents stored as JSON files

pub mod file;

pub use file::RevisionFile;
