//! Command implementations

mod expr;
mod match_cmd;

pub use expr::{expand, flatten, lookup, merge, normalize, satisfies};
pub use match_cmd::match_revisions;
