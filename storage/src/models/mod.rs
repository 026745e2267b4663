//! Row and selector types for the bookmark tables.

mod list_kind;
mod user_record;

pub use list_kind::{ListKind, UnknownListKind};
pub use user_record::UserRecord;
