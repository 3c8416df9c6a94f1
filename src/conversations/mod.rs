//! Conversation ordering
//!
//! Group and direct threads live in separate collections, each kept in
//! descending order of last activity. Mutations on unknown threads are
//! silent no-ops.

mod direct;
mod group;
mod ordering;

pub use direct::DirectChats;
pub use group::GroupChats;
pub use ordering::ThreadList;
