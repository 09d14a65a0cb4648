//! Domain reducers.
//!
//! Each page / widget owns one module; `update.rs` offers every message to
//! them in turn.  A reducer returns `true` when it consumed the message.

pub mod link_tool;
pub mod profile;
pub mod questions;
pub mod routing;
