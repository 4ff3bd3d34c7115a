//! API endpoint modules.

mod denylist;

pub use denylist::DenylistApi;
