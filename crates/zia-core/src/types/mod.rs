mod credentials;
mod denylist;
mod domain;

pub use credentials::*;
pub use denylist::*;
pub use domain::*;
