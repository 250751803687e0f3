pub mod router;

pub use router::{RouteEntry, Router};
