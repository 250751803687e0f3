mod gateway;
pub mod tracing;

pub use gateway::{Handled, TestGateway};
pub use tracing::{CapturedEvent, init_test_tracing};
