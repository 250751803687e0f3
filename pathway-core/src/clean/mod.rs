mod path;
#[cfg(test)]
mod tests;
mod types;

pub use path::*;
pub use types::*;
