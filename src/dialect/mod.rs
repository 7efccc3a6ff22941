pub mod dialect;
pub use dialect::*;

pub mod rewrites;
pub use rewrites::*;
