pub mod rejection;
pub use rejection::*;

pub mod validator;
pub use validator::*;
