pub mod options;
pub use options::*;

pub mod parameter;
pub use parameter::*;

pub mod placeholder;
pub use placeholder::*;

pub mod name_registry;
pub use name_registry::*;

pub mod parameterized_query;
pub use parameterized_query::*;

pub mod layout;
pub use layout::*;

pub mod parameterizer;
pub use parameterizer::*;
