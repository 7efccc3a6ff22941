pub mod label_set;
pub use label_set::*;

pub mod label_rules;
pub use label_rules::*;

pub mod labeler;
pub use labeler::*;
