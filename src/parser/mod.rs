pub mod sql_scanner;
pub use sql_scanner::*;

pub mod word_comparer;
pub use word_comparer::*;

pub mod clause;
pub use clause::*;

pub mod clause_comparers;
pub use clause_comparers::*;

pub mod token;
pub use token::*;

pub mod operation;
pub use operation::*;

pub mod literals;

pub mod tokenizer;
pub use tokenizer::*;
