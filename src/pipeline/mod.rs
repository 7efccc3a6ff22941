pub mod id_type;
pub use id_type::*;

pub mod id_allocator;
pub use id_allocator::*;

pub mod config;
pub use config::*;

pub mod record;
pub use record::*;

pub mod dataset;
pub use dataset::*;

pub mod tool;
pub use tool::*;

pub mod tool_name;
pub use tool_name::*;

pub mod description;
pub use description::*;

pub mod output;
pub use output::*;

pub mod pipeline;
pub use pipeline::*;
