pub mod quality_score;
pub use quality_score::*;

pub mod metrics;
pub use metrics::*;

pub mod scorer;
pub use scorer::*;
