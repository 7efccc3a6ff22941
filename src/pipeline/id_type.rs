use serde::{Deserialize, Serialize};

/// Strategy used for generating tool ids.
///
/// - `Int`: `{prefix}_1`, `{prefix}_2`, ... in allocation order.
/// - `Uuid`: `{prefix}_{uuid v4}`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum IdType {
    /// Sequential integers (default).
    #[default]
    Int,
    /// Random UUID strings.
    Uuid,
}
