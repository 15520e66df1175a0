//! Library error type.

/// Failures raised by the game model.  Drawing never fails: out-of-range
/// canvas writes are clipped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Every object needs at least one glyph to draw.
    #[error("object shape must not be empty")]
    EmptyShape,

    /// The registry has no free slot left.
    #[error("object registry is full ({capacity} slots)")]
    RegistryFull { capacity: usize },

    /// A tunable is outside the range the simulation can work with.
    #[error("invalid config: {field} {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, GameError>;
