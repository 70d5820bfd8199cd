use thiserror::Error;

/// Invalid simulation configuration detected at construction time.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A chain needs a head and a tail to be drawn as a curve.
    #[error("chain needs at least {min} nodes, got {got}")]
    TooFewNodes { got: usize, min: usize },
}
