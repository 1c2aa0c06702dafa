use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CollisionError {
    /// The dispatcher cannot test these operands against each other
    #[error("{left} and {right} cannot be used together in a collision test")]
    InvalidPairing { left: &'static str, right: &'static str },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("unknown sprite id {0}")]
    UnknownSprite(u32),
}
