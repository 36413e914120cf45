/// The error type for [`Card::generate()`](crate::Card::generate).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigurationError {
    ZeroSize,
    /// The number range cannot fill `size * size` cells with distinct numbers.
    InsufficientNumberRange { size: usize, number_range: u32 },
}

impl std::error::Error for ConfigurationError {}

impl std::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigurationError::ZeroSize => write!(f, "A card must have at least one row and column"),
            ConfigurationError::InsufficientNumberRange { size, number_range } => write!(
                f,
                "A {}x{} card needs {} distinct numbers, but the number range only goes up to {}",
                size,
                size,
                size.saturating_mul(*size),
                number_range
            ),
        }
    }
}
