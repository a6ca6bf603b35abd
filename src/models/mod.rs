//! Core domain types for the delivery round.

pub mod area;
pub mod building;
pub mod delivery;

pub use area::*;
pub use building::*;
pub use delivery::*;

/// Error type for invalid domain values arriving at a boundary.
///
/// Unknown wire values are rejected distinctly rather than coerced to a
/// default.
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    /// Area code not part of the configured rotation.
    #[error("Unknown area code: {0}")]
    UnknownArea(String),

    /// Delivery status string not part of the lifecycle enum.
    #[error("Unknown delivery status: {0}")]
    UnknownStatus(String),
}
