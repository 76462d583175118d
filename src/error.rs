//! Unified error type for the GAP layer.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging when the
//! `defmt` feature is enabled.

use crate::gap::stack::StackError;

/// Errors surfaced by GAP operations.
///
/// The taxonomy is deliberately coarse: any radio-stack rejection is
/// collapsed into [`GapError::ParamOutOfRange`] with no sub-reason, no
/// retry and no chaining.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GapError {
    /// A payload exceeded the maximum advertising payload size (31 bytes).
    BufferOverflow,

    /// A parameter was outside its valid range, or the radio stack
    /// rejected the operation.
    ParamOutOfRange,

    /// The requested feature is intentionally unsupported (e.g. directed
    /// advertising, which needs a security handshake we do not have).
    NotImplemented,
}

// Convenience conversions

impl From<StackError> for GapError {
    /// Every underlying stack failure surfaces as `ParamOutOfRange`.
    fn from(_: StackError) -> Self {
        GapError::ParamOutOfRange
    }
}
