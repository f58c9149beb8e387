use crate::invoke::Strategy;

/// Result of a dispatch that must resolve to a mocked answer.
pub type MockResult<T> = Result<T, MockError>;

/// Errors raised at the boundary between mocked subjects and their providers.
///
/// The dispatcher itself never panics on these. Generated forwarding methods
/// and the erased shims turn them into panics carrying the [Display](core::fmt::Display)
/// output, since every variant except [MockError::ArityMismatch] means the
/// test is configured wrong.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MockError {
    /// No registered provider claimed the call.
    NoMockMatched {
        subject: &'static str,
        method: &'static str,
    },
    /// An argument slot did not hold the type the shim was generated for.
    Downcast {
        slot: usize,
        expected: &'static str,
    },
    /// An envelope was shorter than the shim expected.
    MissingSlot { slot: usize, len: usize },
    /// A when/return provider matched, but nothing was given to `returns`.
    NoReturnValue { strategy: Strategy },
    /// A result envelope had the wrong number of slots.
    ArityMismatch { expected: usize, actual: usize },
    /// A forwarding method could not extract a typed result.
    MissingResult {
        subject: &'static str,
        method: &'static str,
        slot: usize,
    },
}

impl core::fmt::Display for MockError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NoMockMatched { subject, method } => {
                write!(f, "no mock code matched for {subject}::{method}")
            }
            Self::Downcast { slot, expected } => {
                write!(
                    f,
                    "Fatal: failed to downcast argument #{slot} to {expected}."
                )
            }
            Self::MissingSlot { slot, len } => {
                write!(
                    f,
                    "Fatal: argument #{slot} requested from an envelope of {len} slots."
                )
            }
            Self::NoReturnValue { strategy } => {
                write!(
                    f,
                    "{strategy:?} provider matched, but no return value was configured."
                )
            }
            Self::ArityMismatch { expected, actual } => {
                write!(
                    f,
                    "unexpected number of return values: {actual} (expected {expected})"
                )
            }
            Self::MissingResult {
                subject,
                method,
                slot,
            } => {
                write!(
                    f,
                    "{subject}::{method}: result #{slot} was missing or of the wrong type."
                )
            }
        }
    }
}

impl std::error::Error for MockError {}
