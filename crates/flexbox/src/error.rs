//! Errors surfaced by a layout pass.

use std::error::Error;
use std::fmt;

/// Reasons a layout pass refuses to proceed.
///
/// Every variant aborts the pass before any child rectangle is committed to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlexError {
    /// A raw `flex-direction` value outside the declared constants.
    UnknownDirection(i32),
    /// A raw `flex-wrap` value outside the declared constants.
    UnknownWrap(i32),
    /// A raw `justify-content` value outside the declared constants.
    UnknownJustifyContent(i32),
    /// A raw `align-items` value outside the declared constants.
    UnknownAlignItems(i32),
    /// A raw `align-content` value outside the declared constants.
    UnknownAlignContent(i32),
    /// A measurement mode that is neither exact, at-most nor unspecified.
    UnknownMeasureMode(i32),
    /// A child index the engine asked about does not exist.
    ChildOutOfRange {
        /// Offending physical child index.
        index: usize,
        /// Number of children the host reported for this pass.
        count: usize,
    },
    /// The host failed while measuring a child.
    Host(String),
}

impl FlexError {
    /// True for errors caused by an invalid configuration value rather than by the host tree.
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::UnknownDirection(_)
                | Self::UnknownWrap(_)
                | Self::UnknownJustifyContent(_)
                | Self::UnknownAlignItems(_)
                | Self::UnknownAlignContent(_)
                | Self::UnknownMeasureMode(_)
        )
    }
}

impl fmt::Display for FlexError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownDirection(raw) => write!(formatter, "unknown flex direction: {raw}"),
            Self::UnknownWrap(raw) => write!(formatter, "unknown flex wrap: {raw}"),
            Self::UnknownJustifyContent(raw) => {
                write!(formatter, "unknown justify content: {raw}")
            }
            Self::UnknownAlignItems(raw) => write!(formatter, "unknown align items: {raw}"),
            Self::UnknownAlignContent(raw) => write!(formatter, "unknown align content: {raw}"),
            Self::UnknownMeasureMode(raw) => write!(formatter, "unknown measure mode: {raw}"),
            Self::ChildOutOfRange { index, count } => {
                write!(formatter, "child index {index} out of range for {count} children")
            }
            Self::Host(msg) => write!(formatter, "host error: {msg}"),
        }
    }
}

impl Error for FlexError {}
