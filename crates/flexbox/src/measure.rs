//! Measurement constraints exchanged with the host view tree.

use serde::{Deserialize, Serialize};

use crate::FlexError;

/// Bit offset of the mode inside a packed constraint.
const MODE_SHIFT: u32 = 30;
/// Mask selecting the size bits of a packed constraint.
const SIZE_MASK: u32 = (1 << MODE_SHIFT) - 1;

/// How a size constraint binds the measured node.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MeasureMode {
    /// No bound; the node picks its own size.
    #[default]
    Unspecified,
    /// The node must take exactly the given size.
    Exactly,
    /// The node may take any size up to the given one.
    AtMost,
}

impl TryFrom<i32> for MeasureMode {
    type Error = FlexError;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Self::Unspecified),
            1 => Ok(Self::Exactly),
            2 => Ok(Self::AtMost),
            other => Err(FlexError::UnknownMeasureMode(other)),
        }
    }
}

impl From<MeasureMode> for i32 {
    fn from(mode: MeasureMode) -> Self {
        match mode {
            MeasureMode::Unspecified => 0,
            MeasureMode::Exactly => 1,
            MeasureMode::AtMost => 2,
        }
    }
}

/// A `(mode, size)` constraint along one physical axis.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MeasureSpec {
    pub mode: MeasureMode,
    pub size: i32,
}

impl MeasureSpec {
    /// An exact size; negative sizes become zero.
    pub const fn exactly(size: i32) -> Self {
        Self {
            mode: MeasureMode::Exactly,
            size: non_negative(size),
        }
    }

    /// An upper bound; negative sizes become zero.
    pub const fn at_most(size: i32) -> Self {
        Self {
            mode: MeasureMode::AtMost,
            size: non_negative(size),
        }
    }

    /// No constraint.
    pub const fn unspecified() -> Self {
        Self {
            mode: MeasureMode::Unspecified,
            size: 0,
        }
    }

    /// Decode a packed constraint: mode in the two high bits, size in the low thirty.
    ///
    /// # Errors
    /// Returns [`FlexError::UnknownMeasureMode`] when the mode bits hold the reserved value.
    pub fn from_packed(packed: u32) -> Result<Self, FlexError> {
        let mode = MeasureMode::try_from((packed >> MODE_SHIFT) as i32)?;
        Ok(Self {
            mode,
            size: (packed & SIZE_MASK) as i32,
        })
    }

    /// Encode into the packed form accepted by [`MeasureSpec::from_packed`].
    pub fn packed(self) -> u32 {
        let mode_bits = i32::from(self.mode) as u32;
        (mode_bits << MODE_SHIFT) | (self.size as u32 & SIZE_MASK)
    }

    /// True unless the constraint is unspecified.
    pub const fn is_bounded(self) -> bool {
        !matches!(self.mode, MeasureMode::Unspecified)
    }

    /// Resolve a desired size against this constraint, flagging when the desire did not fit.
    pub fn resolve(self, desired: i32) -> Dimension {
        let desired = desired.max(0);
        match self.mode {
            MeasureMode::Exactly => Dimension {
                size: self.size,
                too_small: desired > self.size,
            },
            MeasureMode::AtMost if desired > self.size => Dimension {
                size: self.size,
                too_small: true,
            },
            MeasureMode::AtMost | MeasureMode::Unspecified => Dimension {
                size: desired,
                too_small: false,
            },
        }
    }
}

/// A resolved size along one axis.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Dimension {
    pub size: i32,
    /// Set when the content wanted more than the constraint allowed.
    pub too_small: bool,
}

/// A physical width/height pair in pixels.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// A size from its width and height.
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Requested size of a child along one physical axis.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SizeSpec {
    /// A fixed size in pixels.
    Exact(i32),
    /// Fill whatever the container makes available.
    MatchParent,
    /// The child's intrinsic size.
    #[default]
    WrapContent,
}

/// Derive the constraint handed to a child from the container's constraint.
///
/// `used` is the space along the same axis already taken by container padding and the
/// child's own margins.
pub fn child_measure_spec(parent: MeasureSpec, used: i32, child: SizeSpec) -> MeasureSpec {
    let available = (parent.size - used).max(0);
    match (child, parent.mode) {
        (SizeSpec::Exact(size), _) => MeasureSpec::exactly(size),
        (SizeSpec::MatchParent, MeasureMode::Exactly) => MeasureSpec::exactly(available),
        (SizeSpec::MatchParent | SizeSpec::WrapContent, MeasureMode::AtMost)
        | (SizeSpec::WrapContent, MeasureMode::Exactly) => MeasureSpec::at_most(available),
        (SizeSpec::MatchParent | SizeSpec::WrapContent, MeasureMode::Unspecified) => {
            MeasureSpec::unspecified()
        }
    }
}

const fn non_negative(size: i32) -> i32 {
    if size < 0 { 0 } else { size }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if packing and unpacking loses the mode or size.
    fn packed_constraint_decodes() {
        let spec = MeasureSpec::at_most(480);
        assert_eq!(MeasureSpec::from_packed(spec.packed()), Ok(spec));
        let exact = MeasureSpec::from_packed((1 << 30) | 250);
        assert_eq!(exact, Ok(MeasureSpec::exactly(250)));
    }

    #[test]
    /// # Panics
    /// Panics if the reserved mode bits are accepted.
    fn reserved_mode_is_rejected() {
        assert_eq!(
            MeasureSpec::from_packed(3 << 30),
            Err(FlexError::UnknownMeasureMode(3))
        );
        assert_eq!(
            MeasureMode::try_from(-1),
            Err(FlexError::UnknownMeasureMode(-1))
        );
    }

    #[test]
    /// # Panics
    /// Panics if child constraints do not follow the parent mode.
    fn child_spec_follows_parent_mode() {
        let exact = MeasureSpec::exactly(300);
        assert_eq!(
            child_measure_spec(exact, 20, SizeSpec::MatchParent),
            MeasureSpec::exactly(280)
        );
        assert_eq!(
            child_measure_spec(exact, 20, SizeSpec::WrapContent),
            MeasureSpec::at_most(280)
        );
        assert_eq!(
            child_measure_spec(exact, 20, SizeSpec::Exact(40)),
            MeasureSpec::exactly(40)
        );
        let unbounded = MeasureSpec::unspecified();
        assert_eq!(
            child_measure_spec(unbounded, 20, SizeSpec::MatchParent),
            MeasureSpec::unspecified()
        );
        assert_eq!(
            child_measure_spec(MeasureSpec::exactly(10), 30, SizeSpec::MatchParent),
            MeasureSpec::exactly(0)
        );
    }

    #[test]
    /// # Panics
    /// Panics if resolution does not flag content that overflows its constraint.
    fn resolve_flags_overflow() {
        assert_eq!(
            MeasureSpec::exactly(200).resolve(260),
            Dimension {
                size: 200,
                too_small: true
            }
        );
        assert_eq!(
            MeasureSpec::at_most(200).resolve(120),
            Dimension {
                size: 120,
                too_small: false
            }
        );
        assert_eq!(
            MeasureSpec::unspecified().resolve(999),
            Dimension {
                size: 999,
                too_small: false
            }
        );
    }
}
