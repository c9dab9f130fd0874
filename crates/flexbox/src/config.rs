//! Container configuration: axis direction, wrapping, alignment, padding and dividers.

use serde::{Deserialize, Serialize};

use crate::FlexError;

/// Orientation and start edge of the main axis.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FlexDirection {
    #[default]
    Row,
    RowReverse,
    Column,
    ColumnReverse,
}

impl FlexDirection {
    /// True for `Row` and `RowReverse`.
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Row | Self::RowReverse)
    }
}

impl TryFrom<i32> for FlexDirection {
    type Error = FlexError;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Self::Row),
            1 => Ok(Self::RowReverse),
            2 => Ok(Self::Column),
            3 => Ok(Self::ColumnReverse),
            other => Err(FlexError::UnknownDirection(other)),
        }
    }
}

/// Whether overflow along the main axis starts a new line.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FlexWrap {
    #[default]
    NoWrap,
    Wrap,
    /// Wrap, stacking lines from the cross-end edge.
    WrapReverse,
}

impl TryFrom<i32> for FlexWrap {
    type Error = FlexError;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Self::NoWrap),
            1 => Ok(Self::Wrap),
            2 => Ok(Self::WrapReverse),
            other => Err(FlexError::UnknownWrap(other)),
        }
    }
}

/// Placement of items inside a line when the line is shorter than the container.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum JustifyContent {
    #[default]
    FlexStart,
    FlexEnd,
    Center,
    SpaceBetween,
    SpaceAround,
}

impl TryFrom<i32> for JustifyContent {
    type Error = FlexError;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Self::FlexStart),
            1 => Ok(Self::FlexEnd),
            2 => Ok(Self::Center),
            3 => Ok(Self::SpaceBetween),
            4 => Ok(Self::SpaceAround),
            other => Err(FlexError::UnknownJustifyContent(other)),
        }
    }
}

/// Cross-axis alignment applied to every item of a line.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AlignItems {
    FlexStart,
    FlexEnd,
    Center,
    /// Aligns first baselines; only honoured on a horizontal main axis without wrap-reverse.
    Baseline,
    /// Expands every item to its line's cross size.
    #[default]
    Stretch,
}

impl TryFrom<i32> for AlignItems {
    type Error = FlexError;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Self::FlexStart),
            1 => Ok(Self::FlexEnd),
            2 => Ok(Self::Center),
            3 => Ok(Self::Baseline),
            4 => Ok(Self::Stretch),
            other => Err(FlexError::UnknownAlignItems(other)),
        }
    }
}

/// Distribution of lines along the cross axis.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AlignContent {
    FlexStart,
    FlexEnd,
    Center,
    SpaceBetween,
    SpaceAround,
    /// Grows lines so they fill an exact cross size.
    #[default]
    Stretch,
}

impl TryFrom<i32> for AlignContent {
    type Error = FlexError;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Self::FlexStart),
            1 => Ok(Self::FlexEnd),
            2 => Ok(Self::Center),
            3 => Ok(Self::SpaceBetween),
            4 => Ok(Self::SpaceAround),
            5 => Ok(Self::Stretch),
            other => Err(FlexError::UnknownAlignContent(other)),
        }
    }
}

/// Host text direction.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LayoutDirection {
    #[default]
    Ltr,
    Rtl,
}

/// Four physical edge lengths, used for padding and margins.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Edges {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Edges {
    /// Edges from explicit left, top, right and bottom lengths.
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// The same length on all four sides.
    pub const fn uniform(length: i32) -> Self {
        Self::new(length, length, length, length)
    }

    /// Copy with every negative edge raised to zero.
    pub fn non_negative(self) -> Self {
        Self::new(
            self.left.max(0),
            self.top.max(0),
            self.right.max(0),
            self.bottom.max(0),
        )
    }

    /// Left plus right.
    pub const fn horizontal(self) -> i32 {
        self.left + self.right
    }

    /// Top plus bottom.
    pub const fn vertical(self) -> i32 {
        self.top + self.bottom
    }
}

/// Where dividers of one orientation are drawn.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowDivider {
    pub beginning: bool,
    pub middle: bool,
    pub end: bool,
}

impl ShowDivider {
    /// No divider shown anywhere.
    pub const NONE: Self = Self::from_bits(0);

    /// Decode the host bit mask: beginning = 1, middle = 2, end = 4.
    pub const fn from_bits(bits: u8) -> Self {
        Self {
            beginning: bits & 1 != 0,
            middle: bits & 2 != 0,
            end: bits & 4 != 0,
        }
    }
}

/// A divider of one orientation and the positions it is shown at.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Divider {
    /// Width of a vertical divider or height of a horizontal one.
    pub thickness: i32,
    pub show: ShowDivider,
}

impl Divider {
    /// Length drawn before the first entry.
    pub const fn before_first(self) -> i32 {
        if self.show.beginning { self.visible_thickness() } else { 0 }
    }

    /// Length drawn between two consecutive entries.
    pub const fn between(self) -> i32 {
        if self.show.middle { self.visible_thickness() } else { 0 }
    }

    /// Length drawn after the last entry.
    pub const fn after_last(self) -> i32 {
        if self.show.end { self.visible_thickness() } else { 0 }
    }

    /// Total divider length around `count` consecutive entries.
    pub fn total_for(self, count: usize) -> i32 {
        if count == 0 {
            return 0;
        }
        let middles = i32::try_from(count - 1).unwrap_or(i32::MAX);
        self.before_first() + self.after_last() + self.between().saturating_mul(middles)
    }

    const fn visible_thickness(self) -> i32 {
        if self.thickness > 0 { self.thickness } else { 0 }
    }
}

/// Vertical dividers separate items of a row (or lines of a column); horizontal ones the reverse.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Dividers {
    pub vertical: Divider,
    pub horizontal: Divider,
}

impl Dividers {
    /// The same drawable and mode on both orientations.
    pub const fn both(divider: Divider) -> Self {
        Self {
            vertical: divider,
            horizontal: divider,
        }
    }

    /// Dividers placed between items along the main axis.
    pub const fn along_main(self, direction: FlexDirection) -> Divider {
        if direction.is_horizontal() {
            self.vertical
        } else {
            self.horizontal
        }
    }

    /// Dividers placed between lines along the cross axis.
    pub const fn along_cross(self, direction: FlexDirection) -> Divider {
        if direction.is_horizontal() {
            self.horizontal
        } else {
            self.vertical
        }
    }
}

/// Per-container configuration; changing any field requires a new layout pass.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FlexContainerConfig {
    pub direction: FlexDirection,
    pub wrap: FlexWrap,
    pub justify_content: JustifyContent,
    pub align_items: AlignItems,
    pub align_content: AlignContent,
    pub layout_direction: LayoutDirection,
    pub padding: Edges,
    pub dividers: Dividers,
}

impl FlexContainerConfig {
    /// Set the main-axis direction.
    pub fn with_direction(mut self, direction: FlexDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Set the wrap mode.
    pub fn with_wrap(mut self, wrap: FlexWrap) -> Self {
        self.wrap = wrap;
        self
    }

    /// Set main-axis distribution of free space.
    pub fn with_justify_content(mut self, justify_content: JustifyContent) -> Self {
        self.justify_content = justify_content;
        self
    }

    /// Set cross-axis alignment of items within their line.
    pub fn with_align_items(mut self, align_items: AlignItems) -> Self {
        self.align_items = align_items;
        self
    }

    /// Set cross-axis distribution of lines.
    pub fn with_align_content(mut self, align_content: AlignContent) -> Self {
        self.align_content = align_content;
        self
    }

    /// Set the horizontal writing direction.
    pub fn with_layout_direction(mut self, layout_direction: LayoutDirection) -> Self {
        self.layout_direction = layout_direction;
        self
    }

    /// Set the container padding.
    pub fn with_padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    /// Set the dividers drawn between items and lines.
    pub fn with_dividers(mut self, dividers: Dividers) -> Self {
        self.dividers = dividers;
        self
    }
}
