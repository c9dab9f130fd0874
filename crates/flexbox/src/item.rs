//! Per-child flex parameters and the per-pass output arena.

use serde::{Deserialize, Serialize};

use crate::{Axes, Edges, Size, SizeSpec};

/// `order` given to children that do not set one.
pub const ORDER_DEFAULT: i32 = 1;

/// Flex parameters of one child, read from the host at the start of every pass.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FlexItem {
    pub width: SizeSpec,
    pub height: SizeSpec,
    /// Share of positive free space; negative values are treated as zero.
    pub flex_grow: f32,
    /// Share of overflow to absorb; negative values are treated as zero.
    pub flex_shrink: f32,
    pub margins: Edges,
    pub order: i32,
    /// Invisible ("gone") items take no space but keep their index.
    pub visible: bool,
    pub min_width: i32,
    pub min_height: i32,
    pub max_width: i32,
    pub max_height: i32,
}

impl Default for FlexItem {
    fn default() -> Self {
        Self {
            width: SizeSpec::WrapContent,
            height: SizeSpec::WrapContent,
            flex_grow: 0.0,
            flex_shrink: 1.0,
            margins: Edges::default(),
            order: ORDER_DEFAULT,
            visible: true,
            min_width: 0,
            min_height: 0,
            max_width: i32::MAX,
            max_height: i32::MAX,
        }
    }
}

impl FlexItem {
    /// An item with fixed pixel width and height.
    pub fn fixed(width: i32, height: i32) -> Self {
        Self {
            width: SizeSpec::Exact(width),
            height: SizeSpec::Exact(height),
            ..Self::default()
        }
    }

    /// Set the grow weight.
    pub fn with_grow(mut self, flex_grow: f32) -> Self {
        self.flex_grow = flex_grow;
        self
    }

    /// Set the shrink weight.
    pub fn with_shrink(mut self, flex_shrink: f32) -> Self {
        self.flex_shrink = flex_shrink;
        self
    }

    /// Set the ordering key.
    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    /// Set the margins.
    pub fn with_margins(mut self, margins: Edges) -> Self {
        self.margins = margins;
        self
    }

    /// Mark the item as gone: it takes no space and gets no rectangle.
    pub fn gone(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Grow weight, with negative values treated as zero.
    pub fn grow_weight(&self) -> f32 {
        self.flex_grow.max(0.0)
    }

    /// Shrink weight, with negative values treated as zero.
    pub fn shrink_weight(&self) -> f32 {
        self.flex_shrink.max(0.0)
    }

    /// Requested size along the main axis.
    pub const fn main_size_spec(&self, axes: Axes) -> SizeSpec {
        if axes.main_is_horizontal { self.width } else { self.height }
    }

    /// Requested size along the cross axis.
    pub const fn cross_size_spec(&self, axes: Axes) -> SizeSpec {
        if axes.main_is_horizontal { self.height } else { self.width }
    }

    /// Sum of the margins along the main axis, ignoring negative values.
    pub fn main_margins(&self, axes: Axes) -> i32 {
        axes.main_sum(self.margins.non_negative())
    }

    /// Sum of the margins along the cross axis, ignoring negative values.
    pub fn cross_margins(&self, axes: Axes) -> i32 {
        axes.cross_sum(self.margins.non_negative())
    }

    /// `(min, max)` main-axis bounds with min raised to zero and max never below min.
    pub fn main_bounds(&self, axes: Axes) -> (i32, i32) {
        if axes.main_is_horizontal {
            sane_bounds(self.min_width, self.max_width)
        } else {
            sane_bounds(self.min_height, self.max_height)
        }
    }

    /// `(min, max)` cross-axis bounds with min raised to zero and max never below min.
    pub fn cross_bounds(&self, axes: Axes) -> (i32, i32) {
        if axes.main_is_horizontal {
            sane_bounds(self.min_height, self.max_height)
        } else {
            sane_bounds(self.min_width, self.max_width)
        }
    }

    /// Clamp a measured size into this item's min/max bounds.
    pub fn clamp_size(&self, size: Size) -> Size {
        let (min_width, max_width) = sane_bounds(self.min_width, self.max_width);
        let (min_height, max_height) = sane_bounds(self.min_height, self.max_height);
        Size::new(
            size.width.clamp(min_width, max_width),
            size.height.clamp(min_height, max_height),
        )
    }
}

fn sane_bounds(min: i32, max: i32) -> (i32, i32) {
    let floor = min.max(0);
    (floor, max.max(floor))
}

/// A physical rectangle in the container's coordinate space.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    /// A rectangle from its four edges.
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Right minus left.
    pub const fn width(self) -> i32 {
        self.right - self.left
    }

    /// Bottom minus top.
    pub const fn height(self) -> i32 {
        self.bottom - self.top
    }

    /// Grow the rectangle outwards by the given edges.
    pub const fn outset(self, edges: Edges) -> Self {
        Self::new(
            self.left - edges.left,
            self.top - edges.top,
            self.right + edges.right,
            self.bottom + edges.bottom,
        )
    }

    /// The rectangle moved by `dx` and `dy`.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.left + dx, self.top + dy, self.right + dx, self.bottom + dy)
    }
}

/// Outputs written for one child during a pass.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct FlexItemState {
    pub measured: Size,
    pub baseline: Option<i32>,
    pub rect: Rect,
}
