//! A flex line: one wrapped run of consecutive items and its aggregate measurements.

use crate::Rect;

/// One line of items along the main axis.
///
/// Rebuilt on every layout pass. Sizes include container padding at the line ends and any
/// main-axis dividers; the bounding box starts at sentinel extremes until an item is placed.
#[derive(Clone, Debug, PartialEq)]
pub struct FlexLine {
    pub(crate) left: i32,
    pub(crate) top: i32,
    pub(crate) right: i32,
    pub(crate) bottom: i32,
    pub(crate) main_size: i32,
    pub(crate) cross_size: i32,
    pub(crate) item_count: usize,
    pub(crate) gone_item_count: usize,
    /// Position of the first item in the ordered child sequence.
    pub(crate) first_position: usize,
    /// Physical child indices in layout order, gone items included.
    pub(crate) indices: Vec<usize>,
    pub(crate) total_flex_grow: f32,
    pub(crate) total_flex_shrink: f32,
    pub(crate) divider_length_in_main_size: i32,
    pub(crate) max_baseline: i32,
}

impl FlexLine {
    /// Open an empty line whose main size starts at `leading` (padding plus any leading divider).
    pub(crate) fn open(first_position: usize, leading: i32, leading_divider: i32) -> Self {
        Self {
            left: i32::MAX,
            top: i32::MAX,
            right: i32::MIN,
            bottom: i32::MIN,
            main_size: leading + leading_divider,
            cross_size: 0,
            item_count: 0,
            gone_item_count: 0,
            first_position,
            indices: Vec::new(),
            total_flex_grow: 0.0,
            total_flex_shrink: 0.0,
            divider_length_in_main_size: leading_divider,
            max_baseline: 0,
        }
    }

    pub(crate) fn push_gone(&mut self, index: usize) {
        self.indices.push(index);
        self.item_count += 1;
        self.gone_item_count += 1;
    }

    pub(crate) fn push_visible(
        &mut self,
        index: usize,
        outer_main: i32,
        divider_before: i32,
        weights: (f32, f32),
    ) {
        self.indices.push(index);
        self.item_count += 1;
        self.main_size += outer_main + divider_before;
        self.divider_length_in_main_size += divider_before;
        self.total_flex_grow += weights.0;
        self.total_flex_shrink += weights.1;
    }

    pub(crate) fn add_trailing_divider(&mut self, divider: i32) {
        self.main_size += divider;
        self.divider_length_in_main_size += divider;
    }

    /// Expand the bounding box to cover `rect`.
    pub(crate) fn include(&mut self, rect: Rect) {
        self.left = self.left.min(rect.left);
        self.top = self.top.min(rect.top);
        self.right = self.right.max(rect.right);
        self.bottom = self.bottom.max(rect.bottom);
    }

    /// Left edge of the bounding box.
    pub fn left(&self) -> i32 {
        self.left
    }

    /// Top edge of the bounding box.
    pub fn top(&self) -> i32 {
        self.top
    }

    /// Right edge of the bounding box.
    pub fn right(&self) -> i32 {
        self.right
    }

    /// Bottom edge of the bounding box.
    pub fn bottom(&self) -> i32 {
        self.bottom
    }

    /// Size along the main axis: item extents, margins, dividers and container padding.
    pub fn main_size(&self) -> i32 {
        self.main_size
    }

    /// Size along the cross axis after any stretching.
    pub fn cross_size(&self) -> i32 {
        self.cross_size
    }

    /// Items in this line, gone ones included.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Gone items kept in this line for bookkeeping.
    pub fn gone_item_count(&self) -> usize {
        self.gone_item_count
    }

    /// Items that take space in this line.
    pub fn item_count_not_gone(&self) -> usize {
        self.item_count - self.gone_item_count
    }

    /// Position of the first item in the ordered child sequence.
    pub fn first_position(&self) -> usize {
        self.first_position
    }

    /// Physical child indices in layout order.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Sum of the grow weights of visible items.
    pub fn total_flex_grow(&self) -> f32 {
        self.total_flex_grow
    }

    /// Sum of the shrink weights of visible items.
    pub fn total_flex_shrink(&self) -> f32 {
        self.total_flex_shrink
    }

    /// Main-axis length taken by dividers, including edge dividers.
    pub fn divider_length_in_main_size(&self) -> i32 {
        self.divider_length_in_main_size
    }

    /// Largest baseline offset (baseline plus top margin) among baseline-aligned items.
    pub fn max_baseline(&self) -> i32 {
        self.max_baseline
    }

    /// The bounding box, or `None` while no item has been placed.
    pub fn bounds(&self) -> Option<Rect> {
        (self.left <= self.right && self.top <= self.bottom)
            .then(|| Rect::new(self.left, self.top, self.right, self.bottom))
    }
}
