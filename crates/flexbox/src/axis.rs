//! Main/cross axis resolution and mapping between logical and physical coordinates.

use crate::{
    Edges, FlexContainerConfig, FlexDirection, FlexWrap, LayoutDirection, MeasureSpec, Rect, Size,
};

/// Resolved axes of a flex container.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Axes {
    /// True when the main axis runs horizontally (row directions).
    pub main_is_horizontal: bool,
    /// True when items are laid out from the main-end edge.
    pub main_reverse: bool,
    /// True when lines stack from the cross-end edge.
    pub cross_reverse: bool,
}

/// Resolve axes from direction, wrap mode and text direction.
///
/// RTL reverses the main axis of rows and the line stacking of columns.
pub const fn resolve_axes(
    direction: FlexDirection,
    wrap: FlexWrap,
    layout_direction: LayoutDirection,
) -> Axes {
    let rtl = matches!(layout_direction, LayoutDirection::Rtl);
    let wrap_reverse = matches!(wrap, FlexWrap::WrapReverse);
    match direction {
        FlexDirection::Row => Axes {
            main_is_horizontal: true,
            main_reverse: rtl,
            cross_reverse: wrap_reverse,
        },
        FlexDirection::RowReverse => Axes {
            main_is_horizontal: true,
            main_reverse: !rtl,
            cross_reverse: wrap_reverse,
        },
        FlexDirection::Column => Axes {
            main_is_horizontal: false,
            main_reverse: false,
            cross_reverse: rtl != wrap_reverse,
        },
        FlexDirection::ColumnReverse => Axes {
            main_is_horizontal: false,
            main_reverse: true,
            cross_reverse: rtl != wrap_reverse,
        },
    }
}

impl Axes {
    /// Axes for a container configuration.
    pub const fn of(config: &FlexContainerConfig) -> Self {
        resolve_axes(config.direction, config.wrap, config.layout_direction)
    }

    /// Extent of `size` along the main axis.
    pub const fn main_of(self, size: Size) -> i32 {
        if self.main_is_horizontal { size.width } else { size.height }
    }

    /// Extent of `size` along the cross axis.
    pub const fn cross_of(self, size: Size) -> i32 {
        if self.main_is_horizontal { size.height } else { size.width }
    }

    /// Split physical constraints into `(main, cross)`.
    pub const fn logical_specs(
        self,
        width: MeasureSpec,
        height: MeasureSpec,
    ) -> (MeasureSpec, MeasureSpec) {
        if self.main_is_horizontal {
            (width, height)
        } else {
            (height, width)
        }
    }

    /// Join `(main, cross)` constraints back into `(width, height)`.
    pub const fn physical_specs(
        self,
        main: MeasureSpec,
        cross: MeasureSpec,
    ) -> (MeasureSpec, MeasureSpec) {
        if self.main_is_horizontal {
            (main, cross)
        } else {
            (cross, main)
        }
    }

    /// Sum of both edges along the main axis.
    pub const fn main_sum(self, edges: Edges) -> i32 {
        if self.main_is_horizontal { edges.horizontal() } else { edges.vertical() }
    }

    /// Sum of both edges along the cross axis.
    pub const fn cross_sum(self, edges: Edges) -> i32 {
        if self.main_is_horizontal { edges.vertical() } else { edges.horizontal() }
    }

    /// Edge on the side the main axis starts from.
    pub const fn main_start(self, edges: Edges) -> i32 {
        match (self.main_is_horizontal, self.main_reverse) {
            (true, false) => edges.left,
            (true, true) => edges.right,
            (false, false) => edges.top,
            (false, true) => edges.bottom,
        }
    }

    /// Edge on the side the main axis ends at.
    pub const fn main_end(self, edges: Edges) -> i32 {
        match (self.main_is_horizontal, self.main_reverse) {
            (true, false) => edges.right,
            (true, true) => edges.left,
            (false, false) => edges.bottom,
            (false, true) => edges.top,
        }
    }

    /// Edge on the side lines stack from.
    pub const fn cross_start(self, edges: Edges) -> i32 {
        match (self.main_is_horizontal, self.cross_reverse) {
            (true, false) => edges.top,
            (true, true) => edges.bottom,
            (false, false) => edges.left,
            (false, true) => edges.right,
        }
    }

    /// Edge on the side lines stack towards.
    pub const fn cross_end(self, edges: Edges) -> i32 {
        match (self.main_is_horizontal, self.cross_reverse) {
            (true, false) => edges.bottom,
            (true, true) => edges.top,
            (false, false) => edges.right,
            (false, true) => edges.left,
        }
    }

    /// Map a logical box, measured from the start edges, into a physical rectangle.
    pub const fn to_physical(self, logical: LogicalBox, container: Size) -> Rect {
        let main_origin = if self.main_reverse {
            self.main_of(container) - logical.main_pos - logical.main_size
        } else {
            logical.main_pos
        };
        let cross_origin = if self.cross_reverse {
            self.cross_of(container) - logical.cross_pos - logical.cross_size
        } else {
            logical.cross_pos
        };
        if self.main_is_horizontal {
            Rect::new(
                main_origin,
                cross_origin,
                main_origin + logical.main_size,
                cross_origin + logical.cross_size,
            )
        } else {
            Rect::new(
                cross_origin,
                main_origin,
                cross_origin + logical.cross_size,
                main_origin + logical.main_size,
            )
        }
    }
}

/// A box positioned relative to the container's main-start and cross-start edges.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct LogicalBox {
    pub main_pos: i32,
    pub cross_pos: i32,
    pub main_size: i32,
    pub cross_size: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if axis resolution does not follow direction, wrap and text direction.
    fn axes_follow_direction_wrap_and_rtl() {
        let row = resolve_axes(FlexDirection::Row, FlexWrap::Wrap, LayoutDirection::Ltr);
        assert!(row.main_is_horizontal && !row.main_reverse && !row.cross_reverse);
        let row_rtl = resolve_axes(FlexDirection::Row, FlexWrap::NoWrap, LayoutDirection::Rtl);
        assert!(row_rtl.main_reverse);
        let row_reverse_rtl =
            resolve_axes(FlexDirection::RowReverse, FlexWrap::NoWrap, LayoutDirection::Rtl);
        assert!(!row_reverse_rtl.main_reverse);
        let column = resolve_axes(
            FlexDirection::Column,
            FlexWrap::WrapReverse,
            LayoutDirection::Ltr,
        );
        assert!(!column.main_is_horizontal && column.cross_reverse);
        let column_rtl = resolve_axes(
            FlexDirection::ColumnReverse,
            FlexWrap::WrapReverse,
            LayoutDirection::Rtl,
        );
        assert!(column_rtl.main_reverse && !column_rtl.cross_reverse);
    }

    #[test]
    /// # Panics
    /// Panics if logical boxes are not mirrored and transposed correctly.
    fn logical_boxes_map_to_physical() {
        let logical = LogicalBox {
            main_pos: 10,
            cross_pos: 5,
            main_size: 30,
            cross_size: 20,
        };
        let container = Size::new(100, 60);
        let row = resolve_axes(FlexDirection::Row, FlexWrap::NoWrap, LayoutDirection::Ltr);
        assert_eq!(row.to_physical(logical, container), Rect::new(10, 5, 40, 25));
        let row_rtl = resolve_axes(FlexDirection::Row, FlexWrap::NoWrap, LayoutDirection::Rtl);
        assert_eq!(row_rtl.to_physical(logical, container), Rect::new(60, 5, 90, 25));
        let column = resolve_axes(FlexDirection::Column, FlexWrap::NoWrap, LayoutDirection::Ltr);
        assert_eq!(column.to_physical(logical, container), Rect::new(5, 10, 25, 40));
    }
}
