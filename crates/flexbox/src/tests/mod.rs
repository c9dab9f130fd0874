//! Pass-level and scenario tests driven through a synthetic host.

use super::*;


/// One synthetic child: its flex parameters, the size it wants, and an optional baseline.
#[derive(Copy, Clone, Debug)]
pub struct StubChild {
    pub item: FlexItem,
    pub intrinsic: Size,
    pub baseline: Option<i32>,
    /// When set, the content reflows like text: its height is this area divided by the
    /// measured width, rounded up.
    pub area: Option<i32>,
}

/// A child with a fixed pixel size that also wants exactly that size.
#[inline]
pub fn fixed(width: i32, height: i32) -> StubChild {
    StubChild {
        item: FlexItem::fixed(width, height),
        intrinsic: Size::new(width, height),
        baseline: None,
        area: None,
    }
}

/// A wrap-content child with the given intrinsic size.
#[inline]
pub fn content(width: i32, height: i32) -> StubChild {
    StubChild {
        item: FlexItem::default(),
        intrinsic: Size::new(width, height),
        baseline: None,
        area: None,
    }
}

/// A wrap-content child whose height grows as its width narrows.
#[inline]
pub fn reflowing(width: i32, height: i32) -> StubChild {
    StubChild {
        area: Some(width * height),
        ..content(width, height)
    }
}

impl StubChild {
    pub fn map(mut self, edit: impl FnOnce(FlexItem) -> FlexItem) -> Self {
        self.item = edit(self.item);
        self
    }

    pub const fn with_baseline(mut self, baseline: i32) -> Self {
        self.baseline = Some(baseline);
        self
    }
}

/// Host backed by a flat list of synthetic children.
///
/// Measurement honours the constraint the way a leaf view does: exact sizes are taken as
/// given, at-most sizes cap the intrinsic size, unspecified returns the intrinsic size.
/// Reflowing children derive their wanted height from the measured width.
#[derive(Clone, Debug, Default)]
pub struct StubHost {
    pub children: Vec<StubChild>,
    pub rects: Vec<Option<Rect>>,
    pub measure_calls: usize,
    pub fail_at: Option<usize>,
}

impl StubHost {
    pub fn new(children: Vec<StubChild>) -> Self {
        let count = children.len();
        Self {
            children,
            rects: vec![None; count],
            measure_calls: 0,
            fail_at: None,
        }
    }

    /// Committed rectangle of the child at `index`.
    pub fn rect(&self, index: usize) -> Option<Rect> {
        self.rects.get(index).copied().flatten()
    }

    /// Committed `(left, top, right, bottom)` of the child at `index`.
    pub fn edges(&self, index: usize) -> Option<(i32, i32, i32, i32)> {
        self.rect(index)
            .map(|rect| (rect.left, rect.top, rect.right, rect.bottom))
    }
}

const fn constrain(spec: MeasureSpec, intrinsic: i32) -> i32 {
    match spec.mode {
        MeasureMode::Exactly => spec.size,
        MeasureMode::AtMost => {
            if intrinsic < spec.size {
                intrinsic
            } else {
                spec.size
            }
        }
        MeasureMode::Unspecified => intrinsic,
    }
}

impl FlexHost for StubHost {
    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn item(&self, index: usize) -> FlexItem {
        self.children
            .get(index)
            .map_or_else(FlexItem::default, |child| child.item)
    }

    fn measure(
        &mut self,
        index: usize,
        width: MeasureSpec,
        height: MeasureSpec,
    ) -> Result<Size, FlexError> {
        self.measure_calls += 1;
        if self.fail_at == Some(index) {
            return Err(FlexError::Host(format!("child {index} refused to measure")));
        }
        let child = self
            .children
            .get(index)
            .ok_or(FlexError::ChildOutOfRange {
                index,
                count: self.children.len(),
            })?;
        let measured_width = constrain(width, child.intrinsic.width);
        let wanted_height = match child.area {
            Some(area) if measured_width > 0 => (area + measured_width - 1) / measured_width,
            _ => child.intrinsic.height,
        };
        Ok(Size::new(measured_width, constrain(height, wanted_height)))
    }

    fn baseline(&self, index: usize) -> Option<i32> {
        self.children.get(index).and_then(|child| child.baseline)
    }

    fn set_child_rect(&mut self, index: usize, rect: Rect) {
        if let Some(slot) = self.rects.get_mut(index) {
            *slot = Some(rect);
        }
    }
}

/// Initialise test logging once; repeated calls are ignored.
#[inline]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Lay out `host` with a fresh container.
///
/// # Errors
/// Propagates any error raised by the pass.
pub fn run(
    config: FlexContainerConfig,
    host: &mut StubHost,
    width: MeasureSpec,
    height: MeasureSpec,
) -> Result<(FlexContainer, ContainerSize), FlexError> {
    init_logging();
    let mut container = FlexContainer::new(config);
    let size = container.layout(host, width, height)?;
    Ok((container, size))
}

/// Visible physical indices of each line, in placement order.
pub fn visible_lines(container: &FlexContainer, host: &StubHost) -> Vec<Vec<usize>> {
    container
        .flex_lines()
        .iter()
        .map(|line| {
            line.indices()
                .iter()
                .copied()
                .filter(|&index| {
                    host.children
                        .get(index)
                        .is_some_and(|child| child.item.visible)
                })
                .collect()
        })
        .collect()
}
