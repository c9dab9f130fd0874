//! Capabilities a host view tree provides to the engine.

use log::trace;

use crate::{FlexError, FlexItem, FlexItemState, MeasureSpec, Rect, Size};

/// The host side of a flex container: child parameters, measurement and placement commits.
///
/// Constraints and sizes are physical (width/height); the engine maps them onto the main and
/// cross axes itself. `measure` may recursively lay out a nested container.
pub trait FlexHost {
    /// Number of children, gone ones included.
    fn child_count(&self) -> usize;

    /// Flex parameters of the child at `index`.
    fn item(&self, index: usize) -> FlexItem;

    /// Measure the child at `index` under the given constraints.
    ///
    /// # Errors
    /// Returns an error when the child cannot be measured, for example when a nested
    /// container fails its own pass.
    fn measure(
        &mut self,
        index: usize,
        width: MeasureSpec,
        height: MeasureSpec,
    ) -> Result<Size, FlexError>;

    /// Distance from the top of the child's last measured box to its first baseline.
    fn baseline(&self, _index: usize) -> Option<i32> {
        None
    }

    /// Commit the final rectangle of the child at `index`.
    fn set_child_rect(&mut self, index: usize, rect: Rect);
}

/// Measure a child, re-measuring exactly when the result falls outside its min/max bounds,
/// and record the size and baseline in `state`.
pub(crate) fn measure_child<H: FlexHost + ?Sized>(
    host: &mut H,
    index: usize,
    item: &FlexItem,
    width: MeasureSpec,
    height: MeasureSpec,
    state: &mut FlexItemState,
) -> Result<Size, FlexError> {
    let measured = host.measure(index, width, height)?;
    let clamped = item.clamp_size(measured);
    let size = if clamped == measured {
        measured
    } else {
        trace!(
            target: "flexbox::measure",
            "child {index} measured {measured:?} outside bounds, re-measuring at {clamped:?}"
        );
        host.measure(
            index,
            MeasureSpec::exactly(clamped.width),
            MeasureSpec::exactly(clamped.height),
        )?
    };
    state.measured = size;
    state.baseline = host.baseline(index);
    Ok(size)
}
