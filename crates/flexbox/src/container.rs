//! The flex container: configuration, cached ordering, and the layout pass driver.

use log::debug;

use crate::cross::{lines_cross_total, stretch_items, stretch_lines};
use crate::flexing::resolve_main_sizes;
use crate::order::OrderCache;
use crate::partition::partition_lines;
use crate::placement::place_items;
use crate::{
    AlignContent, AlignItems, Axes, Dimension, Divider, Dividers, Edges, FlexContainerConfig,
    FlexDirection, FlexError, FlexHost, FlexItem, FlexItemState, FlexLine, FlexWrap,
    JustifyContent, LayoutDirection, MeasureMode, MeasureSpec, Size, child_measure_spec,
};

/// Resolved size of a container along its main and cross axes.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct ContainerSize {
    pub main: Dimension,
    pub cross: Dimension,
    /// True when `main` is the width.
    pub main_is_horizontal: bool,
}

impl ContainerSize {
    /// Physical width with its too-small flag.
    pub const fn width(self) -> Dimension {
        if self.main_is_horizontal { self.main } else { self.cross }
    }

    /// Physical height with its too-small flag.
    pub const fn height(self) -> Dimension {
        if self.main_is_horizontal { self.cross } else { self.main }
    }

    /// Physical size, ignoring the too-small flags.
    pub const fn physical(self) -> Size {
        Size::new(self.width().size, self.height().size)
    }
}

/// Inputs shared by every pass of one layout invocation.
#[derive(Copy, Clone, Debug)]
pub(crate) struct LayoutContext {
    pub config: FlexContainerConfig,
    pub axes: Axes,
    pub main_spec: MeasureSpec,
    pub cross_spec: MeasureSpec,
}

impl LayoutContext {
    pub(crate) fn new(config: FlexContainerConfig, width: MeasureSpec, height: MeasureSpec) -> Self {
        let axes = Axes::of(&config);
        let (main_spec, cross_spec) = axes.logical_specs(width, height);
        Self {
            config,
            axes,
            main_spec,
            cross_spec,
        }
    }

    pub(crate) fn padding(&self) -> Edges {
        self.config.padding.non_negative()
    }

    pub(crate) const fn main_divider(&self) -> Divider {
        self.config.dividers.along_main(self.config.direction)
    }

    pub(crate) const fn cross_divider(&self) -> Divider {
        self.config.dividers.along_cross(self.config.direction)
    }

    /// Wrapping needs both a wrapping mode and a bounded main constraint.
    pub(crate) const fn may_wrap(&self) -> bool {
        !matches!(self.config.wrap, FlexWrap::NoWrap) && self.main_spec.is_bounded()
    }

    /// Baseline alignment only applies on a horizontal main axis stacking lines downwards.
    pub(crate) const fn baseline_aligned(&self) -> bool {
        matches!(self.config.align_items, AlignItems::Baseline)
            && self.axes.main_is_horizontal
            && !self.axes.cross_reverse
    }

    /// Physical constraints for a child's first measurement.
    pub(crate) fn child_specs(&self, item: &FlexItem) -> (MeasureSpec, MeasureSpec) {
        let padding = self.padding();
        let main = child_measure_spec(
            self.main_spec,
            self.axes.main_sum(padding) + item.main_margins(self.axes),
            item.main_size_spec(self.axes),
        );
        let cross = child_measure_spec(
            self.cross_spec,
            self.axes.cross_sum(padding) + item.cross_margins(self.axes),
            item.cross_size_spec(self.axes),
        );
        self.axes.physical_specs(main, cross)
    }

    /// Main size lines are flexed towards: the exact constraint, the largest line capped by an
    /// at-most constraint, or the largest line when unbounded.
    pub(crate) fn target_main_size(&self, lines: &[FlexLine]) -> i32 {
        let largest = largest_main_size(lines);
        match self.main_spec.mode {
            MeasureMode::Exactly => self.main_spec.size,
            MeasureMode::AtMost => largest.min(self.main_spec.size),
            MeasureMode::Unspecified => largest,
        }
    }

    pub(crate) fn entry<'arena>(
        &self,
        items: &'arena [FlexItem],
        states: &'arena mut [FlexItemState],
        index: usize,
    ) -> Result<(&'arena FlexItem, &'arena mut FlexItemState), FlexError> {
        let count = items.len();
        match (items.get(index), states.get_mut(index)) {
            (Some(item), Some(state)) => Ok((item, state)),
            _ => Err(FlexError::ChildOutOfRange { index, count }),
        }
    }

    pub(crate) fn entry_ref<'arena>(
        &self,
        items: &'arena [FlexItem],
        states: &'arena [FlexItemState],
        index: usize,
    ) -> Result<(&'arena FlexItem, &'arena FlexItemState), FlexError> {
        let count = items.len();
        match (items.get(index), states.get(index)) {
            (Some(item), Some(state)) => Ok((item, state)),
            _ => Err(FlexError::ChildOutOfRange { index, count }),
        }
    }
}

fn largest_main_size(lines: &[FlexLine]) -> i32 {
    lines.iter().map(FlexLine::main_size).max().unwrap_or(0)
}

/// A flex container bound to a host view tree through [`FlexHost`].
///
/// Owns its configuration, the order cache and the results of the last pass. Configuration
/// setters drop the cached lines and mark the container as needing a new pass.
#[derive(Clone, Debug, Default)]
pub struct FlexContainer {
    config: FlexContainerConfig,
    order_cache: OrderCache,
    lines: Vec<FlexLine>,
    states: Vec<FlexItemState>,
    needs_layout: bool,
}

impl FlexContainer {
    /// A container that has not been laid out yet.
    pub fn new(config: FlexContainerConfig) -> Self {
        Self {
            config,
            needs_layout: true,
            ..Self::default()
        }
    }

    /// Current configuration.
    pub const fn config(&self) -> &FlexContainerConfig {
        &self.config
    }

    /// True when the configuration changed since the last completed pass.
    pub const fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    /// Lines of the last completed pass, each holding at least one visible item.
    pub fn flex_lines(&self) -> &[FlexLine] {
        &self.lines
    }

    /// Measured size and rectangle of the child at `index` from the last completed pass.
    pub fn item_state(&self, index: usize) -> Option<&FlexItemState> {
        self.states.get(index)
    }

    /// Replace the whole configuration.
    pub fn set_config(&mut self, config: FlexContainerConfig) {
        if self.config != config {
            self.config = config;
            self.invalidate();
        }
    }

    /// Change the main-axis direction.
    pub fn set_direction(&mut self, direction: FlexDirection) {
        self.set_config(FlexContainerConfig {
            direction,
            ..self.config
        });
    }

    /// Change the wrap mode.
    pub fn set_wrap(&mut self, wrap: FlexWrap) {
        self.set_config(FlexContainerConfig { wrap, ..self.config });
    }

    /// Change main-axis distribution of free space.
    pub fn set_justify_content(&mut self, justify_content: JustifyContent) {
        self.set_config(FlexContainerConfig {
            justify_content,
            ..self.config
        });
    }

    /// Change cross-axis alignment of items.
    pub fn set_align_items(&mut self, align_items: AlignItems) {
        self.set_config(FlexContainerConfig {
            align_items,
            ..self.config
        });
    }

    /// Change cross-axis distribution of lines.
    pub fn set_align_content(&mut self, align_content: AlignContent) {
        self.set_config(FlexContainerConfig {
            align_content,
            ..self.config
        });
    }

    /// Change the horizontal writing direction.
    pub fn set_layout_direction(&mut self, layout_direction: LayoutDirection) {
        self.set_config(FlexContainerConfig {
            layout_direction,
            ..self.config
        });
    }

    /// Change the container padding.
    pub fn set_padding(&mut self, padding: Edges) {
        self.set_config(FlexContainerConfig {
            padding,
            ..self.config
        });
    }

    /// Change the dividers.
    pub fn set_dividers(&mut self, dividers: Dividers) {
        self.set_config(FlexContainerConfig {
            dividers,
            ..self.config
        });
    }

    /// Drop the results of the last pass and request a new one.
    pub fn invalidate(&mut self) {
        self.lines.clear();
        self.needs_layout = true;
    }

    /// Run a full layout pass against `host` under the given physical constraints.
    ///
    /// Children are measured, packed into lines, flexed along the main axis, stretched along
    /// the cross axis and placed. Rectangles are committed to the host only once every pass
    /// has succeeded; gone children receive no rectangle.
    ///
    /// # Errors
    /// Returns the first error raised by the host while measuring, or
    /// [`FlexError::ChildOutOfRange`] if the host's child list is inconsistent. No rectangle
    /// is committed and the previous pass's results are kept in that case.
    pub fn layout<H: FlexHost + ?Sized>(
        &mut self,
        host: &mut H,
        width: MeasureSpec,
        height: MeasureSpec,
    ) -> Result<ContainerSize, FlexError> {
        let ctx = LayoutContext::new(self.config, width, height);
        let count = host.child_count();
        let items: Vec<FlexItem> = (0..count).map(|index| host.item(index)).collect();
        let orders: Vec<i32> = items.iter().map(|item| item.order).collect();
        let order = self.order_cache.permutation(&orders).to_vec();
        let mut states = vec![FlexItemState::default(); count];

        let mut lines = partition_lines(&ctx, host, &items, &order, &mut states)?;
        let target = resolve_main_sizes(&ctx, host, &items, &mut lines, &mut states)?;
        stretch_lines(&ctx, &mut lines);
        stretch_items(&ctx, host, &items, &lines, &mut states)?;
        let size = resolve_container_size(&ctx, &lines);
        place_items(&ctx, &items, &mut lines, &mut states, size)?;

        for (index, (item, state)) in items.iter().zip(&states).enumerate() {
            if item.visible {
                host.set_child_rect(index, state.rect);
            }
        }
        debug!(
            target: "flexbox::container",
            "layout of {count} children: {} lines, flex target {target}, size {size:?}",
            lines.len()
        );
        self.lines = lines;
        self.states = states;
        self.needs_layout = false;
        Ok(size)
    }
}

/// Container size from its lines: the largest line along the main axis and the stacked
/// lines along the cross axis, each resolved against its constraint.
fn resolve_container_size(ctx: &LayoutContext, lines: &[FlexLine]) -> ContainerSize {
    let main = ctx.main_spec.resolve(largest_main_size(lines));
    let cross_desired = lines_cross_total(ctx, lines) + ctx.axes.cross_sum(ctx.padding());
    let cross = ctx.cross_spec.resolve(cross_desired);
    ContainerSize {
        main,
        cross,
        main_is_horizontal: ctx.axes.main_is_horizontal,
    }
}
