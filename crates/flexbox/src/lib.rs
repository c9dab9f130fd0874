//! Flexbox layout engine: line partitioning, grow/shrink distribution, cross-axis stretch and
//! placement of children supplied by a host view tree.
//!
//! The host implements [`FlexHost`] (child parameters, measurement, rectangle commits) and
//! drives a [`FlexContainer`] through [`FlexContainer::layout`]. All sizes are whole pixels.
#![forbid(unsafe_code)]

// Data model.
mod axis;
mod config;
mod error;
mod item;
mod line;
mod measure;
mod order;

// Host capability and the container driving the passes.
mod container;
mod host;

// Passes, in execution order.
mod partition;
mod flexing;
mod cross;
mod placement;

pub use axis::{Axes, LogicalBox, resolve_axes};
pub use config::{
    AlignContent, AlignItems, Divider, Dividers, Edges, FlexContainerConfig, FlexDirection,
    FlexWrap, JustifyContent, LayoutDirection, ShowDivider,
};
pub use container::{ContainerSize, FlexContainer};
pub use error::FlexError;
pub use host::FlexHost;
pub use item::{FlexItem, FlexItemState, ORDER_DEFAULT, Rect};
pub use line::FlexLine;
pub use measure::{Dimension, MeasureMode, MeasureSpec, Size, SizeSpec, child_measure_spec};
pub use order::{OrderCache, sort_by_order_stable};

#[cfg(test)]
mod tests;
