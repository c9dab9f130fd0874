//! Headless host for the flexbox engine: a view tree of synthetic leaves and nested flex
//! containers, buildable by hand or from a JSON scene description.
#![forbid(unsafe_code)]

mod description;
mod tree;

pub use description::{NodeDescription, Scene};
pub use tree::{NodeId, ViewTree};
