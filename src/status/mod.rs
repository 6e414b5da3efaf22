mod display;
mod graph;
mod policy;
mod progress;
mod types;

pub use display::{DisplayKey, DisplayStatus, EN_PREPARACION, Icon, Palette, StatusResolver};
pub use graph::TransitionGraph;
pub use policy::{BUSINESS_OVERRIDES, RolePolicy};
pub use progress::{PickingProgress, Progress};
pub use types::{
    OrderSnapshot, OrderStatus, PickingLineItem, PickingSnapshot, PickingStatus, Reported, Role,
    UnrecognizedCode,
};
