//! Order fulfillment status engine.
//!
//! Pure, synchronous derivations over an order's workflow status and its
//! optional warehouse picking task:
//!
//! - [`StatusResolver`] joins both into the badge a user sees.
//! - [`PickingProgress`] turns picking lines into a completion percentage.
//! - [`TransitionGraph`] holds the legal order-status edges.
//! - [`RolePolicy`] narrows those edges to what a given role may request.
//!
//! Nothing here performs I/O or holds state; every call is independent.

pub mod status;

pub use status::{
    DisplayKey, DisplayStatus, Icon, OrderSnapshot, OrderStatus, Palette, PickingLineItem,
    PickingProgress, PickingSnapshot, PickingStatus, Progress, Reported, Role, RolePolicy,
    StatusResolver, TransitionGraph,
};
