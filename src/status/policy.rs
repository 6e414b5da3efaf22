//! Role Transition Policy.
//!
//! Each role maps to a flat grant: a per-status candidate table, the whole
//! transition graph, or nothing. Table candidates are checked against
//! [`TransitionGraph`] so the graph stays the single source of legal edges;
//! the only way around it is an explicit entry in [`BUSINESS_OVERRIDES`].

use super::graph::TransitionGraph;
use super::types::{OrderSnapshot, OrderStatus, Reported, Role};

use OrderStatus::*;

type Table = &'static [(OrderStatus, &'static [OrderStatus])];

/// Supervisors validate or reject; warehouse and delivery moves are not theirs.
const SUPERVISOR: Table = &[
    (Pendiente, &[Aprobado, Rechazado]),
    (Aprobado, &[Rechazado, Anulado]),
];

const TRANSPORTISTA: Table = &[
    (Preparado, &[EnRuta]),
    (Facturado, &[EnRuta]),
    (EnRuta, &[Entregado]),
];

/// Targets a role may request even where the graph has no edge.
///
/// Supervisor rejection stays available from every status in the supervisor
/// table even if the graph drops the edge.
pub const BUSINESS_OVERRIDES: &[(Role, OrderStatus)] = &[(Role::Supervisor, Rechazado)];

enum Grant {
    Table(Table),
    Graph,
    Deny,
}

fn grant(role: Role) -> Grant {
    match role {
        Role::Supervisor => Grant::Table(SUPERVISOR),
        // Warehouse staff move the picking task, never the order itself.
        Role::Bodeguero => Grant::Deny,
        Role::Transportista => Grant::Table(TRANSPORTISTA),
        Role::Admin => Grant::Graph,
    }
}

/// Computes which statuses a role may request next.
pub struct RolePolicy;

impl RolePolicy {
    /// Next statuses for an order as reported upstream.
    ///
    /// Fails closed: an unrecognized role or order status yields no actions.
    pub fn next_statuses(order: &OrderSnapshot, role: &Reported<Role>) -> Vec<OrderStatus> {
        let Some(role) = role.value() else {
            tracing::warn!(role = %role, "unrecognized role, denying all transitions");
            return Vec::new();
        };
        let Some(current) = order.status.value() else {
            tracing::debug!(status = %order.status, "unrecognized order status, no transitions");
            return Vec::new();
        };
        Self::next_statuses_for(current, role)
    }

    /// Ordered, duplicate-free. Empty means nothing is available right now.
    pub fn next_statuses_for(current: OrderStatus, role: Role) -> Vec<OrderStatus> {
        match grant(role) {
            Grant::Deny => Vec::new(),
            Grant::Graph => OrderStatus::ALL
                .into_iter()
                .filter(|candidate| {
                    *candidate != current && TransitionGraph::can_transition(current, *candidate)
                })
                .collect(),
            Grant::Table(table) => {
                let candidates = table
                    .iter()
                    .find(|(from, _)| *from == current)
                    .map(|(_, targets)| *targets)
                    .unwrap_or(&[]);

                let mut allowed = Vec::with_capacity(candidates.len());
                for &target in candidates {
                    if allowed.contains(&target) {
                        continue;
                    }
                    if TransitionGraph::can_transition(current, target)
                        || Self::is_override(role, target)
                    {
                        allowed.push(target);
                    } else {
                        tracing::warn!(
                            role = %role,
                            from = %current,
                            to = %target,
                            "role table lists a transition missing from the graph, dropping it"
                        );
                    }
                }
                allowed
            }
        }
    }

    pub fn is_override(role: Role, target: OrderStatus) -> bool {
        BUSINESS_OVERRIDES.contains(&(role, target))
    }
}
