use super::types::OrderStatus;

use OrderStatus::*;

/// Legal order-status edges. Terminal statuses have an empty row.
const EDGES: &[(OrderStatus, &[OrderStatus])] = &[
    (Pendiente, &[Aprobado, Rechazado, Anulado]),
    (Aprobado, &[Rechazado, Anulado, Preparado]),
    (Preparado, &[EnRuta, Anulado]),
    (Facturado, &[EnRuta, Anulado]),
    (EnRuta, &[Entregado, Anulado]),
    // Reopen path kept as data; no role policy requests it today.
    (Rechazado, &[Pendiente]),
    (Entregado, &[]),
    (Anulado, &[]),
];

/// Static adjacency table of order-status transitions.
pub struct TransitionGraph;

impl TransitionGraph {
    /// Allowed targets from `from`, in table order.
    pub fn targets(from: OrderStatus) -> &'static [OrderStatus] {
        EDGES
            .iter()
            .find(|(status, _)| *status == from)
            .map(|(_, targets)| *targets)
            .unwrap_or(&[])
    }

    pub fn can_transition(from: OrderStatus, to: OrderStatus) -> bool {
        Self::targets(from).contains(&to)
    }

    /// Every edge, grouped by source in table order.
    pub fn edges() -> impl Iterator<Item = (OrderStatus, OrderStatus)> {
        EDGES
            .iter()
            .flat_map(|(from, targets)| targets.iter().map(move |to| (*from, *to)))
    }
}

impl OrderStatus {
    /// No outgoing edges in the transition graph.
    pub fn is_terminal(self) -> bool {
        TransitionGraph::targets(self).is_empty()
    }
}
