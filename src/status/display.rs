//! Status Descriptor Resolver.
//!
//! Joins the order's own status with the optional picking status into the
//! single badge the UI shows. The join is an explicit lookup over the cross
//! product of the two state machines.

use std::fmt;

use serde::{Serialize, Serializer};

use super::types::{OrderStatus, PickingSnapshot, PickingStatus, Reported};

/// Code of the synthetic display-only status.
pub const EN_PREPARACION: &str = "EN_PREPARACION";

/// What a descriptor is keyed by.
///
/// `EnPreparacion` is not an [`OrderStatus`]: it only exists on the display
/// side, so it can never be handed back to the transition graph or persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DisplayKey {
    Persisted(OrderStatus),
    EnPreparacion,
    Unrecognized(String),
}

impl DisplayKey {
    pub fn code(&self) -> &str {
        match self {
            DisplayKey::Persisted(status) => status.as_str(),
            DisplayKey::EnPreparacion => EN_PREPARACION,
            DisplayKey::Unrecognized(raw) => raw,
        }
    }
}

impl fmt::Display for DisplayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.code())
    }
}

impl Serialize for DisplayKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

/// Icon names understood by the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Schedule,
    Approval,
    Warehouse,
    Inventory,
    Receipt,
    LocalShipping,
    TaskAlt,
    Cancel,
    Block,
    HelpOutline,
}

/// Foreground/background pairing for a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub color: &'static str,
    pub background: &'static str,
}

const NEUTRAL: Palette = Palette::pair("#6b7280", "#f9fafb");

impl Palette {
    const fn pair(color: &'static str, background: &'static str) -> Self {
        Self { color, background }
    }

    /// Badge colors keyed by the resolved status.
    pub fn for_key(key: &DisplayKey) -> Palette {
        use OrderStatus as O;

        match key {
            DisplayKey::Persisted(O::Pendiente) => Palette::pair("#b45309", "#fef3c7"),
            DisplayKey::Persisted(O::Aprobado) => Palette::pair("#1d4ed8", "#dbeafe"),
            DisplayKey::EnPreparacion => Palette::pair("#7c3aed", "#ede9fe"),
            DisplayKey::Persisted(O::Preparado) => Palette::pair("#0f766e", "#ccfbf1"),
            DisplayKey::Persisted(O::Facturado) => Palette::pair("#4338ca", "#e0e7ff"),
            DisplayKey::Persisted(O::EnRuta) => Palette::pair("#c2410c", "#ffedd5"),
            DisplayKey::Persisted(O::Entregado) => Palette::pair("#15803d", "#dcfce7"),
            DisplayKey::Persisted(O::Rechazado) => Palette::pair("#b91c1c", "#fee2e2"),
            DisplayKey::Persisted(O::Anulado) => Palette::pair("#4b5563", "#f3f4f6"),
            DisplayKey::Unrecognized(_) => NEUTRAL,
        }
    }
}

/// Human-facing status descriptor. Built fresh on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayStatus {
    pub status: DisplayKey,
    pub label: String,
    pub description: String,
    pub color: &'static str,
    pub background_color: &'static str,
    pub icon: Icon,
}

/// One row of the resolution table.
struct Rule {
    key: DisplayKey,
    label: &'static str,
    description: &'static str,
    icon: Icon,
}

impl Rule {
    fn persisted(
        status: OrderStatus,
        label: &'static str,
        description: &'static str,
        icon: Icon,
    ) -> Self {
        Self {
            key: DisplayKey::Persisted(status),
            label,
            description,
            icon,
        }
    }

    fn preparing(label: &'static str, description: &'static str) -> Self {
        Self {
            key: DisplayKey::EnPreparacion,
            label,
            description,
            icon: Icon::Inventory,
        }
    }

    fn into_display(self) -> DisplayStatus {
        let palette = Palette::for_key(&self.key);
        DisplayStatus {
            status: self.key,
            label: self.label.to_string(),
            description: self.description.to_string(),
            color: palette.color,
            background_color: palette.background,
            icon: self.icon,
        }
    }
}

/// Maps `(order status, picking snapshot)` to a [`DisplayStatus`].
pub struct StatusResolver;

impl StatusResolver {
    /// Resolve the descriptor for a status as reported upstream.
    ///
    /// Total: unrecognized order statuses get a neutral fallback echoing the
    /// raw value, and a picking snapshot whose status is missing or unknown
    /// counts as "no picking yet".
    pub fn resolve(
        status: &Reported<OrderStatus>,
        picking: Option<&PickingSnapshot>,
    ) -> DisplayStatus {
        match status {
            Reported::Known(status) => {
                Self::resolve_known(*status, Self::picking_status(picking))
            }
            Reported::Unrecognized(raw) => {
                tracing::debug!(status = %raw, "unrecognized order status, using fallback");
                Self::fallback(raw)
            }
        }
    }

    /// Resolve from already-typed statuses.
    pub fn resolve_known(status: OrderStatus, picking: Option<PickingStatus>) -> DisplayStatus {
        Self::rule(status, picking).into_display()
    }

    fn picking_status(picking: Option<&PickingSnapshot>) -> Option<PickingStatus> {
        let picking = picking?;
        let status = picking.recognized_status();
        if status.is_none() {
            tracing::debug!(
                status = ?picking.status,
                "picking snapshot without a recognized status, treating as absent"
            );
        }
        status
    }

    fn rule(status: OrderStatus, picking: Option<PickingStatus>) -> Rule {
        use OrderStatus as O;
        use PickingStatus as P;

        match (status, picking) {
            (O::Pendiente, _) => Rule::persisted(
                O::Pendiente,
                "Pendiente",
                "Pedido a la espera de aprobación del supervisor",
                Icon::Schedule,
            ),
            (O::Aprobado, None) => Rule::persisted(
                O::Aprobado,
                "Aprobado",
                "Pedido aprobado, la tarea de picking aún no ha sido creada",
                Icon::Approval,
            ),
            (O::Aprobado, Some(P::Pendiente)) => Rule::persisted(
                O::Aprobado,
                "Esperando Bodega",
                "Picking creado, a la espera de que un bodeguero lo tome",
                Icon::Warehouse,
            ),
            (O::Aprobado, Some(P::Asignado)) => Rule::preparing(
                "En Preparación",
                "Picking asignado a un bodeguero, aún no iniciado",
            ),
            (O::Aprobado, Some(P::EnProceso)) => Rule::preparing(
                "En Preparación",
                "Picking en proceso, los productos se están recolectando",
            ),
            (O::Aprobado, Some(P::Completado)) => Rule::preparing(
                "Preparado",
                "Picking completado, el pedido aún no se ha actualizado",
            ),
            (O::Preparado, _) => Rule::persisted(
                O::Preparado,
                "Preparado",
                "Pedido preparado y listo para despacho",
                Icon::Inventory,
            ),
            (O::Facturado, _) => Rule::persisted(
                O::Facturado,
                "Facturado",
                "Pedido facturado, listo para despacho",
                Icon::Receipt,
            ),
            (O::EnRuta, _) => Rule::persisted(
                O::EnRuta,
                "En Camino",
                "Pedido en ruta hacia el cliente",
                Icon::LocalShipping,
            ),
            (O::Entregado, _) => Rule::persisted(
                O::Entregado,
                "Entregado",
                "Pedido entregado al cliente",
                Icon::TaskAlt,
            ),
            (O::Rechazado, _) => Rule::persisted(
                O::Rechazado,
                "Rechazado",
                "Pedido rechazado por el supervisor",
                Icon::Cancel,
            ),
            (O::Anulado, _) => {
                Rule::persisted(O::Anulado, "Anulado", "Pedido anulado", Icon::Block)
            }
        }
    }

    fn fallback(raw: &str) -> DisplayStatus {
        let label = match raw.trim() {
            "" => "Desconocido".to_string(),
            trimmed => trimmed.to_string(),
        };
        DisplayStatus {
            status: DisplayKey::Unrecognized(raw.to_string()),
            description: format!("Estado no reconocido: {label}"),
            label,
            color: NEUTRAL.color,
            background_color: NEUTRAL.background,
            icon: Icon::HelpOutline,
        }
    }
}
