use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use thiserror::Error;

/// Workflow status of an order, as persisted by the order service.
///
/// This crate only reads it; every write happens elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pendiente,
    Aprobado,
    Preparado,
    Facturado,
    EnRuta,
    Entregado,
    Rechazado,
    Anulado,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 8] = [
        OrderStatus::Pendiente,
        OrderStatus::Aprobado,
        OrderStatus::Preparado,
        OrderStatus::Facturado,
        OrderStatus::EnRuta,
        OrderStatus::Entregado,
        OrderStatus::Rechazado,
        OrderStatus::Anulado,
    ];

    /// Wire code used by the order service.
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pendiente => "PENDIENTE",
            OrderStatus::Aprobado => "APROBADO",
            OrderStatus::Preparado => "PREPARADO",
            OrderStatus::Facturado => "FACTURADO",
            OrderStatus::EnRuta => "EN_RUTA",
            OrderStatus::Entregado => "ENTREGADO",
            OrderStatus::Rechazado => "RECHAZADO",
            OrderStatus::Anulado => "ANULADO",
        }
    }
}

/// Status of the warehouse picking task attached to an approved order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PickingStatus {
    Pendiente,
    Asignado,
    EnProceso,
    Completado,
}

impl PickingStatus {
    pub const ALL: [PickingStatus; 4] = [
        PickingStatus::Pendiente,
        PickingStatus::Asignado,
        PickingStatus::EnProceso,
        PickingStatus::Completado,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PickingStatus::Pendiente => "PENDIENTE",
            PickingStatus::Asignado => "ASIGNADO",
            PickingStatus::EnProceso => "EN_PROCESO",
            PickingStatus::Completado => "COMPLETADO",
        }
    }
}

/// Actor role used to select a transition policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Supervisor,
    /// Warehouse operator.
    Bodeguero,
    /// Delivery driver.
    Transportista,
    Admin,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::Supervisor,
        Role::Bodeguero,
        Role::Transportista,
        Role::Admin,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Supervisor => "supervisor",
            Role::Bodeguero => "bodeguero",
            Role::Transportista => "transportista",
            Role::Admin => "admin",
        }
    }
}

macro_rules! wire_code {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = UnrecognizedCode;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                <$ty>::ALL
                    .into_iter()
                    .find(|value| value.as_str() == raw)
                    .ok_or_else(|| UnrecognizedCode(raw.to_string()))
            }
        }
    };
}

wire_code!(OrderStatus);
wire_code!(PickingStatus);
wire_code!(Role);

/// A code string that matches none of the variants of the target enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized code: {0:?}")]
pub struct UnrecognizedCode(pub String);

/// A value received from an upstream service: either one we recognize or the
/// raw string we could not map.
///
/// Decoding never fails on an unknown code, so callers can fall back to a safe
/// default instead of rejecting the whole snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Reported<T> {
    Known(T),
    Unrecognized(String),
}

impl<T: FromStr> Reported<T> {
    pub fn parse(raw: &str) -> Self {
        match raw.parse() {
            Ok(value) => Reported::Known(value),
            Err(_) => Reported::Unrecognized(raw.to_string()),
        }
    }
}

impl<T: Copy> Reported<T> {
    pub fn value(&self) -> Option<T> {
        match self {
            Reported::Known(value) => Some(*value),
            Reported::Unrecognized(_) => None,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Reported<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reported::Known(value) => value.fmt(f),
            Reported::Unrecognized(raw) => f.pad(raw),
        }
    }
}

impl<T: fmt::Display> Serialize for Reported<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Non-string codes (numbers, objects, null) decode as `Unrecognized` holding
/// their JSON text.
impl<'de, T: FromStr> Deserialize<'de> for Reported<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(raw) => Self::parse(&raw),
            other => Reported::Unrecognized(other.to_string()),
        })
    }
}

/// The only part of an order this crate looks at.
///
/// Any other field in the upstream payload is ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSnapshot {
    pub status: Reported<OrderStatus>,
}

impl OrderSnapshot {
    pub fn new(status: OrderStatus) -> Self {
        Self {
            status: Reported::Known(status),
        }
    }
}

/// One line of a picking task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickingLineItem {
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub requested_quantity: f64,
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub picked_quantity: f64,
    /// Free-form completion marker set by the warehouse process.
    #[serde(default, deserialize_with = "lenient_text")]
    pub line_status: String,
}

/// Markers the warehouse process uses for a finished line.
const COMPLETED_MARKERS: &[&str] = &["completed", "complete", "completado"];

impl PickingLineItem {
    pub fn new(requested: f64, picked: f64, line_status: impl Into<String>) -> Self {
        Self {
            requested_quantity: requested,
            picked_quantity: picked,
            line_status: line_status.into(),
        }
    }

    pub fn is_completed(&self) -> bool {
        let marker = self.line_status.trim();
        COMPLETED_MARKERS
            .iter()
            .any(|known| known.eq_ignore_ascii_case(marker))
    }
}

/// Quantities arrive as numbers, numeric strings, or null depending on the
/// upstream serializer. Anything unreadable becomes NaN and is clamped later.
fn lenient_quantity<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => 0.0,
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => s.trim().parse().unwrap_or(f64::NAN),
        _ => f64::NAN,
    })
}

/// A marker that is null or not a string reads as "not completed".
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

/// `null` lines mean the task has none yet.
fn lenient_lines<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<PickingLineItem>, D::Error> {
    Ok(Option::<Vec<PickingLineItem>>::deserialize(deserializer)?.unwrap_or_default())
}

/// The parts of a picking task this crate looks at.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PickingSnapshot {
    #[serde(default)]
    pub status: Option<Reported<PickingStatus>>,
    #[serde(default, deserialize_with = "lenient_lines")]
    pub lines: Vec<PickingLineItem>,
}

impl PickingSnapshot {
    pub fn new(status: PickingStatus, lines: Vec<PickingLineItem>) -> Self {
        Self {
            status: Some(Reported::Known(status)),
            lines,
        }
    }

    /// The picking status when present and recognized.
    pub fn recognized_status(&self) -> Option<PickingStatus> {
        self.status.as_ref().and_then(Reported::value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_status_codes_round_trip_through_from_str() {
        for status in OrderStatus::ALL {
            assert_eq!(status.as_str().parse::<OrderStatus>(), Ok(status));
        }
        assert!("en_ruta".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn synthetic_status_is_not_an_order_status() {
        assert_eq!(
            "EN_PREPARACION".parse::<OrderStatus>(),
            Err(UnrecognizedCode("EN_PREPARACION".into()))
        );
    }

    #[test]
    fn role_display_uses_lowercase_code() {
        assert_eq!(Role::Transportista.to_string(), "transportista");
        assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
    }

    #[test]
    fn reported_keeps_unknown_raw_value() {
        let reported: Reported<OrderStatus> = Reported::parse("DEVUELTO");
        assert_eq!(reported, Reported::Unrecognized("DEVUELTO".into()));
        assert_eq!(reported.value(), None);
        assert_eq!(reported.to_string(), "DEVUELTO");
    }

    #[test]
    fn order_snapshot_ignores_extra_fields() {
        let json = r#"{"id": 42, "status": "FACTURADO", "total": 1990.5, "cliente": {"rut": "1-9"}}"#;
        let order: OrderSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(order.status, Reported::Known(OrderStatus::Facturado));
    }

    #[test]
    fn order_snapshot_with_unknown_status_still_decodes() {
        let order: OrderSnapshot = serde_json::from_str(r#"{"status": "EN_BODEGA"}"#).unwrap();
        assert_eq!(order.status, Reported::Unrecognized("EN_BODEGA".into()));
    }

    #[test]
    fn picking_snapshot_decodes_camel_case_lines() {
        let json = r#"{
            "status": "EN_PROCESO",
            "lines": [
                {"requestedQuantity": 10, "pickedQuantity": 4, "lineStatus": "pending", "sku": "ARZ-001"},
                {"requestedQuantity": "2.5", "pickedQuantity": null, "lineStatus": "COMPLETADO"}
            ]
        }"#;
        let picking: PickingSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(picking.recognized_status(), Some(PickingStatus::EnProceso));
        assert_eq!(picking.lines.len(), 2);
        assert_eq!(picking.lines[0].requested_quantity, 10.0);
        assert_eq!(picking.lines[1].requested_quantity, 2.5);
        assert_eq!(picking.lines[1].picked_quantity, 0.0);
        assert!(!picking.lines[0].is_completed());
        assert!(picking.lines[1].is_completed());
    }

    #[test]
    fn unreadable_quantity_becomes_nan() {
        let line: PickingLineItem =
            serde_json::from_str(r#"{"requestedQuantity": "diez", "pickedQuantity": true}"#)
                .unwrap();
        assert!(line.requested_quantity.is_nan());
        assert!(line.picked_quantity.is_nan());
        assert!(!line.is_completed());
    }

    #[test]
    fn picking_without_status_has_no_recognized_status() {
        let picking: PickingSnapshot = serde_json::from_str(r#"{"lines": []}"#).unwrap();
        assert_eq!(picking.recognized_status(), None);

        let picking: PickingSnapshot = serde_json::from_str(r#"{"status": "PAUSADO"}"#).unwrap();
        assert_eq!(picking.recognized_status(), None);
        assert!(picking.lines.is_empty());
    }

    #[test]
    fn null_lines_and_markers_decode_as_empty() {
        let picking: Option<PickingSnapshot> =
            serde_json::from_str(r#"{"status": "ASIGNADO", "lines": null}"#).unwrap();
        let picking = picking.unwrap();
        assert_eq!(picking.recognized_status(), Some(PickingStatus::Asignado));
        assert!(picking.lines.is_empty());

        let picking: PickingSnapshot = serde_json::from_str(
            r#"{"lines": [{"requestedQuantity": 2, "pickedQuantity": 2, "lineStatus": null}]}"#,
        )
        .unwrap();
        assert_eq!(picking.lines[0].line_status, "");
        assert!(!picking.lines[0].is_completed());

        let line: PickingLineItem = serde_json::from_str(r#"{"lineStatus": 1}"#).unwrap();
        assert_eq!(line.line_status, "");
    }

    #[test]
    fn non_string_status_is_unrecognized() {
        let picking: PickingSnapshot = serde_json::from_str(r#"{"status": 7}"#).unwrap();
        assert_eq!(picking.status, Some(Reported::Unrecognized("7".into())));
        assert_eq!(picking.recognized_status(), None);

        let picking: PickingSnapshot = serde_json::from_str(r#"{"status": null}"#).unwrap();
        assert_eq!(picking.status, None);

        let order: OrderSnapshot = serde_json::from_str(r#"{"status": {"code": 1}}"#).unwrap();
        assert_eq!(order.status.value(), None);
    }

    #[test]
    fn reported_serializes_as_plain_code() {
        let order = OrderSnapshot::new(OrderStatus::EnRuta);
        assert_eq!(serde_json::to_string(&order).unwrap(), r#"{"status":"EN_RUTA"}"#);
    }
}
