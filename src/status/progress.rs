use serde::Serialize;

use super::types::PickingSnapshot;

/// Progress summary for a picking task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    /// Picked over requested quantity, 0..=100.
    pub percent: u8,
    /// Every line flagged completed by the warehouse. Not derived from `percent`.
    pub complete: bool,
}

/// Computes picking completion from line items.
pub struct PickingProgress;

impl PickingProgress {
    pub fn summarize(picking: Option<&PickingSnapshot>) -> Progress {
        Progress {
            percent: Self::percent(picking),
            complete: Self::is_complete(picking),
        }
    }

    /// `round(100 * picked / requested)` summed over all lines.
    ///
    /// Upstream data is not trusted: negative or non-finite quantities count
    /// as zero and the result is capped at 100, so over-picking or a dirty row
    /// never yields a value outside the bar.
    pub fn percent(picking: Option<&PickingSnapshot>) -> u8 {
        let Some(picking) = picking else {
            return 0;
        };

        let (requested, picked) = picking.lines.iter().fold((0.0, 0.0), |(req, pick), line| {
            (
                req + sanitize(line.requested_quantity),
                pick + sanitize(line.picked_quantity),
            )
        });

        if requested <= 0.0 {
            return 0;
        }

        let ratio = (100.0 * picked / requested).round();
        ratio.clamp(0.0, 100.0) as u8
    }

    /// True only when there is at least one line and every line is marked
    /// completed. A line at full quantity but not marked completed keeps the
    /// task incomplete, and so does a marked line at any quantity below.
    pub fn is_complete(picking: Option<&PickingSnapshot>) -> bool {
        match picking {
            Some(picking) if !picking.lines.is_empty() => {
                picking.lines.iter().all(|line| line.is_completed())
            }
            _ => false,
        }
    }
}

fn sanitize(quantity: f64) -> f64 {
    if quantity.is_finite() && quantity >= 0.0 {
        quantity
    } else {
        tracing::debug!(quantity, "clamping invalid picking quantity to zero");
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::types::{PickingLineItem, PickingStatus};
    use proptest::prelude::*;

    fn snapshot(lines: Vec<PickingLineItem>) -> PickingSnapshot {
        PickingSnapshot::new(PickingStatus::EnProceso, lines)
    }

    #[test]
    fn no_picking_is_zero() {
        assert_eq!(PickingProgress::percent(None), 0);
        assert!(!PickingProgress::is_complete(None));
    }

    #[test]
    fn no_lines_is_zero_and_incomplete() {
        let picking = snapshot(Vec::new());
        assert_eq!(PickingProgress::percent(Some(&picking)), 0);
        assert!(!PickingProgress::is_complete(Some(&picking)));
    }

    #[test]
    fn partial_pick_rounds() {
        let picking = snapshot(vec![
            PickingLineItem::new(10.0, 10.0, "completed"),
            PickingLineItem::new(5.0, 0.0, "pending"),
        ]);
        assert_eq!(
            PickingProgress::summarize(Some(&picking)),
            Progress { percent: 67, complete: false }
        );
    }

    #[test]
    fn full_quantity_without_markers_is_not_complete() {
        let picking = snapshot(vec![
            PickingLineItem::new(3.0, 3.0, "completed"),
            PickingLineItem::new(2.0, 2.0, "in_progress"),
        ]);
        assert_eq!(PickingProgress::percent(Some(&picking)), 100);
        assert!(!PickingProgress::is_complete(Some(&picking)));
    }

    #[test]
    fn markers_win_over_short_quantities() {
        let picking = snapshot(vec![PickingLineItem::new(4.0, 1.0, "COMPLETADO")]);
        assert_eq!(PickingProgress::percent(Some(&picking)), 25);
        assert!(PickingProgress::is_complete(Some(&picking)));
    }

    #[test]
    fn zero_requested_quantity_is_zero() {
        let picking = snapshot(vec![PickingLineItem::new(0.0, 0.0, "completed")]);
        assert_eq!(PickingProgress::percent(Some(&picking)), 0);
    }

    #[test]
    fn dirty_quantities_are_clamped() {
        let negative = snapshot(vec![PickingLineItem::new(10.0, -4.0, "pending")]);
        assert_eq!(PickingProgress::percent(Some(&negative)), 0);

        let over_picked = snapshot(vec![PickingLineItem::new(2.0, 9.0, "pending")]);
        assert_eq!(PickingProgress::percent(Some(&over_picked)), 100);

        let nan = snapshot(vec![
            PickingLineItem::new(f64::NAN, 1.0, "pending"),
            PickingLineItem::new(4.0, 2.0, "pending"),
        ]);
        assert_eq!(PickingProgress::percent(Some(&nan)), 75);

        let infinite = snapshot(vec![PickingLineItem::new(f64::INFINITY, 1.0, "pending")]);
        assert_eq!(PickingProgress::percent(Some(&infinite)), 0);
    }

    proptest! {
        #[test]
        fn percent_stays_within_bounds(
            lines in prop::collection::vec((any::<f64>(), any::<f64>(), any::<bool>()), 0..12)
        ) {
            let picking = snapshot(
                lines
                    .into_iter()
                    .map(|(req, pick, done)| {
                        PickingLineItem::new(req, pick, if done { "completed" } else { "pending" })
                    })
                    .collect(),
            );
            let percent = PickingProgress::percent(Some(&picking));
            prop_assert!(percent <= 100);
        }

        #[test]
        fn complete_requires_every_line_marked(
            marks in prop::collection::vec(any::<bool>(), 1..10)
        ) {
            let picking = snapshot(
                marks
                    .iter()
                    .map(|done| PickingLineItem::new(1.0, 1.0, if *done { "completed" } else { "pending" }))
                    .collect(),
            );
            prop_assert_eq!(PickingProgress::percent(Some(&picking)), 100);
            prop_assert_eq!(PickingProgress::is_complete(Some(&picking)), marks.iter().all(|d| *d));
        }
    }
}
