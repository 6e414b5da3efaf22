//! Terminal output: colored badges, progress bar and action menus.
//!
//! Uses `console` for styling and `indicatif` to draw the picking progress
//! bar. [`Renderer`] is the only thing in the binary that prints.

use anyhow::Result;
use console::{Style, Term};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use serde::Serialize;

use fulfillment_status::{
    DisplayKey, DisplayStatus, OrderStatus, Progress, Reported, Role, TransitionGraph,
};

/// Full inspection result, printed with `inspect --json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectReport {
    pub display: DisplayStatus,
    pub progress: Progress,
    pub role: Reported<Role>,
    pub next_statuses: Vec<OrderStatus>,
}

pub struct Renderer {
    bar_width: u16,
    green: Style,
    red: Style,
    yellow: Style,
    dim: Style,
}

impl Renderer {
    pub fn new(bar_width: u16, color: bool) -> Self {
        // Leave console's terminal detection alone unless color is turned off.
        if !color {
            console::set_colors_enabled(false);
        }
        Self {
            bar_width,
            green: Style::new().green().bold(),
            red: Style::new().red().bold(),
            yellow: Style::new().yellow(),
            dim: Style::new().dim(),
        }
    }

    // Terminal approximation of the badge palette.
    fn badge_style(key: &DisplayKey) -> Style {
        match key {
            DisplayKey::Persisted(OrderStatus::Pendiente) => Style::new().yellow().bold(),
            DisplayKey::Persisted(OrderStatus::Aprobado | OrderStatus::Facturado) => {
                Style::new().blue().bold()
            }
            DisplayKey::EnPreparacion => Style::new().magenta().bold(),
            DisplayKey::Persisted(OrderStatus::Preparado) => Style::new().cyan().bold(),
            DisplayKey::Persisted(OrderStatus::EnRuta) => Style::new().color256(208).bold(),
            DisplayKey::Persisted(OrderStatus::Entregado) => Style::new().green().bold(),
            DisplayKey::Persisted(OrderStatus::Rechazado) => Style::new().red().bold(),
            DisplayKey::Persisted(OrderStatus::Anulado) | DisplayKey::Unrecognized(_) => {
                Style::new().dim().bold()
            }
        }
    }

    pub fn badge(&self, display: &DisplayStatus) {
        let style = Self::badge_style(&display.status);
        println!(
            "  {} {}",
            style.apply_to(format!("● {}", display.label)),
            self.dim.apply_to(format!("[{}]", display.status))
        );
        println!("    {}", display.description);
        println!(
            "    {}",
            self.dim.apply_to(format!(
                "color {} on {} · icon {:?}",
                display.color, display.background_color, display.icon
            ))
        );
    }

    /// Draws a finished bar when stdout is a terminal, then the percentage and
    /// completeness flag.
    pub fn progress(&self, progress: &Progress) -> Result<()> {
        if Term::stdout().is_term() {
            let pb = ProgressBar::with_draw_target(Some(100), ProgressDrawTarget::stdout());
            pb.set_style(self.bar_style()?);
            pb.set_position(u64::from(progress.percent));
            pb.abandon();
        }
        println!("{}", self.progress_line(progress));
        Ok(())
    }

    fn bar_style(&self) -> Result<ProgressStyle> {
        let template = format!("  {{bar:{}.green/white}} {{pos:>3}}%", self.bar_width);
        Ok(ProgressStyle::with_template(&template)?.progress_chars("█▉░"))
    }

    fn progress_line(&self, progress: &Progress) -> String {
        if progress.complete {
            format!(
                "  {} Picking complete ({}%)",
                self.green.apply_to("✓"),
                progress.percent
            )
        } else {
            format!(
                "  {} Picking incomplete ({}%)",
                self.yellow.apply_to("…"),
                progress.percent
            )
        }
    }

    pub fn actions(&self, role: &Reported<Role>, next: &[OrderStatus]) {
        if next.is_empty() {
            println!("  {} No actions available for {role}", self.red.apply_to("✗"));
            return;
        }
        println!("  Actions for {role}:");
        for status in next {
            println!("    {} {status}", self.green.apply_to("→"));
        }
    }

    pub fn graph(&self) {
        for status in OrderStatus::ALL {
            let targets = TransitionGraph::targets(status);
            if targets.is_empty() {
                println!("  {status:<10} {}", self.dim.apply_to("(terminal)"));
            } else {
                let joined: Vec<&str> = targets.iter().map(|t| t.as_str()).collect();
                println!("  {status:<10} → {}", joined.join(", "));
            }
        }
    }

    pub fn report(&self, report: &InspectReport) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(report)?);
        Ok(())
    }
}
