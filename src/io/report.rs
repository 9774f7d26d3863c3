//! Plain-text run reports: the evaluated map followed by the directions taken

use crate::algorithm::executor::RunOutcome;
use crate::algorithm::history::RunHistory;
use crate::io::configuration::{
    CORRUPTED_MESSAGE, DIRECTIONS_HEADING, LOOPING_MESSAGE, MAP_HEADING,
};
use crate::io::error::AutomatonError;
use crate::spatial::grid::Grid;

/// How a run ended, as far as the report is concerned
#[derive(Debug, Clone, Copy)]
pub enum Ending<'a> {
    /// The controller returned an outcome
    Finished(RunOutcome),
    /// The controller aborted with a run failure
    Failed(&'a AutomatonError),
}

impl Ending<'_> {
    /// Whether the goal was reached
    pub const fn arrived(&self) -> bool {
        matches!(self, Self::Finished(RunOutcome::Arrived))
    }
}

/// Options controlling the direction listing
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportStyle {
    /// Collapse repeated headings into `NAME xCOUNT` lines
    pub compact: bool,
}

/// Render the final map and either the direction list or a failure indicator
pub fn render_report(
    grid: &Grid,
    history: &RunHistory,
    ending: Ending<'_>,
    style: ReportStyle,
) -> String {
    let directions = match ending {
        Ending::Finished(RunOutcome::Arrived) => render_directions(history, style),
        Ending::Finished(RunOutcome::StepCeiling) => format!(
            "{LOOPING_MESSAGE}\nNo arrival within {} moves.\n",
            history.ceiling()
        ),
        Ending::Finished(RunOutcome::CycleDetected) => format!(
            "{LOOPING_MESSAGE}\nA state repeated after {} moves.\n",
            history.len()
        ),
        Ending::Finished(RunOutcome::Halted(symbol)) => {
            format!("{CORRUPTED_MESSAGE}\nStopped on unknown symbol {symbol}.\n")
        }
        Ending::Failed(error) => format!("{CORRUPTED_MESSAGE}\n{error}\n"),
    };

    format!("{MAP_HEADING}\n{grid}\n{DIRECTIONS_HEADING}\n{directions}")
}

/// Render committed moves one per line
pub fn render_directions(history: &RunHistory, style: ReportStyle) -> String {
    if style.compact {
        history
            .runs()
            .into_iter()
            .map(|(direction, count)| format!("{direction} x{count}\n"))
            .collect()
    } else {
        history.iter().map(|direction| format!("{direction}\n")).collect()
    }
}
