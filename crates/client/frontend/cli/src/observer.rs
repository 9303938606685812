//! Outcome reporting for the terminal client.

use calendar_core::{Grid, OutcomeMeta, Placements};
use client_frontend_core::OutcomeObserver;

/// Writes every finished play to the log file.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl OutcomeObserver for TracingObserver {
    fn on_win(&mut self, grid: &Grid, placements: &Placements, meta: &OutcomeMeta) {
        let booked = grid.cells().filter(|(_, cell)| cell.meeting().is_some()).count();
        tracing::info!(
            score = meta.score,
            reputation = meta.reputation,
            time_left = meta.time_left_secs,
            placed = placements.len(),
            booked_cells = booked,
            flags = ?meta.flag_names(),
            "play won"
        );
    }

    fn on_fail(&mut self, meta: &OutcomeMeta) {
        tracing::info!(
            score = meta.score,
            reputation = meta.reputation,
            trash_count = meta.trash_count,
            flags = ?meta.flag_names(),
            "play failed"
        );
    }
}
