//! Folding attendance rows into per-event summaries.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::attendance::AttendanceRecord;

/// Number of events returned by the history endpoint when no limit is given.
pub const DEFAULT_HISTORY_LIMIT: usize = 20;

/// Per-event attendance counts, derived on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSummary {
    pub fecha: NaiveDate,
    pub tipo: String,
    pub presentes: u32,
    pub ausentes: u32,
    pub total: u32,
}

/// Group rows on exact (fecha, tipo) equality and count participation.
///
/// Most recent events come first; equal dates order on tipo. Only the
/// first `limit` groups are returned. An empty input yields an empty
/// result, and rows with an empty tipo group like any other.
pub fn aggregate(rows: &[AttendanceRecord], limit: usize) -> Vec<EventSummary> {
    let mut eventos: HashMap<(NaiveDate, &str), EventSummary> = HashMap::new();

    for row in rows {
        let resumen = eventos
            .entry((row.fecha, row.tipo.as_str()))
            .or_insert_with(|| EventSummary {
                fecha: row.fecha,
                tipo: row.tipo.clone(),
                presentes: 0,
                ausentes: 0,
                total: 0,
            });

        resumen.total += 1;
        if row.ausente {
            resumen.ausentes += 1;
        } else {
            resumen.presentes += 1;
        }
    }

    let mut historial: Vec<EventSummary> = eventos.into_values().collect();
    historial.sort_by(|a, b| b.fecha.cmp(&a.fecha).then_with(|| a.tipo.cmp(&b.tipo)));
    historial.truncate(limit);
    historial
}
