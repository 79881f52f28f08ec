//! Attendance records and the per-event fan-out.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::member::Member;

/// A stored attendance row, one per member per event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: String,
    pub fecha: NaiveDate,
    pub tipo: String,
    pub id_miembro: String,
    /// Member name as it was when the event was recorded. Later renames
    /// must not rewrite history, so the snapshot is kept on the row.
    pub nombre: String,
    pub ausente: bool,
    pub notas: String,
}

/// An attendance row about to be inserted (no store-assigned id yet).
#[derive(Debug, Clone, Serialize)]
pub struct NewAttendanceRecord {
    pub fecha: NaiveDate,
    pub tipo: String,
    pub id_miembro: String,
    pub nombre: String,
    pub ausente: bool,
    pub notas: String,
}

/// Unvalidated recording request, as received over the wire.
///
/// Missing JSON fields deserialize to their empty defaults and are caught
/// by `validate` instead of failing to decode.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordAttendanceRequest {
    #[serde(default)]
    pub fecha: String,
    #[serde(default)]
    pub tipo: String,
    #[serde(default)]
    pub ausentes: Vec<String>,
    #[serde(default)]
    pub notas: String,
}

/// A validated recording request, ready to fan out.
#[derive(Debug, Clone)]
pub struct RecordOp {
    pub fecha: NaiveDate,
    pub tipo: String,
    pub ausentes: HashSet<String>,
    pub notas: String,
}

/// Outcome of a successful recording.
#[derive(Debug, Clone, Copy)]
pub struct RecordReceipt {
    /// Number of members the event was recorded for.
    pub miembros: usize,
}

impl RecordAttendanceRequest {
    /// Check required fields and parse the date.
    pub fn validate(self) -> Result<RecordOp> {
        if self.fecha.is_empty() || self.tipo.is_empty() {
            return Err(Error::Validation("Fecha y tipo son requeridos".to_string()));
        }

        let fecha = self.fecha.parse::<NaiveDate>().map_err(|_| {
            Error::Validation(format!(
                "Fecha inválida: '{}' (se espera AAAA-MM-DD)",
                self.fecha
            ))
        })?;

        Ok(RecordOp {
            fecha,
            tipo: self.tipo,
            ausentes: self.ausentes.into_iter().collect(),
            notas: self.notas,
        })
    }
}

/// Synthesize one attendance row per member.
///
/// Members named in `op.ausentes` are flagged absent and carry the note;
/// everyone else is present with an empty note. Ids in `ausentes` that
/// match no member are inert.
pub fn fan_out(op: &RecordOp, members: &[Member]) -> Vec<NewAttendanceRecord> {
    members
        .iter()
        .map(|miembro| {
            let ausente = op.ausentes.contains(&miembro.id);
            NewAttendanceRecord {
                fecha: op.fecha,
                tipo: op.tipo.clone(),
                id_miembro: miembro.id.clone(),
                nombre: miembro.nombre.clone(),
                ausente,
                notas: if ausente { op.notas.clone() } else { String::new() },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: &str, nombre: &str) -> Member {
        Member {
            id: id.to_string(),
            nombre: nombre.to_string(),
            voz: "tenor".to_string(),
            activo: true,
        }
    }

    fn op(fecha: &str, tipo: &str, ausentes: &[&str], notas: &str) -> RecordOp {
        RecordAttendanceRequest {
            fecha: fecha.to_string(),
            tipo: tipo.to_string(),
            ausentes: ausentes.iter().map(|s| s.to_string()).collect(),
            notas: notas.to_string(),
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn fan_out_covers_every_member() {
        let members = vec![member("a", "Ana"), member("b", "Berta"), member("c", "Carlos")];
        let op = op("2024-01-01", "culto", &["b"], "enfermedad");

        let rows = fan_out(&op, &members);
        assert_eq!(rows.len(), 3);
        for (row, miembro) in rows.iter().zip(&members) {
            assert_eq!(row.id_miembro, miembro.id);
            assert_eq!(row.nombre, miembro.nombre);
            assert_eq!(row.ausente, miembro.id == "b");
        }
    }

    #[test]
    fn notes_only_reach_absentees() {
        let members = vec![member("a", "Ana"), member("b", "Berta")];
        let op = op("2024-01-01", "ensayo", &["a"], "viaje");

        let rows = fan_out(&op, &members);
        assert_eq!(rows[0].notas, "viaje");
        assert_eq!(rows[1].notas, "");
    }

    #[test]
    fn unknown_absentee_ids_are_inert() {
        let members = vec![member("a", "Ana")];
        let op = op("2024-01-01", "culto", &["nadie"], "nota");

        let rows = fan_out(&op, &members);
        assert_eq!(rows.len(), 1);
        assert!(!rows[0].ausente);
        assert_eq!(rows[0].notas, "");
    }

    #[test]
    fn validate_requires_fecha_and_tipo() {
        let sin_fecha = RecordAttendanceRequest {
            tipo: "reunion".to_string(),
            ..Default::default()
        };
        assert!(matches!(sin_fecha.validate(), Err(Error::Validation(_))));

        let sin_tipo = RecordAttendanceRequest {
            fecha: "2024-01-01".to_string(),
            ..Default::default()
        };
        assert!(matches!(sin_tipo.validate(), Err(Error::Validation(_))));
    }

    #[test]
    fn validate_rejects_malformed_dates() {
        let request = RecordAttendanceRequest {
            fecha: "el martes".to_string(),
            tipo: "culto".to_string(),
            ..Default::default()
        };
        assert!(matches!(request.validate(), Err(Error::Validation(_))));
    }

    #[test]
    fn request_fields_default_when_absent_from_json() {
        let request: RecordAttendanceRequest =
            serde_json::from_str(r#"{"fecha":"2024-01-01","tipo":"culto"}"#).unwrap();
        assert!(request.ausentes.is_empty());
        assert_eq!(request.notas, "");
        assert!(request.validate().is_ok());
    }
}
