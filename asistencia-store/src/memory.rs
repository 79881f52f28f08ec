//! In-memory store backend for tests.

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::Mutex;
use uuid::Uuid;

use asistencia_core::{AttendanceRecord, Error, Member, NewAttendanceRecord, NewMember, Result};

use crate::backend::StoreBackend;

/// Store backend holding everything in process memory.
///
/// Mirrors the hosted schema, including the unique
/// (fecha, tipo, id_miembro) index on asistencias.
#[derive(Default)]
pub struct MemoryStore {
    miembros: Mutex<Vec<Member>>,
    asistencias: Mutex<Vec<AttendanceRecord>>,
}

impl MemoryStore {
    /// Insert a member directly, bypassing validation. Test setup helper.
    pub async fn seed_member(&self, nombre: &str, voz: &str, activo: bool) -> Member {
        let member = Member {
            id: Uuid::new_v4().to_string(),
            nombre: nombre.to_string(),
            voz: voz.to_string(),
            activo,
        };
        self.miembros.lock().await.push(member.clone());
        member
    }
}

#[async_trait]
impl StoreBackend for MemoryStore {
    async fn list_active_members(&self) -> Result<Vec<Member>> {
        let mut activos: Vec<Member> = self
            .miembros
            .lock()
            .await
            .iter()
            .filter(|m| m.activo)
            .cloned()
            .collect();
        activos.sort_by(|a, b| a.nombre.cmp(&b.nombre));
        Ok(activos)
    }

    async fn insert_member(&self, member: &NewMember) -> Result<Member> {
        let stored = Member {
            id: Uuid::new_v4().to_string(),
            nombre: member.nombre.clone(),
            voz: member.voz.clone(),
            activo: member.activo,
        };
        self.miembros.lock().await.push(stored.clone());
        Ok(stored)
    }

    async fn attendance_exists(&self, fecha: NaiveDate, tipo: &str) -> Result<bool> {
        Ok(self
            .asistencias
            .lock()
            .await
            .iter()
            .any(|row| row.fecha == fecha && row.tipo == tipo))
    }

    async fn insert_attendance(&self, rows: &[NewAttendanceRecord]) -> Result<()> {
        let mut asistencias = self.asistencias.lock().await;

        let clash = rows.iter().any(|row| {
            asistencias.iter().any(|existing| {
                existing.fecha == row.fecha
                    && existing.tipo == row.tipo
                    && existing.id_miembro == row.id_miembro
            })
        });
        if clash {
            return Err(Error::duplicate_event());
        }

        for row in rows {
            asistencias.push(AttendanceRecord {
                id: Uuid::new_v4().to_string(),
                fecha: row.fecha,
                tipo: row.tipo.clone(),
                id_miembro: row.id_miembro.clone(),
                nombre: row.nombre.clone(),
                ausente: row.ausente,
                notas: row.notas.clone(),
            });
        }
        Ok(())
    }

    async fn list_attendance(&self) -> Result<Vec<AttendanceRecord>> {
        Ok(self.asistencias.lock().await.clone())
    }
}
