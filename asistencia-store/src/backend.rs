//! Store abstraction over the queries the service needs.

use async_trait::async_trait;
use chrono::NaiveDate;

use asistencia_core::{AttendanceRecord, Member, NewAttendanceRecord, NewMember, Result};

/// The queries the operations run against the data store.
///
/// `SupabaseStore` implements this against the hosted store;
/// `MemoryStore` implements it in process for tests.
#[async_trait]
pub trait StoreBackend: Send + Sync {
    /// Active members, sorted by nombre ascending.
    async fn list_active_members(&self) -> Result<Vec<Member>>;

    /// Insert one member and return the stored row.
    async fn insert_member(&self, member: &NewMember) -> Result<Member>;

    /// Whether any attendance row exists for the given event.
    async fn attendance_exists(&self, fecha: NaiveDate, tipo: &str) -> Result<bool>;

    /// Insert a fan-out batch. The whole batch lands or none of it does.
    async fn insert_attendance(&self, rows: &[NewAttendanceRecord]) -> Result<()>;

    /// Every stored attendance row.
    async fn list_attendance(&self) -> Result<Vec<AttendanceRecord>>;
}
