//! The operations the HTTP layer exposes, generic over the store backend.

use asistencia_core::{
    Error, EventSummary, Member, NewMemberRequest, RecordAttendanceRequest, RecordReceipt, Result,
    aggregate, fan_out,
};

use crate::backend::StoreBackend;

/// Record attendance for one event: one row per active member.
///
/// Rejects the whole request if any row already exists for the same
/// (fecha, tipo). The check and the insert are separate store
/// round-trips; the store's unique index backstops the race between
/// them (see db/schema.sql).
pub async fn record_attendance<S: StoreBackend>(
    store: &S,
    request: RecordAttendanceRequest,
) -> Result<RecordReceipt> {
    let op = request.validate()?;

    if store.attendance_exists(op.fecha, &op.tipo).await? {
        return Err(Error::duplicate_event());
    }

    let members = store.list_active_members().await?;
    let rows = fan_out(&op, &members);
    store.insert_attendance(&rows).await?;

    Ok(RecordReceipt {
        miembros: members.len(),
    })
}

/// Active members, sorted by nombre.
pub async fn list_members<S: StoreBackend>(store: &S) -> Result<Vec<Member>> {
    store.list_active_members().await
}

/// Validate and insert a new member. New members always start active.
pub async fn add_member<S: StoreBackend>(
    store: &S,
    request: NewMemberRequest,
) -> Result<Member> {
    let member = request.validate()?;
    store.insert_member(&member).await
}

/// Per-event summaries, most recent first, truncated to `limit`.
pub async fn history<S: StoreBackend>(store: &S, limit: usize) -> Result<Vec<EventSummary>> {
    let rows = store.list_attendance().await?;
    Ok(aggregate(&rows, limit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    fn record_request(fecha: &str, tipo: &str, ausentes: Vec<String>) -> RecordAttendanceRequest {
        RecordAttendanceRequest {
            fecha: fecha.to_string(),
            tipo: tipo.to_string(),
            ausentes,
            notas: "aviso previo".to_string(),
        }
    }

    #[tokio::test]
    async fn records_one_row_per_active_member() {
        let store = MemoryStore::default();
        let ana = store.seed_member("Ana", "soprano", true).await;
        store.seed_member("Berta", "contralto", true).await;

        let receipt = record_attendance(&store, record_request("2024-01-01", "culto", vec![ana.id.clone()]))
            .await
            .unwrap();
        assert_eq!(receipt.miembros, 2);

        let rows = store.list_attendance().await.unwrap();
        assert_eq!(rows.len(), 2);
        let ana_row = rows.iter().find(|r| r.id_miembro == ana.id).unwrap();
        assert!(ana_row.ausente);
        assert_eq!(ana_row.notas, "aviso previo");
        assert!(rows.iter().filter(|r| r.id_miembro != ana.id).all(|r| !r.ausente && r.notas.is_empty()));
    }

    #[tokio::test]
    async fn second_recording_for_same_event_conflicts() {
        let store = MemoryStore::default();
        store.seed_member("Ana", "soprano", true).await;

        record_attendance(&store, record_request("2024-01-01", "culto", vec![]))
            .await
            .unwrap();

        let err = record_attendance(&store, record_request("2024-01-01", "culto", vec![]))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Conflict(_)));

        // the rejected call must not have written anything
        assert_eq!(store.list_attendance().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn same_date_different_tipo_records_independently() {
        let store = MemoryStore::default();
        store.seed_member("Ana", "soprano", true).await;

        record_attendance(&store, record_request("2024-01-01", "culto", vec![]))
            .await
            .unwrap();
        record_attendance(&store, record_request("2024-01-01", "ensayo", vec![]))
            .await
            .unwrap();

        assert_eq!(store.list_attendance().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn inactive_members_are_skipped_everywhere() {
        let store = MemoryStore::default();
        store.seed_member("Ana", "soprano", true).await;
        let baja = store.seed_member("Zoe", "bajo", false).await;

        let listed = list_members(&store).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].nombre, "Ana");

        let receipt = record_attendance(&store, record_request("2024-02-02", "culto", vec![]))
            .await
            .unwrap();
        assert_eq!(receipt.miembros, 1);
        assert!(
            store
                .list_attendance()
                .await
                .unwrap()
                .iter()
                .all(|r| r.id_miembro != baja.id)
        );
    }

    #[tokio::test]
    async fn listing_sorts_by_nombre() {
        let store = MemoryStore::default();
        store.seed_member("Carlos", "tenor", true).await;
        store.seed_member("Ana", "soprano", true).await;

        let nombres: Vec<String> = list_members(&store)
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.nombre)
            .collect();
        assert_eq!(nombres, vec!["Ana", "Carlos"]);
    }

    #[tokio::test]
    async fn validation_failures_write_nothing() {
        let store = MemoryStore::default();
        store.seed_member("Ana", "soprano", true).await;

        let err = record_attendance(&store, record_request("", "reunion", vec![]))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));

        let err = record_attendance(&store, record_request("2024-01-01", "", vec![]))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));

        assert!(store.list_attendance().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn add_member_validates_and_stores() {
        let store = MemoryStore::default();

        let member = add_member(
            &store,
            NewMemberRequest {
                nombre: "Lucía".to_string(),
                voz: "soprano".to_string(),
            },
        )
        .await
        .unwrap();
        assert!(member.activo);
        assert!(!member.id.is_empty());

        let err = add_member(&store, NewMemberRequest::default()).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(list_members(&store).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn history_reflects_recorded_events() {
        let store = MemoryStore::default();
        let ana = store.seed_member("Ana", "soprano", true).await;
        store.seed_member("Berta", "contralto", true).await;

        record_attendance(&store, record_request("2024-01-01", "culto", vec![ana.id.clone()]))
            .await
            .unwrap();
        record_attendance(&store, record_request("2024-01-02", "culto", vec![]))
            .await
            .unwrap();

        let historial = history(&store, 20).await.unwrap();
        assert_eq!(historial.len(), 2);
        assert_eq!(historial[0].fecha, "2024-01-02".parse().unwrap());
        assert_eq!(historial[0].presentes, 2);
        assert_eq!(historial[1].ausentes, 1);
        assert_eq!(historial[1].total, 2);
    }
}
