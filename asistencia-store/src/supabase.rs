//! PostgREST client for the hosted Supabase store.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Method, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use asistencia_core::{AttendanceRecord, Error, Member, NewAttendanceRecord, NewMember, Result};

use crate::backend::StoreBackend;
use crate::config::StoreConfig;

const MIEMBROS_TABLE: &str = "miembros";
const ASISTENCIAS_TABLE: &str = "asistencias";

/// Client for the hosted store's PostgREST endpoint.
///
/// Cheap to clone; the underlying reqwest client is shared.
#[derive(Clone)]
pub struct SupabaseStore {
    http: reqwest::Client,
    base_url: String,
    key: String,
}

/// PostgREST error body; `message` is what callers care about.
#[derive(Deserialize)]
struct StoreErrorBody {
    message: Option<String>,
}

impl SupabaseStore {
    pub fn new(config: StoreConfig) -> Self {
        SupabaseStore {
            http: reqwest::Client::new(),
            base_url: format!("{}/rest/v1", config.url.trim_end_matches('/')),
            key: config.key,
        }
    }

    fn request(&self, method: Method, table: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, format!("{}/{}", self.base_url, table))
            .header("apikey", &self.key)
            .bearer_auth(&self.key)
    }
}

#[async_trait]
impl StoreBackend for SupabaseStore {
    async fn list_active_members(&self) -> Result<Vec<Member>> {
        let resp = self
            .request(Method::GET, MIEMBROS_TABLE)
            .query(&[
                ("select", "*"),
                ("activo", "eq.true"),
                ("order", "nombre.asc"),
            ])
            .send()
            .await
            .map_err(request_error)?;

        read_json(resp).await
    }

    async fn insert_member(&self, member: &NewMember) -> Result<Member> {
        let resp = self
            .request(Method::POST, MIEMBROS_TABLE)
            .header("Prefer", "return=representation")
            .json(&[member])
            .send()
            .await
            .map_err(request_error)?;

        let mut rows: Vec<Member> = read_json(resp).await?;
        rows.pop()
            .ok_or_else(|| Error::Storage("insert returned no row".to_string()))
    }

    async fn attendance_exists(&self, fecha: NaiveDate, tipo: &str) -> Result<bool> {
        let fecha_filter = format!("eq.{fecha}");
        let tipo_filter = format!("eq.{tipo}");

        let resp = self
            .request(Method::GET, ASISTENCIAS_TABLE)
            .query(&[
                ("select", "id"),
                ("fecha", fecha_filter.as_str()),
                ("tipo", tipo_filter.as_str()),
                ("limit", "1"),
            ])
            .send()
            .await
            .map_err(request_error)?;

        let rows: Vec<serde_json::Value> = read_json(resp).await?;
        Ok(!rows.is_empty())
    }

    async fn insert_attendance(&self, rows: &[NewAttendanceRecord]) -> Result<()> {
        tracing::debug!(rows = rows.len(), "inserting attendance batch");

        let resp = self
            .request(Method::POST, ASISTENCIAS_TABLE)
            .header("Prefer", "return=minimal")
            .json(&rows)
            .send()
            .await
            .map_err(request_error)?;

        if !resp.status().is_success() {
            return Err(response_error(resp).await);
        }
        Ok(())
    }

    async fn list_attendance(&self) -> Result<Vec<AttendanceRecord>> {
        let resp = self
            .request(Method::GET, ASISTENCIAS_TABLE)
            .query(&[("select", "*"), ("order", "fecha.desc")])
            .send()
            .await
            .map_err(request_error)?;

        read_json(resp).await
    }
}

fn request_error(err: reqwest::Error) -> Error {
    Error::Storage(format!("store request failed: {err}"))
}

/// Map a non-success response to an error, draining the PostgREST body.
///
/// 409 means the unique (fecha, tipo, id_miembro) index fired: a
/// concurrent fan-out already recorded the event.
async fn response_error(resp: reqwest::Response) -> Error {
    let status = resp.status();
    if status == StatusCode::CONFLICT {
        return Error::duplicate_event();
    }

    let message = resp
        .json::<StoreErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| format!("store responded with status {status}"));

    Error::Storage(message)
}

async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
    if !resp.status().is_success() {
        return Err(response_error(resp).await);
    }

    resp.json::<T>()
        .await
        .map_err(|err| Error::Storage(format!("invalid store response: {err}")))
}
