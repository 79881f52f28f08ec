//! Roster member types.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A roster member, as stored in the `miembros` table.
///
/// Members are soft-deactivated by clearing `activo`; only active members
/// show up in listings and attendance fan-outs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// Store-assigned opaque identifier.
    pub id: String,
    pub nombre: String,
    /// Voice part (soprano, contralto, tenor, bajo).
    pub voz: String,
    pub activo: bool,
}

/// A member row about to be inserted (no store-assigned id yet).
#[derive(Debug, Clone, Serialize)]
pub struct NewMember {
    pub nombre: String,
    pub voz: String,
    pub activo: bool,
}

/// Unvalidated roster-addition request, as received over the wire.
///
/// Missing JSON fields deserialize to empty strings and fail validation
/// instead of failing to decode.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewMemberRequest {
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub voz: String,
}

impl NewMemberRequest {
    /// Check required fields and produce the row to insert.
    ///
    /// New members always start active.
    pub fn validate(self) -> Result<NewMember> {
        if self.nombre.is_empty() || self.voz.is_empty() {
            return Err(Error::Validation("Nombre y voz son requeridos".to_string()));
        }

        Ok(NewMember {
            nombre: self.nombre,
            voz: self.voz,
            activo: true,
        })
    }
}
