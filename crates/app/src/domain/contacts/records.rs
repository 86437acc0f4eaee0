//! Contact Settings Records

use consign::contact::ContactInfo;
use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Row, postgres::PgRow};
use uuid::Uuid;

use crate::domain::owners::OwnerUuid;

/// Contact Settings Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSettingsRecord {
    pub owner: OwnerUuid,
    pub email: String,
    pub phone1: String,
    pub phone2: String,
    pub whatsapp1: String,
    pub whatsapp2: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<ContactSettingsRecord> for ContactInfo {
    fn from(record: ContactSettingsRecord) -> Self {
        Self {
            email: record.email,
            phone1: record.phone1,
            phone2: record.phone2,
            whatsapp1: record.whatsapp1,
            whatsapp2: record.whatsapp2,
        }
    }
}

impl<'r> FromRow<'r, PgRow> for ContactSettingsRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            owner: OwnerUuid::from_uuid(row.try_get::<Uuid, _>("user_uuid")?),
            email: row.try_get("email")?,
            phone1: row.try_get("phone1")?,
            phone2: row.try_get("phone2")?,
            whatsapp1: row.try_get("whatsapp1")?,
            whatsapp2: row.try_get("whatsapp2")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
