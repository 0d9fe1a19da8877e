//! Tenant records, settings, and keyset pagination.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use haven_core::errors::{HavenResult, ValidationError};
use haven_core::models::{TenantPage, TenantRecord, TenantSettings};

use crate::to_store_err;

pub fn put_tenant(conn: &Connection, tenant: &TenantRecord) -> HavenResult<()> {
    conn.execute(
        "INSERT OR REPLACE INTO tenants (tenant_id, created_at) VALUES (?1, ?2)",
        params![tenant.tenant_id, tenant.created_at.to_rfc3339()],
    )
    .map_err(|e| to_store_err(e.to_string()))?;
    Ok(())
}

pub fn put_settings(
    conn: &Connection,
    tenant_id: &str,
    settings: &TenantSettings,
) -> HavenResult<()> {
    let body = serde_json::to_string(settings).map_err(|e| to_store_err(e.to_string()))?;
    conn.execute(
        "INSERT OR REPLACE INTO tenant_settings (tenant_id, body) VALUES (?1, ?2)",
        params![tenant_id, body],
    )
    .map_err(|e| to_store_err(e.to_string()))?;
    Ok(())
}

pub fn get_settings(conn: &Connection, tenant_id: &str) -> HavenResult<Option<TenantSettings>> {
    let body: Option<String> = conn
        .query_row(
            "SELECT body FROM tenant_settings WHERE tenant_id = ?1",
            params![tenant_id],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| to_store_err(e.to_string()))?;

    match body {
        None => Ok(None),
        Some(body) => {
            let settings = serde_json::from_str(&body).map_err(|e| ValidationError::Decode {
                doc_id: tenant_id.to_string(),
                reason: e.to_string(),
            })?;
            Ok(Some(settings))
        }
    }
}

/// One page of tenants ordered by id. The cursor is the last tenant id
/// of the previous page; a full page returns a cursor even when it is
/// the final one, in which case the next call yields an empty last page.
pub fn list_page(
    conn: &Connection,
    page_size: usize,
    cursor: Option<&str>,
) -> HavenResult<TenantPage> {
    let after = cursor.unwrap_or("");
    let mut stmt = conn
        .prepare(
            "SELECT tenant_id, created_at FROM tenants
             WHERE tenant_id > ?1 ORDER BY tenant_id LIMIT ?2",
        )
        .map_err(|e| to_store_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![after, page_size as i64], |row| {
            let tenant_id: String = row.get(0)?;
            let created_at: String = row.get(1)?;
            Ok((tenant_id, created_at))
        })
        .map_err(|e| to_store_err(e.to_string()))?;

    let mut tenants = Vec::new();
    for row in rows {
        let (tenant_id, created_at) = row.map_err(|e| to_store_err(e.to_string()))?;
        let created_at =
            created_at
                .parse::<DateTime<Utc>>()
                .map_err(|e| ValidationError::Decode {
                    doc_id: tenant_id.clone(),
                    reason: format!("createdAt: {e}"),
                })?;
        tenants.push(TenantRecord {
            tenant_id,
            created_at,
        });
    }

    let next_cursor = if tenants.len() == page_size {
        tenants.last().map(|t| t.tenant_id.clone())
    } else {
        None
    };

    Ok(TenantPage {
        tenants,
        next_cursor,
    })
}
