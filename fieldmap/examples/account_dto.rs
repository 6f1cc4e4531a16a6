//! Example mapping a persisted account record onto an API response.
//!
//! Run with `RUST_LOG=fieldmap=debug cargo run --example account_dto` to see
//! the fields the mapper skips.

use chrono::{DateTime, TimeZone, Utc};
use fieldmap::{MapResult, Mapper, Reflect};
use tracing_subscriber::EnvFilter;

/// Columns shared by every stored record.
#[derive(Clone, Debug, Default, Reflect)]
pub struct RecordMeta {
    id: u64,
    created_at: DateTime<Utc>,
}

/// Contact details kept alongside an account.
#[derive(Clone, Debug, Default, Reflect)]
pub struct Contact {
    email: String,
    phone: Option<String>,
}

/// An account as it is stored.
#[derive(Clone, Debug, Default, Reflect)]
pub struct AccountRecord {
    #[fieldmap(embed)]
    meta: RecordMeta,
    display_name: String,
    contact: Contact,
    roles: Vec<String>,
    balance_cents: i64,
    password_hash: String,
}

/// An account as the API returns it.
#[derive(Clone, Debug, Default, PartialEq, Reflect)]
pub struct AccountResponse {
    id: u64,
    created_at: DateTime<Utc>,
    display_name: String,
    email: String,
    phone: Option<String>,
    roles: Vec<String>,
    balance_cents: u64,
}

fn sample_record() -> AccountRecord {
    AccountRecord {
        meta: RecordMeta {
            id: 42,
            created_at: Utc
                .with_ymd_and_hms(2023, 11, 14, 8, 0, 0)
                .single()
                .unwrap_or_default(),
        },
        display_name: "Ada Lovelace".into(),
        contact: Contact {
            email: "ada@example.com".into(),
            phone: None,
        },
        roles: vec!["admin".into(), "billing".into()],
        balance_cents: 1250,
        password_hash: "$argon2id$...".into(),
    }
}

fn to_response(mapper: &Mapper, record: &AccountRecord) -> MapResult<AccountResponse> {
    let mut response = AccountResponse::default();
    let report = mapper.map_with_report(record, &mut response)?;
    for skipped in &report {
        tracing::warn!(field = %skipped.path(), error = %skipped.error(), "field left unmapped");
    }
    Ok(response)
}

fn main() -> MapResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mapper = Mapper::default();
    let response = to_response(&mapper, &sample_record())?;
    tracing::info!(?response, "mapped account");
    Ok(())
}
