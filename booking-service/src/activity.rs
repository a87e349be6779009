use diesel_async::{AsyncPgConnection, RunQueryDsl};
use uuid::Uuid;

use shared::Result;

use crate::models::NewActivityLog;
use crate::schema::active_logs;

/// Append one audit row. Runs on the caller's connection so the entry
/// commits or rolls back together with the mutation it documents.
pub async fn record(
    conn: &mut AsyncPgConnection,
    user_id: Option<Uuid>,
    action: &str,
    target_table: &str,
    target_id: Uuid,
) -> Result<()> {
    diesel::insert_into(active_logs::table)
        .values(&NewActivityLog::new(user_id, action, target_table, target_id))
        .execute(conn)
        .await?;
    Ok(())
}
