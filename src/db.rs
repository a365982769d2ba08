use std::path::Path;

use rusqlite::{params, Connection};
use tracing::info;

use crate::error::Result;
use crate::parser::Record;

/// Open the destination database.
pub fn connect(path: &Path) -> Result<Connection> {
    let conn = Connection::open(path)?;
    Ok(conn)
}

/// Rebuild the `unicode` table from the record stream and return the row
/// count.
///
/// Drop and create run outside the insert transaction: a failed run must
/// not restore the previous table contents.
pub fn load<I>(conn: &Connection, records: I) -> Result<usize>
where
    I: Iterator<Item = Result<Record>>,
{
    conn.execute_batch(
        "DROP TABLE IF EXISTS unicode;
         CREATE TABLE unicode (char INTEGER, description TEXT, block TEXT);",
    )?;

    conn.execute("BEGIN TRANSACTION", [])?;
    let mut stmt =
        conn.prepare("INSERT INTO unicode (char, description, block) VALUES (?1, ?2, ?3)")?;
    let mut count = 0usize;
    for record in records {
        let record = record?;
        stmt.execute(params![record.codepoint, record.description, record.block])?;
        count += 1;
    }
    drop(stmt);
    conn.execute("COMMIT", [])?;

    info!("Committed {} rows", count);
    Ok(count)
}
