//! SQLite table schemas.

/// SQL for creating the ads table.
///
/// `id` doubles as the rowid, so omitting it on insert lets SQLite assign
/// the next value and an explicit duplicate fails the primary key.
pub const CREATE_ADS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS ads (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    content TEXT NOT NULL,
    owner TEXT NOT NULL
)
"#;

/// Returns all table DDL statements in creation order.
pub fn all_tables() -> Vec<&'static str> {
    vec![CREATE_ADS_TABLE]
}
