pub(crate) mod models;
pub(crate) mod schema;
mod sql;

pub(crate) use sql::VERSION;

use crate::storage::sqlite3::models::{
    Entry,
    NewEntry,
};

use crate::storage::sqlite3::schema::kvstore::{
    dsl::kvstore,
    key     as kv_key,
};

use diesel::prelude::*;
use diesel::result::Error;
use diesel::sql_types::Integer;

#[derive(QueryableByName)]
struct UserVersion {
    #[diesel(sql_type = Integer)]
    user_version: i32,
}

pub(crate) fn user_version(
    conn: &mut SqliteConnection
) -> i32 {
    diesel::sql_query(sql::GET_USER_VERSION)
        .get_result::<UserVersion>(conn)
        .map(|v| v.user_version)
        .unwrap_or(0)
}

pub(crate) fn drop_tbs(
    conn: &mut SqliteConnection
) -> bool {
    diesel::sql_query(sql::DROP_KVSTORE_TABLE).execute(conn).is_ok()
}

pub(crate) fn create_tbs(
    conn: &mut SqliteConnection
) -> bool {
    diesel::sql_query(sql::SET_USER_VERSION).execute(conn).is_ok()      &&
    diesel::sql_query(sql::CREATE_KVSTORE_TABLE).execute(conn).is_ok()
}

// ---------------------------------------------
// "SELECT * FROM kvstore WHERE key = ?"
// ---------------------------------------------
pub(crate) fn get_entry(
    conn: &mut SqliteConnection,
    key: &str
) -> Result<Option<Entry>, Error> {
    kvstore.find(key)
        .select(Entry::as_select())
        .first(conn)
        .optional()
}

// ---------------------------------------------
// "REPLACE INTO kvstore(key, value) VALUES(?, ?)"
// ---------------------------------------------
pub(crate) fn put_entry(
    conn: &mut SqliteConnection,
    entry: NewEntry
) -> Result<bool, Error> {
    use crate::storage::sqlite3::schema::kvstore;
    diesel::replace_into(kvstore::table)
        .values(&entry)
        .execute(conn)
        .map(|num| num > 0)
}

// ---------------------------------------------
// "DELETE FROM kvstore WHERE key = ?"
// ---------------------------------------------
pub(crate) fn remove_entry(
    conn: &mut SqliteConnection,
    key: &str
) -> Result<bool, Error> {
    diesel::delete(kvstore.filter(kv_key.eq(key)))
        .execute(conn)
        .map(|deleted| deleted > 0)
}

// ---------------------------------------------
// "SELECT key FROM kvstore ORDER BY key"
// ---------------------------------------------
pub(crate) fn entry_keys(
    conn: &mut SqliteConnection
) -> Result<Vec<String>, Error> {
    kvstore.order(kv_key)
        .select(kv_key)
        .load::<String>(conn)
}
