pub(crate) const VERSION: i32 = 1;

pub(crate) const SET_USER_VERSION: &str = "PRAGMA user_version = 1";
pub(crate) const GET_USER_VERSION: &str = "PRAGMA user_version";

pub(crate) const CREATE_KVSTORE_TABLE: &str = "
        CREATE TABLE IF NOT EXISTS kvstore(\
        key TEXT NOT NULL PRIMARY KEY, \
        value TEXT NOT NULL\
        ) WITHOUT ROWID
    ";

pub(crate) const DROP_KVSTORE_TABLE: &str = "
        DROP TABLE IF EXISTS kvstore
    ";
