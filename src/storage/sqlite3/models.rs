use diesel::prelude::*;
use super::schema::kvstore;

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = kvstore)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct Entry {
    #[allow(dead_code)]
    pub(crate) key: String,
    pub(crate) value: String,
}

#[derive(Insertable)]
#[diesel(table_name = kvstore)]
pub(crate) struct NewEntry<'a> {
    pub(crate) key: &'a str,
    pub(crate) value: &'a str,
}
