diesel::table! {
    kvstore (key) {
        key -> Text,
        value -> Text,
    }
}
