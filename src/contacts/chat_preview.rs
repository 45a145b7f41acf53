#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatPreview {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub last_message: String,
    pub time: String,
    pub unread: u32,
    pub is_group: bool,
}

impl ChatPreview {
    pub fn new(id: &str, name: &str, last_message: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            last_message: last_message.to_string(),
            ..Default::default()
        }
    }

    pub fn with_unread(mut self, unread: u32) -> Self {
        self.unread = unread;
        self
    }

    pub fn with_group(mut self, is_group: bool) -> Self {
        self.is_group = is_group;
        self
    }

    pub fn with_time(mut self, time: &str) -> Self {
        self.time = time.to_string();
        self
    }

    pub fn has_unread(&self) -> bool {
        self.unread > 0
    }
}
