use reedline::{Prompt, PromptEditMode, PromptHistorySearch};
use std::borrow::Cow;

pub(crate) struct ShellPrompt {
    user: Option<String>,
}

impl ShellPrompt {
    pub(crate) fn new(user: Option<String>) -> Self {
        Self { user }
    }
}

impl Prompt for ShellPrompt {
    fn render_prompt_left(&self) -> Cow<str> {
        match self.user.as_ref() {
            Some(user) => format!("contacts({})$ ", user).into(),
            None => "contacts$ ".into(),
        }
    }

    fn render_prompt_right(&self) -> Cow<str> {
        "".into()
    }

    fn render_prompt_indicator(&self, _: PromptEditMode) -> Cow<str> {
        "".into()
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<str> {
        "... ".into()
    }

    fn render_prompt_history_search_indicator(&self, _: PromptHistorySearch) -> Cow<str> {
        "".into()
    }
}
