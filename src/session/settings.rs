use serde::Deserialize;

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Start the session as soon as the selection narrows down to a single chapter.
    pub auto_start: bool,
    pub shuffle_on_start: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            auto_start: true,
            shuffle_on_start: true,
        }
    }
}
