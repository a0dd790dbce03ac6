/// Title and notes as last persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotepadState {
    pub title: String,
    pub notes: String,
}

impl NotepadState {
    pub fn new(title: impl Into<String>, notes: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            notes: notes.into(),
        }
    }
}
