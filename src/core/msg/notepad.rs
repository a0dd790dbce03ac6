use crossterm::event::KeyEvent;

/// Editing of the title and notes fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotepadMsg {
    EditTitle,
    EditNotes,
    /// Keys for whichever field is being edited.
    Input(Vec<KeyEvent>),
    FinishEditing,
}
