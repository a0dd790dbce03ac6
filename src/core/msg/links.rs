use crossterm::event::KeyEvent;

/// Quick-link list navigation and the add-link form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinksMsg {
    SelectNext,
    SelectPrevious,
    DeleteSelected,
    OpenSelected,

    ShowForm,
    FormInput(Vec<KeyEvent>),
    SwitchField,
    Submit,
    CancelForm,
}
