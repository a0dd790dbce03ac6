use crate::core::state::editor::TextAreaState;

/// Which field, if any, receives typed keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    #[default]
    Normal,
    EditingTitle,
    EditingNotes,
    AddingLink,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Url,
}

/// The add-link form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkForm {
    pub title: TextAreaState,
    pub url: TextAreaState,
    pub focus: FormField,
}

impl LinkForm {
    pub fn focused(&self) -> &TextAreaState {
        match self.focus {
            FormField::Title => &self.title,
            FormField::Url => &self.url,
        }
    }

    pub fn focused_mut(&mut self) -> &mut TextAreaState {
        match self.focus {
            FormField::Title => &mut self.title,
            FormField::Url => &mut self.url,
        }
    }

    pub fn switch_field(&mut self) {
        self.focus = match self.focus {
            FormField::Title => FormField::Url,
            FormField::Url => FormField::Title,
        };
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// UI-related state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub mode: UiMode,
    /// Snapshot of the title or notes field while it is being edited.
    pub editor: TextAreaState,
    pub form: LinkForm,
    /// Blocking alert; any key dismisses it.
    pub alert: Option<String>,
}

impl UiState {
    pub fn is_normal(&self) -> bool {
        self.mode == UiMode::Normal
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, UiMode::EditingTitle | UiMode::EditingNotes)
    }

    pub fn is_adding_link(&self) -> bool {
        self.mode == UiMode::AddingLink
    }

    pub fn has_alert(&self) -> bool {
        self.alert.is_some()
    }

    pub fn begin_editing(&mut self, mode: UiMode, content: &str) {
        self.mode = mode;
        self.editor = TextAreaState::at_end(content);
    }

    pub fn finish_editing(&mut self) {
        self.mode = UiMode::Normal;
        self.editor = TextAreaState::empty();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_form_switch_and_clear() {
        let mut form = LinkForm::default();
        form.focused_mut().content = "Mail".into();
        form.switch_field();
        form.focused_mut().content = "https://mail.example".into();

        assert_eq!(form.title.content, "Mail");
        assert_eq!(form.url.content, "https://mail.example");
        assert_eq!(form.focus, FormField::Url);

        form.clear();
        assert_eq!(form, LinkForm::default());
    }

    #[test]
    fn test_editing_modes() {
        let mut ui = UiState::default();
        assert!(ui.is_normal());

        ui.begin_editing(UiMode::EditingNotes, "buy milk");
        assert!(ui.is_editing());
        assert_eq!(ui.editor.content, "buy milk");

        ui.finish_editing();
        assert!(ui.is_normal());
        assert!(ui.editor.content.is_empty());
    }
}
