use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    core::{
        msg::{
            clock::ClockMsg, links::LinksMsg, notepad::NotepadMsg, system::SystemMsg, ui::UiMsg,
            widget::WidgetMsg, Msg,
        },
        raw_msg::RawMsg,
        state::{ui::UiMode, AppState},
    },
    domain::image::ImageSize,
    presentation::config::keybindings::Action,
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        RawMsg::Startup => vec![Msg::Startup],

        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on context and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),
        RawMsg::Paste(text) => translate_paste(&text, state),

        // Service events
        RawMsg::ClockTick(now) => vec![Msg::Clock(ClockMsg::Tick(now))],
        RawMsg::WidgetLoaded { request, payload } => {
            vec![Msg::Widget(WidgetMsg::Loaded { request, payload })]
        }
        RawMsg::WidgetFailed { request, message } => {
            vec![Msg::Widget(WidgetMsg::Failed { request, message })]
        }

        RawMsg::SystemMessage(msg) => vec![Msg::System(SystemMsg::UpdateStatusMessage(msg))],
        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Handle global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    // An alert swallows the key that dismisses it
    if state.ui.has_alert() {
        return vec![Msg::Ui(UiMsg::DismissAlert)];
    }

    match state.ui.mode {
        UiMode::Normal => translate_normal_mode_keys(key, state),
        UiMode::EditingTitle => match key.code {
            KeyCode::Esc | KeyCode::Enter => vec![Msg::Notepad(NotepadMsg::FinishEditing)],
            _ => vec![Msg::Notepad(NotepadMsg::Input(vec![key]))],
        },
        UiMode::EditingNotes => match key.code {
            KeyCode::Esc => vec![Msg::Notepad(NotepadMsg::FinishEditing)],
            _ => vec![Msg::Notepad(NotepadMsg::Input(vec![key]))],
        },
        UiMode::AddingLink => translate_form_keys(key),
    }
}

/// Key bindings while the add-link form is open
fn translate_form_keys(key: KeyEvent) -> Vec<Msg> {
    match key.code {
        KeyCode::Esc => vec![Msg::Links(LinksMsg::CancelForm)],
        KeyCode::Enter => vec![Msg::Links(LinksMsg::Submit)],
        KeyCode::Tab | KeyCode::BackTab => vec![Msg::Links(LinksMsg::SwitchField)],
        _ => vec![Msg::Links(LinksMsg::FormInput(vec![key]))],
    }
}

/// Key bindings when in normal navigation mode
fn translate_normal_mode_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Get keybindings from config state (flat mapping)
    if let Some(action) = state.config.keybindings.get(&vec![key]) {
        return translate_action_to_msg(*action, state);
    }

    vec![] // No matching keybinding found
}

fn translate_action_to_msg(action: Action, state: &AppState) -> Vec<Msg> {
    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        Action::EditTitle => vec![Msg::Notepad(NotepadMsg::EditTitle)],
        Action::EditNotes => vec![Msg::Notepad(NotepadMsg::EditNotes)],
        Action::AddLink => vec![Msg::Links(LinksMsg::ShowForm)],
        Action::SelectNextLink => vec![Msg::Links(LinksMsg::SelectNext)],
        Action::SelectPreviousLink => vec![Msg::Links(LinksMsg::SelectPrevious)],
        Action::DeleteLink => vec![Msg::Links(LinksMsg::DeleteSelected)],
        Action::OpenLink => {
            if state.links.selected_link().is_some() {
                vec![Msg::Links(LinksMsg::OpenSelected)]
            } else {
                vec![Msg::System(SystemMsg::UpdateStatusMessage(
                    "No link selected".to_string(),
                ))]
            }
        }
        Action::FetchSmallImage => vec![Msg::Widget(WidgetMsg::FetchImage(ImageSize::Small))],
        Action::FetchFullImage => vec![Msg::Widget(WidgetMsg::FetchImage(ImageSize::Full))],
        Action::OpenImage => vec![Msg::Widget(WidgetMsg::OpenImage)],
        Action::Refresh => vec![
            Msg::Widget(WidgetMsg::FetchWeather),
            Msg::Widget(WidgetMsg::FetchQuote),
        ],
    }
}

/// Pasted text becomes a batch of key presses for whichever field is focused
fn translate_paste(text: &str, state: &AppState) -> Vec<Msg> {
    if state.ui.has_alert() {
        return vec![];
    }
    let keys = paste_to_keys(text);
    if keys.is_empty() {
        return vec![];
    }
    match state.ui.mode {
        UiMode::Normal => vec![],
        UiMode::EditingTitle | UiMode::EditingNotes => {
            vec![Msg::Notepad(NotepadMsg::Input(keys))]
        }
        UiMode::AddingLink => vec![Msg::Links(LinksMsg::FormInput(keys))],
    }
}

fn paste_to_keys(text: &str) -> Vec<KeyEvent> {
    text.chars()
        .filter(|c| *c != '\r')
        .map(|c| match c {
            '\n' => KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            '\t' => KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE),
            c => KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE),
        })
        .collect()
}
