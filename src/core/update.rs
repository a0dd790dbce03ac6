use crossterm::event::KeyEvent;

use crate::{
    core::{
        cmd::Cmd,
        msg::{
            clock::ClockMsg, links::LinksMsg, notepad::NotepadMsg, ui::UiMsg, widget::WidgetMsg,
            Msg,
        },
        state::{editor::TextAreaState, ui::UiMode, AppState, NotepadState},
        textarea_engine::TextAreaEngine,
    },
    domain::text::single_line,
    repositories::{links::LinkRegistry, settings::SettingsRepository},
};

/// Collaborators the update step may call synchronously.
pub struct UpdateContext<'a> {
    pub links: &'a LinkRegistry,
    pub settings: &'a SettingsRepository,
    pub text_area: &'a dyn TextAreaEngine,
}

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update_with_context(
    msg: Msg,
    mut state: AppState,
    ctx: &UpdateContext<'_>,
) -> (AppState, Vec<Cmd>) {
    let commands = match msg {
        Msg::Startup => startup(&mut state, ctx),
        Msg::System(system_msg) => state.system.update(system_msg),
        Msg::Clock(clock_msg) => state.clock.update(clock_msg, &state.config.clock),
        Msg::Notepad(notepad_msg) => update_notepad(notepad_msg, &mut state, ctx),
        Msg::Links(links_msg) => update_links(links_msg, &mut state, ctx),
        Msg::Widget(widget_msg) => update_widget(widget_msg, &mut state),
        Msg::Ui(ui_msg) => update_ui(ui_msg, &mut state),
    };
    (state, commands)
}

/// Load persisted state, start the clock and trigger the startup fetches.
fn startup(state: &mut AppState, ctx: &UpdateContext<'_>) -> Vec<Cmd> {
    if state.system.started {
        return vec![];
    }
    state.system.started = true;

    state.notepad = NotepadState::new(ctx.settings.title(), ctx.settings.notes());
    state.links.replace(ctx.links.list());

    let mut cmds = state.clock.update(ClockMsg::Start, &state.config.clock);
    cmds.extend(update_widget(WidgetMsg::FetchWeather, state));
    cmds.extend(update_widget(WidgetMsg::FetchQuote, state));
    cmds.push(Cmd::LogInfo {
        message: format!("Loaded {} saved links", state.links.len()),
    });
    cmds
}

fn update_notepad(msg: NotepadMsg, state: &mut AppState, ctx: &UpdateContext<'_>) -> Vec<Cmd> {
    match msg {
        NotepadMsg::EditTitle => {
            let title = state.notepad.title.clone();
            state.ui.begin_editing(UiMode::EditingTitle, &title);
            vec![]
        }
        NotepadMsg::EditNotes => {
            let notes = state.notepad.notes.clone();
            state.ui.begin_editing(UiMode::EditingNotes, &notes);
            vec![]
        }
        NotepadMsg::Input(keys) => {
            let single = match state.ui.mode {
                UiMode::EditingTitle => true,
                UiMode::EditingNotes => false,
                _ => return vec![],
            };
            state.ui.editor = apply_keys(ctx.text_area, &state.ui.editor, &keys, single);
            let text = state.ui.editor.content.clone();

            let current = if single {
                &mut state.notepad.title
            } else {
                &mut state.notepad.notes
            };
            if *current == text {
                // cursor movement only
                return vec![];
            }
            *current = text;

            let saved = if single {
                ctx.settings.save_title(&state.notepad.title)
            } else {
                ctx.settings.save_notes(&state.notepad.notes)
            };
            match saved {
                Ok(()) => vec![],
                Err(e) => {
                    let field = if single { "title" } else { "notes" };
                    let message = format!("Could not save {field}: {e}");
                    state.system.status_message = Some(message.clone());
                    vec![Cmd::LogError { message }]
                }
            }
        }
        NotepadMsg::FinishEditing => {
            state.ui.finish_editing();
            vec![]
        }
    }
}

fn update_links(msg: LinksMsg, state: &mut AppState, ctx: &UpdateContext<'_>) -> Vec<Cmd> {
    match msg {
        LinksMsg::SelectNext => {
            state.links.select_next();
            vec![]
        }
        LinksMsg::SelectPrevious => {
            state.links.select_previous();
            vec![]
        }
        LinksMsg::DeleteSelected => {
            let Some(index) = state.links.selected else {
                state.system.status_message = Some("No link selected".to_string());
                return vec![];
            };
            match ctx.links.remove_at(index) {
                Ok(removed) => {
                    state.links.replace(ctx.links.list());
                    state.system.status_message = Some(format!("Removed {}", removed.title));
                    vec![Cmd::RequestRender]
                }
                Err(e) => {
                    // a stale snapshot is the usual cause; resync it
                    state.links.replace(ctx.links.list());
                    state.system.status_message = Some(format!("Error: {e}"));
                    vec![Cmd::LogError {
                        message: e.to_string(),
                    }]
                }
            }
        }
        LinksMsg::OpenSelected => match state.links.selected_link() {
            Some(link) => {
                let url = link.url.clone();
                state.system.status_message = Some(format!("Opening {url}"));
                vec![Cmd::OpenUrl { url }]
            }
            None => vec![],
        },
        LinksMsg::ShowForm => {
            state.ui.form.clear();
            state.ui.mode = UiMode::AddingLink;
            vec![]
        }
        LinksMsg::FormInput(keys) => {
            if !state.ui.is_adding_link() {
                return vec![];
            }
            let next = apply_keys(ctx.text_area, state.ui.form.focused(), &keys, true);
            *state.ui.form.focused_mut() = next;
            vec![]
        }
        LinksMsg::SwitchField => {
            state.ui.form.switch_field();
            vec![]
        }
        LinksMsg::Submit => {
            if !state.ui.is_adding_link() {
                return vec![];
            }
            let title = state.ui.form.title.content.clone();
            let url = state.ui.form.url.content.clone();
            match ctx.links.add(&title, &url) {
                Ok(link) => {
                    state.links.replace(ctx.links.list());
                    state.links.selected = state.links.len().checked_sub(1);
                    state.ui.form.clear();
                    state.ui.mode = UiMode::Normal;
                    state.system.status_message = Some(format!("Added {}", link.title));
                    vec![Cmd::RequestRender]
                }
                Err(e) if e.is_validation() => {
                    state.ui.alert = Some(e.to_string());
                    vec![]
                }
                Err(e) => {
                    state.system.status_message = Some(format!("Error: {e}"));
                    vec![Cmd::LogError {
                        message: e.to_string(),
                    }]
                }
            }
        }
        LinksMsg::CancelForm => {
            state.ui.form.clear();
            state.ui.mode = UiMode::Normal;
            vec![]
        }
    }
}

fn update_widget(msg: WidgetMsg, state: &mut AppState) -> Vec<Cmd> {
    match msg {
        WidgetMsg::FetchWeather => vec![Cmd::FetchWeather {
            request: state.widgets.weather.begin(),
        }],
        WidgetMsg::FetchImage(size) => vec![Cmd::FetchImage {
            request: state.widgets.image.begin(),
            size,
        }],
        WidgetMsg::FetchQuote => vec![Cmd::FetchQuote {
            request: state.widgets.stock.begin(),
        }],
        WidgetMsg::OpenImage => match state.widgets.image.ready() {
            Some(view) => vec![Cmd::OpenUrl {
                url: view.url.clone(),
            }],
            None => {
                state.system.status_message = Some("No image loaded".to_string());
                vec![]
            }
        },
        WidgetMsg::Loaded { request, payload } => {
            if state.widgets.resolve(request, payload) {
                vec![Cmd::RequestRender]
            } else {
                log::debug!("Dropped stale {} result #{}", request.widget, request.seq);
                vec![]
            }
        }
        WidgetMsg::Failed { request, message } => {
            if state.widgets.fail(request, message) {
                vec![Cmd::RequestRender]
            } else {
                log::debug!("Dropped stale {} failure #{}", request.widget, request.seq);
                vec![]
            }
        }
    }
}

fn update_ui(msg: UiMsg, state: &mut AppState) -> Vec<Cmd> {
    match msg {
        UiMsg::ShowAlert(message) => {
            state.ui.alert = Some(message);
            vec![]
        }
        UiMsg::DismissAlert => {
            state.ui.alert = None;
            vec![]
        }
    }
}

/// Runs `keys` through the engine; single-line fields have line breaks folded.
fn apply_keys(
    engine: &dyn TextAreaEngine,
    snapshot: &TextAreaState,
    keys: &[KeyEvent],
    single: bool,
) -> TextAreaState {
    let next = engine.apply_keys(snapshot, keys);
    if single && next.content.contains(['\n', '\r']) {
        TextAreaState::at_end(single_line(&next.content))
    } else {
        next
    }
}
