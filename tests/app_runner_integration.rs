use std::{sync::Arc, time::Duration};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use tokio::sync::Mutex;

use homedash::{
    infrastructure::{
        config::Config,
        http::StaticFetcher,
        opener::RecordingOpener,
        store::{MemoryStore, Store},
        tui::{test::TestTui, Event, TuiLike},
    },
    integration::app_runner::AppRunner,
    repositories::{LINKS_KEY, TITLE_KEY},
};

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn typed(text: &str) -> Vec<Event> {
    text.chars().map(|c| key(KeyCode::Char(c))).collect()
}

struct Harness {
    runner: AppRunner,
    tui: Arc<Mutex<TestTui>>,
    store: Arc<MemoryStore>,
    opener: Arc<RecordingOpener>,
}

fn harness(events: Vec<Event>) -> Harness {
    let tui = Arc::new(Mutex::new(
        TestTui::with_events(100, 30, events).expect("test tui"),
    ));
    let store = Arc::new(MemoryStore::new());
    let opener = Arc::new(RecordingOpener::new());
    let dyn_tui: Arc<Mutex<dyn TuiLike + Send>> = tui.clone();
    let runner = AppRunner::new(
        Config::bundled().expect("bundled config parses"),
        store.clone(),
        dyn_tui,
        Arc::new(StaticFetcher::new()),
        opener.clone(),
    );
    Harness {
        runner,
        tui,
        store,
        opener,
    }
}

async fn run(h: &mut Harness) {
    tokio::time::timeout(Duration::from_secs(5), h.runner.run())
        .await
        .expect("runner finished")
        .expect("runner ok");
}

#[tokio::test]
async fn test_add_open_and_quit() {
    let mut events = vec![Event::Render, key(KeyCode::Char('a'))];
    events.extend(typed("Docs"));
    events.push(key(KeyCode::Tab));
    events.extend(typed("https://docs.example"));
    events.push(key(KeyCode::Enter));
    events.push(Event::Render);
    events.push(key(KeyCode::Enter));
    events.push(Event::Render);
    events.push(key(KeyCode::Char('q')));

    let mut h = harness(events);
    run(&mut h).await;

    assert_eq!(
        h.store.get(LINKS_KEY).as_deref(),
        Some(r#"[{"title":"Docs","url":"https://docs.example"}]"#)
    );
    assert_eq!(h.opener.opened(), vec!["https://docs.example".to_string()]);

    let screen = h.tui.lock().await.rows().join("\n");
    assert!(screen.contains("Docs"));
    assert!(screen.contains("https://docs.example"));
    assert!(screen.contains("Links (1)"));
}

#[tokio::test]
async fn test_pasted_title_is_single_line() {
    let events = vec![
        Event::Render,
        key(KeyCode::Char('t')),
        Event::Paste("\tHome\nBase".into()),
        key(KeyCode::Enter),
        Event::Render,
        key(KeyCode::Char('q')),
    ];

    let mut h = harness(events);
    run(&mut h).await;

    let title = h.runner.runtime().state().notepad.title.clone();
    assert_eq!(title, "My Dashboard Home Base");
    assert_eq!(h.store.get(TITLE_KEY), Some(title));
}

#[tokio::test]
async fn test_resize_repaints_at_new_size() {
    let events = vec![Event::Render, Event::Resize(60, 20), Event::Render, key(KeyCode::Char('q'))];

    let mut h = harness(events);
    run(&mut h).await;

    let tui = h.tui.lock().await;
    let area = tui.buffer().area;
    assert_eq!((area.width, area.height), (60, 20));
    assert!(tui.rows().join("\n").contains("My Dashboard"));
}
