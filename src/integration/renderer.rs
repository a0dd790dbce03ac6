use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::Mutex;

use crate::{
    core::state::AppState, infrastructure::tui::TuiLike, presentation::components::Dashboard,
};

/// Draws the whole dashboard from a state snapshot.
#[derive(Debug, Default)]
pub struct Renderer {
    dashboard: Dashboard,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn render(
        &mut self,
        tui: &Arc<Mutex<dyn TuiLike + Send>>,
        state: &AppState,
    ) -> Result<()> {
        let mut guard = tui.lock().await;
        let mut draw = |f: &mut ratatui::Frame<'_>| {
            let area = f.area();
            self.dashboard.render(f, area, state);
        };
        guard.draw(&mut draw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{config::Config, tui::test::TestTui};

    #[tokio::test]
    async fn renderer_renders_with_test_tui() {
        let test_tui = TestTui::new(100, 30).expect("failed to create TestTui");
        let tui: Arc<Mutex<dyn TuiLike + Send>> = Arc::new(Mutex::new(test_tui));
        let mut r = Renderer::new();
        let state = AppState::new(Config::default());

        r.render(&tui, &state).await.expect("render should succeed");
    }
}
