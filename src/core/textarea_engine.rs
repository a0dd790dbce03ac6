use crossterm::event::KeyEvent;

use crate::core::state::editor::TextAreaState;

/// Engine interface that applies a sequence of key events to a textarea snapshot
/// and returns the resulting snapshot. Implementations must be deterministic and
/// free of side effects, since they run inside the update step.
pub trait TextAreaEngine {
    fn apply_keys(&self, snapshot: &TextAreaState, keys: &[KeyEvent]) -> TextAreaState;
}

/// Engine that ignores input; the snapshot comes back unchanged.
pub struct NoopTextAreaEngine;

impl TextAreaEngine for NoopTextAreaEngine {
    fn apply_keys(&self, snapshot: &TextAreaState, _keys: &[KeyEvent]) -> TextAreaState {
        snapshot.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::editor::CursorPosition;

    #[test]
    fn noop_engine_returns_same_snapshot() {
        let engine = NoopTextAreaEngine;
        let snap = TextAreaState::new("abc".into(), CursorPosition { line: 0, column: 3 }, None);
        let out = engine.apply_keys(&snap, &[]);
        assert_eq!(out, snap);
    }
}
