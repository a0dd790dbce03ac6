/// Coalescing helper for render/resize decisions
pub struct Coalescer;

impl Coalescer {
    /// Whether to draw this loop: only when something changed and either a
    /// render was explicitly requested or the frame timer fired.
    #[inline]
    pub fn decide_render(dirty: bool, queued_render_reqs: usize, saw_tui_render: bool) -> bool {
        queued_render_reqs > 0 || (dirty && saw_tui_render)
    }

    /// Multiple resizes collapse into the last one
    #[inline]
    pub fn decide_resize(events: &[(u16, u16)]) -> Option<(u16, u16)> {
        events.last().copied()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::Coalescer;

    #[test]
    fn decide_render_table_tests() {
        assert!(!Coalescer::decide_render(false, 0, false));
        assert!(!Coalescer::decide_render(false, 0, true));
        assert!(!Coalescer::decide_render(true, 0, false));
        assert!(Coalescer::decide_render(true, 0, true));
        assert!(Coalescer::decide_render(false, 1, false));
        assert!(Coalescer::decide_render(false, 3, true));
    }

    #[test]
    fn decide_resize_last_only_table_tests() {
        assert_eq!(Coalescer::decide_resize(&[]), None);
        assert_eq!(Coalescer::decide_resize(&[(10, 10)]), Some((10, 10)));
        assert_eq!(
            Coalescer::decide_resize(&[(10, 10), (20, 30)]),
            Some((20, 30))
        );
    }
}
