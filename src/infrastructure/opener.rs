//! Hands URLs to the desktop's default handler.

use std::{io, sync::Mutex};

pub trait UrlOpener: Send + Sync {
    fn open(&self, url: &str) -> io::Result<()>;
}

/// Opens URLs with the platform launcher. The child is detached, and the URL
/// is passed as a single argument so shell metacharacters stay literal.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl UrlOpener for SystemOpener {
    fn open(&self, url: &str) -> io::Result<()> {
        open::that_detached(url)
    }
}

/// Records URLs instead of opening them.
#[derive(Debug, Default)]
pub struct RecordingOpener {
    opened: Mutex<Vec<String>>,
}

impl RecordingOpener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().map(|o| o.clone()).unwrap_or_default()
    }
}

impl UrlOpener for RecordingOpener {
    fn open(&self, url: &str) -> io::Result<()> {
        self.opened
            .lock()
            .map_err(|e| io::Error::other(e.to_string()))?
            .push(url.to_string());
        Ok(())
    }
}
