//! Port for the UI element that performs the actual file transfer.
//!
//! In a browser front end this is a hidden frame (`#download-frame`) whose
//! `src` is pointed at the resolved URL. Other adapters open the URL with
//! the platform handler or simply record it.

use std::sync::Mutex;

/// Element id of the hidden download frame in the registry web UI.
pub const DOWNLOAD_FRAME_ID: &str = "download-frame";

/// A navigation sink that starts a download when pointed at a URL.
#[cfg_attr(test, mockall::automock)]
pub trait DownloadFrame: Send + Sync {
    /// Set the frame's navigation target to `url`.
    fn navigate(&self, url: &str);
}

/// A frame that only remembers its last navigation target.
///
/// Useful for tests and for adapters that report the URL instead of
/// opening it.
#[derive(Debug, Default)]
pub struct RecordingFrame {
    src: Mutex<Option<String>>,
}

impl RecordingFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current navigation target, if the frame was ever navigated.
    pub fn src(&self) -> Option<String> {
        self.src
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

impl DownloadFrame for RecordingFrame {
    fn navigate(&self, url: &str) {
        *self
            .src
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(url.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_frame_keeps_last_target() {
        let frame = RecordingFrame::new();
        assert!(frame.src().is_none());

        frame.navigate("https://cdn.example/a.tar.gz");
        frame.navigate("https://cdn.example/b.tar.gz");
        assert_eq!(frame.src().as_deref(), Some("https://cdn.example/b.tar.gz"));
    }
}
