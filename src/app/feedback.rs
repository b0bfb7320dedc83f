use crate::config::{RANDOM_TOAST_DURATION, TOAST_DURATION};
use crate::navigator::{NavOutcome, Navigator};
use std::time::Duration;

/// The user-facing command that produced an outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Next,
    Prev,
    Random,
    SelectChapter,
    JumpTo,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub duration: Duration,
    /// egui time (seconds) after which the toast hides; set on first draw.
    pub expires_at: Option<f64>,
}

impl Toast {
    pub fn new(message: String, kind: ToastKind) -> Self {
        Self {
            message,
            kind,
            duration: TOAST_DURATION,
            expires_at: None,
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Starts the countdown on first call and tells whether the toast is still visible at `now`.
    pub fn visible_at(&mut self, now: f64) -> bool {
        let expires_at = *self
            .expires_at
            .get_or_insert(now + self.duration.as_secs_f64());
        now < expires_at
    }
}

fn chapter_title(navigator: &Navigator) -> String {
    navigator
        .active_chapter()
        .and_then(|id| navigator.catalog().chapter(id))
        .map(|c| c.title.clone())
        .unwrap_or_default()
}

/// Maps a navigator outcome to the toast shown for it. Plain moves and
/// chapter selection stay silent, as do unknown ids.
pub fn toast_for(command: Command, outcome: NavOutcome, navigator: &Navigator) -> Option<Toast> {
    let toast = match outcome {
        NavOutcome::Moved | NavOutcome::ChapterSelected | NavOutcome::NotFound => return None,
        NavOutcome::Empty if command == Command::Random => {
            Toast::new("No quotes found".into(), ToastKind::Warning)
        }
        NavOutcome::Empty => Toast::new("No quotes to show".into(), ToastKind::Warning),
        NavOutcome::EnteredNextChapter => Toast::new(
            format!("Moved to next chapter: {}", chapter_title(navigator)),
            ToastKind::Info,
        ),
        NavOutcome::EnteredPreviousChapter => Toast::new(
            format!("Moved to previous chapter: {}", chapter_title(navigator)),
            ToastKind::Info,
        ),
        NavOutcome::NoNextChapter => {
            Toast::new("This is already the last chapter".into(), ToastKind::Info)
        }
        NavOutcome::NoPreviousChapter => {
            Toast::new("This is already the first chapter".into(), ToastKind::Info)
        }
        NavOutcome::Jumped => Toast::new(
            format!("Jumped to a quote in «{}»", chapter_title(navigator)),
            ToastKind::Success,
        ),
        NavOutcome::Drew(_) => Toast::new("Drew a random quote".into(), ToastKind::Success)
            .with_duration(RANDOM_TOAST_DURATION),
    };
    Some(toast)
}
