//! Transient, non-blocking user notices.
//!
//! DESIGN
//! ======
//! At most one notice is shown. Each push gets a new sequence number and the
//! auto-dismiss timer clears by sequence, so a timer started for an older
//! notice never hides a newer one.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use leptos::prelude::*;

/// How long a notice stays up before auto-dismiss.
pub const NOTICE_TTL_MS: u32 = 3_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
    Warning,
}

impl NoticeLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub seq: u64,
    pub level: NoticeLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeState {
    pub current: Option<Notice>,
    next_seq: u64,
}

impl NoticeState {
    /// Replace the current notice. Returns its sequence number.
    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>) -> u64 {
        self.next_seq += 1;
        let seq = self.next_seq;
        self.current = Some(Notice { seq, level, message: message.into() });
        seq
    }

    /// Clear the notice only if `seq` is still the one shown.
    pub fn dismiss(&mut self, seq: u64) -> bool {
        if self.current.as_ref().is_some_and(|n| n.seq == seq) {
            self.current = None;
            true
        } else {
            false
        }
    }
}

/// Show a notice and schedule its auto-dismiss.
pub fn notify(notices: RwSignal<NoticeState>, level: NoticeLevel, message: impl Into<String>) {
    let mut seq = 0;
    notices.update(|n| seq = n.push(level, message));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(NOTICE_TTL_MS).await;
        notices.update(|n| {
            n.dismiss(seq);
        });
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = seq;
}
