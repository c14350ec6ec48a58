//! Single-slot status banner shown at the top of a form.
//!
//! DESIGN
//! ======
//! A form holds at most one banner. Showing a banner of either kind replaces
//! the previous one, and every banner gets a fresh [`BannerTicket`]. Delayed
//! removals carry the ticket they were scheduled for, so a timer that fires
//! after its banner was superseded is a no-op instead of removing the newer
//! banner.

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

use std::time::Duration;

use crate::config::ERROR_BANNER_TTL;

/// Banner flavor; selects styling and auto-dismiss behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Success => "success-message",
            Self::Error => "error-message",
        }
    }

    pub fn inline_style(self) -> &'static str {
        match self {
            Self::Success => {
                "background: #efe; color: #3c3; padding: 10px; border-radius: 8px; \
                 margin-bottom: 10px; text-align: center;"
            }
            Self::Error => {
                "background: #fee; color: #c33; padding: 10px; border-radius: 8px; \
                 margin-bottom: 10px; text-align: center; border: 1px solid #fcc;"
            }
        }
    }

    /// Error banners expire; success banners stay until the page navigates away.
    pub fn auto_dismiss_after(self) -> Option<Duration> {
        match self {
            Self::Success => None,
            Self::Error => Some(ERROR_BANNER_TTL),
        }
    }
}

/// Identity of one shown banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BannerTicket(u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
    pub ticket: BannerTicket,
}

#[derive(Clone, Debug, Default)]
pub struct FeedbackState {
    banner: Option<Banner>,
    next_ticket: u64,
}

impl FeedbackState {
    /// The banner currently on screen, if any.
    pub fn current(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    /// Replace whatever banner is showing with a new one.
    pub fn show(&mut self, kind: BannerKind, message: impl Into<String>) -> BannerTicket {
        self.next_ticket += 1;
        let ticket = BannerTicket(self.next_ticket);
        self.banner = Some(Banner {
            kind,
            message: message.into(),
            ticket,
        });
        ticket
    }

    /// Remove the banner identified by `ticket`.
    ///
    /// Returns `false` when that banner is already gone or was replaced.
    pub fn dismiss(&mut self, ticket: BannerTicket) -> bool {
        if self.banner.as_ref().is_some_and(|b| b.ticket == ticket) {
            self.banner = None;
            true
        } else {
            false
        }
    }
}
