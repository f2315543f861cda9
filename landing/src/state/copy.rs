//! "Copied" indicator behind every copy button.
//!
//! Each activation mints a fresh [`Ticket`]. The reset timer carries the
//! ticket it was armed with and [`CopyFlag::expire`] only honours the newest
//! one, so re-activating inside the window restarts it instead of letting
//! the older timer clear the flag early.

use crate::clipboard::ClipboardError;

/// Identifies one activation of a [`CopyFlag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyFlag {
    copied: bool,
    generation: u64,
}

impl CopyFlag {
    pub fn is_copied(&self) -> bool {
        self.copied
    }

    /// Record an activation. The clipboard outcome is logged and otherwise
    /// ignored: the flag turns on either way.
    pub fn activate(&mut self, write: Result<(), ClipboardError>) -> Ticket {
        if let Err(err) = write {
            log::warn!("copy button: {err}");
        }
        self.copied = true;
        self.generation = self.generation.wrapping_add(1);
        log::debug!("copy flag armed (ticket {})", self.generation);
        Ticket(self.generation)
    }

    /// Clear the flag if `ticket` belongs to the latest activation.
    ///
    /// Returns whether the flag changed.
    pub fn expire(&mut self, ticket: Ticket) -> bool {
        if ticket.0 != self.generation || !self.copied {
            return false;
        }
        self.copied = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::COPY_RESET;

    /// Deterministic stand-in for the browser timer queue.
    struct Timeline {
        now_ms: u64,
        pending: Vec<(u64, Ticket)>,
    }

    impl Timeline {
        fn new() -> Self {
            Self {
                now_ms: 0,
                pending: Vec::new(),
            }
        }

        fn activate(&mut self, flag: &mut CopyFlag, write: Result<(), ClipboardError>) {
            let ticket = flag.activate(write);
            let fire_at = self.now_ms + COPY_RESET.as_millis() as u64;
            self.pending.push((fire_at, ticket));
        }

        /// Advance to `to_ms`, firing due timers in order.
        fn advance(&mut self, flag: &mut CopyFlag, to_ms: u64) {
            self.pending.sort_by_key(|(at, _)| *at);
            while let Some(&(at, ticket)) = self.pending.first() {
                if at > to_ms {
                    break;
                }
                self.pending.remove(0);
                self.now_ms = at;
                flag.expire(ticket);
            }
            self.now_ms = to_ms;
        }
    }

    #[test]
    fn starts_cleared() {
        assert!(!CopyFlag::default().is_copied());
    }

    #[test]
    fn clears_after_reset_window() {
        let mut flag = CopyFlag::default();
        let mut timeline = Timeline::new();

        timeline.activate(&mut flag, Ok(()));
        assert!(flag.is_copied());

        timeline.advance(&mut flag, 1999);
        assert!(flag.is_copied());

        timeline.advance(&mut flag, 2000);
        assert!(!flag.is_copied());
    }

    #[test]
    fn reactivation_restarts_the_window() {
        let mut flag = CopyFlag::default();
        let mut timeline = Timeline::new();

        timeline.activate(&mut flag, Ok(()));
        timeline.advance(&mut flag, 800);
        timeline.activate(&mut flag, Ok(()));

        // First timer fires at 2000 and must be ignored
        timeline.advance(&mut flag, 2000);
        assert!(flag.is_copied());

        timeline.advance(&mut flag, 2799);
        assert!(flag.is_copied());

        timeline.advance(&mut flag, 2800);
        assert!(!flag.is_copied());
    }

    #[test]
    fn denied_clipboard_still_shows_copied() {
        let mut flag = CopyFlag::default();
        let mut timeline = Timeline::new();

        timeline.activate(
            &mut flag,
            Err(ClipboardError::Rejected("NotAllowedError".into())),
        );
        assert!(flag.is_copied());

        timeline.advance(&mut flag, 2000);
        assert!(!flag.is_copied());
    }

    #[test]
    fn stale_ticket_is_a_no_op() {
        let mut flag = CopyFlag::default();
        let first = flag.activate(Ok(()));
        let second = flag.activate(Ok(()));

        assert_ne!(first, second);
        assert!(!flag.expire(first));
        assert!(flag.is_copied());
        assert!(flag.expire(second));
        assert!(!flag.expire(second));
    }
}
