use crate::catalog::Record;

/// Detail modal state. Opening replaces whatever was shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetailOverlay {
    selected: Option<Record>,
}

impl DetailOverlay {
    pub fn selected(&self) -> Option<Record> {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn open(&mut self, record: Record) {
        log::debug!("detail overlay open: {}", record.name());
        self.selected = Some(record);
    }

    pub fn close(&mut self) {
        if self.selected.take().is_some() {
            log::debug!("detail overlay closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{find_agent, find_command};
    use pretty_assertions::assert_eq;

    fn commit() -> Record {
        Record::Command(find_command("/commit").expect("ships"))
    }

    fn reviewer() -> Record {
        Record::Agent(find_agent("@code-reviewer").expect("ships"))
    }

    #[test]
    fn starts_closed() {
        let overlay = DetailOverlay::default();
        assert!(!overlay.is_open());
        assert_eq!(overlay.selected(), None);
    }

    #[test]
    fn open_then_close() {
        let mut overlay = DetailOverlay::default();
        overlay.open(commit());
        assert_eq!(overlay.selected(), Some(commit()));

        overlay.close();
        assert_eq!(overlay.selected(), None);
    }

    #[test]
    fn close_when_closed_is_a_no_op() {
        let mut overlay = DetailOverlay::default();
        overlay.close();
        overlay.close();
        assert_eq!(overlay, DetailOverlay::default());
    }

    #[test]
    fn last_open_wins() {
        let mut overlay = DetailOverlay::default();
        overlay.open(commit());
        overlay.open(reviewer());
        assert_eq!(overlay.selected(), Some(reviewer()));

        overlay.close();
        assert!(!overlay.is_open());
    }
}
