/// Accordion state: at most one entry expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Disclosure {
    open_index: Option<usize>,
}

impl Default for Disclosure {
    /// First entry expanded.
    fn default() -> Self {
        Self {
            open_index: Some(0),
        }
    }
}

impl Disclosure {
    pub fn collapsed() -> Self {
        Self { open_index: None }
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open_index
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open_index == Some(index)
    }

    pub fn toggle(&mut self, index: usize) {
        self.open_index = if self.is_open(index) {
            None
        } else {
            Some(index)
        };
        log::debug!("faq disclosure -> {:?}", self.open_index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn first_entry_open_by_default() {
        let panel = Disclosure::default();
        assert_eq!(panel.open_index(), Some(0));
        assert!(panel.is_open(0));
        assert!(!panel.is_open(1));
    }

    #[test]
    fn toggle_same_index_flips() {
        let mut panel = Disclosure::collapsed();
        for i in 0..4 {
            panel.toggle(i);
            assert_eq!(panel.open_index(), Some(i));
            panel.toggle(i);
            assert_eq!(panel.open_index(), None);
        }
    }

    #[test]
    fn toggling_another_index_moves_the_single_open_entry() {
        let mut panel = Disclosure::default();
        panel.toggle(2);
        assert_eq!(panel.open_index(), Some(2));
        assert!(!panel.is_open(0));

        let open: Vec<usize> = (0..5).filter(|&i| panel.is_open(i)).collect();
        assert_eq!(open, vec![2]);
    }

    #[test]
    fn closing_the_default_entry() {
        let mut panel = Disclosure::default();
        panel.toggle(0);
        assert_eq!(panel, Disclosure::collapsed());
    }
}
