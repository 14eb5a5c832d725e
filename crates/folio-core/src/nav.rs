//! Navigation entries and their active flag

use crate::section::SectionId;

/// Renders the active flag of each navigation entry (e.g. an `active` class).
pub trait NavView {
    fn set_active(&self, index: usize, active: bool);
}

/// One navigation affordance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    /// Section this entry scrolls to; `None` when its href is not an in-page fragment.
    pub target: Option<SectionId>,
    pub active: bool,
}

impl NavEntry {
    pub fn new(target: Option<SectionId>) -> Self {
        Self {
            target,
            active: false,
        }
    }

    /// Build from the entry's `href` attribute.
    pub fn from_href(href: &str) -> Self {
        Self::new(SectionId::from_href(href))
    }
}

/// The navigation widget: entries in document order plus the view that shows them.
pub struct NavBar {
    entries: Vec<NavEntry>,
    view: Box<dyn NavView>,
}

impl NavBar {
    pub fn new(entries: Vec<NavEntry>, view: Box<dyn NavView>) -> Self {
        Self { entries, view }
    }

    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.entries.iter().position(|e| e.active)
    }

    /// Clear every entry, then mark `index` active if it exists.
    ///
    /// At most one entry is active afterwards.
    pub fn apply_active(&mut self, index: usize) {
        for (i, entry) in self.entries.iter_mut().enumerate() {
            let active = i == index;
            entry.active = active;
            self.view.set_active(i, active);
        }
    }
}

impl std::fmt::Debug for NavBar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavBar")
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct RecordingView(Rc<RefCell<Vec<bool>>>);

    impl NavView for RecordingView {
        fn set_active(&self, index: usize, active: bool) {
            let mut flags = self.0.borrow_mut();
            if flags.len() <= index {
                flags.resize(index + 1, false);
            }
            flags[index] = active;
        }
    }

    fn bar(n: usize) -> (NavBar, RecordingView) {
        let view = RecordingView::default();
        let entries = (0..n)
            .map(|i| NavEntry::from_href(&format!("#s{}", i)))
            .collect();
        (NavBar::new(entries, Box::new(view.clone())), view)
    }

    #[test]
    fn test_apply_active_moves_flag() {
        let (mut nav, view) = bar(4);
        nav.apply_active(1);
        assert_eq!(nav.active_index(), Some(1));
        nav.apply_active(3);
        assert_eq!(nav.active_index(), Some(3));
        assert_eq!(*view.0.borrow(), vec![false, false, false, true]);
    }

    #[test]
    fn test_out_of_range_index_clears_all() {
        let (mut nav, view) = bar(2);
        nav.apply_active(0);
        nav.apply_active(7);
        assert_eq!(nav.active_index(), None);
        assert!(view.0.borrow().iter().all(|a| !a));
    }

    #[test]
    fn test_empty_bar_has_no_active_entry() {
        let (mut nav, _) = bar(0);
        nav.apply_active(0);
        assert!(nav.is_empty());
        assert_eq!(nav.active_index(), None);
    }

    #[test]
    fn test_entry_without_fragment_has_no_target() {
        assert_eq!(NavEntry::from_href("/blog").target, None);
        assert_eq!(
            NavEntry::from_href("#skills").target,
            Some(SectionId::new("skills"))
        );
    }

    proptest! {
        #[test]
        fn at_most_one_entry_active(
            n in 0usize..10,
            picks in prop::collection::vec(0usize..10, 1..20),
        ) {
            let (mut nav, _) = bar(n);
            for idx in picks {
                nav.apply_active(idx);
                let active = nav.entries().iter().filter(|e| e.active).count();
                prop_assert!(active <= 1);
                if idx < n {
                    prop_assert_eq!(active, 1);
                }
            }
        }
    }
}
