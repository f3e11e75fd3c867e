use leptos::prelude::*;

/// Remembers whether a panel has ever been reported visible.
///
/// Once set the latch stays set, so a flickering viewport observer can
/// never hide content or replay the entrance animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisibilityLatch {
    seen: bool,
}

impl VisibilityLatch {
    /// Record one visibility report and return whether content should show.
    pub fn observe(&mut self, is_visible: bool) -> bool {
        if is_visible && !self.seen {
            self.seen = true;
        }
        self.shows_content(is_visible)
    }

    pub fn has_been_visible(&self) -> bool {
        self.seen
    }

    pub fn shows_content(&self, is_visible: bool) -> bool {
        self.seen || is_visible
    }
}

/// Fold a visibility signal through a [`VisibilityLatch`], yielding whether
/// content should show. Once `is_visible` has been seen true the result stays
/// true for the lifetime of the owning scope.
pub fn latched_visibility(is_visible: Signal<bool>) -> Memo<bool> {
    let latch = Memo::new(move |prev: Option<&VisibilityLatch>| {
        let mut latch = prev.copied().unwrap_or_default();
        latch.observe(is_visible.get());
        latch
    });
    Memo::new(move |_| latch.get().shows_content(is_visible.get()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latched_memo_stays_shown_after_visibility_drops() {
        let owner = Owner::new();
        owner.with(|| {
            let visible = RwSignal::new(false);
            let shown = latched_visibility(visible.into());
            assert!(!shown.get());

            visible.set(true);
            assert!(shown.get());

            visible.set(false);
            assert!(shown.get());

            visible.set(true);
            visible.set(false);
            assert!(shown.get());
        });
    }

    #[test]
    fn hidden_until_first_visible_report() {
        let mut latch = VisibilityLatch::default();
        assert!(!latch.observe(false));
        assert!(!latch.observe(false));
        assert!(!latch.has_been_visible());
    }

    #[test]
    fn stays_visible_after_scrolling_away() {
        let mut latch = VisibilityLatch::default();
        let reports = [false, false, true, false, false, true, false];
        let shown: Vec<bool> = reports.iter().map(|&v| latch.observe(v)).collect();
        assert_eq!(shown, vec![false, false, true, true, true, true, true]);
        assert!(latch.has_been_visible());
    }

    #[test]
    fn visible_report_shows_content_without_latching_first() {
        let latch = VisibilityLatch::default();
        assert!(latch.shows_content(true));
        assert!(!latch.shows_content(false));
    }

    #[test]
    fn every_sequence_ending_true_stays_latched() {
        // Exhaustive over all 6-step report sequences
        for bits in 0u32..64 {
            let mut latch = VisibilityLatch::default();
            let mut seen_true = false;
            for step in 0..6 {
                let visible = bits & (1 << step) != 0;
                seen_true |= visible;
                assert_eq!(latch.observe(visible), seen_true, "sequence {:06b} step {}", bits, step);
            }
        }
    }
}
