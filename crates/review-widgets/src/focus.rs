//! Keyboard focus cycling across a fixed set of form slots.

/// Tracks which of `N` focusable slots has keyboard focus.
///
/// Slots can be temporarily skipped (for example a control that is disabled
/// until another choice is made) by passing a predicate to
/// [`focus_next_where`](FocusGroup::focus_next_where).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusGroup<const N: usize> {
    focused: usize,
}

impl<const N: usize> FocusGroup<N> {
    /// Create a new focus group with focus on the first slot (index 0).
    pub fn new() -> Self {
        Self { focused: 0 }
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    /// Move focus to the next slot, wrapping around after the last.
    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % N;
    }

    /// Move focus to the previous slot, wrapping around before the first.
    pub fn focus_prev(&mut self) {
        self.focused = (self.focused + N - 1) % N;
    }

    /// Step forward (or backward) to the nearest slot accepted by `enabled`.
    /// Focus stays put if no other slot qualifies.
    pub fn focus_next_where(&mut self, forward: bool, enabled: impl Fn(usize) -> bool) {
        let start = self.focused;
        for _ in 0..N {
            if forward {
                self.focus_next();
            } else {
                self.focus_prev();
            }
            if enabled(self.focused) {
                return;
            }
        }
        self.focused = start;
    }

    /// Set focus to the given slot index, clamped to the valid range.
    pub fn focus(&mut self, index: usize) {
        self.focused = index.min(N - 1);
    }

    pub fn is_focused(&self, index: usize) -> bool {
        self.focused == index
    }
}

impl<const N: usize> Default for FocusGroup<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_and_prev_wrap() {
        let mut fg = FocusGroup::<3>::new();
        fg.focus_prev();
        assert_eq!(fg.focused(), 2);
        fg.focus_next();
        assert_eq!(fg.focused(), 0);
    }

    #[test]
    fn focus_clamps() {
        let mut fg = FocusGroup::<3>::new();
        fg.focus(10);
        assert!(fg.is_focused(2));
    }

    #[test]
    fn skips_disabled_slots() {
        let mut fg = FocusGroup::<4>::new();
        fg.focus_next_where(true, |i| i != 1);
        assert_eq!(fg.focused(), 2);
        fg.focus_next_where(false, |i| i != 1);
        assert_eq!(fg.focused(), 0);
    }

    #[test]
    fn stays_when_nothing_else_enabled() {
        let mut fg = FocusGroup::<3>::new();
        fg.focus(1);
        fg.focus_next_where(true, |_| false);
        assert_eq!(fg.focused(), 1);
    }
}
