//! Cursor and scroll-offset bookkeeping for a selectable list of options.

/// Tracks cursor position and scroll offset for a selectable collection.
///
/// Movement wraps at both ends; the offset follows the cursor so it always
/// stays within the `visible` window.
#[derive(Debug, Clone)]
pub struct SelectionState {
    cursor: usize,
    offset: usize,
    count: usize,
    visible: usize,
}

impl SelectionState {
    pub fn new(count: usize, visible: usize) -> Self {
        Self {
            cursor: 0,
            offset: 0,
            count,
            visible,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
    pub fn offset(&self) -> usize {
        self.offset
    }
    pub fn count(&self) -> usize {
        self.count
    }

    /// Replace the item count. The cursor and offset go back to the top.
    pub fn reset(&mut self, count: usize) {
        self.count = count;
        self.cursor = 0;
        self.offset = 0;
    }

    pub fn set_visible(&mut self, visible: usize) {
        self.visible = visible;
        self.ensure_visible();
    }

    pub fn move_up(&mut self) {
        if self.count == 0 {
            return;
        }
        self.cursor = if self.cursor == 0 {
            self.count - 1
        } else {
            self.cursor - 1
        };
        self.ensure_visible();
    }

    pub fn move_down(&mut self) {
        if self.count == 0 {
            return;
        }
        self.cursor = if self.cursor + 1 >= self.count {
            0
        } else {
            self.cursor + 1
        };
        self.ensure_visible();
    }

    pub fn home(&mut self) {
        self.cursor = 0;
        self.ensure_visible();
    }

    pub fn end(&mut self) {
        if self.count > 0 {
            self.cursor = self.count - 1;
        }
        self.ensure_visible();
    }

    pub fn select(&mut self, index: usize) {
        if self.count == 0 {
            return;
        }
        self.cursor = index.min(self.count - 1);
        self.ensure_visible();
    }

    fn ensure_visible(&mut self) {
        if self.count == 0 || self.visible == 0 {
            return;
        }
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + self.visible {
            self.offset = self.cursor + 1 - self.visible;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_down_wraps() {
        let mut s = SelectionState::new(3, 10);
        s.move_down();
        s.move_down();
        assert_eq!(s.cursor(), 2);
        s.move_down();
        assert_eq!(s.cursor(), 0);
    }

    #[test]
    fn move_up_wraps() {
        let mut s = SelectionState::new(3, 10);
        s.move_up();
        assert_eq!(s.cursor(), 2);
    }

    #[test]
    fn home_end() {
        let mut s = SelectionState::new(7, 3);
        s.end();
        assert_eq!(s.cursor(), 6);
        assert_eq!(s.offset(), 4);
        s.home();
        assert_eq!((s.cursor(), s.offset()), (0, 0));
    }

    #[test]
    fn select_clamps() {
        let mut s = SelectionState::new(3, 3);
        s.select(100);
        assert_eq!(s.cursor(), 2);
    }

    #[test]
    fn empty_count_is_noop() {
        let mut s = SelectionState::new(0, 5);
        s.move_down();
        s.move_up();
        s.select(4);
        assert_eq!(s.cursor(), 0);
    }

    #[test]
    fn reset_returns_to_top() {
        let mut s = SelectionState::new(5, 2);
        s.end();
        s.reset(2);
        assert_eq!((s.cursor(), s.offset(), s.count()), (0, 0, 2));
    }
}
