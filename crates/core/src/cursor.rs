//! Selection cursor over the suggestion list.
//!
//! `None` means nothing is highlighted; arrow keys move the index within
//! `0..len`. Pure integer logic, no I/O.

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SelectionCursor {
    index: Option<usize>,
}

impl SelectionCursor {
    pub fn new() -> Self {
        Self { index: None }
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Move toward the end of the list, saturating at `len - 1`.
    /// No-op when the list is empty.
    pub fn move_down(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.index = Some(match self.index {
            None => 0,
            Some(i) => (i + 1).min(len - 1),
        });
    }

    /// Move toward the top; stepping up from index 0 clears the highlight.
    pub fn move_up(&mut self) {
        self.index = match self.index {
            None | Some(0) => None,
            Some(i) => Some(i - 1),
        };
    }

    /// Clear the highlight. Called whenever the list is replaced,
    /// dismissed, or a submission starts.
    pub fn reset(&mut self) {
        self.index = None;
    }

    /// Keep the index valid after the list shrinks.
    pub fn clamp(&mut self, new_len: usize) {
        if let Some(i) = self.index {
            if i >= new_len {
                self.index = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn down_saturates_at_last_index() {
        let mut cursor = SelectionCursor::new();
        for _ in 0..10 {
            cursor.move_down(3);
        }
        assert_eq!(cursor.index(), Some(2));
    }

    #[test]
    fn up_from_top_clears_highlight() {
        let mut cursor = SelectionCursor::new();
        cursor.move_down(3);
        assert_eq!(cursor.index(), Some(0));
        cursor.move_up();
        assert_eq!(cursor.index(), None);
        // Staying at None is fine too.
        cursor.move_up();
        assert_eq!(cursor.index(), None);
    }

    #[test]
    fn down_on_empty_list_is_a_no_op() {
        let mut cursor = SelectionCursor::new();
        cursor.move_down(0);
        assert_eq!(cursor.index(), None);
    }

    #[test]
    fn walk_down_then_up_returns_to_none() {
        let mut cursor = SelectionCursor::new();
        cursor.move_down(5);
        cursor.move_down(5);
        cursor.move_down(5);
        assert_eq!(cursor.index(), Some(2));
        cursor.move_up();
        cursor.move_up();
        cursor.move_up();
        assert_eq!(cursor.index(), None);
    }

    #[test]
    fn clamp_resets_out_of_range_index() {
        let mut cursor = SelectionCursor::new();
        for _ in 0..6 {
            cursor.move_down(6);
        }
        assert_eq!(cursor.index(), Some(5));
        cursor.clamp(3);
        assert_eq!(cursor.index(), None);
    }

    #[test]
    fn clamp_keeps_in_range_index() {
        let mut cursor = SelectionCursor::new();
        cursor.move_down(6);
        cursor.move_down(6);
        cursor.clamp(3);
        assert_eq!(cursor.index(), Some(1));
    }
}
