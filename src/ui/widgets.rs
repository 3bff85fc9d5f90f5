//! Reusable UI widget helpers

/// First visible index of a list scrolled just enough to keep `selected` in view.
///
/// ```ignore
/// let start = scroll_start(app.state.form.active_field_index(), visible_rows);
/// ```
pub fn scroll_start(selected: usize, visible: usize) -> usize {
    if visible == 0 {
        return selected;
    }
    if selected >= visible {
        selected - (visible - 1)
    } else {
        0
    }
}

/// Replace every character with a bullet
pub fn mask(value: &str) -> String {
    "•".repeat(value.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_start_stays_at_top_while_selection_fits() {
        assert_eq!(scroll_start(0, 5), 0);
        assert_eq!(scroll_start(4, 5), 0);
    }

    #[test]
    fn test_scroll_start_keeps_selection_on_last_row() {
        assert_eq!(scroll_start(5, 5), 1);
        assert_eq!(scroll_start(11, 5), 7);
    }

    #[test]
    fn test_scroll_start_with_no_room() {
        assert_eq!(scroll_start(3, 0), 3);
    }

    #[test]
    fn test_mask_counts_characters() {
        assert_eq!(mask("Abc1!"), "•••••");
        assert_eq!(mask("ë"), "•");
        assert_eq!(mask(""), "");
    }
}
