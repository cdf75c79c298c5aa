//! Keyboard focus trap for the open dialog.

#[cfg(test)]
#[path = "focus_test.rs"]
mod focus_test;

/// What to do with a Tab keypress while the dialog is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabMove {
    /// Let the browser move focus; it stays inside the dialog.
    Browser,
    /// Cancel the default and focus the focusable at this index.
    Focus(usize),
    /// Cancel the default; there is nothing inside to focus.
    Hold,
}

/// Decide where Tab (or Shift+Tab when `backwards`) goes, given the number
/// of focusable descendants and the index of the focused one, if focus is
/// inside the dialog at all.
#[must_use]
pub fn cycle(focusable: usize, current: Option<usize>, backwards: bool) -> TabMove {
    if focusable == 0 {
        return TabMove::Hold;
    }
    let last = focusable - 1;
    match (current, backwards) {
        (None, false) => TabMove::Focus(0),
        (None, true) => TabMove::Focus(last),
        (Some(0), true) => TabMove::Focus(last),
        (Some(index), false) if index >= last => TabMove::Focus(0),
        (Some(_), _) => TabMove::Browser,
    }
}

/// Keys that activate a focused non-button control, as a click would.
#[must_use]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}
