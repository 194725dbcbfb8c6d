//! Help modal visibility.
//!
//! An open modal also locks page scrolling; the component mirrors
//! [`ModalState::body_scroll_locked`] onto `<body>`.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    pub open: bool,
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn body_scroll_locked(&self) -> bool {
        self.open
    }

    /// Flip visibility and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Close on `Escape`. Returns whether the key was consumed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key == "Escape" && self.open {
            self.close();
            return true;
        }
        false
    }

    /// Close when a click lands on the overlay itself rather than the dialog.
    pub fn handle_backdrop_click(&mut self, on_overlay: bool) -> bool {
        if on_overlay && self.open {
            self.close();
            return true;
        }
        false
    }
}
