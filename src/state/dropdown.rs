//! Profile dropdown menu visibility.

#[cfg(test)]
#[path = "dropdown_test.rs"]
mod dropdown_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DropdownState {
    pub open: bool,
}

impl DropdownState {
    pub fn is_open(&self) -> bool {
        self.open
    }

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

    /// Any click outside the menu dismisses it.
    pub fn handle_outside_click(&mut self) -> bool {
        let was_open = self.open;
        self.close();
        was_open
    }
}
