//! Transient UI toggles shared between the header and the search widget.

/// Open/closed state of the overlay menus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiStore {
    profile_menu_open: bool,
    mobile_menu_open: bool,
    passenger_popover_open: bool,
}

impl UiStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn profile_menu_open(&self) -> bool {
        self.profile_menu_open
    }

    pub fn mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn passenger_popover_open(&self) -> bool {
        self.passenger_popover_open
    }

    pub fn set_profile_menu_open(&mut self, open: bool) {
        self.profile_menu_open = open;
    }

    pub fn set_mobile_menu_open(&mut self, open: bool) {
        self.mobile_menu_open = open;
    }

    pub fn set_passenger_popover_open(&mut self, open: bool) {
        self.passenger_popover_open = open;
    }
}
