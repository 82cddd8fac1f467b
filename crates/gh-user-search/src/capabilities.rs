//! View capability system
//!
//! Views declare what kind of input they understand. The keyboard middleware
//! reads these flags to decide whether a key is text (typed into the search
//! field) or a command (navigate the grid, flip pages, open things).

use bitflags::bitflags;

bitflags! {
    /// Capabilities that a view can declare for its current focus
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PanelCapabilities: u32 {
        /// Printable keys edit a text field instead of triggering commands
        const TEXT_INPUT = 1 << 0;

        /// Supports vim-style navigation keybindings (j, k, h, l)
        const VIM_NAVIGATION_BINDINGS = 1 << 1;

        /// Can move a selection between items
        const ITEM_NAVIGATION = 1 << 2;

        /// Can flip between result pages
        const PAGINATION = 1 << 3;

        /// The selected item can be opened in the browser
        const OPEN_IN_BROWSER = 1 << 4;
    }
}

impl PanelCapabilities {
    /// Check if the view takes printable characters as text
    pub fn accepts_text_input(self) -> bool {
        self.contains(Self::TEXT_INPUT)
    }

    /// Check if the view supports vim-style navigation (j/k/h/l)
    pub fn supports_vim_navigation(self) -> bool {
        self.contains(Self::VIM_NAVIGATION_BINDINGS | Self::ITEM_NAVIGATION)
    }

    /// Check if the view pages through results
    pub fn supports_pagination(self) -> bool {
        self.contains(Self::PAGINATION)
    }
}
