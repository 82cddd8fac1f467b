//! Navigation actions - shared across screens
//!
//! Generic movement that the active view translates into its own action.

/// Generic navigation actions (arrows and vim-style keys)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Move up (k, up arrow)
    Up,
    /// Move down (j, down arrow)
    Down,
    /// Move left (h, left arrow)
    Left,
    /// Move right (l, right arrow)
    Right,
    /// Next page of results (], PageDown)
    NextPage,
    /// Previous page of results ([, PageUp)
    PreviousPage,
}
