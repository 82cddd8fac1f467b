//! Status Bar Widget
//!
//! Renders the status bar at the bottom of the screen.
//! Format: `[timestamp] emoji message [source]          key hints`

use crate::view_models::StatusBarViewModel;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

/// Widget for rendering the status bar
pub struct StatusBarWidget<'a>(pub &'a StatusBarViewModel);

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let vm = self.0;

        if area.height < 1 || area.width < 4 {
            return;
        }

        // Fill entire row with background
        for x in area.x..area.x + area.width {
            buf[(x, area.y)].set_bg(vm.bg_color).set_char(' ');
        }

        // Hints are right-aligned and dropped first when space runs out
        let hints_width = vm.hints.chars().count() as u16 + 2;
        let show_hints = area.width > hints_width * 2;
        let right_edge = if show_hints {
            let hints_x = area.x + area.width - hints_width + 1;
            buf.set_string(hints_x, area.y, vm.hints, vm.metadata_style);
            hints_x.saturating_sub(1)
        } else {
            area.x + area.width
        };

        let mut x = area.x + 1; // 1 char padding

        if !vm.timestamp.is_empty() {
            let ts_str = format!("[{}] ", vm.timestamp);
            buf.set_string(x, area.y, &ts_str, vm.metadata_style);
            x += ts_str.len() as u16;
        }

        // Emoji (estimate 2 chars width for most emoji)
        buf.set_string(x, area.y, format!("{} ", vm.emoji), vm.message_style);
        x += 3;

        let source_str = if vm.source.is_empty() {
            String::new()
        } else {
            format!(" [{}]", vm.source)
        };

        let available = right_edge.saturating_sub(x + source_str.len() as u16 + 1) as usize;
        let message = if vm.message.chars().count() > available {
            let truncated: String = vm.message.chars().take(available.saturating_sub(1)).collect();
            format!("{}…", truncated)
        } else {
            vm.message.clone()
        };
        buf.set_string(x, area.y, &message, vm.message_style);
        x += message.chars().count() as u16;

        if !source_str.is_empty() && x + (source_str.len() as u16) < right_edge {
            buf.set_string(x, area.y, &source_str, vm.metadata_style);
        }
    }
}
