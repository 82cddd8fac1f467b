use crate::language::LanguageCategory;
use ratatui::{prelude::*, style::palette::tailwind};

/// Application theme - centralized color and style management
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg_primary: Color,
    pub bg_panel: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Accent colors
    pub accent_primary: Color,

    // Status colors
    pub status_success: Color,
    pub status_error: Color,
    pub status_warning: Color,
    pub status_info: Color,

    // Selection colors
    pub selected_bg: Color,
    pub selected_fg: Color,

    // Cards
    pub card_border: Color,
    pub card_border_focused: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg_primary: tailwind::SLATE.c950,
            bg_panel: tailwind::SLATE.c800,

            text_primary: tailwind::SLATE.c100,
            text_secondary: tailwind::SLATE.c200,
            text_muted: tailwind::SLATE.c400,

            accent_primary: tailwind::CYAN.c400,

            status_success: tailwind::GREEN.c400,
            status_error: tailwind::RED.c400,
            status_warning: tailwind::YELLOW.c400,
            status_info: tailwind::BLUE.c400,

            selected_bg: tailwind::BLUE.c400,
            selected_fg: Color::White,

            card_border: tailwind::SLATE.c600,
            card_border_focused: tailwind::CYAN.c400,
        }
    }

    /// Colour of a repository language badge
    ///
    /// Roughly the colours GitHub uses on its language bar.
    pub fn language_color(&self, category: LanguageCategory) -> Color {
        match category {
            LanguageCategory::JavaScript => tailwind::YELLOW.c300,
            LanguageCategory::TypeScript => tailwind::BLUE.c500,
            LanguageCategory::Python => tailwind::SKY.c600,
            LanguageCategory::Java => tailwind::ORANGE.c700,
            LanguageCategory::Html => tailwind::ORANGE.c500,
            LanguageCategory::Css => tailwind::VIOLET.c500,
            LanguageCategory::Ruby => tailwind::RED.c700,
            LanguageCategory::Go => tailwind::CYAN.c500,
            LanguageCategory::Rust => tailwind::ORANGE.c300,
            LanguageCategory::Php => tailwind::INDIGO.c400,
            LanguageCategory::C => tailwind::STONE.c400,
            LanguageCategory::CSharp => tailwind::GREEN.c700,
            LanguageCategory::Cpp => tailwind::PINK.c600,
            LanguageCategory::Shell => tailwind::LIME.c500,
            LanguageCategory::Swift => tailwind::ORANGE.c400,
            LanguageCategory::Kotlin => tailwind::PURPLE.c400,
            LanguageCategory::Dart => tailwind::TEAL.c500,
            LanguageCategory::Vue => tailwind::EMERALD.c400,
            LanguageCategory::Neutral => tailwind::GRAY.c500,
        }
    }

    // Prebuilt styles for common use cases

    /// Style for panel backgrounds
    pub fn panel_background(&self) -> Style {
        Style::default().bg(self.bg_panel)
    }

    /// Style for panel borders
    pub fn panel_border(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for panel titles
    pub fn panel_title(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Border of a user card
    pub fn card_border(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.card_border_focused)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.card_border)
        }
    }

    /// Style for key hints (e.g., "Enter" in "Enter search")
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for selected list rows
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Badge with a coloured background, used for languages
    pub fn badge(&self, bg_color: Color) -> Style {
        Style::default()
            .fg(tailwind::SLATE.c950)
            .bg(bg_color)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for error messages
    pub fn error(&self) -> Style {
        Style::default()
            .fg(self.status_error)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for muted/helper text
    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for primary text
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for secondary text
    pub fn text_secondary(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }
}
