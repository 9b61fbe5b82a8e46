use ratatui::style::Color;

/// Colors for every part of the screen
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Editor colors
    pub editor_bg: Color,
    pub editor_fg: Color,
    pub selection_bg: Color,
    pub line_number_fg: Color,
    pub line_number_bg: Color,
    pub hint_fg: Color,

    // Tab bar colors
    pub tab_active_fg: Color,
    pub tab_active_bg: Color,
    pub tab_inactive_fg: Color,
    pub tab_inactive_bg: Color,
    pub tab_separator_bg: Color,

    // Menu bar colors
    pub menu_bg: Color,
    pub menu_fg: Color,
    pub menu_active_bg: Color,
    pub menu_active_fg: Color,
    pub menu_dropdown_bg: Color,
    pub menu_dropdown_fg: Color,
    pub menu_highlight_bg: Color,
    pub menu_highlight_fg: Color,
    pub menu_border_fg: Color,
    pub menu_separator_fg: Color,
    pub menu_disabled_fg: Color,

    pub status_bar_fg: Color,
    pub status_bar_bg: Color,
    pub status_error_fg: Color,
    pub status_error_bg: Color,

    // Picker popup colors
    pub popup_border_fg: Color,
    pub popup_bg: Color,
    pub popup_text_fg: Color,
    pub popup_selection_bg: Color,
    pub popup_dir_fg: Color,
    pub popup_message_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),

            editor_bg: Color::Rgb(30, 30, 30),
            editor_fg: Color::Rgb(212, 212, 212),
            selection_bg: Color::Rgb(38, 79, 120),
            line_number_fg: Color::Rgb(100, 100, 100),
            line_number_bg: Color::Rgb(30, 30, 30),
            hint_fg: Color::Rgb(128, 128, 128),

            tab_active_fg: Color::Yellow,
            tab_active_bg: Color::Blue,
            tab_inactive_fg: Color::White,
            tab_inactive_bg: Color::DarkGray,
            tab_separator_bg: Color::Rgb(45, 45, 48),

            menu_bg: Color::Rgb(60, 60, 65),
            menu_fg: Color::Rgb(220, 220, 220),
            menu_active_bg: Color::Rgb(70, 130, 180),
            menu_active_fg: Color::Rgb(255, 255, 255),
            menu_dropdown_bg: Color::Rgb(50, 50, 50),
            menu_dropdown_fg: Color::Rgb(220, 220, 220),
            menu_highlight_bg: Color::Rgb(70, 130, 180),
            menu_highlight_fg: Color::Rgb(255, 255, 255),
            menu_border_fg: Color::Rgb(100, 100, 100),
            menu_separator_fg: Color::Rgb(80, 80, 80),
            menu_disabled_fg: Color::Rgb(100, 100, 100),

            status_bar_fg: Color::White,
            status_bar_bg: Color::Rgb(45, 45, 48),
            status_error_fg: Color::White,
            status_error_bg: Color::Rgb(160, 40, 40),

            popup_border_fg: Color::Gray,
            popup_bg: Color::Rgb(30, 30, 30),
            popup_text_fg: Color::White,
            popup_selection_bg: Color::Rgb(58, 79, 120),
            popup_dir_fg: Color::LightBlue,
            popup_message_fg: Color::LightRed,
        }
    }
}
