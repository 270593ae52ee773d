use ratatui::style::Color;

pub struct Theme {
    pub border_focus: Color,
    pub border_inactive: Color,
    pub echo_fg: Color,
    pub info_fg: Color,
    pub error_fg: Color,
    pub hint_fg: Color,
    pub button_fg: Color,
    pub button_disabled_fg: Color,
    pub browsing_fg: Color,
}

pub const THEME: Theme = Theme {
    border_focus: Color::Cyan,
    border_inactive: Color::DarkGray,
    echo_fg: Color::Green,
    info_fg: Color::Gray,
    error_fg: Color::Red,
    hint_fg: Color::DarkGray,
    button_fg: Color::Yellow,
    button_disabled_fg: Color::DarkGray,
    browsing_fg: Color::Magenta,
};
