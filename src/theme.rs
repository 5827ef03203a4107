use ratatui::style::{Color, Modifier, Style};

pub struct Theme {
    pub root_bg: Color,
    pub focus_border: Color,
    pub blurred_border: Color,
    pub text: Color,
    pub text_secondary: Color,
    pub sidebar_bg: Color,
    pub input_bg: Color,

    // Specific components
    pub nav_link: Style,
    pub nav_selected: Style,
    pub nav_current: Style,
    pub toggle: Style,
    pub toggle_selected: Style,
    pub sidebar_title: Style,
    pub field_label: Style,
    pub field_value: Style,
    pub field_focused: Style,
    pub placeholder: Style,
    pub page_title: Style,
    pub footer: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            root_bg: Color::Black,
            focus_border: Color::Cyan,
            blurred_border: Color::DarkGray,
            text: Color::White,
            text_secondary: Color::Gray,
            sidebar_bg: Color::Rgb(17, 24, 39),
            input_bg: Color::Rgb(31, 41, 55),

            nav_link: Style::default().fg(Color::White),
            nav_selected: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            nav_current: Style::default().fg(Color::White).add_modifier(Modifier::UNDERLINED),
            toggle: Style::default().fg(Color::White).bg(Color::Rgb(31, 41, 55)),
            toggle_selected: Style::default().fg(Color::White).bg(Color::Blue).add_modifier(Modifier::BOLD),
            sidebar_title: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            field_label: Style::default().fg(Color::Gray),
            field_value: Style::default().fg(Color::White).bg(Color::Rgb(31, 41, 55)),
            field_focused: Style::default().fg(Color::Yellow).bg(Color::Rgb(31, 41, 55)).add_modifier(Modifier::BOLD),
            placeholder: Style::default().fg(Color::DarkGray).bg(Color::Rgb(31, 41, 55)).add_modifier(Modifier::ITALIC),
            page_title: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            footer: Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
        }
    }
}
