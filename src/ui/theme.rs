use ratatui::style::Color;

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub title: Color,
    pub today_bg: Color,
    pub today_fg: Color,
    pub selected_outline: Color,
    pub day_fg: Color,
    pub event_marker: Color,
    pub weekday_header: Color,
    pub muted: Color,
    pub status_bar: Color,
    pub help_title: Color,
    pub help_section: Color,
    pub command_mode: Color,
    pub dialog_bg: Color,
    pub error: Color,
    pub success: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            name: "default".to_string(),
            title: Color::Cyan,
            today_bg: Color::Cyan,
            today_fg: Color::Black,
            selected_outline: Color::White,
            day_fg: Color::Gray,
            event_marker: Color::Yellow,
            weekday_header: Color::Yellow,
            muted: Color::DarkGray,
            status_bar: Color::White,
            help_title: Color::Cyan,
            help_section: Color::Yellow,
            command_mode: Color::White,
            dialog_bg: Color::Black,
            error: Color::Red,
            success: Color::Green,
        }
    }

    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            title: Color::Rgb(136, 192, 208),
            today_bg: Color::Rgb(136, 192, 208),
            today_fg: Color::Rgb(46, 52, 64),
            selected_outline: Color::Rgb(236, 239, 244),
            day_fg: Color::Rgb(216, 222, 233),
            event_marker: Color::Rgb(235, 203, 139),
            weekday_header: Color::Rgb(129, 161, 193),
            muted: Color::Rgb(76, 86, 106),
            status_bar: Color::Rgb(216, 222, 233),
            help_title: Color::Rgb(136, 192, 208),
            help_section: Color::Rgb(235, 203, 139),
            command_mode: Color::Rgb(216, 222, 233),
            dialog_bg: Color::Rgb(46, 52, 64),
            error: Color::Rgb(191, 97, 106),
            success: Color::Rgb(163, 190, 140),
        }
    }

    pub fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            title: Color::Rgb(250, 189, 47),
            today_bg: Color::Rgb(131, 165, 152),
            today_fg: Color::Rgb(40, 40, 40),
            selected_outline: Color::Rgb(251, 241, 199),
            day_fg: Color::Rgb(235, 219, 178),
            event_marker: Color::Rgb(254, 128, 25),
            weekday_header: Color::Rgb(184, 187, 38),
            muted: Color::Rgb(146, 131, 116),
            status_bar: Color::Rgb(235, 219, 178),
            help_title: Color::Rgb(250, 189, 47),
            help_section: Color::Rgb(254, 128, 25),
            command_mode: Color::Rgb(235, 219, 178),
            dialog_bg: Color::Rgb(40, 40, 40),
            error: Color::Rgb(251, 73, 52),
            success: Color::Rgb(184, 187, 38),
        }
    }

    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            title: Color::Rgb(189, 147, 249),
            today_bg: Color::Rgb(139, 233, 253),
            today_fg: Color::Rgb(40, 42, 54),
            selected_outline: Color::Rgb(255, 121, 198),
            day_fg: Color::Rgb(248, 248, 242),
            event_marker: Color::Rgb(80, 250, 123),
            weekday_header: Color::Rgb(241, 250, 140),
            muted: Color::Rgb(98, 114, 164),
            status_bar: Color::Rgb(248, 248, 242),
            help_title: Color::Rgb(189, 147, 249),
            help_section: Color::Rgb(241, 250, 140),
            command_mode: Color::Rgb(248, 248, 242),
            dialog_bg: Color::Rgb(40, 42, 54),
            error: Color::Rgb(255, 85, 85),
            success: Color::Rgb(80, 250, 123),
        }
    }

    /// Looks up a theme by name, falling back to the default for unknown names.
    pub fn get_by_name(name: &str) -> Self {
        Self::find(name).unwrap_or_else(|| {
            tracing::warn!("Unknown theme '{}', using default", name);
            Self::default_theme()
        })
    }

    pub fn find(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::default_theme()),
            "nord" => Some(Self::nord()),
            "gruvbox" => Some(Self::gruvbox()),
            "dracula" => Some(Self::dracula()),
            _ => None,
        }
    }

    pub fn available_themes() -> Vec<&'static str> {
        vec!["default", "nord", "gruvbox", "dracula"]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}
