use ratatui::style::{Color, Modifier, Style};

/// Default text style
pub fn default_style() -> Style {
    Style::default().fg(Color::LightGreen)
}

/// Card background
pub fn card_style() -> Style {
    Style::default().fg(Color::Green).bg(Color::Black)
}

/// Selected row highlight style
pub fn selected_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Green)
        .add_modifier(Modifier::BOLD)
}

/// Title in the bright half of its pulse
pub fn title_style() -> Style {
    Style::default()
        .fg(Color::LightGreen)
        .add_modifier(Modifier::BOLD)
}

/// Title in the dim half of its pulse
pub fn title_dim_style() -> Style {
    Style::default().fg(Color::Green)
}

/// Border style
pub fn border_style() -> Style {
    Style::default().fg(Color::Green)
}

/// Border of the focused element
pub fn focused_border_style() -> Style {
    Style::default()
        .fg(Color::LightGreen)
        .add_modifier(Modifier::BOLD)
}

/// Placeholder text in the empty input
pub fn placeholder_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Add button
pub fn button_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Green)
        .add_modifier(Modifier::BOLD)
}

/// Completed task text
pub fn done_style() -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::CROSSED_OUT | Modifier::DIM)
}

/// Delete control
pub fn delete_style() -> Style {
    Style::default().fg(Color::Red)
}

/// Keybinding hint style
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Background glyph at the given brightness (0.0 to 1.0)
pub fn glyph_style(intensity: f64) -> Style {
    if intensity >= 0.66 {
        Style::default().fg(Color::Green)
    } else if intensity >= 0.33 {
        Style::default().fg(Color::Green).add_modifier(Modifier::DIM)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_style_brightens_with_intensity() {
        assert_eq!(glyph_style(1.0).fg, Some(Color::Green));
        assert!(glyph_style(0.5).add_modifier.contains(Modifier::DIM));
        assert_eq!(glyph_style(0.1).fg, Some(Color::DarkGray));
    }
}
