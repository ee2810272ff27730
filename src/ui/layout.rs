use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Widest the card gets, in columns
pub const CARD_MAX_WIDTH: u16 = 72;

/// Width of the add button
const BUTTON_WIDTH: u16 = 7;

/// Main layout structure
pub struct MainLayout {
    /// Whole terminal, for the glyph backdrop
    pub background: Rect,
    pub card: Rect,
    pub title_area: Rect,
    pub input_area: Rect,
    pub button_area: Rect,
    pub list_area: Rect,
    pub keybindings_area: Rect,
}

/// Create the main layout
/// - Backdrop: the full terminal
/// - Card: centered, at most `CARD_MAX_WIDTH` wide, one row of margin top and bottom
///   - Title (1 row), spacer, input + add button (3 rows), list, keybindings (1 row)
pub fn create_layout(area: Rect) -> MainLayout {
    let card = centered_card(area);
    // Inside the card border
    let inner = Rect::new(
        card.x.saturating_add(2),
        card.y.saturating_add(1),
        card.width.saturating_sub(4),
        card.height.saturating_sub(2),
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Spacer
            Constraint::Length(3), // Input + button
            Constraint::Min(0),    // Task list
            Constraint::Length(1), // Keybindings
        ])
        .split(inner);

    let input_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),               // Input field
            Constraint::Length(BUTTON_WIDTH), // Add button
        ])
        .split(rows[2]);

    MainLayout {
        background: area,
        card,
        title_area: rows[0],
        input_area: input_row[0],
        button_area: input_row[1],
        list_area: rows[3],
        keybindings_area: rows[4],
    }
}

/// Center the card horizontally, leaving a one-row margin vertically
fn centered_card(area: Rect) -> Rect {
    let width = area.width.min(CARD_MAX_WIDTH);
    let x = area.x + (area.width - width) / 2;
    let margin = if area.height > 12 { 1 } else { 0 };
    Rect::new(x, area.y + margin, width, area.height.saturating_sub(margin * 2))
}
