pub mod handles;
pub mod input_bar;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod rain_pane;
pub mod styles;

use crate::app::AppState;
use crate::ticker::pulse_on;
use handles::RowHandles;
use input_bar::render_input_bar;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use rain_pane::render_rain_pane;
use ratatui::{
    layout::{Alignment, Rect},
    text::Span,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use styles::{border_style, card_style, hint_style, title_dim_style, title_style};

const TITLE: &str = "Matrix Todo";

/// Below this the card is not drawn at all
const MIN_CARD_WIDTH: u16 = 20;
const MIN_CARD_HEIGHT: u16 = 8;

/// Main render function - draws the entire UI and returns the focusable
/// elements of this frame
pub fn render(f: &mut Frame, app: &mut AppState) -> RowHandles {
    let size = f.size();
    let layout = create_layout(size);
    let mut handles = RowHandles::new();

    // Backdrop first, the card covers it
    render_rain_pane(f, &app.rain, layout.background);

    if layout.card.width < MIN_CARD_WIDTH || layout.card.height < MIN_CARD_HEIGHT {
        return handles;
    }

    f.render_widget(Clear, layout.card);
    let counter = format!(" {}/{} done ", app.tasks.completed_count(), app.tasks.len());
    let card = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style())
        .style(card_style())
        .title(Span::styled(counter, hint_style()))
        .title_alignment(Alignment::Right);
    f.render_widget(card, layout.card);

    render_title(f, app, layout.title_area);
    render_input_bar(f, app, layout.input_area, layout.button_area, &mut handles);
    render_list_pane(f, app, layout.list_area, &mut handles);
    render_keybindings(f, app, layout.keybindings_area);

    handles
}

fn render_title(f: &mut Frame, app: &AppState, area: Rect) {
    let style = if pulse_on(app.animation_frame, app.config.tick) {
        title_style()
    } else {
        title_dim_style()
    };
    let title = Paragraph::new(Span::styled(TITLE, style)).alignment(Alignment::Center);
    f.render_widget(title, area);
}
