use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::eval::EvalDisplayState;
use crate::ui::layout::{screen_regions, CALCULATE_LABEL};
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, LOADING_TEXT, PLACEHOLDER_TEXT, REGION_TEXT, STATUS_ERROR,
};

const LOADING_INDICATOR: &str = "Calculating...";

/// Text of the primary display region for a given state.
pub fn primary_line(state: &EvalDisplayState) -> String {
    match state {
        EvalDisplayState::Idle => String::new(),
        EvalDisplayState::Loading => LOADING_INDICATOR.to_string(),
        EvalDisplayState::Success(evaluation) => format!("Result: {}", evaluation.result),
        EvalDisplayState::Error(message) => message.clone(),
    }
}

/// Lines of the secondary display region for a given state.
///
/// On success: the postfix tokens joined by single spaces, then the
/// infix string reconstructed from them.
pub fn trace_lines(state: &EvalDisplayState) -> Vec<String> {
    match state {
        EvalDisplayState::Idle => Vec::new(),
        EvalDisplayState::Loading => vec![LOADING_INDICATOR.to_string()],
        EvalDisplayState::Success(evaluation) => vec![
            format!("Postfix notation: {}", evaluation.postfix.join(" ")),
            format!("Infix from postfix: {}", evaluation.infix_from_postfix),
        ],
        EvalDisplayState::Error(message) => vec![message.clone()],
    }
}

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let regions = screen_regions(frame.area());
    let state = app.display();

    let region_style = match state {
        EvalDisplayState::Error(_) => Style::default().fg(STATUS_ERROR),
        EvalDisplayState::Loading => Style::default().fg(LOADING_TEXT),
        _ => Style::default().fg(REGION_TEXT),
    };

    // Input field with placeholder while empty.
    let input_line = if app.input().is_empty() {
        Line::from(Span::styled(
            format!("e.g., {}", app.placeholder()),
            Style::default().fg(PLACEHOLDER_TEXT),
        ))
    } else {
        Line::from(Span::styled(app.input(), Style::default().fg(REGION_TEXT)))
    };
    let input_widget = Paragraph::new(input_line).block(
        Block::default()
            .title("Expression")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(input_widget, regions.input);

    // Keep the cursor at the end of the typed text.
    let cursor_x = regions.input.x + 1 + app.input().chars().count().min(u16::MAX as usize) as u16;
    let cursor_x = cursor_x.min(regions.input.right().saturating_sub(2));
    frame.set_cursor_position((cursor_x, regions.input.y + 1));

    let button_style = if state.is_loading() {
        Style::default().fg(LOADING_TEXT)
    } else {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    };
    let button_widget =
        Paragraph::new(Line::from(Span::styled(CALCULATE_LABEL, button_style)));
    frame.render_widget(button_widget, regions.button);

    let result_widget = Paragraph::new(Line::from(primary_line(state)))
        .style(region_style)
        .block(
            Block::default()
                .title("Result")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );
    frame.render_widget(result_widget, regions.result);

    let trace_text: Vec<Line> = trace_lines(state).into_iter().map(Line::from).collect();
    let trace_widget = Paragraph::new(trace_text).style(region_style).block(
        Block::default()
            .title("Postfix")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(trace_widget, regions.trace);

    let footer_widget = Paragraph::new(Line::from(Span::styled(
        "Enter: Calculate  Click: [ Calculate ]  Ctrl+U: Clear  Ctrl+Q: Quit",
        Style::default().fg(PLACEHOLDER_TEXT),
    )));
    frame.render_widget(footer_widget, regions.footer);
}
