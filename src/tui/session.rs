use std::io;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event as TermEvent, KeyCode, KeyEvent,
        KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    Terminal,
};
use gridcal::{
    app::{Action, AppState, SwipeDirection, UiMode},
    input::{self, gesture::{DragTracker, Gesture}},
    ui::month_view::{self, GridGeometry},
};
use crate::tui::presentation::{screen_areas, ui};

pub fn run_tui(app: AppState, swipe_threshold: u16) -> Result<(), io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    tracing::info!("Starting session on {}", app.current_month);
    let res = run_app(&mut terminal, app, swipe_threshold);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    match res {
        Ok(app) => {
            tracing::info!("Session ended with {} events", app.events.len());
            Ok(())
        }
        Err(err) => {
            tracing::error!("Session failed: {}", err);
            Err(err)
        }
    }
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: AppState,
    swipe_threshold: u16,
) -> io::Result<AppState> {
    let mut drag = DragTracker::new(swipe_threshold);

    loop {
        terminal.draw(|f| ui(f, &app))?;

        let action = match event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => handle_key(key, &app),
            TermEvent::Mouse(mouse) => handle_mouse(mouse, &app, &mut drag, terminal.size()?),
            _ => None,
        };

        if let Some(action) = action {
            app = app.apply(action);
        }

        if app.should_quit {
            return Ok(app);
        }
    }
}

fn handle_key(key: KeyEvent, app: &AppState) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }
    input::map_key(key.code, app)
}

fn handle_mouse(
    mouse: MouseEvent,
    app: &AppState,
    drag: &mut DragTracker,
    size: Rect,
) -> Option<Action> {
    if app.mode != UiMode::Idle {
        return None;
    }

    let grid_area = screen_areas(size).grid;

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if contains(grid_area, mouse.column, mouse.row) {
                drag.press(mouse.column, mouse.row);
            }
            None
        }
        MouseEventKind::Up(MouseButton::Left) => match drag.release(mouse.column)? {
            Gesture::Swipe(direction) => Some(Action::Swipe(direction)),
            Gesture::Tap { column, row } => tap_action(app, grid_area, column, row),
        },
        MouseEventKind::ScrollUp if contains(grid_area, mouse.column, mouse.row) => {
            Some(Action::Swipe(SwipeDirection::Right))
        }
        MouseEventKind::ScrollDown if contains(grid_area, mouse.column, mouse.row) => {
            Some(Action::Swipe(SwipeDirection::Left))
        }
        _ => None,
    }
}

fn tap_action(app: &AppState, grid_area: Rect, column: u16, row: u16) -> Option<Action> {
    let grid = month_view::calculate_layout(app);
    GridGeometry::for_area(grid_area)
        .cell_at(&grid, column, row)
        .map(Action::SelectDate)
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}
