// Terminal UI entry point and event loop

pub mod app;
pub mod components;
pub mod input;
pub mod modal;
pub mod views;

use crate::catalog;
use crate::config::Config;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use modal::{Modal, ModalAction};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

/// Frame/animation cadence. Also drives the scroll-debounce polling, so it
/// must stay well under the 100ms debounce window.
const TICK_INTERVAL: Duration = Duration::from_millis(33);

/// How often we drain the crossterm event queue.
const INPUT_POLL: Duration = Duration::from_millis(10);

pub async fn run_tui(config: Config, log_buffer: LogBuffer) -> Result<()> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to create terminal")?;

    let app = App::new(config, log_buffer);
    let result = run_loop(&mut terminal, app).await;

    // Restore the terminal even when the loop errored
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("failed to leave alternate screen")?;
    terminal.show_cursor().context("failed to restore cursor")?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
) -> Result<()> {
    let mut tick = tokio::time::interval(TICK_INTERVAL);
    tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        terminal
            .draw(|f| views::draw(f, &mut app))
            .context("failed to draw frame")?;

        tokio::select! {
            _ = tick.tick() => {
                app.tick(Instant::now());
            }
            _ = tokio::time::sleep(INPUT_POLL) => {
                while event::poll(Duration::ZERO).context("event poll failed")? {
                    match event::read().context("event read failed")? {
                        Event::Key(key) => handle_key(&mut app, key),
                        Event::Mouse(mouse) => handle_mouse(&mut app, mouse),
                        // Resizes flow through sync_layout on the next draw
                        _ => {}
                    }
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Layered key dispatch: an open modal absorbs everything, then the search
/// input, then the page-level key map.
fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        app.input.handle_key_release(key.code);
        return;
    }

    // Ctrl-C always quits; raw mode means it arrives as a key event
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    if let Some(mut modal) = app.modal.take() {
        // The key that opened a menu also closes it
        let toggle_key = matches!(
            (&modal, key.code),
            (Modal::NavMenu { .. }, KeyCode::Char('m') | KeyCode::Char('M'))
                | (Modal::CallMenu { .. }, KeyCode::Char('c') | KeyCode::Char('C'))
        );
        if toggle_key {
            return;
        }

        match modal.handle_input(key.code, app.coordinator.len()) {
            ModalAction::None => app.modal = Some(modal),
            ModalAction::Close => {}
            ModalAction::JumpTo(index) => app.select_section(index, Instant::now()),
            ModalAction::Call(index) => {
                if let Some(line) = catalog::call_lines().get(index) {
                    tracing::info!(line = line.label, "call requested");
                    app.show_toast(format!("Calling {} {}", line.label, line.number));
                }
            }
        }
        return;
    }

    if app.search_active {
        handle_search_key(app, key.code);
        return;
    }

    if !app.input.handle_key_press(key.code) {
        return;
    }

    let now = Instant::now();
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,

        // Scrolling
        KeyCode::Up | KeyCode::Char('k') => app.scroll_by(-1, now),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_by(1, now),
        KeyCode::PageUp => app.page_up(now),
        KeyCode::PageDown => app.page_down(now),
        KeyCode::Home | KeyCode::Char('g') => app.scroll_to_top(now),
        KeyCode::End | KeyCode::Char('G') => app.scroll_to_bottom(now),

        // Section jumps
        KeyCode::Tab => app.select_next_section(now),
        KeyCode::BackTab => app.select_prev_section(now),
        KeyCode::Char(c @ '1'..='5') => {
            app.select_section(c as usize - '1' as usize, now);
        }

        // Collection carousel
        KeyCode::Left | KeyCode::Char('h') => app.carousel_left(),
        KeyCode::Right | KeyCode::Char('l') => app.carousel_right(),

        // Overlays
        KeyCode::Char('m') | KeyCode::Char('M') => app.modal = Some(Modal::nav_menu()),
        KeyCode::Char('c') | KeyCode::Char('C') => app.modal = Some(Modal::call_menu()),
        KeyCode::Char('?') => app.modal = Some(Modal::Help),
        KeyCode::Char('`') => app.modal = Some(Modal::Logs),

        KeyCode::Char('/') => app.open_search(),
        KeyCode::Char('t') | KeyCode::Char('T') => app.toggle_theme(),
        KeyCode::Char('x') | KeyCode::Char('X') => {
            app.dismiss_popup();
        }
        KeyCode::Esc => {
            // Esc clears in priority order: popup, then an applied filter
            if !app.dismiss_popup() && !app.search_query.is_empty() {
                app.close_search(false);
            }
        }
        _ => {}
    }
}

fn handle_search_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc => app.close_search(false),
        KeyCode::Enter => app.close_search(true),
        KeyCode::Backspace => app.search_pop(),
        KeyCode::Char(c) => app.search_push(c),
        _ => {}
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let now = Instant::now();
    match mouse.kind {
        MouseEventKind::ScrollUp => app.scroll_by(-3, now),
        MouseEventKind::ScrollDown => app.scroll_by(3, now),
        _ => {}
    }
}
