//! Interactive terminal preview of the presence widget (impure shell).
//!
//! Shows the dot over a placeholder avatar box and lets the user cycle
//! statuses and change the participant count to see the visibility rule.

use crate::config::ResolvedConfig;
use crate::model::{Identity, Participant, PresenceStatus};
use crate::view::{Padding, PresenceView};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Most participants the preview can bind.
pub const MAX_PARTICIPANTS: usize = 3;

/// Size of the avatar box in cells.
const AVATAR_WIDTH: u16 = 24;
const AVATAR_HEIGHT: u16 = 12;

/// Errors that can occur while running the preview.
#[derive(Debug, Error)]
pub enum PreviewError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Starting point for the preview.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewOptions {
    /// Initial status of the first participant; `None` leaves it unset.
    pub status: Option<PresenceStatus>,
    /// How many participants are bound at start.
    pub participants: usize,
    /// Uniform padding in pixels.
    pub padding: f64,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            status: Some(PresenceStatus::Available),
            participants: 1,
            padding: 0.0,
        }
    }
}

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// State changed, redraw.
    Redraw,
    /// Key had no effect.
    Ignored,
    /// Leave the preview.
    Quit,
}

/// Pure preview state.
#[derive(Debug, Clone)]
pub struct PreviewState {
    participants: Vec<Participant>,
    count: usize,
    padding: f64,
}

impl PreviewState {
    /// Build the state from options.
    pub fn new(options: &PreviewOptions) -> Self {
        let mut alice = Participant::without_status("alice", "Alice");
        alice.set_status(options.status);
        Self {
            participants: vec![
                alice,
                Participant::new("bob", "Bob", PresenceStatus::Busy),
                Participant::new("carol", "Carol", PresenceStatus::Away),
            ],
            count: options.participants.min(MAX_PARTICIPANTS),
            padding: options.padding,
        }
    }

    /// Status of the first participant.
    pub fn status(&self) -> Option<PresenceStatus> {
        self.participants[0].presence_status()
    }

    /// Number of bound participants.
    pub fn participant_count(&self) -> usize {
        self.count
    }

    /// Participants currently bound to the widget.
    pub fn bound_participants(&self) -> &[Participant] {
        &self.participants[..self.count]
    }

    /// Apply a key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if key.kind != KeyEventKind::Press {
            return KeyOutcome::Ignored;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                KeyOutcome::Quit
            }
            KeyCode::Char('q') | KeyCode::Esc => KeyOutcome::Quit,
            KeyCode::Char(' ') | KeyCode::Tab => {
                let next = match self.status() {
                    Some(status) => Some(status.next()),
                    None => Some(PresenceStatus::Available),
                };
                self.participants[0].set_status(next);
                KeyOutcome::Redraw
            }
            KeyCode::Char('n') => {
                self.participants[0].set_status(None);
                KeyOutcome::Redraw
            }
            KeyCode::Char('+') if self.count < MAX_PARTICIPANTS => {
                self.count += 1;
                KeyOutcome::Redraw
            }
            KeyCode::Char('-') if self.count > 0 => {
                self.count -= 1;
                KeyOutcome::Redraw
            }
            _ => KeyOutcome::Ignored,
        }
    }
}

/// Draw one frame of the preview.
pub fn render_frame(frame: &mut Frame<'_>, state: &PreviewState, config: &ResolvedConfig) {
    let [avatar_row, status_row, help_row] = Layout::vertical([
        Constraint::Length(AVATAR_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());
    let avatar_area = Rect {
        width: AVATAR_WIDTH.min(avatar_row.width),
        ..avatar_row
    };

    let block = Block::default().borders(Borders::ALL).title(" avatar ");
    let inner = block.inner(avatar_area);
    frame.render_widget(block, avatar_area);

    let mut view = PresenceView::new(config.colors)
        .with_padding(Padding::uniform(state.padding))
        .with_density(config.density);
    view.set_participants(state.bound_participants());
    frame.render_widget(&view, inner);

    let status_text = match (view.is_visible(), state.status()) {
        (false, _) => format!("hidden ({} participants)", state.participant_count()),
        (true, Some(status)) => format!("Alice: {status}"),
        (true, None) => "Alice: status unset".to_string(),
    };
    let status_color = state
        .status()
        .filter(|_| view.is_visible())
        .map(|status| config.colors.color_for(status))
        .unwrap_or(Color::Gray);
    frame.render_widget(
        Paragraph::new(Span::styled(status_text, Style::default().fg(status_color))),
        status_row,
    );

    frame.render_widget(
        Paragraph::new(Line::from(
            "space: next status  n: unset  +/-: participants  q: quit",
        ))
        .style(Style::default().fg(Color::DarkGray)),
        help_row,
    );
}

/// Preview application driving a terminal.
///
/// Generic over backend to support testing with TestBackend.
pub struct PreviewApp<B: Backend> {
    terminal: Terminal<B>,
    state: PreviewState,
    config: ResolvedConfig,
}

impl PreviewApp<CrosstermBackend<Stdout>> {
    /// Put the terminal in raw mode on the alternate screen.
    pub fn new(config: ResolvedConfig, options: &PreviewOptions) -> Result<Self, PreviewError> {
        enable_raw_mode()?;
        let terminal = setup_or_restore(Self::enter_screen, restore_terminal)?;
        Ok(Self::with_terminal(terminal, config, options))
    }

    /// Switch to the alternate screen and wrap stdout in a terminal.
    fn enter_screen() -> Result<Terminal<CrosstermBackend<Stdout>>, PreviewError> {
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        Ok(Terminal::new(CrosstermBackend::new(stdout))?)
    }

    /// Run until the user quits.
    pub fn run(&mut self) -> Result<(), PreviewError> {
        self.draw()?;
        loop {
            match event::read()? {
                Event::Key(key) => match self.state.handle_key(key) {
                    KeyOutcome::Quit => return Ok(()),
                    KeyOutcome::Redraw => {
                        debug!(
                            status = ?self.state.status(),
                            participants = self.state.participant_count(),
                            "Preview state changed"
                        );
                        self.draw()?;
                    }
                    KeyOutcome::Ignored => {}
                },
                Event::Resize(..) => self.draw()?,
                _ => {}
            }
        }
    }
}

impl<B: Backend> PreviewApp<B> {
    /// Build the app around an existing terminal.
    pub fn with_terminal(
        terminal: Terminal<B>,
        config: ResolvedConfig,
        options: &PreviewOptions,
    ) -> Self {
        Self {
            terminal,
            state: PreviewState::new(options),
            config,
        }
    }

    /// Current state.
    pub fn state(&self) -> &PreviewState {
        &self.state
    }

    /// Mutable state, for driving the app without a real event source.
    pub fn state_mut(&mut self) -> &mut PreviewState {
        &mut self.state
    }

    /// The terminal being drawn to.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Render a frame.
    pub fn draw(&mut self) -> Result<(), PreviewError> {
        let state = &self.state;
        let config = &self.config;
        self.terminal.draw(|frame| render_frame(frame, state, config))?;
        Ok(())
    }
}

/// Run the preview and restore the terminal afterwards.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run(config: ResolvedConfig, options: &PreviewOptions) -> Result<(), PreviewError> {
    info!(?options, "Starting presence preview");
    let mut app = PreviewApp::new(config, options)?;

    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Run `setup`; if it fails, run `restore` before returning the setup error.
///
/// Raw mode is already on when the screen is set up, so a failure there must
/// still hand the shell back in cooked mode.
fn setup_or_restore<T>(
    setup: impl FnOnce() -> Result<T, PreviewError>,
    restore: impl FnOnce() -> Result<(), PreviewError>,
) -> Result<T, PreviewError> {
    setup().inspect_err(|err| {
        if let Err(restore_err) = restore() {
            warn!(%err, %restore_err, "Failed to restore terminal after setup error");
        }
    })
}

/// Disable raw mode and leave the alternate screen.
fn restore_terminal() -> Result<(), PreviewError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "preview_tests.rs"]
mod tests;
