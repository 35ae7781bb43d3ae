//! Terminal form application — main loop
//!
//! Architecture:
//! ```text
//! FormApp (select! loop)                 submission task (tokio::spawn)
//!   ├─ crossterm EventStream               └─ use_case.execute(snapshot)
//!   ├─ done_rx (SubmissionDone) <──────────── done_tx
//!   └─ tick_interval (banner expiry)
//! ```
//!
//! The submission task runs the use case over snapshots of the store and
//! state machine. Input is disabled while the task runs, so the snapshots
//! cannot drift; on completion the loop installs the returned store and
//! state wholesale.

use super::event::{KeyAction, SubmissionDone, map_key};
use super::state::FormUiState;
use super::widgets::{BannerWidget, FormWidget, HeaderWidget, StatusBarWidget};
use crossterm::{
    event::{Event, EventStream, KeyEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::stream::StreamExt;
use inquiry_application::{NoSubmissionProgress, SubmitInquiryUseCase, SubmitOutcome};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
};
use std::io;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

const CONFIRMATION_MESSAGE: &str = "Thank you! Your inquiry has been sent.";

/// Main terminal form application
pub struct FormApp {
    use_case: SubmitInquiryUseCase,
    confirmation: Duration,

    // -- Submission task channel --
    done_tx: mpsc::UnboundedSender<SubmissionDone>,
    done_rx: mpsc::UnboundedReceiver<SubmissionDone>,
}

impl FormApp {
    pub fn new(use_case: SubmitInquiryUseCase) -> Self {
        let (done_tx, done_rx) = mpsc::unbounded_channel();
        Self {
            use_case,
            confirmation: Duration::from_secs(4),
            done_tx,
            done_rx,
        }
    }

    /// How long the confirmation banner stays up before auto-dismissing
    pub fn with_confirmation_secs(mut self, secs: u64) -> Self {
        self.confirmation = Duration::from_secs(secs);
        self
    }

    /// Run the form main loop
    pub async fn run(&mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(info);
        }));

        let mut state = FormUiState::new();
        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(Duration::from_millis(250));

        loop {
            // Render
            terminal.draw(|frame| render(frame, &state))?;

            if state.should_quit {
                break;
            }

            // select! on all event sources
            tokio::select! {
                // Terminal events (keyboard, resize)
                Some(Ok(term_event)) = event_stream.next() => {
                    if let Event::Key(key) = term_event {
                        self.handle_key(&mut state, key);
                    }
                }

                // Completed submission task
                Some(done) = self.done_rx.recv() => {
                    self.finish_submission(&mut state, done);
                }

                // Banner expiry
                _ = tick.tick() => {
                    self.expire_banner(&mut state);
                }
            }
        }

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }

    fn handle_key(&mut self, state: &mut FormUiState, key: KeyEvent) {
        let Some(action) = map_key(key, state.focus) else {
            return;
        };

        // The interface is disabled while a request is in flight
        if state.pending {
            if action == KeyAction::Quit {
                state.should_quit = true;
            }
            return;
        }

        // Any interaction after a terminal phase returns the flow to idle
        state.submission.acknowledge();
        if !matches!(action, KeyAction::Quit) {
            state.banner = None;
        }

        match action {
            KeyAction::Quit => state.should_quit = true,
            KeyAction::FocusNext => state.focus_next(),
            KeyAction::FocusPrev => state.focus_prev(),
            KeyAction::Insert(c) => state.insert_char(c),
            KeyAction::Backspace => state.delete_char(),
            KeyAction::CursorLeft => state.cursor_left(),
            KeyAction::CursorRight => state.cursor_right(),
            KeyAction::CursorHome => state.cursor_home(),
            KeyAction::CursorEnd => state.cursor_end(),
            KeyAction::CycleForward => state.cycle_option(true),
            KeyAction::CycleBack => state.cycle_option(false),
            KeyAction::Submit => self.start_submission(state),
        }
    }

    /// Spawn the submit use case over snapshots of the form
    fn start_submission(&self, state: &mut FormUiState) {
        if state.pending || state.submission.is_in_flight() {
            return;
        }
        state.pending = true;

        let mut store = state.store.clone();
        let mut submission = state.submission.clone();
        let use_case = self.use_case.clone();
        let done_tx = self.done_tx.clone();

        tokio::spawn(async move {
            let outcome = use_case
                .execute(&mut store, &mut submission, &NoSubmissionProgress)
                .await;
            let _ = done_tx.send(SubmissionDone {
                outcome,
                store,
                submission,
            });
        });
    }

    /// Install the results of a finished submission task
    fn finish_submission(&self, state: &mut FormUiState, done: SubmissionDone) {
        state.pending = false;
        state.store = done.store;
        state.submission = done.submission;

        match done.outcome {
            Ok(SubmitOutcome::Accepted) => {
                state.clear_after_success();
                state.banner = Some((CONFIRMATION_MESSAGE.to_string(), Instant::now()));
            }
            Ok(SubmitOutcome::Invalid(errors)) => {
                state.show_errors(&errors);
            }
            // The failure message renders from the state machine itself
            Ok(SubmitOutcome::Rejected { .. }) => {}
            // Double-submit is prevented by the pending guard; nothing to do
            Err(_) => {}
        }
    }

    /// Auto-dismiss the confirmation banner after the configured duration
    fn expire_banner(&self, state: &mut FormUiState) {
        if let Some((_, since)) = &state.banner
            && since.elapsed() >= self.confirmation
        {
            state.banner = None;
            state.submission.acknowledge();
        }
    }
}

fn render(frame: &mut Frame<'_>, state: &FormUiState) {
    let [header_area, banner_area, form_area, status_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    frame.render_widget(HeaderWidget, header_area);
    frame.render_widget(BannerWidget::new(state), banner_area);
    frame.render_widget(FormWidget::new(state), form_area);
    frame.render_widget(StatusBarWidget::new(state), status_area);
}
