use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use fifteen::puzzle::{GameMode, PuzzleEvent, PuzzleSession, SlideDirection};
use fifteen::scores::{ScoreBook, ScoreManager};
use fifteen::ui::render_puzzle;
use fifteen::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use rand::rngs::ThreadRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

/// Everything the event loop mutates.
struct App {
    session: PuzzleSession,
    rng: ThreadRng,
    scores: ScoreBook,
    score_manager: Option<ScoreManager>,
    message: String,
    timer_display: String,
}

impl App {
    fn new() -> Self {
        // Score persistence is best-effort; the game runs fine without it
        let score_manager = ScoreManager::new().ok();
        let scores = score_manager
            .as_ref()
            .and_then(|m| m.load().ok())
            .unwrap_or_default();
        let session = PuzzleSession::new(DEFAULT_BOARD_SIZE, GameMode::Classic)
            .expect("default board size is valid");
        let message = session.start_message();
        Self {
            session,
            rng: rand::thread_rng(),
            scores,
            score_manager,
            message,
            timer_display: "00:00".to_string(),
        }
    }

    /// Rebuild the session after a size or mode change. The old board,
    /// counters, and timer are discarded wholesale.
    fn reconfigure(&mut self, size: usize, mode: GameMode) {
        if let Ok(session) = PuzzleSession::new(size, mode) {
            self.session = session;
            self.message = self.session.start_message();
            self.timer_display = "00:00".to_string();
        }
    }

    fn change_size(&mut self, delta: isize) {
        let size = self.session.size() as isize + delta;
        let size = size.clamp(MIN_BOARD_SIZE as isize, MAX_BOARD_SIZE as isize) as usize;
        if size != self.session.size() {
            self.reconfigure(size, self.session.mode);
        }
    }

    fn cycle_mode(&mut self) {
        self.reconfigure(self.session.size(), self.session.mode.next());
    }

    fn shuffle(&mut self) {
        let events = self.session.shuffle(&mut self.rng, Instant::now());
        self.timer_display = "00:00".to_string();
        self.message = match self.session.moves_remaining() {
            Some(limit) => format!("Go! You have {} moves.", limit),
            None => "Go!".to_string(),
        };
        self.apply_events(events);
    }

    fn slide(&mut self, direction: SlideDirection) {
        let Some(tile_index) = fifteen::puzzle::tile_for_slide(&self.session.board, direction)
        else {
            return;
        };
        let events = self.session.attempt_move(tile_index, Instant::now());
        self.apply_events(events);
    }

    fn poll_timer(&mut self) {
        if let Some(event) = self.session.poll_timer(Instant::now()) {
            self.apply_events(vec![event]);
        }
    }

    fn apply_events(&mut self, events: Vec<PuzzleEvent>) {
        for event in events {
            match event {
                PuzzleEvent::TimerTick { elapsed } => {
                    self.timer_display = elapsed;
                }
                PuzzleEvent::PuzzleSolved {
                    moves_count,
                    elapsed_seconds,
                    elapsed,
                    message,
                } => {
                    if let Some(final_time) = elapsed {
                        self.timer_display = final_time;
                    }
                    self.message = message;
                    self.record_win(moves_count, elapsed_seconds);
                }
                PuzzleEvent::PuzzleFailed { message, .. } => {
                    self.message = message;
                }
                PuzzleEvent::Shuffled { .. } | PuzzleEvent::TileMoved { .. } => {
                    // Board state is read directly at draw time
                }
            }
        }
    }

    fn record_win(&mut self, moves: u32, seconds: Option<u64>) {
        let improved =
            self.scores
                .record(self.session.size(), self.session.mode, moves, seconds);
        if improved {
            self.message.push_str(" New best!");
            if let Some(manager) = &self.score_manager {
                let _ = manager.save(&self.scores);
            }
        }
    }
}

fn main() -> io::Result<()> {
    let mut app = App::new();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        app.poll_timer();

        terminal.draw(|frame| {
            let area = frame.size();
            let best = app.scores.get(app.session.size(), app.session.mode);
            render_puzzle(
                frame,
                area,
                &app.session,
                &app.timer_display,
                &app.message,
                best,
            );
        })?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key_event) = event::read()? {
                match key_event.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('s') | KeyCode::Enter => app.shuffle(),
                    KeyCode::Char('m') => app.cycle_mode(),
                    KeyCode::Char('+') | KeyCode::Char('=') => app.change_size(1),
                    KeyCode::Char('-') => app.change_size(-1),
                    KeyCode::Up => app.slide(SlideDirection::Up),
                    KeyCode::Down => app.slide(SlideDirection::Down),
                    KeyCode::Left => app.slide(SlideDirection::Left),
                    KeyCode::Right => app.slide(SlideDirection::Right),
                    _ => {}
                }
            }
        }
    }
}
