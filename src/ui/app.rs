use crate::config::AppConfig;
use crate::solver::Solver;
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    config: AppConfig,
    solver: Solver,
    selected_column: usize,
    should_quit: bool,
    game_over: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let solver = config.new_solver();
        App {
            config,
            solver,
            selected_column: 3, // Start in middle
            should_quit: false,
            game_over: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < 6 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                // Reset to the configured opening
                self.solver = self.config.new_solver();
                self.selected_column = 3;
                self.game_over = false;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop the human's piece in the selected column and let the engine
    /// answer.
    fn drop_piece(&mut self) {
        if self.game_over {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        match self.solver.play_reply(self.selected_column) {
            Ok(true) => {
                self.game_over = true;
                self.message = Some(format!(
                    "{} (engine) wins!",
                    self.solver.engine_side().name()
                ));
            }
            Ok(false) => {
                if self.solver.board().is_full() {
                    self.game_over = true;
                    self.message = Some("It's a draw!".to_string());
                } else {
                    self.message = Some("Engine replied. Your move.".to_string());
                }
            }
            Err(err) => {
                self.message = Some(err.to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.solver,
            self.selected_column,
            &self.message,
            self.game_over,
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
