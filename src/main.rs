use clap::Parser;
use clap_verbosity_flag::{Level, Verbosity, WarnLevel};
use minesweeper_engine::{
    run, CellGeometry, CellView, GameConfig, GameError, GameState, InputEvent, MouseButton,
    Position, Presenter, Session,
};
use std::io::{self, BufRead, StdinLock, Write};
use std::num::NonZeroU32;
use thiserror::Error;

#[derive(Parser, Debug)]
#[command(version, about = "Play minesweeper in the terminal", long_about = None)]
struct Args {
    #[arg(short = 'W', long, default_value_t = 10)]
    width: u32,

    #[arg(short = 'H', long, default_value_t = 10)]
    height: u32,

    #[arg(short, long, default_value_t = 10)]
    mines: u32,

    /// Seed for reproducible mine placement
    #[arg(short, long)]
    seed: Option<u64>,

    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

#[derive(Error, Debug)]
enum AppError {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
}

fn main() {
    let args = Args::parse();
    init_tracing(&args.verbose);

    match run_game(&args) {
        Ok(_) => println!("Thanks for playing!"),
        Err(e) => eprintln!("Game error: {}", e),
    }
}

fn init_tracing(verbose: &Verbosity<WarnLevel>) {
    let Some(level) = verbose.log_level() else {
        return;
    };
    let level = match level {
        Level::Error => tracing::Level::ERROR,
        Level::Warn => tracing::Level::WARN,
        Level::Info => tracing::Level::INFO,
        Level::Debug => tracing::Level::DEBUG,
        Level::Trace => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn run_game(args: &Args) -> Result<GameState, AppError> {
    let config = GameConfig::new(args.width, args.height, args.mines)?;
    let mut session = match args.seed {
        Some(seed) => Session::with_seed(config, seed),
        None => Session::new(config),
    };

    // Terminal input is already in grid coordinates
    let geometry = CellGeometry::new(NonZeroU32::MIN);
    let mut input = TerminalInput::new(config);
    let mut presenter = TextPresenter;

    run(&mut session, &mut input, &mut presenter, &geometry)
}

/// Reads `x y r|f` commands from stdin, or `q` to quit.
struct TerminalInput {
    config: GameConfig,
    lines: io::Lines<StdinLock<'static>>,
}

impl TerminalInput {
    fn new(config: GameConfig) -> Self {
        Self {
            config,
            lines: io::stdin().lock().lines(),
        }
    }

    fn parse(&self, line: &str) -> Option<InputEvent> {
        let mut parts = line.split_whitespace();
        let first = parts.next()?;
        if first == "q" {
            return Some(InputEvent::Quit);
        }

        let x: i32 = first.parse().ok()?;
        let y: i32 = parts.next()?.parse().ok()?;
        let action = parts.next()?.chars().next()?;

        let in_bounds = x >= 0
            && (x as u32) < self.config.width()
            && y >= 0
            && (y as u32) < self.config.height();
        if !in_bounds {
            println!("Position out of bounds");
            return None;
        }

        let button = match action {
            'r' => MouseButton::Primary,
            'f' => MouseButton::Secondary,
            _ => {
                println!("Invalid action. Use 'r' to reveal or 'f' to flag");
                return None;
            }
        };

        Some(InputEvent::Click {
            pixel_x: x,
            pixel_y: y,
            button,
        })
    }
}

impl Iterator for TerminalInput {
    type Item = InputEvent;

    fn next(&mut self) -> Option<InputEvent> {
        loop {
            print!("Enter command (x y [r/f], q to quit): ");
            io::stdout().flush().ok()?;

            let line = self.lines.next()?.ok()?;
            if let Some(event) = self.parse(&line) {
                return Some(event);
            }
        }
    }
}

struct TextPresenter;

impl Presenter for TextPresenter {
    type Error = AppError;

    fn present(&mut self, session: &Session) -> Result<(), AppError> {
        let (width, height) = session.dimensions();
        let mut out = io::stdout().lock();

        writeln!(out, "Mines left: {}", session.mines_remaining())?;

        // Print column numbers
        write!(out, "   ")?;
        for x in 0..width {
            write!(out, "{:>2}", x % 100)?;
        }
        writeln!(out)?;

        for y in 0..height {
            write!(out, "{:>2} ", y % 100)?;
            for x in 0..width {
                let view = session.visual_state_at(Position::new(x as i32, y as i32))?;
                let glyph = match view {
                    CellView::Covered => "□".to_string(),
                    CellView::Flagged => "⚑".to_string(),
                    CellView::ExplodedMine => "*".to_string(),
                    CellView::Blank => " ".to_string(),
                    CellView::Numbered(n) => n.to_string(),
                };
                write!(out, "{:>2}", glyph)?;
            }
            writeln!(out)?;
        }

        match session.session_state() {
            GameState::Won => writeln!(out, "Congratulations! You won!")?,
            GameState::Lost => writeln!(out, "Game Over!")?,
            GameState::Playing => {}
        }
        Ok(())
    }
}
