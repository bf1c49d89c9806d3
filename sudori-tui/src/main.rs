use std::io;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::{prelude::*, widgets::*};
use sudori_core::{reveal, Board, PuzzleGenerator};

mod render;
use render::{draw_board, BoardStyle};

#[derive(Parser, Debug)]
#[command(name = "sudori", version, about = "Generates a randomized Sudoku and displays it with a subset of digits revealed")]
struct Cli {
    /// How many digits to reveal (clamped to the 81 cells available)
    #[arg(short, long, default_value_t = 31)]
    reveal: usize,

    /// RNG seed for a reproducible puzzle
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the puzzle to stdout and exit instead of opening the TUI
    #[arg(long)]
    plain: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut gen = PuzzleGenerator::new(cli.seed);
    let board = gen.generate();
    let reveals = gen.select_reveals(&board, cli.reveal);
    info!("generated puzzle with {} of {} requested reveals", reveals.len(), cli.reveal);

    if cli.plain {
        print!("{}", reveal::apply(&board, &reveals));
        return Ok(());
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, gen, board, reveals, cli.reveal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res { eprintln!("Error: {err:#}"); }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut gen: PuzzleGenerator,
    mut board: Board,
    mut reveals: Vec<(usize, usize)>,
    reveal_count: usize,
) -> Result<()> {
    let style = BoardStyle::default();
    loop {
        let shown = reveal::mask(&reveals);
        let title = format!("Sudoku — {} revealed", reveals.len());
        terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(13), Constraint::Length(3)])
                .split(f.size());
            draw_board(f, chunks[0], &board, &shown, &style, &title);

            let help = Paragraph::new("n = new puzzle | q = quit")
                .block(Block::default().borders(Borders::ALL).title("Help"));
            f.render_widget(help, chunks[1]);
        })?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(k) = event::read()? {
                match k.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char('c') if k.modifiers.contains(KeyModifiers::CONTROL) => break,
                    KeyCode::Char('n') => {
                        board = gen.generate();
                        reveals = gen.select_reveals(&board, reveal_count);
                    }
                    _ => {}
                }
            }
        }
    }
    Ok(())
}
