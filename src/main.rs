#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::io::{self, Write};
#[cfg(feature = "std")]
use std::path::{Path, PathBuf};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use tictactoe::{
    init_logging, print_board, print_statistics, AiPlayer, Game, GameStatus, HumanPlayer, Mark,
    Player, Statistics,
};

/// Terminal Tic Tac Toe with an unbeatable computer opponent.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// File the win/draw statistics are persisted to.
    #[arg(long, default_value = "stats.json")]
    stats_file: PathBuf,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    let mut stats = Statistics::load(&cli.stats_file);

    println!("\n========================================");
    println!("   WELCOME TO TIC TAC TOE");
    println!("========================================");

    loop {
        println!("\n=== TIC TAC TOE SETUP ===");
        println!("1. Player vs Player");
        println!("2. Player vs Computer");
        println!("3. View statistics");
        println!("4. Exit");

        match prompt("\nSelect option (1-4): ")?.as_str() {
            "1" => {
                let name1 = prompt_name("Player 1 name: ", "Player 1")?;
                let name2 = prompt_name("Player 2 name: ", "Player 2")?;
                let mut first = HumanPlayer::new(name1, Mark::X);
                let mut second = HumanPlayer::new(name2, Mark::O);
                play_rounds(&mut first, &mut second, &mut stats, &cli.stats_file)?;
            }
            "2" => {
                let name = prompt_name("Your name: ", "Player")?;
                let mut first = HumanPlayer::new(name, Mark::X);
                let mut second = AiPlayer::new(Mark::O);
                play_rounds(&mut first, &mut second, &mut stats, &cli.stats_file)?;
            }
            "3" => print_statistics(&stats),
            "4" => break,
            _ => println!("Invalid choice!"),
        }
    }

    print_statistics(&stats);
    println!("Thanks for playing!");
    Ok(())
}

/// Play rounds with the same pair of players until they decline to
/// continue. Each finished round is recorded and saved before asking.
#[cfg(feature = "std")]
fn play_rounds(
    first: &mut dyn Player,
    second: &mut dyn Player,
    stats: &mut Statistics,
    stats_file: &Path,
) -> anyhow::Result<()> {
    let mut game = Game::new();
    loop {
        let result = run_round(&mut game, first, second)?;
        announce(result, first, second);
        stats.record(result);
        if let Err(e) = stats.save(stats_file) {
            log::warn!(
                "failed to save statistics to {}: {}",
                stats_file.display(),
                e
            );
        }
        if !prompt("\nPlay again? (y/n): ")?.eq_ignore_ascii_case("y") {
            return Ok(());
        }
        game.reset();
    }
}

/// Turn loop for one round. A rejected move is reported and re-requested
/// from the same player without consuming the turn.
#[cfg(feature = "std")]
fn run_round(
    game: &mut Game,
    first: &mut dyn Player,
    second: &mut dyn Player,
) -> anyhow::Result<GameStatus> {
    loop {
        print_board(game.board());
        let current: &mut dyn Player = if game.to_move() == first.mark() {
            &mut *first
        } else {
            &mut *second
        };
        let (row, col) = current.choose_move(game.board())?;
        match game.play(row, col) {
            Ok(status) => {
                println!("{} plays ({}, {})", current.name(), row, col);
                log::debug!("{} placed at ({}, {})", current.mark(), row, col);
                if status != GameStatus::InProgress {
                    print_board(game.board());
                    return Ok(status);
                }
            }
            Err(e) => println!("Invalid move: {}! Try again.", e),
        }
    }
}

#[cfg(feature = "std")]
fn announce(result: GameStatus, first: &dyn Player, second: &dyn Player) {
    match result {
        GameStatus::Won(mark) => {
            let winner = if first.mark() == mark { first } else { second };
            println!("{} ({}) WINS!", winner.name(), mark);
            log::info!("round won by {}", mark);
        }
        GameStatus::Draw => {
            println!("It's a DRAW!");
            log::info!("round drawn");
        }
        GameStatus::InProgress => {}
    }
}

#[cfg(feature = "std")]
fn prompt(text: &str) -> anyhow::Result<String> {
    print!("{}", text);
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        anyhow::bail!("input stream closed");
    }
    Ok(line.trim().to_string())
}

#[cfg(feature = "std")]
fn prompt_name(text: &str, fallback: &str) -> anyhow::Result<String> {
    let name = prompt(text)?;
    Ok(if name.is_empty() {
        fallback.to_string()
    } else {
        name
    })
}
