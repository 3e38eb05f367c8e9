//! hashmark CLI - play the wallet-gated tic-tac-toe loop in a terminal
//!
//! The `play` command drives the full application over the in-memory
//! adapters: wallet connect, the turn protocol with the opponent's
//! thinking delay, win-record transactions, and the streak collectible.
//! The `simulate` command measures the opponent policy against a random
//! player.

use std::{
    io::{self, BufRead, Write},
    thread,
    time::Instant,
};

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use rand::{SeedableRng, prelude::IndexedRandom, random, rngs::StdRng};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use hashmark::{
    Address, App, Board, ChainProfile, GameConfig, Outcome, Phase, Player, Session, TurnEvent,
    adapters::{InMemoryChain, InMemoryCollectible, InMemoryWallet},
};

#[derive(Parser)]
#[command(name = "hashmark")]
#[command(version, about = "Tic-tac-toe with on-chain win records", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively against the built-in opponent
    Play(PlayArgs),

    /// Run batches of random-player games against the opponent policy
    Simulate(SimulateArgs),
}

#[derive(Args)]
struct PlayArgs {
    /// Seed for the opponent's random tier
    #[arg(long)]
    seed: Option<u64>,

    /// Opponent thinking delay in milliseconds
    #[arg(long, default_value_t = 500)]
    delay_ms: u64,
}

#[derive(Args)]
struct SimulateArgs {
    /// Number of games to play
    #[arg(long, default_value_t = 1000)]
    games: usize,

    /// Seed for both players
    #[arg(long)]
    seed: Option<u64>,

    /// Emit the summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Play(args) => play(args),
        Commands::Simulate(args) => simulate(args),
    }
}

fn play(args: PlayArgs) -> Result<()> {
    let chain = ChainProfile::status_testnet();
    let wallet = InMemoryWallet::new(
        Address::new("0xC0FFEE254729296a45a3885639AC7E10F9d54979"),
        chain.chain_id,
    );
    let game = GameConfig::new()
        .with_think_delay(std::time::Duration::from_millis(args.delay_ms));

    let mut app = App::with_seed(
        wallet,
        InMemoryChain::new(),
        InMemoryCollectible::new(),
        chain,
        game,
        args.seed.unwrap_or_else(random),
    );

    app.connect()?;
    println!("Cells are numbered 0-8, left to right, top to bottom.");
    println!("Enter a cell to move, 'r' to restart, 'q' to quit.\n");
    render(&app);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match line.trim() {
            "q" => break,
            "r" => app.reset(),
            input => match input.parse::<usize>() {
                Ok(position) => {
                    if app.click(position) == TurnEvent::OpponentScheduled {
                        // Let the opponent "think" before it replies
                        if let Some(wake) = app.next_wake() {
                            thread::sleep(wake.saturating_duration_since(Instant::now()));
                        }
                        app.tick(Instant::now());
                    }
                }
                Err(_) => println!("Enter 0-8, 'r', or 'q'."),
            },
        }

        app.settle();
        render(&app);
    }

    Ok(())
}

fn render<W, T, M>(app: &App<W, T, M>)
where
    W: hashmark::ports::WalletGateway,
    T: hashmark::ports::TransactionGateway,
    M: hashmark::ports::CollectibleMinter,
{
    println!("\n{}", app.session().board());
    println!("{}", app.status());
    println!("Win streak: {}\n", app.session().streak());
}

#[derive(Debug, Default, Serialize)]
struct SimulationSummary {
    games: usize,
    random_player_wins: usize,
    opponent_wins: usize,
    draws: usize,
    streaks_completed: usize,
}

fn simulate(args: SimulateArgs) -> Result<()> {
    let seed = args.seed.unwrap_or_else(random);
    let mut rng = StdRng::seed_from_u64(seed);
    let config = GameConfig::new().with_think_delay(std::time::Duration::ZERO);
    let mut session = Session::with_seed(&config, seed.wrapping_add(1));

    let mut summary = SimulationSummary {
        games: args.games,
        ..Default::default()
    };

    for _ in 0..args.games {
        loop {
            match play_one_turn(&mut session, &mut rng) {
                Some((outcome, mint_due)) => {
                    record(&mut summary, outcome);
                    if mint_due {
                        summary.streaks_completed += 1;
                    }
                    break;
                }
                None => continue,
            }
        }
        session.reset();
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("games:             {}", summary.games);
        println!("random X wins:     {}", summary.random_player_wins);
        println!("opponent O wins:   {}", summary.opponent_wins);
        println!("draws:             {}", summary.draws);
        println!("streaks completed: {}", summary.streaks_completed);
    }

    Ok(())
}

/// Play one X move (and the opponent's reply when one is scheduled).
/// Returns the outcome and whether a streak completed when the game ended.
fn play_one_turn(session: &mut Session, rng: &mut StdRng) -> Option<(Outcome, bool)> {
    let position = pick_random_empty(session.board(), rng)?;
    match session.human_move(position) {
        TurnEvent::GameOver { outcome, reward } => {
            return Some((outcome, reward.is_some_and(|r| r.mint_due)));
        }
        TurnEvent::OpponentScheduled => {}
        _ => return None,
    }

    match session.tick(Instant::now()) {
        TurnEvent::GameOver { outcome, reward } => {
            Some((outcome, reward.is_some_and(|r| r.mint_due)))
        }
        _ => {
            debug_assert_eq!(session.phase(), Phase::AwaitingHuman);
            None
        }
    }
}

fn pick_random_empty(board: &Board, rng: &mut StdRng) -> Option<usize> {
    board.empty_positions().choose(rng).copied()
}

fn record(summary: &mut SimulationSummary, outcome: Outcome) {
    match outcome {
        Outcome::Win(Player::X) => summary.random_player_wins += 1,
        Outcome::Win(Player::O) => summary.opponent_wins += 1,
        Outcome::Draw => summary.draws += 1,
        Outcome::InProgress => {}
    }
}
