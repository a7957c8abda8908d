use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use litgrid_core::{Coord, PlayEngine, PlayOutcome, Strategy};

use moves::Move;
use settings::Settings;

mod moves;
mod settings;

/// Rotate pipe tiles until the power station lights the whole board.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,

    /// TOML file with `rows`, `cols`, `strategy` and `seed`
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    rows: Option<Coord>,

    #[arg(long)]
    cols: Option<Coord>,

    #[arg(long, value_enum)]
    strategy: Option<StrategyArg>,

    /// Seed for random boards
    #[arg(long)]
    seed: Option<u64>,

    /// Print the final engine state as JSON
    #[arg(long)]
    json: bool,

    /// Moves applied in order: `rotate:ROW,COL` or a station direction
    moves: Vec<Move>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum StrategyArg {
    Random,
    Fractal,
    Manual,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Random => Strategy::Random,
            StrategyArg::Fractal => Strategy::Fractal,
            StrategyArg::Manual => Strategy::Manual,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbosity.log_level_filter())
        .init();

    let file_settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let settings = file_settings.merge(Settings {
        rows: cli.rows,
        cols: cli.cols,
        strategy: cli.strategy.map(Strategy::from),
        seed: cli.seed,
    });
    let config = settings.board_config();
    log::debug!("Board config: {config:?}");

    let mut engine = PlayEngine::from_config(&config).context("generating board")?;
    let outcome = apply_moves(&mut engine, &cli.moves)?;
    log::debug!("Moves finished with {outcome:?}");

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&engine)?);
    } else {
        print!("{}", render(&engine));
    }
    Ok(())
}

/// Applies `moves` in order and folds their outcomes; stops once the board is lit.
fn apply_moves(engine: &mut PlayEngine, moves: &[Move]) -> Result<PlayOutcome> {
    let mut outcome = PlayOutcome::NoChange;
    for (index, mv) in moves.iter().enumerate() {
        if engine.is_finished() {
            log::warn!(
                "Board already lit, ignoring {} remaining moves",
                moves.len() - index
            );
            break;
        }
        outcome = outcome | mv.apply(engine)?;
    }
    Ok(outcome)
}

/// One glyph per tile followed by `*` for the station, a space when lit, `.` when dark.
fn render(engine: &PlayEngine) -> String {
    let (_, cols) = engine.size();
    let grid = engine.grid();
    let mut out = String::new();

    for coords in grid.coords() {
        let tile = &grid[coords];
        out.push(tile.connectors().glyph());
        out.push(if tile.is_power_station() {
            '*'
        } else if tile.is_lit() {
            ' '
        } else {
            '.'
        });
        if coords.1 + 1 == cols {
            out.push('\n');
        }
    }

    out.push_str(&format!(
        "radius: {}, lit: {}/{}, won: {}\n",
        engine.radius(),
        engine.lit_count(),
        grid.total_tiles(),
        engine.is_won()
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use litgrid_core::{BoardLayout, Direction};

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_flags_and_moves() {
        let cli = Cli::try_parse_from([
            "litgrid",
            "--rows",
            "3",
            "--strategy",
            "manual",
            "rotate:0,1",
            "east",
        ])
        .unwrap();

        assert_eq!(cli.rows, Some(3));
        assert!(matches!(cli.strategy, Some(StrategyArg::Manual)));
        assert_eq!(cli.moves.len(), 2);
    }

    #[test]
    fn renders_station_and_dark_tiles() {
        let engine = PlayEngine::new_manual_board((3, 3)).unwrap();

        let text = render(&engine);

        assert!(text.starts_with("─.─.─.\n┼ ┼*┼ \n─.─.─.\n"));
        assert!(text.ends_with("radius: 2, lit: 3/9, won: false\n"));
    }

    #[test]
    fn folded_outcome_reports_strongest_move() {
        let mut engine = PlayEngine::new_manual_board((3, 3)).unwrap();
        let moves: Vec<Move> = ["north", "rotate:0,1"]
            .into_iter()
            .map(|mv| mv.parse().unwrap())
            .collect();

        assert_eq!(apply_moves(&mut engine, &moves).unwrap(), PlayOutcome::Changed);
        assert_eq!(apply_moves(&mut engine, &moves[..1]).unwrap(), PlayOutcome::NoChange);
        assert_eq!(apply_moves(&mut engine, &[]).unwrap(), PlayOutcome::NoChange);
    }

    #[test]
    fn moves_after_winning_are_skipped() {
        let mut engine = PlayEngine::new_manual_board((1, 1)).unwrap();
        let moves = [Move::Rotate((0, 0)), Move::Rotate((5, 5))];

        assert!(engine.is_finished());
        assert_eq!(apply_moves(&mut engine, &moves).unwrap(), PlayOutcome::NoChange);
    }

    #[test]
    fn winning_move_dominates_the_fold() {
        let layout = BoardLayout::new("╶──╴".parse().unwrap(), (0, 0)).unwrap();
        let mut engine = PlayEngine::new(layout).unwrap();
        let moves = [Move::Station(Direction::North), Move::Station(Direction::East)];

        assert_eq!(apply_moves(&mut engine, &moves).unwrap(), PlayOutcome::Won);
        assert!(engine.is_won());
    }
}
