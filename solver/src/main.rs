use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::debug;

use knightword::{find_longest_word, find_longest_word_parallel, trace_path, Board, Dictionary};

#[derive(Debug, Parser)]
#[command(name = "solver", about = "Find the longest word spelled by knight's moves on an 8x8 letter grid")]
struct Args {
    /// Text file to take candidate words from (any text; punctuation and case are ignored)
    textfile: PathBuf,

    /// File holding the 8x8 grid, one row per line, letters separated by whitespace
    gridfile: PathBuf,

    /// Search the 64 starting squares on all cores
    #[arg(long)]
    parallel: bool,

    /// Also print the squares of one path spelling the word
    #[arg(long)]
    show_path: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let dictionary = Dictionary::from_path(&args.textfile).context("loading word list")?;
    let board = Board::from_path(&args.gridfile).context("loading grid")?;
    debug!("grid:\n{}", board);

    let result = match args.parallel {
        true => find_longest_word_parallel(&board, &dictionary),
        false => find_longest_word(&board, &dictionary),
    };
    println!("{}", result);

    if let (true, Some(start)) = (args.show_path, result.start) {
        let path = trace_path(&board, start, &result.word)
            .context("reported word has no path on the grid")?;
        println!("{}", path.iter().map(ToString::to_string).collect::<Vec<_>>().join(" -> "));
    }

    Ok(())
}
