use clap::Parser;

use hlp_rs::function::HexFunction;
use hlp_rs::solver::{solve, SearchResult};

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Target function: 16 hex digits, output for input 0 in the lowest nibble.
    #[arg(value_name = "HEX", default_value = "123456789abcdef0")]
    target: HexFunction,

    /// Maximum number of layers to chain.
    #[clap(long, value_name = "INT", default_value = "5")]
    depth: usize,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let time_total = std::time::Instant::now();

    let args = Cli::parse();
    println!("args = {:?}", args);

    // Note:
    // - the search is exponential in the depth bound; 5 layers over a few
    //   hundred candidates per level is already a sizable tree.
    // - the first chain found is printed, not necessarily the shortest one.

    match solve(args.target, args.depth) {
        SearchResult::Found(chain) => {
            println!("Solution with {} layers:", chain.len());
            for layer in &chain {
                println!("{}", layer);
            }
        }
        result @ SearchResult::NotFound { .. } => {
            println!("{}", result);
        }
    }

    let time_total = time_total.elapsed();
    println!("Done in {:.3} s", time_total.as_secs_f64());

    Ok(())
}
