mod commands;
mod common;
mod convert;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ordo::{Key, OrderedCollection, Value};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// input json file (default stdin)
    #[arg(long, short, global = true)]
    infile: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the keys in order.
    Keys(commands::Glue),
    /// Print the values in order.
    Values(commands::Glue),
    /// Print the whole collection.
    Show,
    /// Print the pair at a position.
    Get(commands::Get),
    /// Print the first pair.
    First,
    /// Print the last pair.
    Last,
    /// Print the pairs between two positions, both included.
    Slice(commands::Slice),
    /// Print the values in chunks of a given size, one chunk per line.
    Chunk(commands::Chunk),
    /// Print the values joined with a glue text.
    ///
    /// This is `values` with an empty glue by default.
    Implode {
        #[arg(long, default_value = "")]
        glue: String,
    },
}

fn run(command: &Commands, src: &str) -> error::Result<String> {
    let c = OrderedCollection::<Key, Value>::collect_value(convert::parse(src)?)?;
    log::debug!("collected {} pairs", c.size());
    log::debug!("running {:?}", command);
    let output = match command {
        Commands::Keys(glue) => commands::keys(&c, glue),
        Commands::Values(glue) => commands::values(&c, glue),
        Commands::Show => commands::show(&c),
        Commands::Get(get) => commands::get(&c, get)?,
        Commands::First => commands::first(&c)?,
        Commands::Last => commands::last(&c)?,
        Commands::Slice(slice) => commands::slice(&c, slice)?,
        Commands::Chunk(chunk) => commands::chunk(&c, chunk),
        Commands::Implode { glue } => commands::implode(
            &c,
            &commands::Glue {
                glue: glue.clone(),
            },
        ),
    };
    Ok(output)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let src = common::input_json(&cli.infile)?;
    match run(&cli.command, &src) {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            error::render_error(&src, &e)?;
            std::process::exit(1)
        }
    }
}
