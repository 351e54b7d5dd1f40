//! Find command: offline lookup against a seed file

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::output::{print_json, OutputFormat};
use crate::seed::load_seed;
use crate::{AppContext, Cli};
use lexigraph_core::{TraversalStats, Word};

#[derive(Args)]
pub struct FindArgs {
    /// Word to look up
    pub word: String,

    /// Seed file of word/synonym pairs (overrides `seed` in the config file)
    #[arg(short, long, env = "LEXIGRAPH_SEED")]
    pub seed: Option<PathBuf>,

    /// Only list direct synonyms
    #[arg(long)]
    pub direct: bool,

    /// Print traversal statistics
    #[arg(long)]
    pub stats: bool,
}

#[derive(Serialize)]
struct FindOutput {
    word: String,
    synonyms: Vec<Word>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<TraversalStats>,
}

pub fn run(args: &FindArgs, cli: &Cli, ctx: &AppContext) -> anyhow::Result<()> {
    let Some(seed) = args.seed.as_ref().or(ctx.config.seed.as_ref()) else {
        anyhow::bail!("No seed file given. Pass --seed or run `lexigraph config set seed <path>`");
    };
    load_seed(seed, &ctx.store)?;

    let (mut synonyms, stats) = if args.direct {
        (ctx.store.neighbors(args.word.as_str())?, None)
    } else {
        let closure = ctx.store.synonyms_with_stats(args.word.as_str())?;
        (closure.synonyms, Some(closure.stats))
    };
    synonyms.sort();
    tracing::info!("Found {} synonyms for {}", synonyms.len(), args.word);

    let stats = stats.filter(|_| args.stats);

    match cli.format {
        OutputFormat::Json => print_json(&FindOutput {
            word: args.word.clone(),
            synonyms,
            stats,
        })?,
        OutputFormat::Text => {
            if synonyms.is_empty() {
                if !cli.quiet {
                    println!("No synonyms found for '{}'", args.word);
                }
            } else {
                for synonym in &synonyms {
                    println!("{}", synonym);
                }
            }
            if let Some(stats) = stats {
                println!(
                    "Visited {} words, traversed {} edges",
                    stats.nodes_visited, stats.edges_traversed
                );
            }
        }
    }

    Ok(())
}
