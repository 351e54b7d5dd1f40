//! Serve command: run the HTTP API

use std::path::PathBuf;

use clap::Args;

use crate::seed::load_seed;
use crate::AppContext;

#[derive(Args)]
pub struct ServeArgs {
    /// Address to listen on (overrides `addr` in the config file)
    #[arg(short, long, env = "LEXIGRAPH_ADDR")]
    pub addr: Option<String>,

    /// Seed file of word/synonym pairs to load before serving
    #[arg(short, long, env = "LEXIGRAPH_SEED")]
    pub seed: Option<PathBuf>,
}

pub async fn run(args: &ServeArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let addr = args.addr.as_deref().unwrap_or(&ctx.config.addr);

    if let Some(seed) = args.seed.as_ref().or(ctx.config.seed.as_ref()) {
        let count = load_seed(seed, &ctx.store)?;
        tracing::info!("Seeded {} synonym pairs", count);
    }

    lexigraph_server::run_server(ctx.store.clone(), addr, ctx.config.server_options()).await
}
