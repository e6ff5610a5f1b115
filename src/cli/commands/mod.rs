//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - run() function to execute the command

use clap::Subcommand;

pub mod fit;
pub mod recommend;
pub mod vocab;

use crate::app::AppContext;
use crate::error::Result;

pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Fit(args) => fit::run(ctx, args),
        Commands::Recommend(args) => recommend::run(ctx, args),
        Commands::Vocab(args) => vocab::run(ctx, args),
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fit a skill vocabulary from a corpus and save it
    Fit(fit::FitArgs),

    /// Recommend projects for a skills string
    Recommend(recommend::RecommendArgs),

    /// Inspect the fitted vocabulary
    Vocab(vocab::VocabArgs),
}
