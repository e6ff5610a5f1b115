//! skillrec recommend - Rank projects against a skills string

use std::path::PathBuf;

use clap::Args;
use serde_json::json;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, emit_human, emit_json};
use crate::error::Result;
use crate::matching::{SelectionPolicy, normalize, parse_projects};
use crate::storage::load_projects;

#[derive(Args, Debug)]
pub struct RecommendArgs {
    /// Comma-separated skills, e.g. "Python, SQL, Docker"
    #[arg(long, short)]
    pub skills: String,

    /// JSON file with the candidate projects
    #[arg(long, short)]
    pub projects: PathBuf,

    /// Maximum number of recommendations (values <= 0 return nothing)
    #[arg(long, short = 'n', allow_negative_numbers = true)]
    pub top_n: Option<i64>,

    /// Seed the selection RNG for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Keep the input project order instead of shuffling before scoring
    #[arg(long)]
    pub no_shuffle: bool,

    /// Selection policy: tie_shuffle (default) or shuffle_sample
    #[arg(long)]
    pub policy: Option<SelectionPolicy>,

    /// Vocabulary artifact (defaults to configured path)
    #[arg(long)]
    pub vocabulary: Option<PathBuf>,
}

pub fn run(ctx: &AppContext, args: &RecommendArgs) -> Result<()> {
    let vocabulary = ctx.load_vocabulary(args.vocabulary.as_deref())?;

    let mut recommender = ctx.recommender(vocabulary);
    if args.no_shuffle {
        recommender = recommender.with_shuffle_candidates(false);
    }
    if let Some(policy) = args.policy {
        let selector = crate::matching::Selector::new(policy)
            .with_tie_epsilon(ctx.config.recommend.tie_epsilon);
        recommender = recommender.with_selector(selector);
    }

    let top_n = args
        .top_n
        .map_or(ctx.config.recommend.top_n as usize, |n| usize::try_from(n).unwrap_or(0));
    let projects = parse_projects(load_projects(&args.projects)?);
    let mut rng = ctx.rng(args.seed);

    let recommendations =
        recommender.recommend_records(normalize(&args.skills), projects, top_n, &mut rng)?;

    if ctx.robot_mode {
        let records: Vec<_> = recommendations
            .iter()
            .map(|scored| &scored.project)
            .collect();
        let mut payload = json!({
            "success": true,
            "recommendations": records,
        });
        if ctx.config.robot.include_metadata {
            payload["scores"] = json!(
                recommendations
                    .iter()
                    .map(|scored| scored.score)
                    .collect::<Vec<_>>()
            );
        }
        emit_json(&payload, ctx.config.robot.format)
    } else {
        let mut layout = HumanLayout::new();
        layout.title("Recommended projects");
        if recommendations.is_empty() {
            layout.bullet("No recommendations for these skills.");
        }
        for (rank, scored) in recommendations.iter().enumerate() {
            layout.kv(
                &format!("#{}", rank + 1),
                &format!("{}  [{:.3}]", scored.project.label(), scored.score),
            );
        }
        emit_human(layout);
        Ok(())
    }
}
