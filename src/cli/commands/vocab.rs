//! skillrec vocab - Inspect the fitted vocabulary

use std::path::PathBuf;

use clap::{Args, Subcommand};
use serde_json::json;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, emit_human, emit_robot, robot_ok};
use crate::error::Result;
use crate::matching::normalize;

#[derive(Args, Debug)]
pub struct VocabArgs {
    /// Vocabulary artifact (defaults to configured path)
    #[arg(long, global = true)]
    pub vocabulary: Option<PathBuf>,

    #[command(subcommand)]
    pub command: VocabCommand,
}

#[derive(Subcommand, Debug)]
pub enum VocabCommand {
    /// Show size, fingerprint and the known skills
    Show,

    /// Encode a skills string and show which skills were recognized
    Encode {
        /// Comma-separated skills
        #[arg(long, short)]
        skills: String,
    },
}

pub fn run(ctx: &AppContext, args: &VocabArgs) -> Result<()> {
    let shared = ctx.load_vocabulary(args.vocabulary.as_deref())?;
    let vocabulary = shared.snapshot()?;

    match &args.command {
        VocabCommand::Show => {
            if ctx.robot_mode {
                let data = json!({
                    "size": vocabulary.len(),
                    "fingerprint": vocabulary.fingerprint(),
                    "tokens": vocabulary.tokens(),
                });
                return emit_robot(&robot_ok(data), ctx.config.robot.format);
            }
            let mut layout = HumanLayout::new();
            layout
                .title("Skill vocabulary")
                .kv("Size", &vocabulary.len().to_string())
                .kv("Fingerprint", vocabulary.fingerprint())
                .blank()
                .section("Skills");
            for token in vocabulary.tokens() {
                layout.bullet(token);
            }
            emit_human(layout);
            Ok(())
        }
        VocabCommand::Encode { skills } => {
            let tokens = normalize(skills);
            let vector = vocabulary.encode(&tokens);
            let known = vocabulary.known_tokens(&tokens);
            let unknown: Vec<&str> = tokens
                .iter()
                .map(String::as_str)
                .filter(|token| !vocabulary.contains(token))
                .collect();

            if ctx.robot_mode {
                let data = json!({
                    "tokens": tokens,
                    "known": known,
                    "unknown": unknown,
                    "active_dims": vector.active_dims(),
                    "vector": vector.as_slice(),
                });
                return emit_robot(&robot_ok(data), ctx.config.robot.format);
            }
            let mut layout = HumanLayout::new();
            layout
                .title("Encoded skills")
                .kv("Recognized", &known.join(", "))
                .kv("Ignored", &unknown.join(", "))
                .kv("Active dims", &format!("{:?}", vector.active_dims()))
                .kv("Dimensions", &vector.len().to_string());
            emit_human(layout);
            Ok(())
        }
    }
}
