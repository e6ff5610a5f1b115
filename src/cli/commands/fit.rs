//! skillrec fit - Build the skill vocabulary from a corpus

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, emit_human, emit_robot, robot_ok};
use crate::error::{Result, SkillrecError};
use crate::matching::Vocabulary;
use crate::storage::{load_corpus, save_vocabulary};

#[derive(Args, Debug)]
pub struct FitArgs {
    /// Corpus file (JSON array of skill lists, or {projects, students} tables)
    #[arg(long)]
    pub corpus: PathBuf,

    /// Where to write the vocabulary artifact (defaults to configured path)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct FitReport {
    path: String,
    sequences: usize,
    size: usize,
    fingerprint: String,
}

pub fn run(ctx: &AppContext, args: &FitArgs) -> Result<()> {
    let corpus = load_corpus(&args.corpus)?;
    if corpus.iter().all(Vec::is_empty) {
        return Err(SkillrecError::InvalidCorpus(format!(
            "{} contains no skill tokens",
            args.corpus.display()
        )));
    }

    let vocabulary = Vocabulary::fit(&corpus);
    let path = ctx.vocabulary_path(args.output.as_deref());
    save_vocabulary(&path, &vocabulary)?;

    let report = FitReport {
        path: path.display().to_string(),
        sequences: corpus.len(),
        size: vocabulary.len(),
        fingerprint: vocabulary.fingerprint().to_string(),
    };

    if ctx.robot_mode {
        emit_robot(&robot_ok(report), ctx.config.robot.format)
    } else {
        let mut layout = HumanLayout::new();
        layout
            .title("Vocabulary fitted")
            .kv("Path", &report.path)
            .kv("Sequences", &report.sequences.to_string())
            .kv("Skills", &report.size.to_string())
            .kv("Fingerprint", &report.fingerprint);
        emit_human(layout);
        Ok(())
    }
}
