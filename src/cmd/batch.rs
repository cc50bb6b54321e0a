use crate::reports;
use admitscore::api;
use admitscore::config::{OutputFormat, ReviewParams};
use admitscore::ocr::transcripts_in_dir;
use admitscore::AdmitResult;
use clap::Args;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    /// Directory of recognized transcripts (*.txt)
    pub dir: String,

    /// Also write the ranked summary to this CSV file
    #[arg(long)]
    pub csv: Option<String>,

    #[command(flatten)]
    pub params: ReviewParams,
}

pub fn run(args: &BatchArgs, params: &ReviewParams) -> AdmitResult<()> {
    let sources = transcripts_in_dir(&args.dir)?;
    info!("📂 Found {} transcripts in {}", sources.len(), args.dir);

    let mut reviews = Vec::with_capacity(sources.len());
    for (label, result) in api::review_batch(&sources, params.major) {
        match result {
            Ok(review) => reviews.push(review),
            Err(e) => warn!("⚠️  Skipping {}: {}", label, e),
        }
    }

    api::rank_reviews(&mut reviews);

    match params.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reviews)?),
        OutputFormat::Table => reports::print_batch_summary(&reviews),
    }

    if let Some(path) = &args.csv {
        reports::write_summary_csv(path, &reviews)?;
        info!("💾 Summary written to {}", path);
    }
    Ok(())
}
