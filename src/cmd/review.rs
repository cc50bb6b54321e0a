use crate::reports;
use admitscore::api;
use admitscore::config::{OutputFormat, ReviewParams};
use admitscore::ocr::{StdinText, TextSource, TranscriptFile};
use admitscore::AdmitResult;
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct ReviewArgs {
    /// Recognized transcript text, or `-` for stdin
    pub input: String,

    #[command(flatten)]
    pub params: ReviewParams,
}

pub fn run(args: &ReviewArgs, params: &ReviewParams) -> AdmitResult<()> {
    let source: Box<dyn TextSource> = if args.input == "-" {
        Box::new(StdinText)
    } else {
        Box::new(TranscriptFile::new(&args.input))
    };

    let review = api::review_source(source.as_ref(), params.major)?;

    match params.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&review)?),
        OutputFormat::Table => reports::print_review(&review, params.show_details),
    }
    Ok(())
}
