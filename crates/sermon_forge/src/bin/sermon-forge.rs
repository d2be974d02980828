use std::{path::PathBuf, time::Duration};

use clap::Parser;
use sermon_forge::{
    openai::OpenAIClient, tracing::init_tracing_subscriber, GenerationSession, TranscriptSession,
    UploadedFile,
};
use sermon_state::{GenerationOptions, SermonPrepOptions, SundayContentOptions};

#[derive(Parser)]
#[command(
    name = "sermon-forge",
    about = "Generates derivative documents from a sermon transcript or recording"
)]
struct Cli {
    /// OpenAI API key
    #[arg(long, env = "OPENAI_API_KEY")]
    openai_key: String,

    /// Sermon input: .txt, .pdf, .doc/.docx or an audio file
    input: PathBuf,

    /// Generate a homiletics critique
    #[arg(long)]
    critique: bool,

    /// Generate audience-perspective feedback
    #[arg(long)]
    perspective_feedback: bool,

    /// Generate a Bible study leader's guide
    #[arg(long)]
    study_guide: bool,

    /// Generate a kids' follow-along activity sheet
    #[arg(long)]
    kids_sheet: bool,

    /// Generate all four documents
    #[arg(long)]
    all: bool,

    /// Pause between consecutive generation calls, in milliseconds
    #[arg(long, default_value = "1000")]
    pause_ms: u64,

    /// Directory the generated documents are written to
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,
}

impl Cli {
    fn options(&self) -> GenerationOptions {
        if self.all {
            return GenerationOptions::all();
        }
        GenerationOptions {
            sermon_prep: SermonPrepOptions {
                critique: self.critique,
                perspective_feedback: self.perspective_feedback,
            },
            sunday_content: SundayContentOptions {
                bible_study_guide: self.study_guide,
                kids_follow_along: self.kids_sheet,
            },
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let _guard = sentry::init((
        std::env::var("SENTRY_DSN").unwrap_or_default(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    ));

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    let options = cli.options();
    if options.selected_kinds().is_empty() {
        anyhow::bail!(
            "No content selected; pass --all or at least one of --critique, \
             --perspective-feedback, --study-guide, --kids-sheet"
        );
    }

    let openai = OpenAIClient::new(&cli.openai_key);
    let transcripts = TranscriptSession::new(openai.clone());
    let generation =
        GenerationSession::new(openai).with_pause(Duration::from_millis(cli.pause_ms));

    let file = UploadedFile::from_path(&cli.input)?;
    tracing::info!(file = %file.name, media_type = %file.media_type, "Extracting transcript");

    let transcript = match transcripts.extract_text(&file).await {
        Ok(text) => text,
        Err(e) => {
            generation.fail(e.to_string());
            return Err(e.into());
        }
    };
    transcripts.process_transcript();

    std::fs::create_dir_all(&cli.output_dir)?;
    let stem = cli
        .input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("sermon")
        .to_string();

    tracing::info!(count = options.selected_kinds().len(), "Starting generation batch");
    let results = generation
        .start_batch_with(&transcript, &options, |kind, value| {
            tracing::info!(kind = %kind, chars = value.len(), "Content ready");
        })
        .await;

    for (kind, value) in &results {
        let path = cli.output_dir.join(format!("{stem}_{kind}.md"));
        std::fs::write(&path, value)?;
        tracing::info!(path = %path.display(), "Wrote generated document");
    }

    Ok(())
}
