use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

use tagweave_extract::{extract_tags, schema_from_json, TagError};

#[derive(Parser)]
#[command(name = "tagweave")]
#[command(about = "Extract struct tags from schema files for code generation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract per-field tags from a schema JSON dump
    Extract {
        /// Input schema `.json` file
        #[arg(short, long)]
        input: PathBuf,

        /// Auto-tag rule `<tagKey>[-with-omitempty][-as-<caseStyle>]` (repeatable)
        #[arg(short = 't', long = "auto-tag")]
        auto_tags: Vec<String>,

        /// Output `.json` file (if omitted, prints to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate every tag annotation in a schema JSON dump
    Check {
        /// Input schema `.json` file
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn main() -> Result<(), TagError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Extract { input, auto_tags, output } => {
            // Read schema JSON
            let text = fs::read_to_string(input).map_err(TagError::Io)?;
            let schema = schema_from_json(&text)?;
            let tags = extract_tags(&schema, auto_tags)?;
            // TagSets serialize as tag-grammar text, ready to embed
            let json = serde_json::to_string_pretty(&tags).map_err(TagError::Schema)?;
            if let Some(out_path) = output {
                fs::write(out_path, &json).map_err(TagError::Io)?;
                println!("Extracted tags written to {}", out_path.display());
            } else {
                println!("{}", json);
            }
            Ok(())
        }

        Commands::Check { input } => {
            let text = fs::read_to_string(input).map_err(TagError::Io)?;
            let schema = schema_from_json(&text)?;
            // No auto-tag rules: this only exercises annotation decoding
            // and grammar parsing
            let tags = extract_tags(&schema, Vec::<String>::new())?;
            for (message, fields) in &tags {
                let tagged = fields.values().filter(|set| !set.is_empty()).count();
                println!("{}: {} entries, {} tagged", message, fields.len(), tagged);
            }
            println!("OK: {}", input.display());
            Ok(())
        }
    }
}
