use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use clausal_core::{AnalysisResult, Capabilities, Pipeline, PipelineConfig, TermDictionary};

#[derive(Parser)]
#[command(
    name = "clausal",
    about = "Per-clause analysis of legal contracts",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a contract document and print a per-clause report
    Analyze {
        /// Path to a .pdf, .docx, or .txt contract
        file: PathBuf,
        /// Emit the full analysis as JSON
        #[arg(long)]
        json: bool,
        /// Maximum length (in words) of each simplified sentence
        #[arg(long = "max-len", default_value_t = 60)]
        max_len: usize,
    },
    /// List the built-in legal term dictionary
    Terms,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            file,
            json,
            max_len,
        } => analyze(&file, json, max_len).await,
        Commands::Terms => {
            for (term, definition) in TermDictionary::builtin().iter() {
                println!("{term}: {definition}");
            }
            Ok(())
        }
    }
}

async fn analyze(file: &Path, json: bool, max_len: usize) -> Result<()> {
    // Capabilities are loaded once and shared across every clause.
    let capabilities = Capabilities::load();
    let config = PipelineConfig {
        max_simplified_len: max_len,
        ..PipelineConfig::default()
    };
    let pipeline = Pipeline::new(capabilities).with_config(config);

    match pipeline.run_file(file).await {
        Ok(result) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_report(&result);
            }
            Ok(())
        }
        Err(e) => anyhow::bail!("{}: {e}", e.kind()),
    }
}

fn print_report(result: &AnalysisResult) {
    println!(
        "Analyzed {} clause(s) in {}ms",
        result.stats.clause_count, result.stats.duration_ms
    );

    for clause in &result.clauses {
        println!();
        match &clause.number {
            Some(number) => println!("== Clause {number} [{}]", clause.clause_type),
            None => println!("== Clause {} [{}]", clause.index + 1, clause.clause_type),
        }
        println!("{}", clause.text);

        if !clause.simplified_text.is_empty() {
            println!("-- Plain language:");
            println!("{}", clause.simplified_text);
        }

        if !clause.entities.is_empty() {
            println!("-- Entities:");
            for entity in &clause.entities {
                println!("   {} ({})", entity.text, entity.label);
            }
        }

        if !clause.legal_terms.is_empty() {
            println!("-- Legal terms:");
            for (term, definition) in &clause.legal_terms {
                println!("   {term}: {definition}");
            }
        }
    }
}
