//! ExamSearch CLI — exam lookup from the terminal.
//!
//! One-shot `search`/`suggest`/`detail` commands plus the interactive
//! `live` mode, all speaking to the exam service over HTTP.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use examsearch_core::suggest::dedup_suggestions;
use examsearch_core::{Exam, ExamLookup, HttpExamClient};

mod calendar;
mod live;

/// ExamSearch CLI — search scheduled exams from the terminal.
#[derive(Parser)]
#[command(name = "examsearch", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Exam service endpoint
    #[arg(long, global = true, default_value = "http://127.0.0.1:8080/api/v1/exam")]
    base_url: String,

    /// Output as JSON instead of human-readable text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Search exams by name prefix
    Search {
        /// Exam name or prefix
        name: String,
    },
    /// Show name suggestions for a prefix
    Suggest {
        /// Partial exam name
        term: String,

        /// Maximum number of suggestions
        #[arg(long, default_value = "8")]
        limit: usize,
    },
    /// Show one exam by name and title
    Detail {
        /// Exam name
        name: String,

        /// Exam title
        title: String,

        /// Write the exam as an .ics calendar event to this file
        #[arg(long)]
        calendar: Option<PathBuf>,
    },
    /// Interactive live search (arrow keys, Enter, Escape)
    Live,
}

fn format_date(exam: &Exam) -> String {
    exam.start_date
        .map(|d| d.format("%A, %B %e, %Y").to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

fn format_time(exam: &Exam) -> String {
    exam.start_time
        .map(|t| t.format("%I:%M %p").to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

fn print_exam_table(exams: &[Exam]) {
    for exam in exams {
        println!(
            "{:<25} {:<20} {:<28} {}",
            exam.name,
            exam.title,
            format_date(exam),
            exam.location.as_deref().unwrap_or("N/A"),
        );
    }
}

fn print_exam_detail(exam: &Exam) {
    println!("Name:      {}", exam.name);
    println!("Title:     {}", exam.title);
    println!("Date:      {}", format_date(exam));
    println!("Time:      {}", format_time(exam));
    println!("Duration:  {}", exam.duration.as_deref().unwrap_or("N/A"));
    println!("Location:  {}", exam.location.as_deref().unwrap_or("N/A"));
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("examsearch=warn".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let client: Arc<dyn ExamLookup> = Arc::new(HttpExamClient::new(cli.base_url.clone()));

    match cli.command {
        Commands::Search { name } => {
            let exams = client.find_by_name(&name).await.unwrap_or_else(|e| {
                eprintln!("Failed to fetch exams: {e}");
                std::process::exit(1);
            });

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&exams).unwrap());
            } else {
                if exams.is_empty() {
                    eprintln!("No exams found for '{name}'");
                    std::process::exit(1);
                }
                print_exam_table(&exams);
                eprintln!("\n{} exams", exams.len());
            }
        }
        Commands::Suggest { term, limit } => {
            let exams = client.find_by_name(&term).await.unwrap_or_else(|e| {
                eprintln!("Failed to fetch exams: {e}");
                std::process::exit(1);
            });
            let names = dedup_suggestions(&exams, limit);

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&names).unwrap());
            } else {
                if names.is_empty() {
                    eprintln!("No suggestions for '{term}'");
                    std::process::exit(1);
                }
                for name in &names {
                    println!("{name}");
                }
            }
        }
        Commands::Detail { name, title, calendar: out } => {
            let exam = client.find_detail(&name, &title).await.unwrap_or_else(|e| {
                eprintln!("Failed to fetch exams: {e}");
                std::process::exit(1);
            });

            let exam = exam.unwrap_or_else(|| {
                eprintln!("No exam named '{name}' with title '{title}'");
                std::process::exit(1);
            });

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&exam).unwrap());
            } else {
                print_exam_detail(&exam);
            }

            if let Some(path) = out {
                match calendar::exam_to_ics(&exam) {
                    Some(ics) => {
                        if let Err(e) = std::fs::write(&path, ics) {
                            eprintln!("Could not write {}: {e}", path.display());
                            std::process::exit(1);
                        }
                        eprintln!("Calendar event written to {}", path.display());
                    }
                    None => {
                        eprintln!("Exam has no date/time, cannot export a calendar event");
                        std::process::exit(1);
                    }
                }
            }
        }
        Commands::Live => {
            if let Err(e) = live::run(client).await {
                eprintln!("live mode failed: {e}");
                std::process::exit(1);
            }
        }
    }
}
