use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use healer::output;
use healer::quiz::{self, NodeTable, RiskAssessment, RiskLevel};
use healer::store::{ContributionKind, ContributionStore, Status};

const EXIT_SUCCESS: i32 = 0;
const EXIT_STORAGE: i32 = 1;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Take the wellness check-in questionnaire
    Quiz,
    /// Show the positivity wall (published contributions)
    Wall,
    /// Submit a quote or story to the wall (lands in the moderation queue)
    Submit {
        /// The quote or story text
        content: String,
        /// Display name (omit to post as Anonymous Student)
        #[arg(long)]
        name: Option<String>,
        /// Submit as a story instead of a quote
        #[arg(long)]
        story: bool,
        /// Publish immediately, skipping moderation
        #[arg(long)]
        publish: bool,
    },
    /// List contributions waiting for moderation
    Pending,
    /// Publish a pending contribution by id
    Approve { id: String },
    /// Delete a contribution by id, whatever its status
    Remove { id: String },
    /// Manage anonymous feedback
    Feedback {
        #[command(subcommand)]
        command: FeedbackCommands,
    },
}

#[derive(Subcommand, Debug)]
enum FeedbackCommands {
    /// Record a piece of feedback
    Add { content: String },
    /// List all recorded feedback
    List,
    /// Delete a feedback entry by id
    Remove { id: String },
}

#[derive(Parser, Debug)]
#[command(name = "healer")]
#[command(about = "Student wellness check-in and positivity wall", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose output (score breakdown, storage paths)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Data directory for the wall and feedback (defaults to ~/.config/healer)
    #[arg(long, global = true)]
    data_dir: Option<String>,

    /// Path to a question table YAML (defaults to the built-in table)
    #[arg(long, global = true)]
    questions: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    let data_dir = cli
        .data_dir
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(healer::store::get_data_dir);
    let store = ContributionStore::new(data_dir.clone());

    if cli.verbose {
        eprintln!("Data directory: {}", data_dir.display());
    }

    match cli.command {
        Commands::Quiz => {
            let table = load_validated_table(cli.questions.as_deref(), cli.verbose);

            let assessment = match run_quiz(&table) {
                Ok(a) => a,
                Err(e) => {
                    eprintln!("Quiz error: {}", e);
                    std::process::exit(EXIT_CONFIG);
                }
            };

            let use_colors = output::should_use_colors();
            println!();
            println!("{}", output::format_assessment(&assessment, use_colors));
            if cli.verbose {
                println!("{}", output::format_breakdown(&assessment));
            }
            if assessment.level != RiskLevel::Low {
                println!("This is a screening signal, not a diagnosis. Talking to a counselor or a trusted person is a good next step.");
            }
        }
        Commands::Wall => {
            let entries = match store.published() {
                Ok(e) => e,
                Err(e) => exit_storage(e),
            };
            println!("{}", output::format_wall(&entries, output::should_use_colors()));
        }
        Commands::Submit {
            content,
            name,
            story,
            publish,
        } => {
            let kind = if story {
                ContributionKind::Story
            } else {
                ContributionKind::Quote
            };
            let status = if publish {
                Status::Published
            } else {
                Status::Pending
            };
            let entry = match store.submit(name.as_deref().unwrap_or(""), &content, kind, status) {
                Ok(e) => e,
                Err(e) => exit_storage(e),
            };
            match status {
                Status::Published => println!("Published {} as {}", entry.id, entry.name),
                Status::Pending => println!(
                    "Submitted {} as {} (waiting for moderation)",
                    entry.id, entry.name
                ),
            }
        }
        Commands::Pending => {
            let entries = match store.pending() {
                Ok(e) => e,
                Err(e) => exit_storage(e),
            };
            println!("{}", output::format_queue(&entries, output::should_use_colors()));
        }
        Commands::Approve { id } => match store.approve(&id) {
            Ok(true) => println!("Published {}", id),
            Ok(false) => println!("No contribution with id {}; nothing to do", id),
            Err(e) => exit_storage(e),
        },
        Commands::Remove { id } => match store.delete(&id) {
            Ok(true) => println!("Removed {}", id),
            Ok(false) => println!("No contribution with id {}; nothing to do", id),
            Err(e) => exit_storage(e),
        },
        Commands::Feedback { command } => match command {
            FeedbackCommands::Add { content } => match store.save_feedback(&content) {
                Ok(entry) => println!("Thanks! Recorded as {}", entry.id),
                Err(e) => exit_storage(e),
            },
            FeedbackCommands::List => {
                let entries = match store.feedback() {
                    Ok(e) => e,
                    Err(e) => exit_storage(e),
                };
                println!(
                    "{}",
                    output::format_feedback(&entries, output::should_use_colors())
                );
            }
            FeedbackCommands::Remove { id } => match store.delete_feedback(&id) {
                Ok(true) => println!("Removed {}", id),
                Ok(false) => println!("No feedback with id {}; nothing to do", id),
                Err(e) => exit_storage(e),
            },
        },
    }

    std::process::exit(EXIT_SUCCESS);
}

fn exit_storage(e: anyhow::Error) -> ! {
    eprintln!("Storage error: {}", e);
    std::process::exit(EXIT_STORAGE);
}

/// Load the question table (built-in or `--questions` override) and run the
/// graph checks before any traversal. Configuration errors are fatal here;
/// a table with a dangling branch must never reach the engine.
fn load_validated_table(path: Option<&str>, verbose: bool) -> NodeTable {
    let table = match path {
        Some(p) => quiz::load_table(&PathBuf::from(p)),
        None => quiz::default_table(),
    };
    let table = match table {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = quiz::validate_table(&table) {
        eprintln!("Question table errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    if verbose {
        eprintln!(
            "Loaded {} questions, starting at '{}'",
            table.nodes.len(),
            table.start
        );
    }

    table
}

/// Interactive stdin loop over one quiz session. Options are picked by
/// number (or exact text); `b` revisits the previous question.
fn run_quiz(table: &NodeTable) -> Result<RiskAssessment> {
    let mut session = quiz::QuizSession::new(table);
    let stdin = io::stdin();

    while let Some(node) = session.current().cloned() {
        println!();
        println!("[{}] Question {}", node.section, session.question_number());
        println!("{}", node.question);
        for (i, option) in node.options.iter().enumerate() {
            println!("  {}. {}", i + 1, option);
        }
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            bail!("Input closed before the quiz was finished");
        }
        let input = line.trim();

        if input.eq_ignore_ascii_case("b") || input.eq_ignore_ascii_case("back") {
            if !session.back() {
                println!("Already at the first question.");
            }
            continue;
        }

        let answer = match input.parse::<usize>() {
            Ok(n) if n >= 1 && n <= node.options.len() => node.options[n - 1].clone(),
            _ if node.options.iter().any(|o| o == input) => input.to_string(),
            _ => {
                println!(
                    "Pick 1-{} or type the answer exactly (b to go back).",
                    node.options.len()
                );
                continue;
            }
        };

        session.answer(&answer)?;
    }

    Ok(quiz::score(session.answers()))
}
