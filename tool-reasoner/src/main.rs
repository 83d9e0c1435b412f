// ABOUTME: tool-reasoner CLI - answers queries with step-by-step model reasoning
// ABOUTME: plus math and string tools, single-shot or in an interactive loop.

use anyhow::Result;
use clap::Parser;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tokio::signal;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use reckon::config::ReasonerConfig;
use reckon::reasoning::{
    Reasoner, help_text, render_final_answer, render_query_banner, render_reasoning,
    render_tool_phase, until_interrupted,
};

#[derive(Parser, Debug)]
#[command(
    name = "tool-reasoner",
    version,
    about = "Tool-enhanced reasoning over a hosted language model",
    after_help = "Examples:\n  tool-reasoner\n  tool-reasoner --query \"What's the square root of 144?\"\n  tool-reasoner -q \"How many vowels are in 'hello world'?\"\n\nRequires GEMINI_API_KEY (or OPENAI_API_KEY with RECKON_PROVIDER=openai), e.g. in a .env file."
)]
struct Cli {
    /// Single query to process (non-interactive mode)
    #[arg(short, long)]
    query: Option<String>,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("reckon={level},tool_reasoner={level}")))
        .unwrap_or_else(|_| {
            eprintln!(
                "Invalid log level '{}', defaulting to warn. Valid levels: trace, debug, info, warn, error",
                level
            );
            EnvFilter::new("warn")
        });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run one query, printing each phase as it completes.
async fn process_query(reasoner: &Reasoner, query: &str) {
    print!("{}", render_query_banner(query));

    let reasoning = match reasoner.reason(query).await {
        Ok(reasoning) => reasoning,
        Err(err) => {
            println!("{}", err);
            return;
        }
    };
    print!("{}", render_reasoning(&reasoning));

    let (parsed, report) = reasoner.run_tools(&reasoning);
    print!("{}", render_tool_phase(&parsed, &report));

    let answer = reasoner.conclude(query, &reasoning, &report).await;
    print!("{}", render_final_answer(&answer));
}

/// Run one query, giving up cleanly if Ctrl-C arrives while it is in flight.
/// Returns `false` when interrupted.
async fn process_query_interruptible(reasoner: &Reasoner, query: &str) -> bool {
    let finished = until_interrupted(process_query(reasoner, query), signal::ctrl_c())
        .await
        .is_some();
    if !finished {
        println!("\n\n👋 Goodbye!");
    }
    finished
}

async fn interactive_mode(reasoner: &Reasoner) -> Result<()> {
    let mut rl = DefaultEditor::new()?;

    println!("🤖 Tool-Enhanced Reasoning System");
    println!("{}", "=".repeat(50));
    println!("Enter your queries and I'll reason through them step by step!");
    println!("I can use mathematical and string analysis tools when needed.");
    println!("Type 'quit', 'exit', or 'q' to stop.");
    println!("Type 'help' to see available tools.");
    println!("{}", "-".repeat(50));

    loop {
        let line = match rl.readline("\n📝 Enter your query: ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                println!("\n\n👋 Goodbye!");
                break;
            }
            Err(err) => return Err(err.into()),
        };

        let query = line.trim();
        match query.to_lowercase().as_str() {
            "quit" | "exit" | "q" => {
                println!("\n👋 Goodbye!");
                break;
            }
            "help" => {
                print!("{}", help_text(reasoner.dispatcher()));
                continue;
            }
            "" => {
                println!("Please enter a valid query.");
                continue;
            }
            _ => {}
        }

        let _ = rl.add_history_entry(query);
        if !process_query_interruptible(reasoner, query).await {
            break;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let config = match ReasonerConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("❌ Error: {}.", err);
            eprintln!("Please create a .env file with your API key.");
            eprintln!("See .env.example for the format.");
            std::process::exit(1);
        }
    };
    debug!(?config, "tool-reasoner starting");

    let reasoner = Reasoner::new(config.completion_client()?);

    match cli.query.as_deref() {
        Some(query) => {
            process_query_interruptible(&reasoner, query).await;
        }
        None => interactive_mode(&reasoner).await?,
    }
    Ok(())
}
