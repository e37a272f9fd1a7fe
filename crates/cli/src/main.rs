mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dashboard::{
    Dashboard, DashboardConfig, HandlerTable, InputId, InputValue, JsonRenderer, OutputId, Session,
    View, ViewRenderer,
};
use render::TextRenderer;
use std::path::PathBuf;
use std::time::Instant;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

/// ReelDash - Movie Ratings Dashboard
#[derive(Parser)]
#[command(name = "reel-dash")]
#[command(about = "Movie ratings dashboard: top-rated titles, genre mix and actor search", long_about = None)]
struct Cli {
    /// Path to the movie CSV file [default: data/n_movies.csv]
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// JSON config file; flags given on the command line take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print views as JSON instead of text
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every view as first shown
    Show,

    /// Show the most frequent genres
    Genres {
        /// Number of genres to show
        #[arg(long)]
        top: Option<usize>,
    },

    /// Show the highest-rated titles
    Top {
        /// Number of titles to show
        #[arg(long)]
        limit: Option<usize>,

        /// List lowest first, as drawn in the bar chart
        #[arg(long)]
        ascending: bool,
    },

    /// Search the cast lists (case-sensitive substring match)
    Actor {
        /// Text to look for; omit to list every title
        #[arg(long)]
        query: Option<String>,
    },

    /// Drive the dashboard's inputs from stdin
    Interactive,
}

/// One line of interactive input
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Event(InputId, InputValue),
    Views,
    Help,
    Quit,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so --json output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = load_config(&cli)?;

    match &cli.command {
        Commands::Genres { top: Some(k) } => config.top_genre_limit = *k,
        Commands::Top {
            limit: Some(n),
            ascending,
        } => {
            if *ascending {
                config.top_chart_limit = *n;
            } else {
                config.ratings_table_limit = Some(*n);
            }
        }
        _ => {}
    }

    let start = Instant::now();
    let dashboard = Dashboard::load(config).context("Failed to load movie dataset")?;
    info!(
        "Loaded {} titles from {} in {:?}",
        dashboard.table().len(),
        dashboard.config().data_path.display(),
        start.elapsed()
    );

    let printer = Printer { json: cli.json };
    let session = Session::new();

    match cli.command {
        Commands::Show => {
            for (output, view) in dashboard.initial_views(&session) {
                printer.print(output, &view)?;
            }
        }
        Commands::Genres { .. } => printer.print_output(&dashboard, &session, OutputId::GenreChart)?,
        Commands::Top { ascending, .. } => {
            let output = if ascending {
                OutputId::TopRatedChart
            } else {
                OutputId::RatingsTable
            };
            printer.print_output(&dashboard, &session, output)?;
        }
        Commands::Actor { query } => {
            let view = View::ActorTable(dashboard.actor_table(query.as_deref()));
            printer.print(OutputId::ActorTable, &view)?;
        }
        Commands::Interactive => run_interactive(&dashboard, printer).await?,
    }

    Ok(())
}

/// Config file (if any), then the `--data` override
fn load_config(cli: &Cli) -> Result<DashboardConfig> {
    let config = match &cli.config {
        Some(path) => DashboardConfig::from_json_file(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?,
        None => DashboardConfig::default(),
    };
    Ok(match &cli.data {
        Some(path) => config.with_data_path(path.clone()),
        None => config,
    })
}

/// Writes views to stdout in the selected format
#[derive(Debug, Clone, Copy)]
struct Printer {
    json: bool,
}

impl Printer {
    fn print(&self, output: OutputId, view: &View) -> Result<()> {
        if self.json {
            let line = JsonRenderer::default()
                .render(output, view)
                .context("Failed to serialize view")?;
            println!("{}", line);
        } else {
            println!("{}\n", TextRenderer.render(output, view));
        }
        Ok(())
    }

    fn print_output(&self, dashboard: &Dashboard, session: &Session, output: OutputId) -> Result<()> {
        self.print(output, &dashboard.render(output, session))
    }
}

/// Read commands from stdin until `quit` or end of input
async fn run_interactive(dashboard: &Dashboard, printer: Printer) -> Result<()> {
    let handlers = HandlerTable::standard();
    let mut session = Session::new();

    for (output, view) in dashboard.initial_views(&session) {
        printer.print(output, &view)?;
    }
    if !printer.json {
        print_help();
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        let Some(command) = parse_command(&line) else {
            continue;
        };
        debug!("Interactive command: {:?}", command);

        match command {
            Command::Event(input, value) => {
                match handlers.dispatch(dashboard, &mut session, input, value) {
                    Ok((output, view)) => printer.print(output, &view)?,
                    Err(e) => warn!("Ignoring event: {}", e),
                }
            }
            Command::Views => {
                for (output, view) in dashboard.initial_views(&session) {
                    printer.print(output, &view)?;
                }
            }
            Command::Help => print_help(),
            Command::Quit => break,
        }
    }

    info!("Session ended after {} toggle clicks", session.toggle().click_count().saturating_sub(1));
    Ok(())
}

/// Parse one line of interactive input. Blank lines yield `None`.
fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim_end_matches(['\r', '\n']).trim_start();
    if line.trim().is_empty() {
        return None;
    }

    // Query text is everything after the first space, kept verbatim
    let (word, rest) = match line.split_once(' ') {
        Some((word, rest)) => (word, rest),
        None => (line, ""),
    };

    let command = match word {
        "click" => Command::Event(InputId::GenreToggle, InputValue::Click),
        "actor" => Command::Event(InputId::ActorQuery, InputValue::Text(Some(rest.to_string()))),
        "titles" => Command::Event(InputId::TitleQuery, InputValue::Text(Some(rest.to_string()))),
        "views" => Command::Views,
        "quit" | "exit" => Command::Quit,
        _ => Command::Help,
    };
    Some(command)
}

fn print_help() {
    println!("{}", "Commands:".bold().blue());
    println!("  {}          flip the genre chart between counts and percentages", "click".green());
    println!("  {}   filter the actor table", "actor <text>".green());
    println!("  {}  list titles whose cast contains <text>", "titles <text>".green());
    println!("  {}          print every view again", "views".green());
    println!("  {}           exit", "quit".green());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> InputValue {
        InputValue::Text(Some(s.to_string()))
    }

    #[test]
    fn test_parse_click_and_queries() {
        assert_eq!(
            parse_command("click"),
            Some(Command::Event(InputId::GenreToggle, InputValue::Click))
        );
        assert_eq!(
            parse_command("actor Jason Bateman"),
            Some(Command::Event(InputId::ActorQuery, text("Jason Bateman")))
        );
        assert_eq!(
            parse_command("titles Holbrook\r"),
            Some(Command::Event(InputId::TitleQuery, text("Holbrook")))
        );
    }

    #[test]
    fn test_parse_keeps_query_whitespace() {
        assert_eq!(
            parse_command("actor  Smith "),
            Some(Command::Event(InputId::ActorQuery, text(" Smith ")))
        );
        // A bare `actor` clears the query
        assert_eq!(
            parse_command("actor"),
            Some(Command::Event(InputId::ActorQuery, text("")))
        );
    }

    #[test]
    fn test_parse_ignores_leading_whitespace() {
        assert_eq!(
            parse_command(" click"),
            Some(Command::Event(InputId::GenreToggle, InputValue::Click))
        );
        assert_eq!(
            parse_command("\t actor  Smith "),
            Some(Command::Event(InputId::ActorQuery, text(" Smith ")))
        );
    }

    #[test]
    fn test_parse_other_lines() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("   "), None);
        assert_eq!(parse_command("views"), Some(Command::Views));
        assert_eq!(parse_command("quit"), Some(Command::Quit));
        assert_eq!(parse_command("dance"), Some(Command::Help));
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from([
            "reel-dash", "--data", "movies.csv", "--json", "top", "--limit", "3", "--ascending",
        ])
        .unwrap();

        assert!(cli.json);
        assert_eq!(cli.data, Some(PathBuf::from("movies.csv")));
        assert!(matches!(cli.command, Commands::Top { limit: Some(3), ascending: true }));

        let config = load_config(&cli).unwrap();
        assert_eq!(config.data_path, PathBuf::from("movies.csv"));
    }
}
