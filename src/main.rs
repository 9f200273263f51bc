use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use moodtunes::{
    classify, phrase_for, BackendKind, ChatSession, Config, ItunesClient, Mood, MoodCatalog,
    Recommender, SearchBackend, Sender, StaticBackend, Track,
};

#[derive(Parser)]
#[command(name = "moodtunes")]
#[command(about = "Chat about how you feel and get matching song recommendations")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Recommendation backend: 'static' (curated catalog) or 'search' (iTunes)
    #[arg(long, global = true, env = "MOODTUNES_BACKEND")]
    backend: Option<BackendKind>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive chat session
    Chat,

    /// One-shot recommendation for a message
    Recommend {
        /// The message to analyze
        text: String,
    },

    /// Show the detected mood for a message
    Classify {
        /// The message to analyze
        text: String,
    },

    /// Print a bulk playlist for a mood
    Playlist {
        /// One of: happy, sad, angry, excited, neutral
        mood: Mood,
    },

    /// Free-text song search against iTunes
    Search {
        /// Search terms
        query: String,
    },
}

fn setup_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_tracing(cli.verbose);

    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(backend) = cli.backend {
        config.backend = backend;
    }

    match cli.command {
        Commands::Chat => chat(&config).await?,
        Commands::Recommend { text } => recommend_once(&config, &text).await?,
        Commands::Classify { text } => {
            println!("{}", classify(&text).to_string().cyan().bold());
        }
        Commands::Playlist { mood } => playlist(&config, mood).await?,
        Commands::Search { query } => search(&config, &query).await?,
    }

    Ok(())
}

fn make_recommender(config: &Config) -> Box<dyn Recommender> {
    let catalog = MoodCatalog::builtin();
    match config.backend {
        BackendKind::Static => Box::new(StaticBackend::new(catalog)),
        BackendKind::Search => Box::new(SearchBackend::new(
            ItunesClient::with_base_url(&config.itunes_base_url),
            catalog,
        )),
    }
}

async fn chat(config: &Config) -> Result<()> {
    println!("{}", "MoodTunes".cyan().bold());
    println!("{}", "=".repeat(50));
    println!("Type a message, or 'quit' to leave.\n");

    let mut session = ChatSession::new(make_recommender(config), MoodCatalog::builtin());

    for message in session.messages() {
        print_message(message);
    }

    let stdin = io::stdin();
    loop {
        print!("{} ", "you>".green().bold());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            break;
        }

        for reply in session.handle_message(line).await {
            print_message(&reply);
        }

        if !session.playlist().is_empty() {
            println!("\n{}", "Up next:".yellow());
            print_tracks(session.playlist());
            println!();
        }
    }

    println!("{}", "See you next time!".cyan());
    Ok(())
}

async fn recommend_once(config: &Config, text: &str) -> Result<()> {
    let recommender = make_recommender(config);
    let catalog = MoodCatalog::builtin();

    let mood = classify(text);
    println!("Mood: {}", mood.to_string().cyan().bold());
    println!("{}\n", phrase_for(&catalog, mood).italic());

    let mut tracks = recommender.recommend(mood, text).await;
    if tracks.is_empty() && mood != Mood::Neutral {
        tracks = recommender.recommend(Mood::Neutral, text).await;
    }

    if tracks.is_empty() {
        println!("{}", "No songs found, try again in a bit".yellow());
    } else {
        print_tracks(&tracks);
    }

    Ok(())
}

async fn playlist(config: &Config, mood: Mood) -> Result<()> {
    println!(
        "{}",
        format!("{} playlist", mood).to_uppercase().cyan().bold()
    );
    println!("{}", "=".repeat(50));

    let recommender = make_recommender(config);
    let tracks = recommender.mood_playlist(mood).await;

    if tracks.is_empty() {
        println!("{}", "No songs found".yellow());
    } else {
        print_tracks(&tracks);
    }

    Ok(())
}

async fn search(config: &Config, query: &str) -> Result<()> {
    let client = ItunesClient::with_base_url(&config.itunes_base_url);

    let tracks = client
        .search_query(query)
        .await
        .context("Search request failed")?;

    if tracks.is_empty() {
        println!("{}", "No songs found".yellow());
    } else {
        print_tracks(&tracks);
    }

    Ok(())
}

fn print_message(message: &moodtunes::Message) {
    match message.sender {
        Sender::User => println!("{} {}", "you>".green().bold(), message.text),
        Sender::Bot => println!("{} {}", "bot>".magenta().bold(), message.text),
    }
}

fn print_tracks(tracks: &[Track]) {
    for (i, track) in tracks.iter().enumerate() {
        print!(
            "{:2}. {} - {}",
            i + 1,
            track.title.green(),
            track.artist.cyan()
        );
        if let Some(duration) = &track.duration {
            print!(" ({})", duration);
        }
        println!();
    }
}
