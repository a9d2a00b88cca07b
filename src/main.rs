//! One-shot CLI for the Pokémon TCG card search client.

use clap::{Parser, Subcommand};

use card_lookup::{
    fetch_types_from, ApiResult, ClientOptions, PokemonCard, PokemonTcgClient, SearchQuery,
    DEFAULT_API_BASE_URL,
};

/// Search Pokémon TCG cards and list card types
#[derive(Parser, Debug)]
#[command(name = "card_lookup")]
#[command(version, about, long_about = None)]
struct Args {
    /// Base URL of the Pokémon TCG API
    #[arg(long, default_value = DEFAULT_API_BASE_URL)]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search for cards by name
    Search {
        /// Card name to search for
        name: String,

        /// Only return cards of these types (repeatable)
        #[arg(short, long)]
        types: Vec<String>,

        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<u32>,
    },
    /// List the card types known to the API
    Types,
}

#[tokio::main]
async fn main() {
    // Initialize logger. Set RUST_LOG environment variable to control log level.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if let Err(e) = run(args).await {
        log::error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> ApiResult<()> {
    match args.command {
        Command::Search { name, types, limit } => {
            let mut client = PokemonTcgClient::with_options(ClientOptions {
                base_url: args.base_url,
                ..ClientOptions::default()
            });
            let query = SearchQuery { name, types, limit };

            let cards = client.search(&query).await?;
            if cards.is_empty() {
                println!("No cards matched.");
            }
            for card in &cards {
                println!("{}", format_card(card));
                println!("    {}", card.image_url);
            }
        }
        Command::Types => {
            for card_type in fetch_types_from(&args.base_url).await? {
                println!("{card_type}");
            }
        }
    }

    Ok(())
}

/// One summary line per card, e.g.
/// "Dark Blastoise (#9) [Water] HP 70, weak to Lightning×2"
fn format_card(card: &PokemonCard) -> String {
    let types = if card.types.is_empty() {
        "-".to_string()
    } else {
        card.types.join("/")
    };
    let hp = card
        .hp
        .map(|hp| hp.to_string())
        .unwrap_or_else(|| "?".to_string());

    let mut line = format!("{} (#{}) [{}] HP {}", card.name, card.pokedex_num, types, hp);
    if !card.weaknesses.is_empty() {
        line.push_str(&format!(", weak to {}", card.weaknesses.join(", ")));
    }
    line
}
