use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotrip::{
    cli,
    config::{self, Settings},
    error,
    spotify::WebApi,
    types::GenreKind,
    warning,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Print result cache statistics when done
    #[clap(long, global = true)]
    cache_stats: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List album URIs of artists
    Albums(AlbumsOptions),

    /// List artists credited on albums
    Artists(UrisOptions),

    /// List genres of the first artist or the album of tracks
    Genres(GenresOptions),

    /// List track URIs of Spotify charts
    Charts(UrisOptions),

    /// Download the large cover art of a track
    Cover(CoverOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct AlbumsOptions {
    /// Artist URIs (spotify:artist:<id>)
    #[clap(required = true)]
    pub uris: Vec<String>,

    /// Only include these album types (e.g. album,single)
    #[clap(long)]
    pub album_type: Option<String>,

    /// Only include albums available in this market (e.g. US)
    #[clap(long)]
    pub market: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct UrisOptions {
    #[clap(required = true)]
    pub uris: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct GenresOptions {
    /// Track URIs (spotify:track:<id>)
    #[clap(required = true)]
    pub uris: Vec<String>,

    /// Entity of the track to take genres from
    #[clap(long, value_enum, default_value = "artist")]
    pub kind: GenreKind,
}

#[derive(Parser, Debug, Clone)]
pub struct CoverOptions {
    /// Track URI (spotify:track:<id>)
    pub uri: String,

    /// Output file, defaults to <track-id>.jpg
    #[clap(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    if let Command::Completions(opt) = &cli.command {
        let mut cmd = Cli::command_for_update();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    let mut settings = Settings::from_env();
    if let Command::Albums(opt) = &cli.command {
        settings = settings.with_album_filters(opt.album_type.clone(), opt.market.clone());
    }

    let mut api = match WebApi::new(settings) {
        Ok(api) => api,
        Err(e) => error!("Cannot build HTTP client. Err: {}", e),
    };

    let mut ok = true;
    match cli.command {
        Command::Albums(opt) => cli::albums(&mut api, &opt.uris).await,
        Command::Artists(opt) => cli::artists(&mut api, &opt.uris).await,
        Command::Genres(opt) => cli::genres(&mut api, opt.kind, &opt.uris).await,
        Command::Charts(opt) => cli::charts(&mut api, &opt.uris).await,
        Command::Cover(opt) => ok = cli::cover(&mut api, &opt.uri, opt.output).await,
        Command::Completions(_) => {}
    }

    if cli.cache_stats {
        cli::cache_stats(&api);
    }

    if !ok {
        std::process::exit(1);
    }
}
