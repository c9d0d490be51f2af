use std::path::PathBuf;

use clap::{
    Args, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use albumshelf::{
    cli, config, error,
    management::{AlbumStore, JsonFilePersistence, MemoryPersistence, Persistence},
    utils,
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
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Work on a throwaway in-memory shelf filled with sample albums
    #[clap(long, global = true)]
    memory: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List albums on the shelf
    List(ListOptions),

    /// Add a new album
    Add(AlbumFieldArgs),

    /// Edit an existing album
    Edit(EditOptions),

    /// Delete an album
    Remove(RemoveOptions),

    /// Add sample albums
    Seed(SeedOptions),

    /// Import albums from a JSON file
    Import(FileOptions),

    /// Export all albums to a JSON file
    Export(FileOptions),

    /// Show where the shelf is stored and how many albums it holds
    Info,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ListOptions {
    /// Only show albums whose title, artist or genre contains this text
    #[clap(long)]
    pub search: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct AlbumFieldArgs {
    /// Album title
    #[clap(long)]
    pub title: Option<String>,

    /// Artist name
    #[clap(long)]
    pub artist: Option<String>,

    /// Genre
    #[clap(long)]
    pub genre: Option<String>,

    /// Release format, e.g. Vinyl or CD
    #[clap(long)]
    pub format: Option<String>,

    /// Release year (1800-2022)
    #[clap(long, value_parser = utils::parse_year)]
    pub year: Option<i32>,

    /// Cover art reference
    #[clap(long)]
    pub cover_art: Option<String>,
}

impl From<AlbumFieldArgs> for cli::AlbumFields {
    fn from(args: AlbumFieldArgs) -> Self {
        cli::AlbumFields {
            title: args.title,
            artist: args.artist,
            genre: args.genre,
            format: args.format,
            year: args.year,
            cover_art: args.cover_art,
        }
    }
}

#[derive(Parser, Debug, Clone)]
pub struct EditOptions {
    /// Album id or a unique prefix of it
    pub id: String,

    #[command(flatten)]
    pub fields: AlbumFieldArgs,
}

#[derive(Parser, Debug, Clone)]
pub struct RemoveOptions {
    /// Album id or a unique prefix of it
    pub id: String,

    /// Skip the confirmation prompt
    #[clap(long, short)]
    pub yes: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct SeedOptions {
    /// Number of sample albums to add
    #[clap(long, default_value_t = utils::SAMPLE_ALBUM_COUNT)]
    pub count: usize,
}

#[derive(Parser, Debug, Clone)]
pub struct FileOptions {
    pub path: PathBuf,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    if let Command::Completions(opt) = &cli.command {
        let mut cmd = Cli::command_for_update();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    if cli.memory {
        let samples = utils::sample_shelf(utils::SAMPLE_ALBUM_COUNT);
        let store = match AlbumStore::open(MemoryPersistence::with_albums(samples)).await {
            Ok(s) => s,
            Err(e) => error!("Cannot open in-memory shelf. Err: {}", e),
        };
        run(store, cli.command, None).await;
    } else {
        let path = config::library_path();
        let store = match AlbumStore::open(JsonFilePersistence::new(path.clone())).await {
            Ok(s) => s,
            Err(e) => error!("Cannot open library {}. Err: {}", path.display(), e),
        };
        run(store, cli.command, Some(path)).await;
    }
}

async fn run<P: Persistence>(mut store: AlbumStore<P>, command: Command, library: Option<PathBuf>) {
    let mut events = store.subscribe();

    match command {
        Command::List(opt) => cli::list_albums(&store, opt.search),
        Command::Add(fields) => cli::add_album(&mut store, fields.into()).await,
        Command::Edit(opt) => cli::edit_album(&mut store, &opt.id, opt.fields.into()).await,
        Command::Remove(opt) => cli::remove_album(&mut store, &opt.id, opt.yes).await,
        Command::Seed(opt) => cli::seed_albums(&mut store, opt.count).await,
        Command::Import(opt) => cli::import_albums(&mut store, &opt.path).await,
        Command::Export(opt) => cli::export_albums(&store, &opt.path).await,
        Command::Info => cli::info(&store, library.as_deref()),
        Command::Completions(_) => {}
    }

    cli::report_changes(&mut events);
}
