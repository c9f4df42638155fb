use std::collections::HashMap;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotlist::{
    Res, cli,
    config::{self, Config},
    error, warning,
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
    /// Defaults to `extract` when omitted
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Export the tracks of a playlist
    Extract(ExtractOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Playlist URL, URI or id (overrides SPOTIFY_PLAYLIST_URL)
    #[clap(long)]
    pub playlist: Option<String>,

    /// Output format: csv, txt or both (overrides OUTPUT_FORMAT)
    #[clap(long)]
    pub format: Option<String>,

    /// Directory for the exported files (overrides OUTPUT_DIRECTORY)
    #[clap(long)]
    pub output_dir: Option<String>,

    /// Prefix of the exported file names (overrides FILENAME_PREFIX)
    #[clap(long)]
    pub prefix: Option<String>,
}

impl ExtractOptions {
    fn overrides(self) -> HashMap<&'static str, String> {
        let mut overrides = HashMap::new();
        if let Some(playlist) = self.playlist {
            overrides.insert(config::SPOTIFY_PLAYLIST_URL, playlist);
        }
        if let Some(format) = self.format {
            overrides.insert(config::OUTPUT_FORMAT, format);
        }
        if let Some(dir) = self.output_dir {
            overrides.insert(config::OUTPUT_DIRECTORY, dir);
        }
        if let Some(prefix) = self.prefix {
            overrides.insert(config::FILENAME_PREFIX, prefix);
        }
        overrides
    }
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

async fn extract(opt: ExtractOptions) -> Res<()> {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment. Err: {}", e);
    }

    let config = Config::resolve(&opt.overrides())?;
    cli::extract(&config).await;
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Extract(ExtractOptions::default())) {
        Command::Extract(opt) => {
            if let Err(e) = extract(opt).await {
                error!("{}", e);
            }
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
