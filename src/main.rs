use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use relisten::{cli, config, error};

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
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Generate the tracks JSON document
    Json(GenerateOptions),

    /// Generate the re-listen HTML page
    Html(GenerateOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct GenerateOptions {
    /// SoundCloud API client id
    #[clap(long)]
    pub client_id: String,

    /// SoundCloud API client secret
    #[clap(long)]
    pub client_secret: String,

    /// SoundCloud profile to fetch tracks from
    #[clap(long, default_value = "radio-moafunk")]
    pub username: String,

    /// Output path (defaults to public/data/tracks.json for json,
    /// re-listen.html for html)
    #[clap(long)]
    pub output: Option<PathBuf>,

    /// Fail instead of falling back to the first 10 unfiltered tracks
    /// when no track is streamable or public
    #[clap(long)]
    pub strict: bool,
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

    match cli.command {
        Command::Json(opt) => {
            cli::json(
                opt.client_id,
                opt.client_secret,
                opt.username,
                opt.output,
                opt.strict,
            )
            .await
        }
        Command::Html(opt) => {
            cli::html(
                opt.client_id,
                opt.client_secret,
                opt.username,
                opt.output,
                opt.strict,
            )
            .await
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
