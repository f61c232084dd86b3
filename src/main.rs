use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context as _;
use clap::{ArgAction, Args, Parser, Subcommand};
use quoteforge::{
    DEFAULT_FONT_SIZE, FONT_SIZE_RANGE, ForgeConfig, QuoteMode, RenderRequest, Session, assets,
    export, font, graphics, quotes,
};

#[derive(Parser, Debug)]
#[command(
    name = "quoteforge",
    version,
    about = "Aesthetic quote image generator"
)]
struct Cli {
    /// Folder with background images
    #[arg(
        long,
        env = "QUOTEFORGE_ASSETS",
        default_value = "assets",
        global = true
    )]
    assets_dir: PathBuf,

    /// Folder with .ttf fonts
    #[arg(long, env = "QUOTEFORGE_FONTS", default_value = "fonts", global = true)]
    fonts_dir: PathBuf,

    /// Raise log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a quote onto a background
    Render(RenderArgs),
    /// List available backgrounds and fonts
    List,
    /// Print the example quotes
    Quotes {
        /// Print a single random quote instead
        #[arg(long)]
        random: bool,
        /// Seed for the random pick
        #[arg(long, requires = "random")]
        seed: Option<u64>,
    },
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Your own quote
    #[arg(long, conflicts_with = "random")]
    quote: Option<String>,

    /// Use a random example quote
    #[arg(long)]
    random: bool,

    /// Seed for the random quote
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    /// Background file name (in the assets folder) or path
    #[arg(long)]
    background: Option<String>,

    /// Font file name (in the fonts folder) or path
    #[arg(long)]
    font: Option<String>,

    /// Font size in points
    #[arg(long, default_value_t = DEFAULT_FONT_SIZE, value_parser = parse_font_size)]
    size: f32,

    /// Also write the PNG here
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Save a copy to the Downloads folder
    #[arg(long)]
    download: bool,

    /// Skip the welcome banner
    #[arg(long)]
    no_intro: bool,
}

fn parse_font_size(s: &str) -> Result<f32, String> {
    let size: f32 = s.parse().map_err(|_| format!("`{s}` is not a number"))?;
    if FONT_SIZE_RANGE.contains(&size) {
        Ok(size)
    } else {
        Err(format!(
            "must be between {} and {}",
            FONT_SIZE_RANGE.start(),
            FONT_SIZE_RANGE.end()
        ))
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<quoteforge::Error>() {
                Some(e) if e.is_font_error() => eprintln!("🚫 Font error: {e}"),
                _ => eprintln!("error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = ForgeConfig {
        assets_dir: cli.assets_dir,
        fonts_dir: cli.fonts_dir,
        ..ForgeConfig::default()
    };

    match cli.command {
        Command::Render(args) => render(&config, args),
        Command::List => list(&config),
        Command::Quotes { random, seed } => {
            if random {
                let mut session = new_session(seed);
                println!("{}", session.refresh_quote());
            } else {
                for quote in quotes::QUOTES {
                    println!("{quote}");
                }
            }
            Ok(())
        }
    }
}

fn new_session(seed: Option<u64>) -> Session {
    match seed {
        Some(seed) => Session::seeded(seed),
        None => Session::from_os_rng(),
    }
}

fn show_intro(config: &ForgeConfig) {
    println!("🌸 Welcome to QUOTE GENERATOR!");
    std::thread::sleep(config.intro_delay);
}

fn list(config: &ForgeConfig) -> anyhow::Result<()> {
    let backgrounds =
        assets::list_backgrounds(&config.assets_dir).context("failed to list backgrounds")?;
    let fonts = assets::list_fonts(&config.fonts_dir).context("failed to list fonts")?;

    println!("Backgrounds ({}):", config.assets_dir.display());
    for name in &backgrounds {
        println!("  {name}");
    }
    println!("Fonts ({}):", config.fonts_dir.display());
    for name in &fonts {
        println!("  {name}");
    }
    Ok(())
}

fn render(config: &ForgeConfig, args: RenderArgs) -> anyhow::Result<()> {
    let mut session = new_session(args.seed);
    if session.take_intro() && !args.no_intro {
        show_intro(config);
    }

    let mode = if args.random {
        QuoteMode::Random
    } else {
        QuoteMode::Custom(args.quote.unwrap_or_default())
    };
    let Some(quote) = session.quote_for(&mode) else {
        println!("📝 Type a quote or select Random to preview your aesthetic creation.");
        return Ok(());
    };

    let background = assets::pick_background(&config.assets_dir, args.background.as_deref())?;
    let font_path = assets::pick_font(&config.fonts_dir, args.font.as_deref())?;

    let mut canvas = graphics::open_canvas(&background)
        .with_context(|| format!("failed to load background {}", background.display()))?;
    let font_data = font::load_font_from_file(&font_path).map_err(quoteforge::Error::from)?;

    let request = RenderRequest::from_config(config, quote, font_data).with_font_size(args.size);
    quoteforge::render(&mut canvas, &request)?;

    let preview = export::save_preview(&canvas, std::env::temp_dir())?;
    println!("🌟 Live preview: {}", preview.display());

    if let Some(output) = args.output {
        export::save_png(&canvas, &output)?;
        println!("Saved {}", output.display());
    }
    if args.download {
        let path = export::save_download(&canvas)?;
        println!("📥 Downloaded {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn font_size_parser_enforces_range() {
        assert_eq!(parse_font_size("40"), Ok(40.0));
        assert_eq!(parse_font_size("20"), Ok(20.0));
        assert!(parse_font_size("81").is_err());
        assert!(parse_font_size("big").is_err());
    }

    #[test]
    fn quote_and_random_conflict() {
        let res = Cli::try_parse_from(["quoteforge", "render", "--quote", "hi", "--random"]);
        assert!(res.is_err());
    }

    #[test]
    fn parses_render_arguments() {
        let cli = Cli::try_parse_from([
            "quoteforge",
            "--assets-dir",
            "bg",
            "render",
            "--random",
            "--seed",
            "9",
            "--size",
            "64",
            "--no-intro",
        ])
        .unwrap();
        assert_eq!(cli.assets_dir, PathBuf::from("bg"));
        match cli.command {
            Command::Render(args) => {
                assert!(args.random);
                assert_eq!(args.seed, Some(9));
                assert_eq!(args.size, 64.0);
                assert!(args.no_intro);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
