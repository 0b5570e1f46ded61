use aspirant_board::board::{render_table, AspirantBoard, HttpAspirantSource, RenderOptions};
use aspirant_board::config::AppConfig;
use aspirant_board::error::AppError;
use aspirant_board::telemetry;
use clap::{Args, Parser, Subcommand};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Aspirant Board",
    about = "Fetch the Hogwarts aspirant roster and render a filterable table",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the roster and print the table (default command)
    Show(ShowArgs),
}

#[derive(Args, Debug, Default)]
struct ShowArgs {
    /// Override the configured roster endpoint
    #[arg(long)]
    api_url: Option<String>,
    /// Filter rows by name (case-insensitive substring)
    #[arg(long)]
    name: Option<String>,
    /// Filter rows by house (case-insensitive substring)
    #[arg(long)]
    house: Option<String>,
    /// Hide the aspirant with this id after fetching (repeatable)
    #[arg(long = "hide", value_name = "ID")]
    hide: Vec<String>,
    /// Render the cleared board instead of fetching
    #[arg(long)]
    clear: bool,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Show(ShowArgs::default()));

    match command {
        Command::Show(args) => run_show(args).await,
    }
}

async fn run_show(mut args: ShowArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(url) = args.api_url.take() {
        config.api.url = url;
    }

    telemetry::init(&config.telemetry)?;

    let mut board = AspirantBoard::new();

    if args.clear {
        board.clear();
    } else {
        let source = HttpAspirantSource::new(config.api.url.clone());
        info!(url = %source.url(), "showing complete aspirant list");
        // Fetch failures fold into the empty presentation; they are logged,
        // never surfaced as a process error.
        board.fetch_all(&source).await;
    }

    if let Some(name) = args.name.as_deref() {
        board.set_name_filter(name);
    }
    if let Some(house) = args.house.as_deref() {
        board.set_house_filter(house);
    }
    for id in &args.hide {
        board.hide(id);
    }

    let options = RenderOptions {
        default_image: config.api.default_image.clone(),
    };

    println!("Hogwarts aspirants");
    print!("{}", render_table(&board, &options));

    Ok(())
}
