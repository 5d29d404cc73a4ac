use chrono::Local;
use clap::Parser;
use journal::application::{RecordEntryService, ShowEntryService};
use journal::cli::{format_error, help_text, Cli, Intent};
use journal::error::JournalError;
use journal::infrastructure::{EditorSession, EntryStore, JournalConfig};
use std::io::Read;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(JournalError::EmptyInput) => {
            print!("{}", help_text());
            std::process::exit(JournalError::EmptyInput.exit_code());
        }
        Err(e) => {
            eprintln!("{}", format_error(&e, Local::now().date_naive()));
            std::process::exit(e.exit_code());
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .without_time()
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    // Only fails if a global subscriber is already set
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn run(cli: Cli) -> Result<(), JournalError> {
    // Resolved before loading configuration so usage errors never touch disk
    let intent = cli.intent()?;

    let config = JournalConfig::load()?;
    debug!(dir = %config.journal_directory.display(), "loaded configuration");

    let editor = EditorSession::new(config.get_editor());
    let store = EntryStore::new(config);
    let today = Local::now().date_naive();

    match intent {
        Intent::Show(date_ref) => {
            let text = ShowEntryService::new(store).show(date_ref.resolve(today))?;
            print!("{}", text);
        }
        Intent::ShowPath(date_ref) => {
            let path = ShowEntryService::new(store).path_for(date_ref.resolve(today));
            println!("{}", path.display());
        }
        Intent::RecordLong { edit } => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;

            RecordEntryService::new(store).execute(text.trim_end(), edit.then_some(&editor))?;
        }
        Intent::Record { text, edit } => {
            RecordEntryService::new(store).execute(&text, edit.then_some(&editor))?;
        }
        Intent::Edit => {
            RecordEntryService::new(store).edit_today(&editor)?;
        }
    }

    Ok(())
}
