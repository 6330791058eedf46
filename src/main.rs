use log::info;
use std::io;
use wordle_helper::cli::{PlainInterface, parse_cli};
use wordle_helper::tui::TuiInterface;
use wordle_helper::wordbank::{WordListStore, default_store_root};
use wordle_helper::{logging, run_session};

fn main() {
    let cli = parse_cli();

    let data_dir = cli.data_dir.clone().unwrap_or_else(default_store_root);
    if let Err(e) = std::fs::create_dir_all(&data_dir) {
        eprintln!("Failed to create data directory {}: {e}", data_dir.display());
        return;
    }
    match logging::init(&data_dir, cli.verbose) {
        Ok(path) => info!("logging to {}", path.display()),
        Err(e) => eprintln!("Logging disabled: {e}"),
    }

    let store = match &cli.wordbank_path {
        Some(path) => WordListStore::single_file(path),
        None => match WordListStore::open(&data_dir) {
            Ok(store) => store,
            Err(e) => {
                eprintln!("Failed to open word list store in {}: {e}", data_dir.display());
                return;
            }
        },
    };

    if cli.plain {
        let stdin = io::stdin();
        let mut interface = PlainInterface::new(stdin.lock());
        run_session(&store, cli.language, &mut interface);
    } else {
        match TuiInterface::new() {
            Ok(mut interface) => run_session(&store, cli.language, &mut interface),
            Err(e) => eprintln!("Failed to start the TUI: {e}"),
        }
    }
}
