use avl_dictionary::config::Config;
use avl_dictionary::dictionary::Dictionary;
use avl_dictionary::session;
use log::{error, info};
use simplelog::{Config as LogConfig, WriteLogger};
use std::env;
use std::io::{self, Write};
use std::process;

fn run(config: &Config) -> io::Result<()> {
    let mut dictionary = Dictionary::new();
    if let Err(err) = dictionary.load_from_path(&config.path) {
        error!("Could not read {}: {}", config.path.display(), err);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    session::report_heights(&dictionary, &mut output)?;
    let lookups = session::lookup_loop(&dictionary, stdin.lock(), &mut output)?;
    info!("Answered {} lookups.", lookups);
    session::offer_dump(&dictionary, stdin.lock(), &mut output)?;
    output.flush()
}

fn main() {
    let config = Config::from_args(env::args().skip(1));
    if let Err(err) = WriteLogger::init(config.log_level, LogConfig::default(), io::stderr()) {
        eprintln!("Could not initialize logging: {}", err);
    }

    if let Err(err) = run(&config) {
        error!("{}", err);
        process::exit(1);
    }
}
