use binguard::{cli, logging};
use clap::Parser;

fn main() {
    logging::init();

    let args = cli::Cli::parse();
    match cli::run(args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("error: {e:#}");
            std::process::exit(2);
        }
    }
}
