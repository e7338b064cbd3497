use clap::Parser;

mod cli;
mod data;
mod merge;
mod read;
mod write;

fn main() {
    let args = cli::Cli::parse();
    if let Err(e) = merge::run(&args) {
        eprintln!("ERROR: {e:#}");
        std::process::exit(2);
    }
}
