//! Stockroom shell entry point.

fn main() {
    if let Err(e) = stockroom_cli::run() {
        eprintln!("stockroom: {}", e);
        std::process::exit(1);
    }
}
