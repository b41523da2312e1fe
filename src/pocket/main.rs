mod cli;

fn main() {
    if let Err(e) = cli::commands::run() {
        log::debug!("{:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
