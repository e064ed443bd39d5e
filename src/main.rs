use std::io::{self, BufWriter};

use contact_html::cli::{self, Command};

fn main() {
    env_logger::init();

    let args = match cli::parse_args(std::env::args().skip(1)) {
        Ok(Command::Help) => {
            println!("{}", cli::USAGE);
            return;
        }
        Ok(Command::Render(args)) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Use --help for usage information.");
            std::process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if let Err(e) = cli::run(&args, &mut out) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
