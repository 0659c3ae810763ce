mod cli;

use cli::Outcome;

fn main() {
    match cli::run() {
        Ok(Outcome::Solved) => {}
        Ok(Outcome::Unsolved) => {
            #[allow(clippy::exit)]
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            #[allow(clippy::exit)]
            std::process::exit(1);
        }
    }
}
