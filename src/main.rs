//! The `lesspass` binary

use env_logger::{Builder, Env};
use lesspass::consts::LOG_VAR;

fn main() {
    Builder::from_env(Env::new().filter_or(LOG_VAR, "warn")).init();

    if let Err(err) = lesspass::cli::opt() {
        eprint!("{}", err);
        err.chain().skip(1).for_each(|e| eprint!(": {}", e));
        eprintln!();

        std::process::exit(1);
    }
}
