use std::io::{stderr, stdout};

fn main() {
    let code = vingt_cli::run(std::env::args(), &mut stdout(), &mut stderr());
    std::process::exit(code);
}
