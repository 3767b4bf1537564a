use std::env;
use std::io::{self, Write};

use churchlib::cli_options::{Command, Options, USAGE, VERSION};
use churchlib::demo;
use churchlib::errors::TError;

fn run() -> Result<(), TError> {
    let opts = Options::new(env::args().skip(1));
    churchlib::trace!(&opts, 1, "{:?}", opts);
    for arg in &opts.ignored {
        churchlib::trace!(&opts, 1, "ignoring argument '{}'", arg);
    }
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match opts.cmd {
        Command::Help => write!(out, "{}", USAGE)?,
        Command::Version => writeln!(out, "church {}", VERSION)?,
        Command::Demo => demo::run(&mut out, &opts)?,
    }
    out.flush()?;
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("church: {}", err);
        std::process::exit(1);
    }
}
