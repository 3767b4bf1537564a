pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const USAGE: &str = "Church encoded booleans and numerals, decoded back to text.

Usage:
  church [-d <level>]
  church (-h | --help)
  church --version

Options:
  -d --debug <level>  Trace each step with its lambda term on stderr (default 0).
  -h --help           Show this screen.
  --version           Show version.

Unrecognised arguments are ignored.
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Demo,
    Help,
    Version,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub cmd: Command,
    pub debug_level: i32,
    pub ignored: Vec<String>,
}

impl Default for Options {
    fn default() -> Options {
        Options {
            cmd: Command::Demo,
            debug_level: 0,
            ignored: vec![],
        }
    }
}

impl Options {
    // Never fails: anything not understood lands in `ignored`.
    pub fn new<I, S>(args: I) -> Options
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut opts = Options::default();
        let mut args = args.into_iter().map(Into::into);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-d" | "--debug" => match args.next() {
                    Some(level) => match level.parse() {
                        Ok(level) => opts.debug_level = level,
                        Err(_) => opts.ignored.extend(vec![arg, level]),
                    },
                    None => opts.ignored.push(arg),
                },
                "-h" | "--help" => opts.cmd = Command::Help,
                "--version" => opts.cmd = Command::Version,
                _ => opts.ignored.push(arg),
            }
        }
        opts
    }

    pub fn with_debug_level(self, debug_level: i32) -> Options {
        Options {
            debug_level,
            ..self
        }
    }
}
