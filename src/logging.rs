use super::cli_options::Options;
use std::fmt;
use std::io::IsTerminal;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

// Diagnostics only ever go to stderr; stdout carries the demo output.
pub fn trace(opts: &Options, level: i32, msg: fmt::Arguments) {
    if opts.debug_level < level {
        return;
    }
    let mut stderr = StandardStream::stderr(color_choice(std::io::stderr().is_terminal()));
    let _ = write_trace(&mut stderr, level, msg);
}

fn color_choice(is_terminal: bool) -> ColorChoice {
    if is_terminal {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

fn write_trace<W: WriteColor>(out: &mut W, level: i32, msg: fmt::Arguments) -> std::io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
    write!(out, "[debug:{}]", level)?;
    out.reset()?;
    writeln!(out, " {}", msg)
}

// The level check comes first so the message arguments are only built when shown.
#[macro_export]
macro_rules! trace {
    ($opts:expr, $level:expr, $($arg:tt)*) => {
        if $opts.debug_level >= $level {
            $crate::logging::trace($opts, $level, format_args!($($arg)*))
        }
    };
}
