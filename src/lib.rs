pub mod boolean;
pub mod cli_options;
pub mod demo;
pub mod errors;
pub mod logging;
pub mod numeral;
pub mod pretty_print;
pub mod printer;
