//! Terminal output utilities
//!
//! Everything goes to stderr so a delegate's stdout stays clean for pipes.

use console::style;

/// Print an error message to stderr
pub fn print_error(message: &str) {
    eprintln!("{}: {}", style("error").red().bold(), message);
}

/// Print a warning message to stderr
pub fn print_warning(message: &str) {
    eprintln!("{}: {}", style("warning").yellow().bold(), message);
}

/// Print a success message to stderr
pub fn print_success(message: &str) {
    eprintln!("{}: {}", style("success").green().bold(), message);
}

/// Echo a command line before it is executed
pub fn print_command(program: &str, args: &[String]) {
    eprintln!(
        "{} {} {}",
        style("Executing:").dim(),
        program,
        args.join(" ")
    );
}

/// Turn off colors on both streams
pub fn disable_colors() {
    console::set_colors_enabled(false);
    console::set_colors_enabled_stderr(false);
}
