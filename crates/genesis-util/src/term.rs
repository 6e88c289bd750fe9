use std::io::Write;

use console::Style;

/// `Initialized empty Genesis repository in ...`, with the label green and
/// right-aligned in a 12-column gutter.
pub fn status(label: &str, message: &str) {
    let green_bold = Style::new().green().bold().for_stderr();
    let _ = writeln!(
        std::io::stderr(),
        "{:>12} {message}",
        green_bold.apply_to(label),
    );
}

/// Print a bold red `!!! message` line on standard error.
pub fn alert(message: &str) {
    let red_bold = Style::new().red().bold().for_stderr();
    let _ = writeln!(
        std::io::stderr(),
        "{}",
        red_bold.apply_to(format!("!!! {message}"))
    );
}

/// Print a whole line in bold red on standard error.
pub fn red_line(message: &str) {
    let red_bold = Style::new().red().bold().for_stderr();
    let _ = writeln!(std::io::stderr(), "{}", red_bold.apply_to(message));
}

/// Print an indented follow-up line beneath an [`alert`].
pub fn detail(message: &str) {
    let _ = writeln!(std::io::stderr(), "    {message}");
}
