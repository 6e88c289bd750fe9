//! Per-command help text.

use crate::VERSION;

/// Long-form help for one command.
///
/// Each option is a `(flags, description)` pair; a description may span
/// several lines separated by `\n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Usage {
    pub synopsis: &'static str,
    pub options: &'static [(&'static str, &'static str)],
}

impl Usage {
    pub fn render(&self) -> String {
        let mut out = format!("genesis v{VERSION}\nUSAGE: genesis {}\n\nOPTIONS\n", self.synopsis);

        let width = self
            .options
            .iter()
            .map(|(flags, _)| flags.len())
            .max()
            .unwrap_or(0)
            + 2;

        for (flags, description) in self.options {
            let mut lines = description.lines();
            let first = lines.next().unwrap_or_default();
            out.push_str(&format!("  {flags:<width$}{first}\n"));
            for line in lines {
                out.push_str(&format!("  {:<width$}{line}\n", ""));
            }
        }
        if self.options.is_empty() {
            out.push_str("  (none)\n");
        }

        out.push_str("\nSee 'genesis help' for the global options.\n");
        out
    }

    /// Print the help text on standard output.
    pub fn print(&self) {
        print!("{}", self.render());
    }
}
