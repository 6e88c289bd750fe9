//! Global options and the argv scan that separates them from the command.

use std::path::PathBuf;

use genesis_util::errors::{GenesisError, GenesisResult};

/// Options valid for every command, parsed once per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalOptions {
    /// Effective working directory.
    pub cwd: PathBuf,
    pub debug: bool,
    pub trace: bool,
    pub verbose: bool,
    pub yes_to_all: bool,
    pub help: bool,
}

impl Default for GlobalOptions {
    fn default() -> Self {
        Self {
            cwd: PathBuf::from("."),
            debug: false,
            trace: false,
            verbose: false,
            yes_to_all: false,
            help: false,
        }
    }
}

/// What a global flag sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagKind {
    Help,
    Debug,
    Trace,
    Verbose,
    Cwd,
    Yes,
}

/// One recognized global flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobalFlag {
    pub kind: FlagKind,
    pub short: char,
    pub long: &'static str,
    pub value_name: Option<&'static str>,
    pub description: &'static str,
}

/// Every global flag, in the order shown by `genesis help`.
pub const GLOBAL_FLAGS: &[GlobalFlag] = &[
    GlobalFlag {
        kind: FlagKind::Help,
        short: 'h',
        long: "help",
        value_name: None,
        description: "Show this help screen.",
    },
    GlobalFlag {
        kind: FlagKind::Debug,
        short: 'D',
        long: "debug",
        value_name: None,
        description: "Print helpful messages about what Genesis is doing, for developers.",
    },
    GlobalFlag {
        kind: FlagKind::Trace,
        short: 'T',
        long: "trace",
        value_name: None,
        description: "Even more debugging, including output of called tools.",
    },
    GlobalFlag {
        kind: FlagKind::Verbose,
        short: 'v',
        long: "verbose",
        value_name: None,
        description: "Print helpful messages about what Genesis is doing, for operators.",
    },
    GlobalFlag {
        kind: FlagKind::Cwd,
        short: 'C',
        long: "cwd",
        value_name: Some("PATH"),
        description: "Effective working directory.  Defaults to '.'",
    },
    GlobalFlag {
        kind: FlagKind::Yes,
        short: 'y',
        long: "yes",
        value_name: None,
        description: "Answer 'yes' to all questions, automatically.",
    },
];

impl GlobalFlag {
    /// `-C, --cwd PATH` as shown in help output.
    pub fn label(&self) -> String {
        match self.value_name {
            Some(value) => format!("-{}, --{} {value}", self.short, self.long),
            None => format!("-{}, --{}", self.short, self.long),
        }
    }

    fn by_short(c: char) -> Option<&'static GlobalFlag> {
        GLOBAL_FLAGS.iter().find(|f| f.short == c)
    }

    fn by_long(name: &str) -> Option<&'static GlobalFlag> {
        GLOBAL_FLAGS.iter().find(|f| f.long == name)
    }
}

/// Result of separating global options from everything else in argv.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Scanned {
    pub options: GlobalOptions,
    /// The first positional token, if any.
    pub command: Option<String>,
    /// Everything that is neither a global option nor the command, in order.
    pub args: Vec<String>,
}

impl Scanned {
    fn positional(&mut self, arg: String) {
        if self.command.is_none() {
            self.command = Some(arg);
        } else {
            self.args.push(arg);
        }
    }

    /// Options the router does not know belong to the command, but only once
    /// there is one.
    fn unrecognized(&mut self, arg: String) -> GenesisResult<()> {
        if self.command.is_none() {
            return Err(GenesisError::Usage {
                message: format!("unrecognized option '{arg}'"),
                hint: Some("Run 'genesis help' for the list of global options.".to_string()),
            });
        }
        self.args.push(arg);
        Ok(())
    }

    fn apply(&mut self, flag: &GlobalFlag, value: Option<String>) {
        let opts = &mut self.options;
        match flag.kind {
            FlagKind::Help => opts.help = true,
            FlagKind::Debug => opts.debug = true,
            FlagKind::Trace => opts.trace = true,
            FlagKind::Verbose => opts.verbose = true,
            FlagKind::Yes => opts.yes_to_all = true,
            FlagKind::Cwd => opts.cwd = PathBuf::from(value.unwrap_or_default()),
        }
    }
}

fn missing_value(flag: &GlobalFlag) -> GenesisError {
    GenesisError::usage(format!(
        "option -{}/--{} requires an argument",
        flag.short, flag.long
    ))
}

/// Split argv into global options, the command token and the leftovers.
///
/// A single left-to-right pass: global flags are consumed wherever they
/// appear, the first positional token becomes the command, and everything
/// else is kept for the command's own flag parser. `--` stops the scan.
pub fn scan<I, S>(argv: I) -> GenesisResult<Scanned>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut scanned = Scanned::default();
    let mut argv = argv.into_iter().map(Into::into);

    while let Some(arg) = argv.next() {
        if arg == "--" {
            if scanned.command.is_none() {
                scanned.command = argv.next();
            }
            // A bare trailing `--` leaves nothing for a command to parse.
            if scanned.command.is_some() {
                scanned.args.push(arg);
                scanned.args.extend(argv.by_ref());
            }
            break;
        }

        if let Some(long) = arg.strip_prefix("--") {
            let (name, inline) = match long.split_once('=') {
                Some((name, value)) => (name, Some(value.to_string())),
                None => (long, None),
            };
            let Some(flag) = GlobalFlag::by_long(name) else {
                scanned.unrecognized(arg)?;
                continue;
            };
            let value = match (flag.value_name, inline) {
                (None, None) => None,
                (None, Some(_)) => {
                    return Err(GenesisError::usage(format!(
                        "option --{} does not take an argument",
                        flag.long
                    )))
                }
                (Some(_), Some(value)) => Some(value),
                (Some(_), None) => Some(argv.next().ok_or_else(|| missing_value(flag))?),
            };
            scanned.apply(flag, value);
            continue;
        }

        if let Some(cluster) = arg.strip_prefix('-').filter(|c| !c.is_empty()) {
            // Only a cluster made entirely of global flags is ours.
            let mut flags = Vec::new();
            let mut recognized = true;
            for (idx, c) in cluster.char_indices() {
                let Some(flag) = GlobalFlag::by_short(c) else {
                    recognized = false;
                    break;
                };
                if flag.value_name.is_some() {
                    let tail = &cluster[idx + c.len_utf8()..];
                    flags.push((flag, Some(tail.to_string()).filter(|t| !t.is_empty())));
                    break;
                }
                flags.push((flag, None));
            }

            if !recognized {
                scanned.unrecognized(arg)?;
                continue;
            }
            for (flag, value) in flags {
                let value = match (flag.value_name, value) {
                    (Some(_), None) => Some(argv.next().ok_or_else(|| missing_value(flag))?),
                    (_, value) => value,
                };
                scanned.apply(flag, value);
            }
            continue;
        }

        scanned.positional(arg);
    }

    Ok(scanned)
}
