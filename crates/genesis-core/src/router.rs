//! Command registry and dispatch.
//!
//! The [`Router`] owns every registered [`CommandSpec`] and the alias table,
//! turns a raw argument vector into an [`Invocation`], and hands it to the
//! matching handler. The built-in `help` command is answered by the router
//! itself.

use std::collections::HashMap;
use std::fmt;

use genesis_util::errors::{GenesisError, GenesisResult, RegistryError};
use genesis_util::term;

use crate::options::{self, GlobalOptions, GLOBAL_FLAGS};
use crate::VERSION;

/// Name of the built-in help command.
pub const HELP_COMMAND: &str = "help";

/// Signature shared by every command handler: global options, the arguments
/// left over after the command name, and whether help was requested.
pub type HandlerFn = dyn Fn(&GlobalOptions, &[String], bool) -> GenesisResult<()>;

enum Handler {
    Help,
    Run(Box<HandlerFn>),
}

/// A registered command.
pub struct CommandSpec {
    pub name: String,
    pub description: String,
    /// Heading the command is listed under in `genesis help`.
    pub group: String,
    handler: Handler,
}

impl fmt::Debug for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandSpec")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("group", &self.group)
            .finish_non_exhaustive()
    }
}

/// A resolved command line: which command to run and with what.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: String,
    pub args: Vec<String>,
    pub help: bool,
}

/// Registry of commands plus the logic to resolve and dispatch argv.
pub struct Router {
    commands: Vec<CommandSpec>,
    index: HashMap<String, usize>,
    aliases: HashMap<String, String>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// Create a router holding only the built-in `help` command.
    pub fn new() -> Self {
        let mut router = Self {
            commands: Vec::new(),
            index: HashMap::new(),
            aliases: HashMap::new(),
        };
        router.insert(CommandSpec {
            name: HELP_COMMAND.to_string(),
            description: "Get detailed help with a specific command".to_string(),
            group: "INFO".to_string(),
            handler: Handler::Help,
        });
        router
    }

    fn insert(&mut self, spec: CommandSpec) {
        self.index.insert(spec.name.clone(), self.commands.len());
        self.commands.push(spec);
    }

    fn is_taken(&self, name: &str) -> bool {
        self.index.contains_key(name) || self.aliases.contains_key(name)
    }

    /// Register a command. Names must be unique across commands and aliases.
    pub fn register<F>(
        &mut self,
        name: &str,
        description: &str,
        group: &str,
        handler: F,
    ) -> Result<(), RegistryError>
    where
        F: Fn(&GlobalOptions, &[String], bool) -> GenesisResult<()> + 'static,
    {
        if self.is_taken(name) {
            return Err(RegistryError::DuplicateCommand(name.to_string()));
        }
        self.insert(CommandSpec {
            name: name.to_string(),
            description: description.to_string(),
            group: group.to_string(),
            handler: Handler::Run(Box::new(handler)),
        });
        Ok(())
    }

    /// Make `alias` another name for the already registered `existing`.
    pub fn alias(&mut self, existing: &str, alias: &str) -> Result<(), RegistryError> {
        if self.aliases.contains_key(existing) {
            return Err(RegistryError::AliasChain {
                target: existing.to_string(),
                alias: alias.to_string(),
            });
        }
        if !self.index.contains_key(existing) {
            return Err(RegistryError::UnknownTarget {
                target: existing.to_string(),
                alias: alias.to_string(),
            });
        }
        if self.is_taken(alias) {
            return Err(RegistryError::DuplicateCommand(alias.to_string()));
        }
        self.aliases.insert(alias.to_string(), existing.to_string());
        Ok(())
    }

    /// Resolve a command or alias name to the command's canonical name.
    pub fn canonical<'a>(&'a self, name: &'a str) -> Option<&'a str> {
        if self.index.contains_key(name) {
            return Some(name);
        }
        self.aliases.get(name).map(String::as_str)
    }

    /// Look up a command by name or alias.
    pub fn get(&self, name: &str) -> Option<&CommandSpec> {
        let canonical = self.canonical(name)?;
        self.index.get(canonical).map(|&i| &self.commands[i])
    }

    /// Every registered command, in registration order.
    pub fn commands(&self) -> impl Iterator<Item = &CommandSpec> {
        self.commands.iter()
    }

    /// Aliases pointing at `name`, sorted.
    pub fn aliases_of(&self, name: &str) -> Vec<&str> {
        let mut aliases: Vec<&str> = self
            .aliases
            .iter()
            .filter(|(_, target)| target.as_str() == name)
            .map(|(alias, _)| alias.as_str())
            .collect();
        aliases.sort_unstable();
        aliases
    }

    /// Split argv into global options and the command invocation.
    ///
    /// With no positional token at all the command is `help`.
    pub fn resolve<I, S>(&self, argv: I) -> GenesisResult<(GlobalOptions, Invocation)>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let scanned = options::scan(argv)?;
        let invocation = Invocation {
            command: scanned
                .command
                .unwrap_or_else(|| HELP_COMMAND.to_string()),
            args: scanned.args,
            help: scanned.options.help,
        };
        Ok((scanned.options, invocation))
    }

    /// Run the command named by `invocation`.
    pub fn dispatch(&self, invocation: &Invocation, options: &GlobalOptions) -> GenesisResult<()> {
        let spec = self
            .get(&invocation.command)
            .ok_or_else(|| GenesisError::UnknownCommand {
                name: invocation.command.clone(),
            })?;

        tracing::debug!(
            command = %spec.name,
            args = ?invocation.args,
            help = invocation.help,
            "dispatching"
        );

        match &spec.handler {
            Handler::Help => self.help(options, &invocation.args),
            Handler::Run(handler) => handler(options, &invocation.args, invocation.help),
        }
    }

    /// Resolve and dispatch in one step.
    pub fn execute<I, S>(&self, argv: I) -> GenesisResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let (options, invocation) = self.resolve(argv)?;
        self.dispatch(&invocation, &options)
    }

    fn help(&self, options: &GlobalOptions, args: &[String]) -> GenesisResult<()> {
        let args = match args.split_first() {
            Some((first, rest)) if first == "--" => rest,
            _ => args,
        };
        let Some((topic, rest)) = args.split_first() else {
            eprint!("{}", self.render_listing());
            return Ok(());
        };

        if self.canonical(topic) == Some(HELP_COMMAND) {
            term::red_line("This is getting a bit too meta, don't you think?");
            return Ok(());
        }

        self.dispatch(
            &Invocation {
                command: topic.clone(),
                args: rest.to_vec(),
                help: true,
            },
            options,
        )
    }

    /// The top-level help screen: global options, then every command under
    /// its group heading.
    ///
    /// Groups appear in order of their first command's registration;
    /// commands keep registration order within a group.
    pub fn render_listing(&self) -> String {
        let mut groups: Vec<(&str, Vec<(String, &str)>)> = Vec::new();
        for spec in &self.commands {
            let mut label = spec.name.clone();
            for alias in self.aliases_of(&spec.name) {
                label.push('|');
                label.push_str(alias);
            }
            let entry = (label, spec.description.as_str());
            match groups.iter_mut().find(|(group, _)| *group == spec.group) {
                Some((_, members)) => members.push(entry),
                None => groups.push((spec.group.as_str(), vec![entry])),
            }
        }

        let width = GLOBAL_FLAGS
            .iter()
            .map(|f| f.label().len())
            .chain(groups.iter().flat_map(|(_, m)| m.iter().map(|(l, _)| l.len())))
            .max()
            .unwrap_or(0)
            .max(15)
            + 2;

        let mut out = String::new();
        out.push_str(&format!("genesis v{VERSION}\n"));
        out.push_str("USAGE: genesis [OPTIONS] COMMAND [MORE OPTIONS]\n");
        out.push_str("\n  OPTIONS\n");
        for flag in GLOBAL_FLAGS {
            out.push_str(&format!(
                "    {:<width$}{}\n",
                flag.label(),
                flag.description
            ));
        }
        for (group, members) in groups {
            out.push_str(&format!("\n  {group}\n"));
            for (label, description) in members {
                out.push_str(&format!("    {label:<width$}{description}\n"));
            }
        }
        out.push_str(
            "\n  See 'genesis COMMAND -h' for more specific, per-command usage information.\n",
        );
        out
    }
}
