use crate::context::Context;
use crate::error::{Error, Result};
use crate::flag::{Arg, Flag};
use crate::parser;
use crate::registry::CommandRegistry;
use crate::usage;
use std::fmt;
use tracing::debug;

pub type RunFn = Box<dyn Fn(&Context) -> Result<()> + Send + Sync>;

/// A command descriptor: its flag schema, positionals, children and handler.
pub struct Command {
    name: String,
    aliases: Vec<String>,
    short: String,
    long: String,
    epilog: String,
    flags: Vec<Flag>,
    args: Vec<Arg>,
    subcommands: CommandRegistry,
    run: Option<RunFn>,
}

impl Command {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Name followed by aliases.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }

    pub fn short(&self) -> &str {
        &self.short
    }

    pub fn long(&self) -> &str {
        &self.long
    }

    pub fn epilog(&self) -> &str {
        &self.epilog
    }

    pub fn flags(&self) -> &[Flag] {
        &self.flags
    }

    pub fn args(&self) -> &[Arg] {
        &self.args
    }

    pub fn subcommands(&self) -> &CommandRegistry {
        &self.subcommands
    }

    pub fn has_run_handler(&self) -> bool {
        self.run.is_some()
    }

    pub fn add_command(&mut self, command: Command) -> Result<()> {
        self.subcommands.register(command)
    }

    pub fn find_subcommand(&self, name: &str) -> Option<&Command> {
        self.subcommands.get(name)
    }

    pub fn find_subcommand_mut(&mut self, name: &str) -> Option<&mut Command> {
        self.subcommands.get_mut(name)
    }

    /// Parses `args` (program name excluded) into a [`Context`] without
    /// running anything.
    pub fn parse<S: AsRef<str>>(&self, args: &[S]) -> Result<Context> {
        let tokens: Vec<String> = args.iter().map(|a| a.as_ref().to_string()).collect();
        parser::parse(self, &tokens)
    }

    /// Invokes the handler of the command selected in `ctx`.
    pub fn run(&self, ctx: &Context) -> Result<()> {
        let mut command = self;
        for name in ctx.path() {
            command = command
                .find_subcommand(name)
                .ok_or_else(|| Error::custom(format!("command '{}' is not registered", name)))?;
        }

        match &command.run {
            Some(run) => {
                debug!("Running command: {}", ctx.path().join(" "));
                run(ctx)
            }
            None => Err(Error::custom(format!(
                "command '{}' has nothing to run",
                command.name
            ))),
        }
    }

    pub fn execute<S: AsRef<str>>(&self, args: &[S]) -> Result<()> {
        let ctx = self.parse(args)?;
        self.run(&ctx)
    }

    /// Help text for this command as the root of a command line.
    pub fn usage(&self) -> String {
        usage::render(self, &[self.name.clone()], &[])
    }

    /// Help text for the deepest command `args` names, for error reporting.
    pub fn usage_for<S: AsRef<str>>(&self, args: &[S]) -> String {
        let mut command = self;
        let mut path = vec![self.name.clone()];
        let mut inherited: Vec<&Flag> = Vec::new();
        for token in args.iter().map(AsRef::as_ref) {
            if token == "--" {
                break;
            }
            if token.starts_with('-') {
                continue;
            }
            match command.find_subcommand(token) {
                Some(child) => {
                    inherited.extend(command.flags.iter().filter(|f| f.global));
                    path.push(child.name.clone());
                    command = child;
                }
                None => break,
            }
        }
        usage::render(command, &path, &inherited)
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .field("flags", &self.flags)
            .field("args", &self.args)
            .field("subcommands", &self.subcommands.names())
            .field("run", &self.run.is_some())
            .finish()
    }
}

pub struct CommandBuilder {
    command: Command,
}

impl CommandBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            command: Command {
                name: name.into(),
                aliases: Vec::new(),
                short: String::new(),
                long: String::new(),
                epilog: String::new(),
                flags: Vec::new(),
                args: Vec::new(),
                subcommands: CommandRegistry::new(),
                run: None,
            },
        }
    }

    pub fn aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.command.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    pub fn short(mut self, short: impl Into<String>) -> Self {
        self.command.short = short.into();
        self
    }

    pub fn long(mut self, long: impl Into<String>) -> Self {
        self.command.long = long.into();
        self
    }

    pub fn epilog(mut self, epilog: impl Into<String>) -> Self {
        self.command.epilog = epilog.into();
        self
    }

    /// Adds a flag, replacing any earlier flag with the same long name.
    pub fn flag(mut self, flag: Flag) -> Self {
        self.command.flags.retain(|f| f.name != flag.name);
        self.command.flags.push(flag);
        self
    }

    pub fn arg(mut self, arg: Arg) -> Self {
        self.command.args.push(arg);
        self
    }

    pub fn run<F>(mut self, run: F) -> Self
    where
        F: Fn(&Context) -> Result<()> + Send + Sync + 'static,
    {
        self.command.run = Some(Box::new(run));
        self
    }

    pub fn build(self) -> Command {
        self.command
    }
}
