//! One-shot dispatch of an argument list through a command tree.
//!
//! Each level gets its own `clap::Command`, built at runtime from that
//! level's flag schema plus the global flags of its ancestors. A level with
//! children takes its first positional as an external subcommand; the name
//! is looked up in the level's registry by exact match and the tokens after
//! it are handed to the child.

use crate::command::Command;
use crate::context::Context;
use crate::error::{Error, Result};
use crate::flag::{Flag, FlagType, FlagValue};
use crate::usage;
use clap::builder::BoolishValueParser;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{ArgAction, ArgMatches, value_parser};
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

const HELP_ID: &str = "__help";
const TRAILING_ID: &str = "__trailing";

#[derive(Default)]
struct State {
    path: Vec<String>,
    values: BTreeMap<String, FlagValue>,
    /// Flags given on the command line at any level so far.
    explicit: HashSet<String>,
    args: BTreeMap<String, String>,
    trailing: Vec<String>,
}

pub(crate) fn parse(root: &Command, tokens: &[String]) -> Result<Context> {
    let mut state = State {
        path: vec![root.name().to_string()],
        ..State::default()
    };
    let mut inherited: Vec<&Flag> = Vec::new();
    let mut command = root;
    let mut rest: Vec<String> = tokens.to_vec();

    loop {
        let level = Level::new(command, &inherited);
        let matches = level
            .build(&state.explicit)
            .try_get_matches_from(rest.iter())
            .map_err(|e| level.translate(e, &state))?;
        level.collect(&matches, &mut state);

        let Some((name, sub)) = matches.subcommand() else {
            if !level.is_leaf() && !command.has_run_handler() {
                return Err(Error::MissingCommand(usage::render(
                    command,
                    &state.path,
                    level.inherited(),
                )));
            }
            break;
        };

        let child = command
            .find_subcommand(name)
            .ok_or_else(|| Error::UnknownCommand {
                program: state.path.join(" "),
                name: name.to_string(),
                valid: command.subcommands().names(),
            })?;
        debug!("Dispatching to subcommand: {}", child.name());

        rest = sub
            .get_many::<String>("")
            .into_iter()
            .flatten()
            .cloned()
            .collect();
        inherited = level.flags.iter().copied().filter(|f| f.global).collect();
        state.path.push(child.name().to_string());
        command = child;
    }

    debug!(
        "Parsed '{}' with {} flag values",
        state.path.join(" "),
        state.values.len()
    );
    Ok(Context::new(state.path, state.values, state.args, state.trailing))
}

/// The flags in scope for one command: its own first, then the inherited
/// globals it does not shadow.
struct Level<'a> {
    command: &'a Command,
    flags: Vec<&'a Flag>,
    own: usize,
}

impl<'a> Level<'a> {
    fn new(command: &'a Command, inherited: &[&'a Flag]) -> Self {
        let mut flags: Vec<&'a Flag> = command.flags().iter().collect();
        let own = flags.len();
        for &flag in inherited {
            let shadowed = flags
                .iter()
                .any(|f| f.name == flag.name || (f.short.is_some() && f.short == flag.short));
            if !shadowed {
                flags.push(flag);
            }
        }
        Self {
            command,
            flags,
            own,
        }
    }

    fn inherited(&self) -> &[&'a Flag] {
        &self.flags[self.own..]
    }

    fn is_leaf(&self) -> bool {
        self.command.subcommands().is_empty()
    }

    fn build(&self, explicit: &HashSet<String>) -> clap::Command {
        let mut cmd = clap::Command::new(self.command.name().to_string())
            .no_binary_name(true)
            .disable_help_flag(true)
            .disable_help_subcommand(true)
            .args_override_self(true);

        // User flags win over -h/--help
        if !self.flags.iter().any(|f| f.name == "help") {
            let mut help = clap::Arg::new(HELP_ID).long("help").action(ArgAction::Help);
            if !self.flags.iter().any(|f| f.short == Some('h')) {
                help = help.short('h');
            }
            cmd = cmd.arg(help);
        }

        for (i, flag) in self.flags.iter().enumerate() {
            // Required globals are enforced at the leaf, since they may
            // follow the subcommand name.
            let required = if i < self.own {
                flag.required && (self.is_leaf() || !flag.global)
            } else {
                flag.required && self.is_leaf() && !explicit.contains(&flag.name)
            };
            cmd = cmd.arg(clap_arg(flag, required));
        }

        if self.is_leaf() {
            for arg in self.command.args() {
                cmd = cmd.arg(
                    clap::Arg::new(arg.name.clone())
                        .help(arg.usage.clone())
                        .required(arg.required)
                        .action(ArgAction::Set)
                        .value_parser(value_parser!(String)),
                );
            }
            cmd = cmd.arg(
                clap::Arg::new(TRAILING_ID)
                    .num_args(1..)
                    .last(true)
                    .action(ArgAction::Append)
                    .value_parser(value_parser!(String)),
            );
        } else {
            cmd = cmd
                .allow_external_subcommands(true)
                .external_subcommand_value_parser(value_parser!(String));
        }

        cmd
    }

    fn collect(&self, matches: &ArgMatches, state: &mut State) {
        for (i, flag) in self.flags.iter().enumerate() {
            match value_of(matches, flag) {
                Some(value) => {
                    state.values.insert(flag.name.clone(), value);
                    state.explicit.insert(flag.name.clone());
                }
                None if i < self.own => match flag.implicit_default() {
                    Some(default) => {
                        state.values.insert(flag.name.clone(), default);
                    }
                    None => {
                        state.values.remove(&flag.name);
                    }
                },
                None => {}
            }
        }

        if self.is_leaf() {
            for arg in self.command.args() {
                if let Some(value) = matches.get_one::<String>(&arg.name) {
                    state.args.insert(arg.name.clone(), value.clone());
                }
            }
            state.trailing.extend(
                matches
                    .get_many::<String>(TRAILING_ID)
                    .into_iter()
                    .flatten()
                    .cloned(),
            );
        }
    }

    /// Maps a clap failure onto the dispatch error taxonomy.
    fn translate(&self, err: clap::Error, state: &State) -> Error {
        let subject = match err.get(ContextKind::InvalidArg) {
            Some(ContextValue::String(raw)) => Some(self.display_name(raw)),
            Some(ContextValue::Strings(raws)) => raws.first().map(|raw| self.display_name(raw)),
            _ => None,
        };

        match err.kind() {
            ErrorKind::DisplayHelp => Error::HelpRequested(usage::render(
                self.command,
                &state.path,
                self.inherited(),
            )),
            ErrorKind::MissingRequiredArgument => {
                Error::MissingArgument(subject.unwrap_or_default())
            }
            ErrorKind::UnknownArgument => match subject {
                Some(flag) if flag.starts_with('-') => Error::UnrecognizedFlag(flag),
                Some(arg) => Error::UnexpectedArgument(arg),
                None => Error::Custom(Box::new(err)),
            },
            ErrorKind::InvalidSubcommand => Error::UnknownCommand {
                program: state.path.join(" "),
                name: subject.unwrap_or_default(),
                valid: self.command.subcommands().names(),
            },
            ErrorKind::InvalidValue | ErrorKind::ValueValidation => {
                let flag = subject.unwrap_or_default();
                let value = match err.get(ContextKind::InvalidValue) {
                    Some(ContextValue::String(value)) => value.clone(),
                    _ => String::new(),
                };
                if value.is_empty() {
                    return Error::MissingValue(flag);
                }
                let expected = self
                    .flags
                    .iter()
                    .find(|f| f.display_name() == flag)
                    .map(|f| f.value_type.name())
                    .unwrap_or("string");
                Error::InvalidValue {
                    flag,
                    value,
                    expected,
                }
            }
            _ => Error::Custom(Box::new(err)),
        }
    }

    /// Turns clap's rendering of an argument (`--x <int>`, `-z`,
    /// `<target>`) into the name used in our errors.
    fn display_name(&self, raw: &str) -> String {
        if let Some(name) = raw.strip_prefix('<').and_then(|r| r.strip_suffix('>')) {
            return name.to_string();
        }
        if !raw.starts_with('-') {
            return raw.to_string();
        }

        let head = raw
            .split(|c: char| c == ' ' || c == '=' || c == '[')
            .next()
            .unwrap_or(raw);
        let mut chars = head.chars().skip(1);
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(flag) = self.flags.iter().find(|f| f.short == Some(c)) {
                return flag.display_name();
            }
        }
        head.to_string()
    }
}

fn clap_arg(flag: &Flag, required: bool) -> clap::Arg {
    let mut arg = clap::Arg::new(flag.name.clone())
        .long(flag.name.clone())
        .help(flag.usage.clone())
        .required(required)
        .action(ArgAction::Set);
    if let Some(c) = flag.short {
        arg = arg.short(c);
    }

    match flag.value_type {
        // `--foo`, `-f`, `--foo=false`; never consumes the next token
        FlagType::Bool => arg
            .value_parser(BoolishValueParser::new())
            .num_args(0..=1)
            .require_equals(true)
            .default_missing_value("true"),
        FlagType::Int => arg
            .value_parser(value_parser!(i64))
            .value_name("int")
            .allow_negative_numbers(true),
        FlagType::Float => arg
            .value_parser(value_parser!(f64))
            .value_name("float")
            .allow_negative_numbers(true),
        FlagType::String => arg.value_parser(value_parser!(String)).value_name("string"),
    }
}

fn value_of(matches: &ArgMatches, flag: &Flag) -> Option<FlagValue> {
    match flag.value_type {
        FlagType::Bool => matches.get_one::<bool>(&flag.name).copied().map(FlagValue::Bool),
        FlagType::Int => matches.get_one::<i64>(&flag.name).copied().map(FlagValue::Int),
        FlagType::Float => matches.get_one::<f64>(&flag.name).copied().map(FlagValue::Float),
        FlagType::String => matches
            .get_one::<String>(&flag.name)
            .cloned()
            .map(FlagValue::String),
    }
}
