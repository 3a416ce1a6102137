use crate::flag::FlagValue;
use std::collections::BTreeMap;

/// Outcome of a successful dispatch: which command was selected and the
/// values parsed for it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    path: Vec<String>,
    flags: BTreeMap<String, FlagValue>,
    args: BTreeMap<String, String>,
    trailing: Vec<String>,
}

impl Context {
    pub(crate) fn new(
        path: Vec<String>,
        flags: BTreeMap<String, FlagValue>,
        args: BTreeMap<String, String>,
        trailing: Vec<String>,
    ) -> Self {
        Self {
            path,
            flags,
            args,
            trailing,
        }
    }

    /// Name of the selected (innermost) command.
    pub fn command(&self) -> &str {
        self.path.last().map(String::as_str).unwrap_or_default()
    }

    /// Command names from the root to the selected command, root excluded.
    pub fn path(&self) -> &[String] {
        self.path.get(1..).unwrap_or_default()
    }

    pub fn flag(&self, name: &str) -> Option<&FlagValue> {
        self.flags.get(name)
    }

    pub fn flags(&self) -> &BTreeMap<String, FlagValue> {
        &self.flags
    }

    pub fn bool(&self, name: &str) -> bool {
        self.flag(name).and_then(FlagValue::as_bool).unwrap_or(false)
    }

    pub fn int(&self, name: &str) -> Option<i64> {
        self.flag(name).and_then(FlagValue::as_int)
    }

    pub fn float(&self, name: &str) -> Option<f64> {
        self.flag(name).and_then(FlagValue::as_float)
    }

    pub fn string(&self, name: &str) -> Option<&str> {
        self.flag(name).and_then(FlagValue::as_str)
    }

    /// Positional argument bound by name.
    pub fn arg(&self, name: &str) -> Option<&str> {
        self.args.get(name).map(String::as_str)
    }

    /// Tokens given after `--`.
    pub fn trailing(&self) -> &[String] {
        &self.trailing
    }
}
