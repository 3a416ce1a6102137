use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagType {
    Bool,
    Int,
    Float,
    String,
}

impl FlagType {
    pub(crate) fn name(self) -> &'static str {
        match self {
            FlagType::Bool => "bool",
            FlagType::Int => "int",
            FlagType::Float => "float",
            FlagType::String => "string",
        }
    }
}

impl fmt::Display for FlagType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FlagValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl FlagValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FlagValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            FlagValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            FlagValue::Float(f) => Some(*f),
            FlagValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FlagValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for FlagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagValue::Bool(b) => write!(f, "{}", b),
            FlagValue::Int(i) => write!(f, "{}", i),
            FlagValue::Float(x) => write!(f, "{}", x),
            FlagValue::String(s) => write!(f, "{}", s),
        }
    }
}

/// A named option in a command's flag schema.
#[derive(Debug, Clone)]
pub struct Flag {
    pub name: String,
    pub short: Option<char>,
    pub usage: String,
    pub value_type: FlagType,
    pub default: Option<FlagValue>,
    pub required: bool,
    pub global: bool,
}

impl Flag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            short: None,
            usage: String::new(),
            value_type: FlagType::Bool,
            default: None,
            required: false,
            global: false,
        }
    }

    pub fn short(mut self, c: char) -> Self {
        self.short = Some(c);
        self
    }

    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }

    pub fn value_type(mut self, value_type: FlagType) -> Self {
        self.value_type = value_type;
        self
    }

    pub fn default(mut self, value: FlagValue) -> Self {
        self.default = Some(value);
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Accepted by every descendant command as well.
    pub fn global(mut self) -> Self {
        self.global = true;
        self
    }

    pub fn takes_value(&self) -> bool {
        self.value_type != FlagType::Bool
    }

    /// Display form used in messages, e.g. `--dry-run`.
    pub fn display_name(&self) -> String {
        format!("--{}", self.name)
    }

    /// The value a bare boolean flag or a missing optional flag resolves to.
    pub fn implicit_default(&self) -> Option<FlagValue> {
        match (&self.default, self.value_type) {
            (Some(v), _) => Some(v.clone()),
            (None, FlagType::Bool) => Some(FlagValue::Bool(false)),
            (None, _) => None,
        }
    }

    pub(crate) fn usage_line(&self) -> String {
        let mut form = match self.short {
            Some(c) => format!("-{}, --{}", c, self.name),
            None => format!("    --{}", self.name),
        };
        if self.takes_value() {
            form.push_str(&format!(" <{}>", self.value_type));
        }
        let mut line = format!("  {:<28} {}", form, self.usage);
        if self.required {
            line.push_str(" (required)");
        } else if let Some(default) = self.default.as_ref().filter(|_| self.takes_value()) {
            line.push_str(&format!(" (default: {})", default));
        }
        line.trim_end().to_string()
    }
}

/// A positional argument in a command's schema.
#[derive(Debug, Clone)]
pub struct Arg {
    pub name: String,
    pub usage: String,
    pub required: bool,
}

impl Arg {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            usage: String::new(),
            required: false,
        }
    }

    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_flags_default_to_false() {
        assert_eq!(
            Flag::new("foo").implicit_default(),
            Some(FlagValue::Bool(false))
        );
        assert_eq!(
            Flag::new("name").value_type(FlagType::String).implicit_default(),
            None
        );
    }

    #[test]
    fn usage_line_marks_required_and_defaults() {
        let required = Flag::new("id")
            .value_type(FlagType::String)
            .usage("Item id")
            .required();
        assert!(required.usage_line().ends_with("Item id (required)"));

        let defaulted = Flag::new("times")
            .short('t')
            .value_type(FlagType::Int)
            .default(FlagValue::Int(1));
        let line = defaulted.usage_line();
        assert!(line.contains("-t, --times <int>"));
        assert!(line.ends_with("(default: 1)"));
    }

    #[test]
    fn float_accessor_widens_ints() {
        assert_eq!(FlagValue::Int(2).as_float(), Some(2.0));
        assert_eq!(FlagValue::String("x".into()).as_float(), None);
    }
}
