use crate::command::Command;
use crate::flag::Flag;

/// Renders help for `command`, reached through `path` (root first), with
/// the global flags it inherits from its ancestors.
pub(crate) fn render(command: &Command, path: &[String], inherited: &[&Flag]) -> String {
    let invocation = path.join(" ");
    let mut out = String::new();

    if command.subcommands().is_empty() {
        out.push_str(&format!("usage: {}", invocation));
        if !command.flags().is_empty() || !inherited.is_empty() {
            out.push_str(" [flags]");
        }
        for arg in command.args() {
            if arg.required {
                out.push_str(&format!(" <{}>", arg.name));
            } else {
                out.push_str(&format!(" [<{}>]", arg.name));
            }
        }
        out.push('\n');
    } else {
        out.push_str(&format!("usage: {} <command> [<args>]\n", invocation));
    }

    let description = if command.long().is_empty() {
        command.short()
    } else {
        command.long()
    };
    if !description.is_empty() {
        out.push_str(&format!("\n{}\n", description));
    }

    if !command.subcommands().is_empty() {
        let width = command
            .subcommands()
            .iter()
            .map(|c| c.name().len())
            .max()
            .unwrap_or(0);
        out.push_str(&format!("\nThe most commonly used {} commands are:\n", invocation));
        for sub in command.subcommands().iter() {
            out.push_str(&format!("  {:<width$}   {}", sub.name(), sub.short()));
            if !sub.aliases().is_empty() {
                out.push_str(&format!(" (aliases: {})", sub.aliases().join(", ")));
            }
            out.push('\n');
        }
    }

    if !command.args().is_empty() {
        out.push_str("\nArguments:\n");
        for arg in command.args() {
            out.push_str(format!("  {:<28} {}\n", arg.name, arg.usage).trim_end());
            out.push('\n');
        }
    }

    if !command.flags().is_empty() {
        out.push_str("\nFlags:\n");
        for flag in command.flags() {
            out.push_str(&flag.usage_line());
            out.push('\n');
        }
    }

    if !inherited.is_empty() {
        out.push_str("\nGlobal Flags:\n");
        for flag in inherited {
            out.push_str(&flag.usage_line());
            out.push('\n');
        }
    }

    if !command.subcommands().is_empty() {
        out.push_str(&format!(
            "\nSee '{} <command> --help' for more information on a specific command.\n",
            invocation
        ));
    }

    if !command.epilog().is_empty() {
        out.push_str(&format!("\n{}\n", command.epilog()));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::CommandBuilder;
    use crate::flag::{Arg, FlagType};

    #[test]
    fn parent_usage_lists_commands_in_order() {
        let mut root = CommandBuilder::new("tool")
            .long("Multi-level tool")
            .epilog("Have fun")
            .build();
        root.add_command(CommandBuilder::new("command_a").short("First").build())
            .unwrap();
        root.add_command(
            CommandBuilder::new("b")
                .short("Second")
                .aliases(["bee"])
                .build(),
        )
        .unwrap();

        let text = root.usage();
        assert!(text.starts_with("usage: tool <command> [<args>]\n"));
        assert!(text.contains("The most commonly used tool commands are:"));
        let a = text.find("command_a   First").unwrap();
        let b = text.find("b           Second (aliases: bee)").unwrap();
        assert!(a < b);
        assert!(text.trim_end().ends_with("Have fun"));
    }

    #[test]
    fn leaf_usage_shows_args_and_flags() {
        let leaf = CommandBuilder::new("command_b")
            .arg(Arg::new("subcommand").usage("Subcommand to run").required())
            .arg(Arg::new("extra"))
            .flag(Flag::new("count").value_type(FlagType::Int).required())
            .build();
        let global = Flag::new("verbose").short('v').global();

        let text = render(
            &leaf,
            &["tool".to_string(), "command_b".to_string()],
            &[&global],
        );
        assert!(text.starts_with("usage: tool command_b [flags] <subcommand> [<extra>]\n"));
        assert!(text.contains("Subcommand to run"));
        assert!(text.contains("--count <int>"));
        assert!(text.contains("Global Flags:"));
        assert!(text.contains("-v, --verbose"));
    }
}
