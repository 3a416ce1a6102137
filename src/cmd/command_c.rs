use crate::command::CommandBuilder;
use crate::context::Context;
use crate::error::{Error, Result};
use crate::flag::{Flag, FlagType, FlagValue};

const MAX_TIMES: i64 = 100;
const MAX_COUNT: i64 = 10_000;

pub fn register(parent: &mut crate::Command) -> Result<()> {
    let mut cmd = CommandBuilder::new("command_c")
        .short("Example command with another layer of subcommands")
        .build();

    register_greet(&mut cmd)?;
    register_count(&mut cmd)?;

    parent.add_command(cmd)
}

fn register_greet(parent: &mut crate::Command) -> Result<()> {
    let cmd = CommandBuilder::new("greet")
        .aliases(["hello"])
        .short("Print a greeting")
        .flag(
            Flag::new("name")
                .usage("Who to greet")
                .value_type(FlagType::String)
                .default(FlagValue::String("world".to_string())),
        )
        .flag(
            Flag::new("times")
                .short('t')
                .usage("Number of greetings")
                .value_type(FlagType::Int)
                .default(FlagValue::Int(1)),
        )
        .flag(Flag::new("shout").short('s').usage("Upper-case the greeting"))
        .run(|ctx| {
            for line in greetings(ctx)? {
                println!("{}", line);
            }
            Ok(())
        })
        .build();

    parent.add_command(cmd)
}

fn register_count(parent: &mut crate::Command) -> Result<()> {
    let cmd = CommandBuilder::new("count")
        .short("Count up to a number")
        .flag(
            Flag::new("to")
                .usage("Last number to print")
                .value_type(FlagType::Int)
                .required(),
        )
        .flag(
            Flag::new("step")
                .usage("Increment between numbers")
                .value_type(FlagType::Int)
                .default(FlagValue::Int(1)),
        )
        .run(|ctx| {
            let numbers = count(ctx)?;
            println!(
                "{}",
                numbers
                    .iter()
                    .map(i64::to_string)
                    .collect::<Vec<_>>()
                    .join(" ")
            );
            Ok(())
        })
        .build();

    parent.add_command(cmd)
}

fn greetings(ctx: &Context) -> Result<Vec<String>> {
    let times = ctx.int("times").unwrap_or(1);
    if !(0..=MAX_TIMES).contains(&times) {
        return Err(Error::InvalidValue {
            flag: "--times".to_string(),
            value: times.to_string(),
            expected: "int between 0 and 100",
        });
    }

    let name = ctx.string("name").unwrap_or("world");
    let mut greeting = format!("Hello, {}!", name);
    if ctx.bool("shout") {
        greeting = greeting.to_uppercase();
    }
    Ok(vec![greeting; times as usize])
}

fn count(ctx: &Context) -> Result<Vec<i64>> {
    let to = ctx.int("to").unwrap_or_default();
    if to > MAX_COUNT {
        return Err(Error::InvalidValue {
            flag: "--to".to_string(),
            value: to.to_string(),
            expected: "int up to 10000",
        });
    }
    let step = ctx.int("step").unwrap_or(1);
    if step < 1 {
        return Err(Error::InvalidValue {
            flag: "--step".to_string(),
            value: step.to_string(),
            expected: "positive int",
        });
    }
    Ok((1..=to).step_by(step as usize).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greet_defaults() {
        let app = crate::build_cli().unwrap();
        let ctx = app.parse(&["command_c", "greet"]).unwrap();
        assert_eq!(ctx.path(), ["command_c".to_string(), "greet".to_string()]);
        assert_eq!(greetings(&ctx).unwrap(), ["Hello, world!"]);
    }

    #[test]
    fn greet_alias_and_flags() {
        let app = crate::build_cli().unwrap();
        let ctx = app
            .parse(&["command_c", "hello", "--name", "rust", "-st", "2"])
            .unwrap();
        assert_eq!(ctx.command(), "greet");
        assert_eq!(greetings(&ctx).unwrap(), ["HELLO, RUST!", "HELLO, RUST!"]);
    }

    #[test]
    fn count_requires_upper_bound() {
        let app = crate::build_cli().unwrap();
        let err = app.parse(&["command_c", "count"]).unwrap_err();
        assert!(matches!(err, Error::MissingArgument(ref f) if f == "--to"));

        let ctx = app
            .parse(&["command_c", "count", "--to", "7", "--step", "3"])
            .unwrap();
        assert_eq!(count(&ctx).unwrap(), [1, 4, 7]);
    }

    #[test]
    fn oversized_counts_are_rejected() {
        let app = crate::build_cli().unwrap();
        let err = app
            .execute(&["command_c", "greet", "--times", "9223372036854775807"])
            .unwrap_err();
        assert!(matches!(err, Error::InvalidValue { ref flag, .. } if flag == "--times"));

        let err = app
            .execute(&["command_c", "count", "--to", "9223372036854775807"])
            .unwrap_err();
        assert!(matches!(err, Error::InvalidValue { ref flag, .. } if flag == "--to"));

        let ctx = app.parse(&["command_c", "greet", "-t", "-1"]).unwrap();
        assert!(greetings(&ctx).is_err());
    }

    #[test]
    fn command_c_needs_a_subcommand() {
        let app = crate::build_cli().unwrap();
        let err = app.parse(&["command_c"]).unwrap_err();
        assert!(matches!(err, Error::MissingCommand(_)));
    }
}
