use crate::command::CommandBuilder;
use crate::context::Context;
use crate::error::{Error, Result};
use crate::flag::{Arg, Flag, FlagType, FlagValue};

const MAX_REPEAT: i64 = 100;

pub fn register(parent: &mut crate::Command) -> Result<()> {
    let cmd = CommandBuilder::new("command_b")
        .short("Example command positional/required arguments and flags")
        .arg(Arg::new("subcommand").usage("Subcommand to run").required())
        .flag(
            Flag::new("repeat")
                .short('r')
                .usage("How many times to run it")
                .value_type(FlagType::Int)
                .default(FlagValue::Int(1)),
        )
        .flag(
            Flag::new("label")
                .short('l')
                .usage("Label printed with each run")
                .value_type(FlagType::String),
        )
        .run(|ctx| {
            for line in lines(ctx)? {
                println!("{}", line);
            }
            Ok(())
        })
        .build();

    parent.add_command(cmd)
}

fn lines(ctx: &Context) -> Result<Vec<String>> {
    let subcommand = ctx.arg("subcommand").unwrap_or_default();
    let repeat = ctx.int("repeat").unwrap_or(1);
    if !(1..=MAX_REPEAT).contains(&repeat) {
        return Err(Error::InvalidValue {
            flag: "--repeat".to_string(),
            value: repeat.to_string(),
            expected: "int between 1 and 100",
        });
    }

    let label = ctx
        .string("label")
        .map(|l| format!(" [{}]", l))
        .unwrap_or_default();
    Ok((1..=repeat)
        .map(|n| {
            format!(
                "Running {} command_b, subcommand={} ({}/{}){}",
                crate::PROGRAM,
                subcommand,
                n,
                repeat,
                label
            )
        })
        .collect())
}
