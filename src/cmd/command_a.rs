use crate::command::CommandBuilder;
use crate::context::Context;
use crate::error::Result;
use crate::flag::Flag;

pub fn register(parent: &mut crate::Command) -> Result<()> {
    let cmd = CommandBuilder::new("command_a")
        .short("Example command with optional arguments (flags)")
        .long("Example command with optional boolean flags")
        .flag(Flag::new("foo").short('f').usage("Turn on foo"))
        .flag(Flag::new("bar").short('b').usage("Turn on bar"))
        .run(|ctx| {
            println!("{}", summary(ctx));
            Ok(())
        })
        .build();

    parent.add_command(cmd)
}

fn summary(ctx: &Context) -> String {
    format!(
        "Running {} command_a, foo={}, bar={}",
        crate::PROGRAM,
        ctx.bool("foo"),
        ctx.bool("bar")
    )
}
