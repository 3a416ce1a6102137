use crate::command::Command;
use crate::error::Result;

mod brewups;
mod command_a;
mod command_b;
mod command_c;
mod config;

pub fn register_commands(root: &mut Command) -> Result<()> {
    // Registration order is the order shown in usage
    command_a::register(root)?;
    command_b::register(root)?;
    command_c::register(root)?;
    brewups::register(root)?;
    config::register(root)?;
    Ok(())
}
