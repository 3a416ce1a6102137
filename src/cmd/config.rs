use crate::command::CommandBuilder;
use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::flag::Flag;
use tracing::info;

pub fn register(parent: &mut crate::Command) -> Result<()> {
    let cmd = CommandBuilder::new("config")
        .short("Inspect or create the configuration file")
        .build();

    parent.add_command(cmd)?;

    let config_cmd = parent
        .find_subcommand_mut("config")
        .ok_or_else(|| Error::custom("config command missing after registration"))?;
    register_path(config_cmd)?;
    register_show(config_cmd)?;
    register_init(config_cmd)
}

fn register_path(parent: &mut crate::Command) -> Result<()> {
    let cmd = CommandBuilder::new("path")
        .short("Print the configuration file location")
        .run(|_ctx| {
            let path = AppConfig::config_path().map_err(Error::Custom)?;
            println!("{}", path.display());
            Ok(())
        })
        .build();

    parent.add_command(cmd)
}

fn register_show(parent: &mut crate::Command) -> Result<()> {
    let cmd = CommandBuilder::new("show")
        .aliases(["cat"])
        .short("Print the effective configuration")
        .run(|_ctx| {
            let config = AppConfig::load().map_err(Error::Custom)?;
            let content =
                serde_json::to_string_pretty(&config).map_err(|e| Error::Custom(Box::new(e)))?;
            println!("{}", content);
            Ok(())
        })
        .build();

    parent.add_command(cmd)
}

fn register_init(parent: &mut crate::Command) -> Result<()> {
    let cmd = CommandBuilder::new("init")
        .short("Write a configuration file with default values")
        .flag(
            Flag::new("force")
                .short('f')
                .usage("Overwrite an existing configuration file"),
        )
        .run(|ctx| {
            let path = AppConfig::config_path().map_err(Error::Custom)?;
            if path.exists() && !ctx.bool("force") {
                return Err(Error::custom(format!(
                    "{} already exists, use --force to overwrite",
                    path.display()
                )));
            }

            AppConfig::default()
                .save_to(&path)
                .map_err(Error::Custom)?;
            info!("Wrote default configuration to {}", path.display());
            println!("Wrote {}", path.display());
            Ok(())
        })
        .build();

    parent.add_command(cmd)
}

#[cfg(test)]
mod tests {
    #[test]
    fn subcommands_are_registered() {
        let app = crate::build_cli().unwrap();
        let config = app.find_subcommand("config").unwrap();
        assert_eq!(config.subcommands().names(), ["path", "show", "init"]);

        let ctx = app.parse(&["config", "cat"]).unwrap();
        assert_eq!(ctx.command(), "show");

        let ctx = app.parse(&["config", "init", "-f"]).unwrap();
        assert!(ctx.bool("force"));
    }
}
