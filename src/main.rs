use anyhow::Result;
use multi_level_argparse::config::AppConfig;
use multi_level_argparse::{Command, Error, PROGRAM, build_cli};
use tracing::{debug, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let app = build_cli()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let ctx = match app.parse(&args) {
        Ok(ctx) => ctx,
        Err(e) => exit_with(&app, &args, e),
    };

    // Setup logging
    let config = AppConfig::load();
    let verbose = ctx.bool("verbose") || config.as_ref().is_ok_and(|c| c.verbose);
    let log_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = &config {
        warn!("Ignoring unreadable configuration: {}", e);
    }

    debug!("Dispatching: {}", ctx.path().join(" "));
    if let Err(e) = app.run(&ctx) {
        exit_with(&app, &args, e);
    }

    Ok(())
}

fn exit_with(app: &Command, args: &[String], err: Error) -> ! {
    match &err {
        Error::HelpRequested(usage) => print!("{}", usage),
        Error::MissingCommand(usage) => {
            eprintln!("{}: {}", PROGRAM, err);
            eprint!("\n{}", usage);
        }
        e if e.is_usage_error() => {
            eprintln!("{}: {}", PROGRAM, e);
            eprint!("\n{}", app.usage_for(args));
        }
        e => eprintln!("{}: {}", PROGRAM, e),
    }
    std::process::exit(err.exit_code());
}
