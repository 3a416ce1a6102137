use multi_level_argparse::{Command, CommandBuilder, Error, Flag, FlagType, build_cli};

fn registry() -> Command {
    let mut root = CommandBuilder::new("prog").build();
    root.add_command(
        CommandBuilder::new("add")
            .flag(Flag::new("x").value_type(FlagType::Int).required())
            .run(|_| Ok(()))
            .build(),
    )
    .unwrap();
    root.add_command(
        CommandBuilder::new("remove")
            .flag(Flag::new("id").value_type(FlagType::String).required())
            .run(|_| Ok(()))
            .build(),
    )
    .unwrap();
    root
}

#[test]
fn add_with_value_yields_tagged_result() {
    let ctx = registry().parse(&["add", "--x", "5"]).unwrap();
    assert_eq!(ctx.command(), "add");
    assert_eq!(ctx.int("x"), Some(5));
}

#[test]
fn remove_without_id_is_missing_argument() {
    let err = registry().parse(&["remove"]).unwrap_err();
    assert!(matches!(err, Error::MissingArgument(ref f) if f == "--id"));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn bogus_is_unknown_command() {
    let err = registry().parse(&["bogus"]).unwrap_err();
    match &err {
        Error::UnknownCommand { name, valid, .. } => {
            assert_eq!(name, "bogus");
            assert_eq!(valid, &["add", "remove"]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_ne!(err.exit_code(), 0);
}

#[test]
fn every_registered_command_dispatches_to_itself() {
    let app = registry();
    let cases: [(&str, &[&str]); 2] = [("add", &["--x", "1"]), ("remove", &["--id", "a"])];
    for (name, flags) in cases {
        let mut args = vec![name];
        args.extend_from_slice(flags);
        let ctx = app.parse(&args).unwrap();
        assert_eq!(ctx.command(), name);
        app.run(&ctx).unwrap();
    }
}

#[test]
fn unregistered_names_never_dispatch() {
    let app = registry();
    for name in ["Add", "ad", "remove2", "help"] {
        let err = app.parse(&[name]).unwrap_err();
        assert!(matches!(err, Error::UnknownCommand { .. }), "{name:?}: {err:?}");
    }
}

#[test]
fn demo_app_runs_leaf_commands() {
    let app = build_cli().unwrap();
    app.execute(&["-v", "command_a", "--foo"]).unwrap();
    app.execute(&["command_c", "count", "--to", "3"]).unwrap();

    let err = app.execute(&["command_c", "count", "--to", "x"]).unwrap_err();
    assert!(matches!(err, Error::InvalidValue { .. }));
}
