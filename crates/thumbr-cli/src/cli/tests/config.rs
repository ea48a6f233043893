use super::*;

#[test]
fn cli_parse_config_path() {
    match parse(&["thumbr", "config", "path"]) {
        CliCommand::Config {
            action: ConfigAction::Path,
        } => {}
        _ => panic!("expected Config Path"),
    }
}

#[test]
fn cli_parse_config_show() {
    match parse(&["thumbr", "config", "show"]) {
        CliCommand::Config {
            action: ConfigAction::Show,
        } => {}
        _ => panic!("expected Config Show"),
    }
}

#[test]
fn cli_parse_config_requires_action() {
    assert!(Cli::try_parse_from(["thumbr", "config"]).is_err());
}
