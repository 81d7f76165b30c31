use super::SlashCommand;
use crate::domain::models::QuickAction;

#[test]
fn it_parse_empty_string() {
    let text = "";
    assert!(SlashCommand::parse(text).is_none());
}
#[test]
fn it_parse_space_only() {
    let text = " ";
    assert!(SlashCommand::parse(text).is_none());
}
#[test]
fn it_parse_single_slash() {
    let text = "/";
    assert!(SlashCommand::parse(text).is_none());
}
#[test]
fn it_parse_plain_text() {
    let text = "Check my balance";
    assert!(SlashCommand::parse(text).is_none());
}
#[test]
fn it_parse_valid_prefix() {
    let cmd = SlashCommand::parse("/q");
    assert!(cmd.is_some());
    assert_eq!(cmd.unwrap().command, "/q");
}

#[test]
fn it_is_quit() {
    for text in ["/q", "/quit", "/exit"] {
        assert!(SlashCommand::parse(text).unwrap().is_quit());
    }
}
#[test]
fn it_is_not_is_quit() {
    let cmd = SlashCommand::parse("/help").unwrap();
    assert!(!cmd.is_quit());
}

#[test]
fn it_is_help() {
    assert!(SlashCommand::parse("/h").unwrap().is_help());
    assert!(SlashCommand::parse("/help").unwrap().is_help());
}

#[test]
fn it_resolves_quick_actions() {
    let cmd = SlashCommand::parse("/balance").unwrap();
    assert_eq!(cmd.quick_action(), Some(QuickAction::Balance));

    let cmd = SlashCommand::parse("/b").unwrap();
    assert_eq!(cmd.quick_action(), Some(QuickAction::Balance));

    let cmd = SlashCommand::parse("/t").unwrap();
    assert_eq!(cmd.quick_action(), Some(QuickAction::Transactions));

    let cmd = SlashCommand::parse("/transfer").unwrap();
    assert_eq!(cmd.quick_action(), Some(QuickAction::Transfer));

    let cmd = SlashCommand::parse("/support").unwrap();
    assert_eq!(cmd.quick_action(), Some(QuickAction::Support));
}
#[test]
fn it_is_not_quick_action() {
    let cmd = SlashCommand::parse("/help").unwrap();
    assert!(cmd.quick_action().is_none());
}

#[test]
fn it_parses_faq_position() {
    let cmd = SlashCommand::parse("/faq 3").unwrap();
    assert!(cmd.is_faq());
    assert_eq!(cmd.position_arg(), Some(3));
}
#[test]
fn it_parses_missing_position() {
    let cmd = SlashCommand::parse("/faq").unwrap();
    assert_eq!(cmd.position_arg(), None);

    let cmd = SlashCommand::parse("/faq abc").unwrap();
    assert_eq!(cmd.position_arg(), None);
}

#[test]
fn it_is_language() {
    assert!(SlashCommand::parse("/lang").unwrap().is_language());
    assert!(SlashCommand::parse("/l").unwrap().is_language());
}

#[test]
fn it_keeps_attach_path() {
    let cmd = SlashCommand::parse("/attach ./my statement.pdf").unwrap();
    assert!(cmd.is_attach());
    assert_eq!(cmd.rest(), "./my statement.pdf");
}

#[test]
fn it_is_rate() {
    let cmd = SlashCommand::parse("/rate up").unwrap();
    assert!(cmd.is_rate());
    assert_eq!(cmd.args, vec!["up".to_string()]);
}

#[test]
fn it_is_connectivity() {
    assert!(SlashCommand::parse("/offline").unwrap().is_offline());
    assert!(SlashCommand::parse("/online").unwrap().is_online());
}

#[test]
fn it_is_misc_toggles() {
    assert!(SlashCommand::parse("/record").unwrap().is_record());
    assert!(SlashCommand::parse("/emoji").unwrap().is_emoji());
    assert!(SlashCommand::parse("/agent").unwrap().is_agent());
    assert!(SlashCommand::parse("/copy").unwrap().is_copy());
    assert!(SlashCommand::parse("/actions").unwrap().is_toggle_actions());
}
