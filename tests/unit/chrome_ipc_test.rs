use darkmin::app::BrowserShell;
use darkmin::chrome_ipc::{apply_command, handle_message, parse_command, ChromeCommand};
use darkmin::surface::HeadlessFactory;
use darkmin::types::errors::IpcError;
use darkmin::types::view::ViewMode;
use rstest::rstest;

#[rstest]
#[case(r#"{"cmd":"ready"}"#, ChromeCommand::Ready)]
#[case(r#"{"cmd":"home"}"#, ChromeCommand::Home)]
#[case(r#"{"cmd":"back"}"#, ChromeCommand::Back)]
#[case(r#"{"cmd":"forward"}"#, ChromeCommand::Forward)]
#[case(r#"{"cmd":"reload"}"#, ChromeCommand::Reload)]
#[case(r#"{"cmd":"new_tab"}"#, ChromeCommand::NewTab)]
#[case(r#"{"cmd":"navigate","text":"example.com"}"#, ChromeCommand::Navigate { text: "example.com".into() })]
#[case(r#"{"cmd":"search","text":"rust"}"#, ChromeCommand::Search { text: "rust".into() })]
#[case(r#"{"cmd":"close_tab","index":3}"#, ChromeCommand::CloseTab { index: 3 })]
#[case(r#"{"cmd":"switch_tab","index":0}"#, ChromeCommand::SwitchTab { index: 0 })]
fn test_parse_known_commands(#[case] body: &str, #[case] expected: ChromeCommand) {
    assert_eq!(parse_command(body).unwrap(), expected);
}

#[rstest]
#[case(r#"{"cmd":"teleport"}"#, "teleport")]
#[case(r#"{"cmd":"zoom","level":2}"#, "zoom")]
#[case(r#"{"cmd":"unknown"}"#, "unknown")]
fn test_parse_unknown_command(#[case] body: &str, #[case] expected: &str) {
    match parse_command(body) {
        Err(IpcError::UnknownCommand(cmd)) => assert_eq!(cmd, expected),
        other => panic!("expected UnknownCommand, got {:?}", other),
    }
}

#[rstest]
#[case("not json")]
#[case(r#"{"text":"no cmd"}"#)]
#[case(r#"{"cmd":42}"#)]
#[case(r#"{"cmd":"close_tab"}"#)]
#[case(r#"{"cmd":"close_tab","index":-1}"#)]
fn test_parse_malformed(#[case] body: &str) {
    assert!(matches!(parse_command(body), Err(IpcError::Malformed(_))));
}

#[test]
fn test_commands_drive_the_shell() {
    let factory = HeadlessFactory::new();
    let events = factory.events();
    let mut shell = BrowserShell::new(factory);

    handle_message(&mut shell, r#"{"cmd":"new_tab"}"#);
    handle_message(&mut shell, r#"{"cmd":"navigate","text":"example.com"}"#);
    handle_message(&mut shell, r#"{"cmd":"home"}"#);
    assert_eq!(shell.view_mode(), ViewMode::Landing);

    while let Some(event) = events.borrow_mut().pop_front() {
        shell.handle_surface_event(event);
    }
    assert_eq!(shell.view_mode(), ViewMode::Browsing);
    assert_eq!(shell.address(), "https://example.com");

    apply_command(&mut shell, ChromeCommand::Back);
    while let Some(event) = events.borrow_mut().pop_front() {
        shell.handle_surface_event(event);
    }
    assert_eq!(shell.address(), "about:blank");
}

#[test]
fn test_garbage_message_changes_nothing() {
    let mut shell = BrowserShell::new(HeadlessFactory::new());
    shell.open_tab(None, None).unwrap();
    handle_message(&mut shell, "{{{");
    handle_message(&mut shell, r#"{"cmd":"self_destruct"}"#);
    assert_eq!(shell.tab_count(), 1);
    assert_eq!(shell.view_mode(), ViewMode::Browsing);
}

#[test]
fn test_close_and_switch_by_index() {
    let mut shell = BrowserShell::new(HeadlessFactory::new());
    shell.open_tab(Some("https://a.test"), None).unwrap();
    shell.open_tab(Some("https://b.test"), None).unwrap();
    shell.open_tab(Some("https://c.test"), None).unwrap();

    apply_command(&mut shell, ChromeCommand::SwitchTab { index: 0 });
    apply_command(&mut shell, ChromeCommand::CloseTab { index: 2 });

    assert_eq!(shell.tab_count(), 2);
    assert_eq!(shell.address(), "https://a.test");
}
