//! Practice terminal sessions driven by a loaded configuration and catalog.

use codeteacher_core::{Config, LanguageCatalog};
use codeteacher_integration_tests::{BOUNDED_CONFIG, SAMPLE_CATALOG};
use codeteacher_sandbox::{OutputLine, PracticeTerminal, RunOutcome};

#[test]
fn test_catalog_languages_gate_the_terminal() {
    let catalog = LanguageCatalog::parse(SAMPLE_CATALOG).unwrap();
    let config = Config::default();
    let mut terminal = PracticeTerminal::new(&config.terminal).unwrap();

    let mut supported = Vec::new();
    for (key, _) in catalog.languages() {
        terminal.select_language(key);
        if let RunOutcome::Executed { .. } = terminal.run() {
            supported.push(key.to_string());
        }
    }

    assert_eq!(supported, vec!["javascript"]);
    assert_eq!(terminal.output(), &[OutputLine::output("Hello, Teacher!")]);
}

#[test]
fn test_configured_limits_stop_runaway_snippets() {
    let config = Config::parse(BOUNDED_CONFIG).unwrap();
    config.validate().unwrap();
    let mut terminal = PracticeTerminal::new(&config.terminal).unwrap();

    terminal.set_snippet("for (;;) {}");
    assert_eq!(terminal.run(), RunOutcome::Executed { appended: 1 });
    assert!(terminal.output()[0].is_error);

    terminal.set_snippet("function down(n) { return down(n + 1); } down(0);");
    terminal.run();
    assert_eq!(terminal.output().len(), 2);
    assert!(terminal.output()[1].is_error);

    // The terminal keeps working after a limit was hit.
    terminal.set_snippet(r#"console.log("recovered")"#);
    terminal.run();
    assert_eq!(terminal.output()[2], OutputLine::output("recovered"));
}

#[test]
fn test_full_session() {
    let mut terminal = PracticeTerminal::new(&Config::default().terminal).unwrap();

    terminal.set_snippet(
        r#"
        const scores = [3, 1, 2].sort();
        console.log("sorted", scores);
        "#,
    );
    terminal.run();
    terminal.set_snippet("undefinedFunction()");
    terminal.run();

    let output = terminal.output();
    assert_eq!(output[0].text, "sorted [\n  1,\n  2,\n  3\n]");
    assert!(output[1].is_error);
    assert!(output[1].text.starts_with("Error: "));
    assert_eq!(terminal.output_log().error_count(), 1);

    terminal.clear();
    assert!(terminal.output().is_empty());
    assert!(terminal.snippet().contains("undefinedFunction"));
}
