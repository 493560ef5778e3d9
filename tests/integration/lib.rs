//! Shared fixtures for the cross-crate integration tests.

/// A small catalog covering a runnable and a non-runnable language.
pub const SAMPLE_CATALOG: &str = r#"{
    javascript: {
        name: 'JavaScript',
        topics: [
            { title: 'Variables', prompt: 'Explain let, const and var.' },
            { title: 'Arrays', prompt: 'Explain arrays and iteration.' },
        ],
    },
    python: {
        name: 'Python',
        topics: [{ title: 'Functions', prompt: 'Explain def and return.' }],
    },
}"#;

/// Config that bounds loops so runaway snippets end quickly.
pub const BOUNDED_CONFIG: &str = r#"{
    terminal: { loop_iteration_limit: 5000, recursion_limit: 64 },
    harness: { timeout_ms: 2000 },
}"#;
