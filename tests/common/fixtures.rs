//! Shared git command scripts for integration tests.

/// A branching history with alternating release and pre-release tags,
/// including a merge commit and several commits tagged more than once.
#[allow(dead_code)]
pub const REPO_WITH_HISTORY_COMMANDS: &[&str] = &[
    "commit --allow-empty -m .",
    "commit --allow-empty -m .",
    "commit --allow-empty -m .",
    "tag 0.0.0-alpha.1",
    "commit --allow-empty -m .",
    "commit --allow-empty -m .",
    "tag 0.0.0",
    "commit --allow-empty -m .",
    "commit --allow-empty -m .",
    "tag 0.1.0-beta.1",
    "commit --allow-empty -m .",
    "commit --allow-empty -m .",
    "tag 0.1.0",
    "commit --allow-empty -m .",
    "commit --allow-empty -m .",
    "tag 1.0.0-alpha.1",
    "commit --allow-empty -m .",
    "commit --allow-empty -m .",
    "tag 1.0.0-rc.1",
    "tag 1.0.0",
    "checkout -b foo",
    "commit --allow-empty -m .",
    "commit --allow-empty -m .",
    "commit --allow-empty -m .",
    "tag 1.0.1-alpha.1",
    "commit --allow-empty -m .",
    "commit --allow-empty -m .",
    "tag 1.0.1",
    "commit --allow-empty -m .",
    "checkout main",
    "commit --allow-empty -m .",
    "commit --allow-empty -m .",
    "commit --allow-empty -m .",
    "tag 1.1.0-alpha.1",
    "commit --allow-empty -m .",
    "merge foo --no-edit",
    "commit --allow-empty -m .",
    "tag 1.1.0-beta.2",
    "tag 1.1.0-beta.10",
    "commit --allow-empty -m .",
    "commit --allow-empty -m .",
    "tag 1.1.0-rc.1",
    "tag 1.1.0",
];

/// Commands that mirror the `min_major_minor` reconciliation scenario: an
/// unparseable tag, a branch tagged with a pre-release, and a merge back
/// into `main` that leaves `HEAD` past the pre-release tag.
#[allow(dead_code)]
pub const MIN_MAJOR_MINOR_COMMANDS_AFTER_TAG: &[&str] = &[
    "commit --allow-empty -m .",
    "tag not-a-version",
    "checkout -b foo",
    "commit --allow-empty -m .",
    "tag 1.0.0-foo.1",
    "checkout main",
    "merge foo --no-edit --no-ff",
];

/// Same setup as above, but `HEAD` stops exactly on the pre-release tag.
#[allow(dead_code)]
pub const MIN_MAJOR_MINOR_COMMANDS_ON_TAG: &[&str] = &[
    "commit --allow-empty -m .",
    "tag not-a-version",
    "checkout -b foo",
    "commit --allow-empty -m .",
    "tag 1.0.0-foo.1",
];

/// Runs a script of bare `git` argument lists (as produced by splitting the
/// constants above on whitespace) against `path`.
#[allow(dead_code)]
pub fn run_script(path: &std::path::Path, commands: &[&str]) {
    for command in commands {
        let args: Vec<&str> = command.split_whitespace().collect();
        super::git::run_git_command(&args, path).unwrap_or_else(|e| panic!("failed to run '{command}': {e}"));
    }
}
