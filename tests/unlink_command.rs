#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::wildcard_imports,
    clippy::indexing_slicing
)]
//! Integration tests for unlink mode, including link/unlink round trips.

mod common;

use std::path::PathBuf;
use std::sync::Arc;

use common::{FixedPrompt, TestEnvBuilder};
use dotstribute::commands;
use dotstribute::logging::FileStatus;
use dotstribute::tasks::Outcome;

#[cfg(unix)]
#[test]
fn unlink_prunes_only_the_immediate_parent() {
    let env = TestEnvBuilder::new()
        .with_file("config/tool/settings", "{}")
        .build();
    env.run(&[]).unwrap();

    let outcomes = env.run(&["--unlink"]).unwrap();

    assert_eq!(
        outcomes,
        vec![(
            PathBuf::from("config/tool/settings"),
            Outcome::Removed {
                pruned: Some(env.home().join(".config/tool"))
            }
        )]
    );
    insta::assert_snapshot!(env.home_listing(), @".config/");
}

#[cfg(unix)]
#[test]
fn unlink_prunes_parent_after_last_sibling() {
    let env = TestEnvBuilder::new()
        .with_file("config/tool/a", "")
        .with_file("config/tool/b", "")
        .build();
    env.run(&[]).unwrap();

    let outcomes = env.run(&["--unlink"]).unwrap();

    assert_eq!(
        outcomes,
        vec![
            (
                PathBuf::from("config/tool/a"),
                Outcome::Removed { pruned: None }
            ),
            (
                PathBuf::from("config/tool/b"),
                Outcome::Removed {
                    pruned: Some(env.home().join(".config/tool"))
                }
            ),
        ]
    );
    insta::assert_snapshot!(env.home_listing(), @".config/");
}

#[cfg(unix)]
#[test]
fn unlink_keeps_parent_with_other_content() {
    let env = TestEnvBuilder::new()
        .with_file("config/tool/settings", "{}")
        .with_home_file(".config/tool/state", "user")
        .build();
    env.run(&[]).unwrap();

    let outcomes = env.run(&["-u"]).unwrap();

    assert_eq!(outcomes[0].1, Outcome::Removed { pruned: None });
    assert!(env.home().join(".config/tool/state").is_file());
}

#[cfg(unix)]
#[test]
fn link_then_unlink_restores_home() {
    let env = TestEnvBuilder::new()
        .with_ignore(".dotignore\n")
        .with_file("bashrc", "")
        .with_file("profile", "")
        .with_file("ssh/config", "")
        .build();

    env.run(&[]).unwrap();
    let unlinked = env.run(&["--unlink"]);

    assert_eq!(unlinked.count(FileStatus::Changed), 3);
    assert_eq!(env.home_listing(), "");
    assert!(env.home().is_dir(), "home itself must survive");
}

#[cfg(unix)]
#[test]
fn second_unlink_pass_finds_nothing() {
    let env = TestEnvBuilder::new().with_file("bashrc", "").build();
    env.run(&[]).unwrap();
    env.run(&["--unlink"]).unwrap();

    let second = env.run(&["--unlink"]).unwrap();

    assert_eq!(second, vec![(PathBuf::from("bashrc"), Outcome::NotPresent)]);
}

#[test]
fn unlink_never_deletes_real_files() {
    let env = TestEnvBuilder::new()
        .with_file("bashrc", "")
        .with_file("config/app", "")
        .with_home_file(".bashrc", "# mine")
        .with_home_file(".config/app/data", "keep")
        .build();

    let result = env.run(&["--unlink"]);

    assert_eq!(result.count(FileStatus::Blocked), 2);
    assert_eq!(
        std::fs::read_to_string(env.home().join(".bashrc")).unwrap(),
        "# mine"
    );
    assert!(env.home().join(".config/app/data").is_file());
}

#[cfg(unix)]
#[test]
fn unlink_leaves_symlinks_it_does_not_own() {
    let env = TestEnvBuilder::new().with_file("bashrc", "").build();
    std::os::unix::fs::symlink("/etc/bash.bashrc", env.home().join(".bashrc")).unwrap();

    let result = env.run(&["--unlink"]);

    assert_eq!(result.count(FileStatus::Blocked), 1);
    assert_eq!(
        env.link_target(".bashrc"),
        Some(PathBuf::from("/etc/bash.bashrc"))
    );
}

#[cfg(unix)]
#[test]
fn unlink_preview_removes_nothing() {
    let env = TestEnvBuilder::new().with_file("config/tool/settings", "").build();
    env.run(&[]).unwrap();

    let result = env.run(&["--unlink", "--preview"]);

    assert_eq!(result.count(FileStatus::Preview), 1);
    assert!(env.link_target(".config/tool/settings").is_some());
}

#[cfg(unix)]
#[test]
fn unlink_declined_keeps_link() {
    let env = TestEnvBuilder::new().with_file("bashrc", "").build();
    env.run(&[]).unwrap();
    let prompt = Arc::new(FixedPrompt::new(false));

    let result = env.run_with(&["--unlink", "--ask"], Arc::clone(&prompt) as _);

    assert_eq!(result.count(FileStatus::Declined), 1);
    assert_eq!(prompt.asked(), 1);
    assert!(env.link_target(".bashrc").is_some());
}

#[cfg(unix)]
#[test]
fn unlink_stops_at_first_fatal_error() {
    let env = TestEnvBuilder::new()
        .with_file("a", "")
        .with_file("b/c", "")
        .with_file("d", "")
        .build();
    env.run(&[]).unwrap();
    // A file where `.b` should be makes `.b/c` uninspectable.
    std::fs::remove_dir_all(env.home().join(".b")).unwrap();
    std::fs::write(env.home().join(".b"), "").unwrap();

    let result = env.run(&["--unlink"]);

    assert!(result.outcomes.is_err());
    assert_eq!(result.log.file_entries().len(), 1);
    assert!(!env.exists_in_home(".a"));
    assert!(env.link_target(".d").is_some());
}

#[cfg(unix)]
#[test]
fn fatal_error_message_names_the_cause_once() {
    let env = TestEnvBuilder::new().with_file("b/c", "").build();
    env.run(&[]).unwrap();
    std::fs::remove_dir_all(env.home().join(".b")).unwrap();
    std::fs::write(env.home().join(".b"), "").unwrap();

    let err = env.run(&["--unlink"]).outcomes.unwrap_err();
    let message = commands::failure_message(&err);

    assert!(message.starts_with("Resource error: inspecting "), "{message}");
    assert_eq!(message.matches("inspecting").count(), 1, "{message}");
    assert_eq!(message.matches("os error").count(), 1, "{message}");
}
