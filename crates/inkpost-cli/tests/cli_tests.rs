//! End-to-end tests driving the binary against a temporary data dir.

#![allow(deprecated)]

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::{inkpost_cmd, publish};

#[test]
fn list_on_fresh_store_is_empty() {
    let temp = TempDir::new().unwrap();

    inkpost_cmd(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No writings found."));
}

#[test]
fn publish_then_list_shows_the_piece() {
    let temp = TempDir::new().unwrap();
    let id = publish(temp.path(), "Whispers of Dawn", "poem", "Soft light over sleeping hills");

    inkpost_cmd(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Whispers of Dawn (poem)"))
        .stdout(predicate::str::contains(&id));
}

#[test]
fn list_is_newest_first() {
    let temp = TempDir::new().unwrap();
    publish(temp.path(), "Older Piece", "story", "Written before the other one");
    publish(temp.path(), "Newer Piece", "story", "Written after the other one");

    let output = inkpost_cmd(temp.path()).arg("list").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    let newer = stdout.find("Newer Piece").expect("newer listed");
    let older = stdout.find("Older Piece").expect("older listed");
    assert!(newer < older, "newest should come first:\n{stdout}");
}

#[test]
fn list_filters_by_kind_and_search() {
    let temp = TempDir::new().unwrap();
    publish(temp.path(), "Harbour Lights", "poem", "Salt wind over the quay");
    publish(temp.path(), "The Long Walk", "story", "He left at dawn and kept going");

    inkpost_cmd(temp.path())
        .arg("list")
        .arg("--kind")
        .arg("poem")
        .assert()
        .success()
        .stdout(predicate::str::contains("Harbour Lights"))
        .stdout(predicate::str::contains("The Long Walk").not());

    // Search matches content too, case-insensitively.
    inkpost_cmd(temp.path())
        .arg("list")
        .arg("--search")
        .arg("DAWN")
        .assert()
        .success()
        .stdout(predicate::str::contains("The Long Walk"))
        .stdout(predicate::str::contains("Harbour Lights").not());
}

#[test]
fn show_prints_content_and_comments() {
    let temp = TempDir::new().unwrap();
    let id = publish(temp.path(), "Quiet Field", "essay", "On the virtues of long grass");

    inkpost_cmd(temp.path())
        .arg("comment")
        .arg(&id)
        .arg("Nice!")
        .assert()
        .success()
        .stdout(predicate::str::contains("Comment posted on \"Quiet Field\" (1 comment(s))"));

    inkpost_cmd(temp.path())
        .arg("show")
        .arg(&id)
        .assert()
        .success()
        .stdout(predicate::str::contains("On the virtues of long grass"))
        .stdout(predicate::str::contains("Comments (1)"))
        .stdout(predicate::str::contains("Nice!"));
}

#[test]
fn rating_updates_the_running_average() {
    let temp = TempDir::new().unwrap();
    let id = publish(temp.path(), "Whispers of Dawn", "poem", "Soft light over sleeping hills");

    inkpost_cmd(temp.path()).arg("rate").arg(&id).arg("5").assert().success();
    inkpost_cmd(temp.path())
        .arg("rate")
        .arg(&id)
        .arg("3")
        .assert()
        .success()
        .stdout(predicate::str::contains("now 4.0 from 2 rating(s)"));
}

#[test]
fn rate_rejects_out_of_range_stars() {
    let temp = TempDir::new().unwrap();
    let id = publish(temp.path(), "Harbour Lights", "poem", "Salt wind over the quay");

    inkpost_cmd(temp.path())
        .arg("rate")
        .arg(&id)
        .arg("6")
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 1 and 5"));
}

#[test]
fn rate_unknown_id_fails() {
    let temp = TempDir::new().unwrap();

    inkpost_cmd(temp.path())
        .arg("rate")
        .arg("no-such-id")
        .arg("4")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no writing with id"));
}

#[test]
fn show_unknown_id_fails() {
    let temp = TempDir::new().unwrap();

    inkpost_cmd(temp.path())
        .arg("show")
        .arg("no-such-id")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no writing with id"));
}

#[test]
fn publish_enforces_minimum_lengths() {
    let temp = TempDir::new().unwrap();

    inkpost_cmd(temp.path())
        .arg("publish")
        .arg("--title")
        .arg("Hi")
        .arg("--content")
        .arg("Long enough content here")
        .assert()
        .failure()
        .stderr(predicate::str::contains("title must be at least 3 characters"));

    inkpost_cmd(temp.path())
        .arg("publish")
        .arg("--title")
        .arg("Short One")
        .arg("--content")
        .arg("tiny")
        .assert()
        .failure()
        .stderr(predicate::str::contains("content must be at least 10 characters"));
}

#[test]
fn publish_rejects_unknown_kind() {
    let temp = TempDir::new().unwrap();

    inkpost_cmd(temp.path())
        .arg("publish")
        .arg("--title")
        .arg("A Haiku")
        .arg("--kind")
        .arg("haiku")
        .arg("--content")
        .arg("Five then seven then five")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown writing kind"));
}

#[test]
fn whoami_is_stable_across_invocations() {
    let temp = TempDir::new().unwrap();

    let first = inkpost_cmd(temp.path()).arg("whoami").output().unwrap();
    let second = inkpost_cmd(temp.path()).arg("whoami").output().unwrap();
    assert!(first.status.success() && second.status.success());
    assert_eq!(first.stdout, second.stdout);

    let stdout = String::from_utf8(first.stdout).unwrap();
    assert!(stdout.starts_with("user_"), "unexpected identity: {stdout}");
    assert!(stdout.contains("Writer "));
}

#[test]
fn mine_lists_only_this_devices_pieces() {
    let writer_a = TempDir::new().unwrap();
    let writer_b = TempDir::new().unwrap();
    publish(writer_a.path(), "Mine Alone", "essay", "Written from this device");
    publish(writer_b.path(), "Someone Else", "essay", "Written from another device");

    inkpost_cmd(writer_a.path())
        .arg("mine")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mine Alone"))
        .stdout(predicate::str::contains("Someone Else").not());
}

#[test]
fn publish_reads_content_from_file() {
    let temp = TempDir::new().unwrap();
    let piece = temp.path().join("piece.txt");
    std::fs::write(&piece, "A story that lives in a file on disk").unwrap();

    inkpost_cmd(temp.path())
        .arg("publish")
        .arg("--title")
        .arg("From a File")
        .arg("--kind")
        .arg("story")
        .arg("--file")
        .arg(&piece)
        .assert()
        .success()
        .stdout(predicate::str::contains("Published \"From a File\" (story)"));
}
