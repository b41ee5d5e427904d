use std::path::Path;

use assert_cmd::Command;

pub fn inkpost_cmd(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("inkpost").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd.arg("--data-dir").arg(data_dir);
    cmd
}

/// Publish a piece and return its id (parsed from the `id: ...` line).
pub fn publish(data_dir: &Path, title: &str, kind: &str, content: &str) -> String {
    let output = inkpost_cmd(data_dir)
        .arg("publish")
        .arg("--title")
        .arg(title)
        .arg("--kind")
        .arg(kind)
        .arg("--content")
        .arg(content)
        .output()
        .unwrap();
    assert!(output.status.success(), "publish failed: {output:?}");

    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .lines()
        .find_map(|line| line.strip_prefix("id: "))
        .expect("publish output should contain an id line")
        .to_string()
}
