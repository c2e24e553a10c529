// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Integration tests.
//!
//! Some help for laying out these tests was taken from:
//! https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html

mod simulate;
mod uv_coverage;

use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
    process::Output,
    str::from_utf8,
};

use assert_cmd::{output::OutputError, Command};
use indoc::indoc;

fn uvsynth() -> Command {
    Command::cargo_bin("uvsynth").unwrap()
}

fn get_cmd_output(result: Result<Output, OutputError>) -> (String, String) {
    let output = match result {
        Ok(o) => o,
        Err(o) => o.as_output().unwrap().clone(),
    };
    (
        from_utf8(&output.stdout).unwrap().to_string(),
        from_utf8(&output.stderr).unwrap().to_string(),
    )
}

fn make_file_in_dir<T: AsRef<Path>, U: AsRef<Path>>(filename: T, dir: U) -> (PathBuf, File) {
    let path = dir.as_ref().join(filename);
    let f = File::create(&path).expect("couldn't make file");
    (path, f)
}

/// Write a small T-shaped array; the longest baseline is 50 m.
fn write_antennas<P: AsRef<Path>>(dir: P) -> PathBuf {
    let (path, mut f) = make_file_in_dir("antennas.txt", dir);
    f.write_all(
        indoc! {"
            # East North Up [m]
            0.0   0.0   0.0
            30.0  0.0   0.0
            -20.0 0.0   0.0
            0.0   40.0  0.5
        "}
        .as_bytes(),
    )
    .unwrap();
    path
}

#[test]
fn test_help_lists_subcommands() {
    let cmd = uvsynth().arg("--help").ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("uv-coverage"));
    assert!(stdout.contains("simulate"));
}

#[test]
fn test_no_subcommand_is_an_error() {
    let cmd = uvsynth().ok();
    assert!(cmd.is_err());
}
