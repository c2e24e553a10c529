// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::io::Write;

use indoc::formatdoc;
use tempfile::TempDir;

use crate::*;

#[test]
fn test_uv_coverage() {
    let tmp_dir = TempDir::new().unwrap();
    let antennas = write_antennas(tmp_dir.path());

    #[rustfmt::skip]
    let cmd = uvsynth().args([
        "uv-coverage",
        "--antennas", &format!("{}", antennas.display()),
        "-n", "64",
        "-t", "20",
    ]).ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
    let (stdout, _) = get_cmd_output(cmd);
    // 4 antennas make 12 baselines when both directions are kept.
    assert!(stdout.contains("12 baselines x 20 time steps x 1 channels = 240 UV samples"));
    assert!(stdout.contains("complete."));
}

#[test]
fn test_uv_coverage_multi_band() {
    let tmp_dir = TempDir::new().unwrap();
    let antennas = write_antennas(tmp_dir.path());

    #[rustfmt::skip]
    let cmd = uvsynth().args([
        "uv-coverage",
        "--antennas", &format!("{}", antennas.display()),
        "-n", "64",
        "-t", "10",
        "--multi-band",
        "--num-freqs", "3",
        "--freq-span", "500",
    ]).ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("12 baselines x 10 time steps x 3 channels = 360 UV samples"));
}

#[test]
fn test_uv_coverage_from_arg_file() {
    let tmp_dir = TempDir::new().unwrap();
    let antennas = write_antennas(tmp_dir.path());
    let (args_file, mut f) = make_file_in_dir("args.toml", tmp_dir.path());
    f.write_all(
        formatdoc! {r#"
            [observation]
            antennas = "{}"
            num_times = 5

            [grid]
            num_pixels = 64
            mask_type = "histogram"
        "#,
            antennas.display()
        }
        .as_bytes(),
    )
    .unwrap();
    drop(f);

    // The CLI overrides the file.
    #[rustfmt::skip]
    let cmd = uvsynth().args([
        "uv-coverage",
        &format!("{}", args_file.display()),
        "-t", "7",
    ]).ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("12 baselines x 7 time steps"));
    assert!(stdout.contains("histogram mask"));
}

#[test]
fn test_uv_coverage_dry_run_and_save_toml() {
    let tmp_dir = TempDir::new().unwrap();
    let antennas = write_antennas(tmp_dir.path());
    let saved = tmp_dir.path().join("saved.toml");

    #[rustfmt::skip]
    let cmd = uvsynth().args([
        "uv-coverage",
        "--antennas", &format!("{}", antennas.display()),
        "--latitude", "-26.7",
        "--dry-run",
        "--save-toml", &format!("{}", saved.display()),
    ]).ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("Dry run -- exiting now."));
    assert!(!stdout.contains("UV samples"));

    let saved = std::fs::read_to_string(saved).unwrap();
    assert!(saved.contains("[observation]"));
    assert!(saved.contains("latitude = -26.7"));
}

#[test]
fn test_uv_coverage_errors() {
    let tmp_dir = TempDir::new().unwrap();
    let antennas = write_antennas(tmp_dir.path());

    let cmd = uvsynth().arg("uv-coverage").ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("No antenna positions were supplied"), "{stderr}");

    #[rustfmt::skip]
    let cmd = uvsynth().args([
        "uv-coverage",
        "--antennas", &format!("{}", antennas.display()),
        "--mask-type", "fuzzy",
    ]).ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("'fuzzy' is not a valid mask type"), "{stderr}");

    // 16 cells over 10 degrees only reach ~46 wavelengths; 50 m at 2 GHz is
    // ~330 wavelengths.
    #[rustfmt::skip]
    let cmd = uvsynth().args([
        "uv-coverage",
        "--antennas", &format!("{}", antennas.display()),
        "-n", "16",
        "--fov", "10",
    ]).ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("lies outside the grid"), "{stderr}");
}
