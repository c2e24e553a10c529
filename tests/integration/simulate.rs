// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::io::Write;

use indoc::formatdoc;
use tempfile::TempDir;

use crate::*;

#[test]
fn test_simulate() {
    let tmp_dir = TempDir::new().unwrap();
    let antennas = write_antennas(tmp_dir.path());

    #[rustfmt::skip]
    let cmd = uvsynth().args([
        "simulate",
        "--antennas", &format!("{}", antennas.display()),
        "-n", "64",
        "-t", "30",
        "--noise-sigma", "0.001",
        "--seed", "10",
    ]).ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("Dirty beam FWHM"));
    assert!(stdout.contains("Side-lobe level"));
    assert!(stdout.contains("Relative MSE"));
    assert!(stdout.contains("uvsynth simulate"));
}

#[test]
fn test_simulate_random_sky_without_beam() {
    let tmp_dir = TempDir::new().unwrap();
    let antennas = write_antennas(tmp_dir.path());

    #[rustfmt::skip]
    let cmd = uvsynth().args([
        "simulate",
        "--antennas", &format!("{}", antennas.display()),
        "-n", "64",
        "-t", "30",
        "--no-beam",
        "--random-sizes", "0.05", "0.1",
        "--random-intensities", "1", "0.5",
        "--random-seed", "3",
    ]).ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("2 random sources"));
    assert!(stdout.contains("Not using any beam"));
}

#[test]
fn test_simulate_from_json_arg_file() {
    let tmp_dir = TempDir::new().unwrap();
    let antennas = write_antennas(tmp_dir.path());
    let (args_file, mut f) = make_file_in_dir("args.json", tmp_dir.path());
    f.write_all(
        formatdoc! {r#"
            {{
                "observation": {{ "antennas": "{}", "num_times": 20 }},
                "grid": {{ "num_pixels": 64, "mask_type": "histogram" }},
                "beam": {{ "beam_type": "gaussian", "beam_fwhm": 0.5 }},
                "sky-model": {{
                    "sources": [
                        {{ "l_deg": 0.0, "m_deg": 0.0, "fwhm_deg": 0.05, "intensity": 1.0 }},
                        {{ "l_deg": 0.2, "m_deg": -0.1, "fwhm_deg": 0.0, "intensity": 0.3 }}
                    ]
                }}
            }}
        "#,
            antennas.display()
        }
        .as_bytes(),
    )
    .unwrap();
    drop(f);

    let cmd = uvsynth()
        .args(["simulate", &format!("{}", args_file.display())])
        .ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("2 sources from the arguments file"));
    assert!(stdout.contains("histogram mask"));
    assert!(stdout.contains("Side-lobe level"));
}

#[test]
fn test_simulate_errors() {
    let tmp_dir = TempDir::new().unwrap();
    let antennas = write_antennas(tmp_dir.path());

    #[rustfmt::skip]
    let cmd = uvsynth().args([
        "simulate",
        "--antennas", &format!("{}", antennas.display()),
        "-n", "64",
        "--crop-fraction", "2",
    ]).ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("crop fraction"), "{stderr}");

    #[rustfmt::skip]
    let cmd = uvsynth().args([
        "simulate",
        "--antennas", &format!("{}", antennas.display()),
        "-n", "64",
        "--beam-type", "gaussian",
    ]).ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("FWHM"), "{stderr}");

    #[rustfmt::skip]
    let cmd = uvsynth().args([
        "simulate",
        "--antennas", &format!("{}", antennas.display()),
        "-n", "64",
        "--mask-type", "weighted",
    ]).ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("weights"), "{stderr}");

    let (bad_file, _) = make_file_in_dir("args.yaml", tmp_dir.path());
    let cmd = uvsynth()
        .args(["simulate", &format!("{}", bad_file.display())])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("recognised file extension"), "{stderr}");
}
