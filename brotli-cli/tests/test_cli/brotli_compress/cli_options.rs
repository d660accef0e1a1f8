use crate::add_test;
use crate::common::{Fixture, SAMPLE_TEXT};

const INPUT: &str = "input.txt";
const OUTPUT: &str = "output.br";

/// Runs compression with `extra` flags and returns the fixture and outcome.
async fn compress_with(extra: &[&str]) -> (Fixture, crate::common::Output) {
    let mut fixture = Fixture::with_file(INPUT, SAMPLE_TEXT.repeat(10).as_bytes());
    let input = fixture.path(INPUT);
    let output = fixture.path(OUTPUT);

    let mut args = vec!["-e", input.as_str(), "-o", output.as_str()];
    args.extend_from_slice(extra);
    let result = fixture.run_cargo(&args).await;
    (fixture, result)
}

add_test!(version_flag, async {
    let mut fixture = Fixture::with_file(INPUT, b"");

    for flag in ["-v", "--version"] {
        let output = fixture.run_cargo(&[flag]).await;
        assert!(output.status.success());
        let version = brotli_core::engine_version();
        assert_eq!(output.stdout.trim_end(), format!("brotli-compress {version}"));
    }
});

add_test!(help_flag, async {
    let mut fixture = Fixture::with_file(INPUT, b"");

    let output = fixture.run_cargo(&["--help"]).await;
    assert!(output.status.success());
    assert!(output.stdout.contains("--backward"));
});

add_test!(operation_is_required, async {
    let mut fixture = Fixture::with_file(INPUT, SAMPLE_TEXT.as_bytes());
    let input = fixture.path(INPUT);
    let output = fixture.path(OUTPUT);

    let result = fixture.run_cargo(&[&input, "-o", &output]).await;
    assert!(!result.status.success());
    assert!(!fixture.file_exists(OUTPUT));
});

add_test!(compress_and_decompress_conflict, async {
    let (fixture, result) = compress_with(&["-d"]).await;
    assert!(!result.status.success());
    assert!(!fixture.file_exists(OUTPUT));
});

add_test!(output_is_required, async {
    let mut fixture = Fixture::with_file(INPUT, SAMPLE_TEXT.as_bytes());
    let input = fixture.path(INPUT);

    let result = fixture.run_cargo(&["-e", &input]).await;
    assert!(!result.status.success());
});

add_test!(out_of_range_values_rejected, async {
    for extra in [
        &["-q", "12"][..],
        &["--lgwin", "9"],
        &["--lgwin", "25"],
        &["--lgblock", "15"],
        &["--lgblock", "25"],
        &["-g", "0"],
        &["-g", "17"],
    ] {
        let (fixture, result) = compress_with(extra).await;
        assert!(!result.status.success(), "{extra:?} was accepted");
        assert!(!fixture.file_exists(OUTPUT), "{extra:?} produced output");
    }
});

add_test!(boundary_values_accepted, async {
    for extra in [
        &["-q", "0"][..],
        &["-q", "11"],
        &["--lgwin", "10"],
        &["--lgwin", "24"],
        &["--lgblock", "0"],
        &["--lgblock", "16"],
        &["--lgblock", "24"],
        &["-g", "1"],
        &["-g", "16"],
    ] {
        let (fixture, result) = compress_with(extra).await;
        assert!(result.status.success(), "{extra:?}: {}", result.stderr);
        assert!(fixture.file_exists(OUTPUT));
    }
});

add_test!(legacy_single_dash_options, async {
    let (fixture, result) = compress_with(&["-lw", "22", "-lb", "16"]).await;
    assert!(result.status.success(), "{}", result.stderr);
    assert!(fixture.file_exists(OUTPUT));
});

add_test!(encoder_modes, async {
    for mode in ["generic", "text", "font"] {
        let (fixture, result) = compress_with(&["--mode", mode]).await;
        assert!(result.status.success(), "{mode}: {}", result.stderr);
        assert!(fixture.file_exists(OUTPUT));
    }

    let (fixture, result) = compress_with(&["--mode", "zip"]).await;
    assert!(!result.status.success());
    assert!(result.stderr.contains("Unknown encoder mode"), "{}", result.stderr);
    assert!(!fixture.file_exists(OUTPUT));
});
