use crate::add_test;
use crate::common::{Fixture, SAMPLE_TEXT};
use crate::KB;

// Our plain stream -> system brotli -d.
add_test!(our_stream_to_system_brotli, async {
    let data = SAMPLE_TEXT.repeat(KB / SAMPLE_TEXT.len() + 1);
    let mut fixture = Fixture::with_file("test.txt", data.as_bytes());
    let input = fixture.path("test.txt");
    let compressed = fixture.path("test.txt.br");
    let restored = fixture.path("restored.txt");

    let output = fixture.run_cargo(&["-e", &input, "-o", &compressed]).await;
    assert!(output.status.success(), "our encoder failed: {}", output.stderr);

    let Some(system_out) = fixture
        .run_system("brotli", &["-d", &compressed, "-o", &restored])
        .await
    else {
        return;
    };
    assert!(
        system_out.status.success(),
        "system brotli -d failed: {}",
        system_out.stderr
    );
    fixture.assert_file("restored.txt", data.as_bytes());
});

// System brotli -> our decoder.
add_test!(system_brotli_to_our_decoder, async {
    let data = SAMPLE_TEXT.repeat(KB / SAMPLE_TEXT.len() + 1);
    let mut fixture = Fixture::with_file("test.txt", data.as_bytes());
    let input = fixture.path("test.txt");
    let compressed = fixture.path("test.txt.br");
    let restored = fixture.path("restored.txt");

    let Some(system_out) = fixture
        .run_system("brotli", &["-f", "-o", &compressed, &input])
        .await
    else {
        return;
    };
    assert!(system_out.status.success(), "system brotli failed: {}", system_out.stderr);

    let output = fixture.run_cargo(&["-d", &compressed, "-o", &restored]).await;
    assert!(output.status.success(), "our decoder failed: {}", output.stderr);
    fixture.assert_file("restored.txt", data.as_bytes());
});

// Strip our legacy header by hand and hand the body to system brotli.
add_test!(legacy_body_is_a_plain_stream, async {
    let data = b"AB".repeat(500);
    let mut fixture = Fixture::with_file("test.bin", &data);
    let input = fixture.path("test.bin");
    let compressed = fixture.path("test.bin.br");
    let restored = fixture.path("restored.bin");

    let output = fixture
        .run_cargo(&["-e", "-b", &input, "-o", &compressed])
        .await;
    assert!(output.status.success(), "our encoder failed: {}", output.stderr);

    let framed = fixture.read("test.bin.br");
    fixture.write("test.bin.br", &framed[16..]);

    let Some(system_out) = fixture
        .run_system("brotli", &["-d", &compressed, "-o", &restored])
        .await
    else {
        return;
    };
    assert!(
        system_out.status.success(),
        "system brotli -d failed: {}",
        system_out.stderr
    );
    fixture.assert_file("restored.bin", &data);
});
