use std::path::Path;
use std::process::{Command, Output};

fn unpacker(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_image-unpacker"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to run image-unpacker")
}

fn write_packed(path: &Path, width: u16, height: u16, pixel: [f32; 3]) {
    let mut data = Vec::new();
    data.extend_from_slice(&width.to_le_bytes());
    data.extend_from_slice(&height.to_le_bytes());
    for _ in 0..(width as usize * height as usize) {
        for channel in pixel {
            data.extend_from_slice(&channel.to_le_bytes());
        }
    }
    std::fs::write(path, data).unwrap();
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_converts_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.bin");
    let output = dir.path().join("out.png");
    write_packed(&input, 4, 3, [1.0, 0.25, 0.0]);

    let result = unpacker(&["-i", path_str(&input), "-o", path_str(&output), "-gamma", "1.0"]);
    assert!(result.status.success(), "{}", String::from_utf8_lossy(&result.stderr));

    let decoder = png::Decoder::new(std::fs::File::open(&output).unwrap());
    let mut reader = decoder.read_info().unwrap();
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).unwrap();

    assert_eq!((info.width, info.height), (4, 3));
    assert_eq!(&buf[..4], &[255, 63, 0, 255]);
}

#[test]
fn test_missing_input_flag_exits_with_usage() {
    let result = unpacker(&["-o", "out.png"]);
    assert_eq!(result.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&result.stderr).contains("Usage"));
}

#[test]
fn test_non_png_output_exits_with_usage() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.bin");
    let output = dir.path().join("out.jpg");
    write_packed(&input, 1, 1, [0.5, 0.5, 0.5]);

    let result = unpacker(&["-i", path_str(&input), "-o", path_str(&output)]);
    assert_eq!(result.status.code(), Some(1));
    assert!(!output.exists());
}

#[test]
fn test_corrupt_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.bin");
    let output = dir.path().join("out.png");
    std::fs::write(&input, [0x02, 0x00, 0x01, 0x00, 0x00]).unwrap();

    let result = unpacker(&["-i", path_str(&input), "-o", path_str(&output)]);
    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("corrupted"));
    assert!(!output.exists());
}

#[test]
fn test_tiny_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.bin");
    let output = dir.path().join("out.png");
    std::fs::write(&input, [0x02, 0x00, 0x01]).unwrap();

    let result = unpacker(&["-i", path_str(&input), "-o", path_str(&output)]);
    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("too small"));
}

#[test]
fn test_missing_input_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.png");

    let result = unpacker(&["-i", path_str(&dir.path().join("nope.bin")), "-o", path_str(&output)]);
    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("Failed to read input file"));
}
