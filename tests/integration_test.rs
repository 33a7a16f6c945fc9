use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Runs `spendly-icon-gen -o <dir>` at the default 1024 size and asserts
/// that both documented outputs exist, decode as PNG, and have the right
/// dimensions and corner alphas.
#[test]
fn test_default_generation_produces_both_variants() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("assets_icon");

    let output = Command::new(icon_gen_binary_path())
        .arg("-o")
        .arg(&output_dir)
        .output()
        .expect("Failed to run spendly-icon-gen");

    if !output.status.success() {
        eprintln!("stdout: {}", String::from_utf8_lossy(&output.stdout));
        eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        panic!("spendly-icon-gen command failed");
    }

    let icon_path = output_dir.join("icon.png");
    let foreground_path = output_dir.join("icon_foreground.png");
    assert!(icon_path.exists(), "icon.png should exist");
    assert!(foreground_path.exists(), "icon_foreground.png should exist");

    let icon = image::open(&icon_path).expect("icon.png should be a valid PNG");
    assert_eq!(icon.width(), 1024);
    assert_eq!(icon.height(), 1024);

    let foreground =
        image::open(&foreground_path).expect("icon_foreground.png should be a valid PNG");
    assert_eq!(foreground.width(), 1024);
    assert_eq!(foreground.height(), 1024);

    // Opaque variant: fully opaque corners. Foreground variant: fully
    // transparent corners (no background layers are painted).
    let icon = icon.to_rgba8();
    let foreground = foreground.to_rgba8();
    for (x, y) in [(0, 0), (1023, 0), (0, 1023), (1023, 1023)] {
        assert_eq!(
            icon.get_pixel(x, y)[3],
            255,
            "icon.png corner ({x},{y}) should be opaque"
        );
        assert_eq!(
            foreground.get_pixel(x, y)[3],
            0,
            "icon_foreground.png corner ({x},{y}) should be transparent"
        );
    }
}

/// `--foreground-only` must skip icon.png entirely.
#[test]
fn test_foreground_only_flag() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("out");

    let output = Command::new(icon_gen_binary_path())
        .arg("--foreground-only")
        .arg("--size")
        .arg("256")
        .arg("-o")
        .arg(&output_dir)
        .output()
        .expect("Failed to run spendly-icon-gen");
    assert!(output.status.success(), "command should succeed");

    assert!(
        output_dir.join("icon_foreground.png").exists(),
        "icon_foreground.png should exist"
    );
    assert!(
        !output_dir.join("icon.png").exists(),
        "icon.png should not be generated with --foreground-only"
    );
}

/// A palette override changes the rendered colors and is accepted in plain
/// CSS notation.
#[test]
fn test_palette_override() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let palette_path = temp_dir.path().join("palette.json");
    std::fs::write(
        &palette_path,
        r##"{
            "primary": "#FF0000",
            "secondary": "#00FF00",
            "background": "#FFFFFF",
            "surface": "#EEEEEE"
        }"##,
    )
    .expect("Failed to write palette file");

    let output_dir = temp_dir.path().join("out");
    let output = Command::new(icon_gen_binary_path())
        .arg("--palette")
        .arg(&palette_path)
        .arg("--icon-only")
        .arg("--size")
        .arg("128")
        .arg("-o")
        .arg(&output_dir)
        .output()
        .expect("Failed to run spendly-icon-gen");
    assert!(output.status.success(), "command should succeed");

    let icon = image::open(output_dir.join("icon.png"))
        .expect("icon.png should decode")
        .to_rgba8();
    // Corners are pure background, which the override set to white.
    let corner = icon.get_pixel(0, 0);
    assert_eq!(corner[0], 255);
    assert_eq!(corner[1], 255);
    assert_eq!(corner[2], 255);
}

/// A malformed palette file must fail the process with a nonzero exit.
#[test]
fn test_invalid_palette_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let palette_path = temp_dir.path().join("broken.json");
    std::fs::write(&palette_path, "{ not json").expect("Failed to write palette file");

    let output = Command::new(icon_gen_binary_path())
        .arg("--palette")
        .arg(&palette_path)
        .arg("-o")
        .arg(temp_dir.path().join("out"))
        .output()
        .expect("Failed to run spendly-icon-gen");
    assert!(
        !output.status.success(),
        "command should fail on a malformed palette file"
    );
}

/// Re-running with identical inputs must produce byte-identical files.
#[test]
fn test_repeated_runs_are_deterministic() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let first = temp_dir.path().join("first");
    let second = temp_dir.path().join("second");

    for dir in [&first, &second] {
        let output = Command::new(icon_gen_binary_path())
            .arg("--size")
            .arg("256")
            .arg("-o")
            .arg(dir)
            .output()
            .expect("Failed to run spendly-icon-gen");
        assert!(output.status.success(), "command should succeed");
    }

    for name in ["icon.png", "icon_foreground.png"] {
        let a = std::fs::read(first.join(name)).expect("Failed to read first output");
        let b = std::fs::read(second.join(name)).expect("Failed to read second output");
        assert_eq!(a, b, "{name} should be byte-identical across runs");
    }
}

fn icon_gen_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_spendly-icon-gen"))
}
