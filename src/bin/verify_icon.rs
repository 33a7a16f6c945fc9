use image::io::Reader as ImageReader;

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "assets/icon/icon.png".to_string());

    let img = ImageReader::open(&path)
        .expect("Failed to open image")
        .decode()
        .expect("Failed to decode image");

    let rgba_img = img.to_rgba8();
    let width = img.width();
    let height = img.height();

    println!("Checking icon: {}", path);
    println!("Image dimensions: {}x{}", width, height);

    // Corner alphas tell the variants apart: 255 everywhere for icon.png,
    // 0 everywhere for icon_foreground.png.
    println!("\nCorner alphas:");
    for (name, x, y) in [
        ("top-left", 0, 0),
        ("top-right", width - 1, 0),
        ("bottom-left", 0, height - 1),
        ("bottom-right", width - 1, height - 1),
    ] {
        let p = rgba_img.get_pixel(x, y);
        println!("  {name}: alpha={}", p[3]);
    }

    // The coin sits up-right of center; sample a small grid there and count
    // cyan-dominant pixels (blue and green well above red).
    let coin_x = width / 2 + width * 180 / 1024;
    let coin_y = height / 2 - height * 190 / 1024;
    let mut cyan_dominant = 0;
    let samples = 9;
    let step = (width / 64).max(1);
    for i in 0..3 {
        for j in 0..3 {
            let x = (coin_x + i * step).saturating_sub(step).min(width - 1);
            let y = (coin_y + j * step).saturating_sub(step).min(height - 1);
            let p = rgba_img.get_pixel(x, y);
            if p[2] > 150 && p[1] > 100 && p[2] > p[0] {
                cyan_dominant += 1;
            }
        }
    }

    println!("\nCoin analysis:");
    println!("  {} out of {} samples are cyan-dominant", cyan_dominant, samples);

    if cyan_dominant >= samples * 2 / 3 {
        println!("✓ Coin accent detected!");
    } else {
        println!("✗ Coin accent NOT detected");
        std::process::exit(1);
    }
}
