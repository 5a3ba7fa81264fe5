use image::io::Reader as ImageReader;

/// Manual checker for a generated icon set: reports dimensions for every
/// variant and whether the tinted one is actually grayscale.
fn main() {
    let dir = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "gymtrackpromax/Assets.xcassets/AppIcon.appiconset".to_string());

    println!("Checking icon set in: {}", dir);

    for filename in ["AppIcon.png", "AppIcon-Dark.png", "AppIcon-Tinted.png"] {
        let path = format!("{}/{}", dir, filename);
        let img = ImageReader::open(&path)
            .expect("Failed to open icon")
            .decode()
            .expect("Failed to decode icon");

        let ok = img.width() == 1024 && img.height() == 1024;
        println!(
            "{} {}: {}x{}",
            if ok { "✓" } else { "⚠" },
            filename,
            img.width(),
            img.height()
        );
    }

    // Sample the tinted variant for color casts.
    let tinted = ImageReader::open(format!("{}/AppIcon-Tinted.png", dir))
        .expect("Failed to open tinted icon")
        .decode()
        .expect("Failed to decode tinted icon")
        .to_rgb8();

    let mut worst_spread = 0u8;
    let samples = 64;
    for i in 0..samples {
        for j in 0..samples {
            let x = tinted.width() * i / samples + tinted.width() / (samples * 2);
            let y = tinted.height() * j / samples + tinted.height() / (samples * 2);
            let p = tinted.get_pixel(x, y);
            let lo = p.0.iter().min().unwrap();
            let hi = p.0.iter().max().unwrap();
            worst_spread = worst_spread.max(hi - lo);
        }
    }

    println!("\nTinted analysis:");
    println!("  worst channel spread over {} samples: {}", samples * samples, worst_spread);
    if worst_spread <= 2 {
        println!("✓ Tinted variant is grayscale");
    } else {
        println!("⚠ Tinted variant shows a color cast");
    }
}
