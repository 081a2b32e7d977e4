use std::path::PathBuf;

use dotboy_core::{GameBoy, SCREEN_HEIGHT, SCREEN_WIDTH};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let rom_path: PathBuf = args.next().map(PathBuf::from).unwrap_or_else(|| {
        eprintln!("Usage: frame_dump <rom_path> <out_rgba_path> [frames]");
        std::process::exit(2);
    });
    let out_path: PathBuf = args.next().map(PathBuf::from).unwrap_or_else(|| {
        eprintln!("Usage: frame_dump <rom_path> <out_rgba_path> [frames]");
        std::process::exit(2);
    });
    let frames: u32 = args
        .next()
        .unwrap_or_else(|| "60".to_string())
        .parse()
        .unwrap_or_else(|_| {
            eprintln!("Invalid frame count; expected an integer.");
            std::process::exit(2);
        });

    let rom = std::fs::read(&rom_path).unwrap_or_else(|err| {
        eprintln!("Failed to read ROM '{}': {err}", rom_path.display());
        std::process::exit(1);
    });

    let mut gb = GameBoy::new();
    if let Err(err) = gb.load_rom(rom) {
        eprintln!("Failed to load ROM '{}': {err}", rom_path.display());
        std::process::exit(1);
    }

    for frame in 0..frames {
        if let Err(err) = gb.run_frame() {
            eprintln!("Emulation stopped in frame {frame}: {err}");
            std::process::exit(1);
        }
        gb.clear_frame_ready();
    }

    std::fs::write(&out_path, gb.framebuffer()).unwrap_or_else(|err| {
        eprintln!("Failed to write '{}': {err}", out_path.display());
        std::process::exit(1);
    });

    println!(
        "Wrote {} bytes ({}x{} rgba) after {} frames to '{}'",
        gb.framebuffer().len(),
        SCREEN_WIDTH,
        SCREEN_HEIGHT,
        frames,
        out_path.display()
    );
}
