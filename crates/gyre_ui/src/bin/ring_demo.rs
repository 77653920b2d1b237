//! # Ring Sweep Demo
//!
//! Drives the full chart pipeline headless on a virtual 60fps clock:
//! 1. Load `gyre.toml` if present (defaults otherwise)
//! 2. Feed a value series with a visible unfilled remainder
//! 3. Tick the sweep to completion, one frame at a time
//! 4. Summarize the final frame's command list
//!
//! Run with: `RUST_LOG=debug cargo run --bin ring_demo`

use std::path::Path;

use gyre_ui::{RenderCommand, RenderQueue, RingConfig, StatsRing};

/// Virtual frame delta (60fps).
const FRAME_DT: f32 = 1.0 / 60.0;

/// Where the demo looks for a config file.
const CONFIG_PATH: &str = "gyre.toml";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║                  GYRE - RING SWEEP DEMO                          ║");
    println!("║         One 5-second sweep, headless, virtual clock              ║");
    println!("╠══════════════════════════════════════════════════════════════════╣");
    println!("║  Series: [500, 500, 500] with an unfilled remainder of 500       ║");
    println!("║  Expect: three quarter slices, one divider slice, 75.00% label   ║");
    println!("╚══════════════════════════════════════════════════════════════════╝");

    let config = if Path::new(CONFIG_PATH).exists() {
        match RingConfig::load(CONFIG_PATH) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("config rejected: {error}");
                std::process::exit(1);
            }
        }
    } else {
        RingConfig::default()
    };

    let mut ring = StatsRing::new(config);
    ring.resize(400.0, 400.0);
    ring.set_unfilled(500.0, true);
    ring.set_data(&[500.0, 500.0, 500.0]);

    let geometry = ring.geometry();
    println!(
        "  ring: radius {:.1} centered at ({:.1}, {:.1})",
        geometry.radius, geometry.center.x, geometry.center.y
    );

    let mut queue = RenderQueue::new();
    let mut frames: u32 = 0;

    while ring.is_animating() {
        ring.update(FRAME_DT);
        frames += 1;

        if ring.take_redraw() {
            let mut commands = Vec::new();
            ring.render(&mut commands);
            queue.begin_frame();
            queue.extend(commands);
        }

        if frames % 60 == 0 {
            println!(
                "  t={:>4.1}s  progress {:>5.1}%  commands/frame {}",
                frames as f32 * FRAME_DT,
                ring.progress() * 100.0,
                queue.len()
            );
        }
    }

    let mut final_frame = Vec::new();
    ring.render(&mut final_frame);
    queue.begin_frame();
    queue.extend(final_frame);

    let label = queue.commands().iter().find_map(|command| match command {
        RenderCommand::Text { text, .. } => Some(text.clone()),
        RenderCommand::Arc { .. } => None,
    });

    println!("  ────────────────────────────────────────");
    println!("  sweep landed after {frames} frames");
    println!("  final frame: {} commands", queue.len());
    println!("  center label: {}", label.as_deref().unwrap_or("--"));

    std::process::exit(0);
}
