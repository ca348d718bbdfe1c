//! Particle demo entry point
//!
//! Headless host loop: a 1280x720 "screen" with an emitter in the middle that
//! fires the demo burst once per second of simulated time.

fn main() {
    use glam::Vec2;
    use particle_emitter::consts::FRAME_DT;
    use particle_emitter::renderer::instance::write_instances;
    use particle_emitter::{Emitter, GenerationPreset, Settings, SpriteInstance, TextureInfo};

    env_logger::init();
    log::info!("Particle demo (native) starting...");

    const SCREEN: Vec2 = Vec2::new(1280.0, 720.0);
    const FRAMES: u32 = 300;
    const BURST_EVERY: u32 = 60;

    let settings = Settings::default();
    let texture = TextureInfo::new(1, 16, 16);
    let options = GenerationPreset::demo().bind(texture);

    let mut emitter = Emitter::from_settings(SCREEN * 0.5, &settings);
    log::info!("Emitter initialized with seed: {}", emitter.seed());

    let mut instances: Vec<SpriteInstance> = Vec::new();
    for frame in 0..FRAMES {
        emitter.update(FRAME_DT);

        if frame % BURST_EVERY == 0 {
            emitter.generate(&options);
        }

        write_instances(&emitter.draw(), &mut instances);

        if frame % 30 == 0 {
            log::info!(
                "Frame {:>3}: {} live, {} pending, {} instances",
                frame,
                emitter.len(),
                emitter.pending_additions(),
                instances.len()
            );
        }
    }

    println!(
        "Simulated {} frames, {} particles still live",
        FRAMES,
        emitter.len()
    );
}

