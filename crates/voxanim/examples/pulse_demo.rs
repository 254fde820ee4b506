//! Builds and plays back a synthetic pulsing sphere.
//!
//! Stands in for real volumetric captures (the usual input is a directory of
//! header-less `.raw` byte grids, decoded with `ScalarField::from_bytes`).
//! Run with: `RUST_LOG=info cargo run --example pulse_demo -p voxanim`

use voxanim::{
    BuildConfig, FrameSequence, Playback, PlaybackConfig, PlaybackState, Result, ScalarField,
};

const DIM: u32 = 32;
const FRAMES: usize = 16;
const TICK_RATE: u32 = 60;

/// A sphere whose radius pulses over the animation, with intensity falling
/// off toward the surface.
fn pulse_field(frame: usize) -> ScalarField {
    let t = frame as f32 / FRAMES as f32;
    let radius = DIM as f32 * (0.25 + 0.15 * (t * std::f32::consts::TAU).sin());
    let center = (DIM as f32 - 1.0) / 2.0;

    let mut values = Vec::with_capacity((DIM as usize).pow(3));
    for z in 0..DIM {
        for y in 0..DIM {
            for x in 0..DIM {
                let dx = x as f32 - center;
                let dy = y as f32 - center;
                let dz = z as f32 - center;
                let dist = (dx * dx + dy * dy + dz * dz).sqrt();
                let v = (1.0 - dist / radius).clamp(0.0, 1.0);
                // Quantize like a byte-decoded capture would be.
                values.push((v * 255.0).round() / 255.0);
            }
        }
    }
    ScalarField::from_values(DIM, values).expect("dimensions match by construction")
}

fn main() -> Result<()> {
    voxanim::init_logging();

    let fields: Vec<ScalarField> = (0..FRAMES).map(pulse_field).collect();
    let config = BuildConfig::default();
    let mut sequence = FrameSequence::build(&fields, &config)?;

    for (i, frame) in sequence.frames().iter().enumerate() {
        let mesh = frame.mesh();
        println!(
            "frame {:2}: {:7} vertices, {:7} triangles, {:3} submeshes",
            i,
            mesh.vertex_count(),
            mesh.triangle_count(),
            mesh.submeshes.len()
        );
    }

    // Sweep once through the animation, as a renderer's timer loop would.
    let mut playback = Playback::new(&PlaybackConfig { speed: 1.0 }, sequence.len(), TICK_RATE)?;
    playback.start(sequence.current());
    while playback.state() != PlaybackState::Finished {
        if let Some(index) = playback.tick() {
            sequence.select(index);
            println!("showing frame {}", sequence.current());
        }
    }

    Ok(())
}
