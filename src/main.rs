//! Shape Field entry point
//!
//! Runs one configured field and writes each frame's primitives to stdout as
//! a JSON line. Usage: `shape-field [config.json]`

use std::io::{BufWriter, Write};

use anyhow::Context;
use serde::Serialize;

use shape_field::FieldConfig;
use shape_field::renderer::{FrameRenderer, MaskRenderer};
use shape_field::sim::{Field, Primitive};

/// One output line
#[derive(Serialize)]
struct FrameRecord<'a> {
    frame: u64,
    lit_pixels: usize,
    primitives: &'a [Primitive],
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            FieldConfig::load(&path).with_context(|| format!("reading config {path}"))?
        }
        None => {
            log::info!("No config given, using defaults");
            FieldConfig::default()
        }
    };

    log::info!(
        "Generating {} frames of {} {}s (seed {})",
        config.frame_count,
        config.shape_count,
        config.shape.as_str(),
        config.seed
    );

    let frame_count = config.frame_count;
    let mut renderer = MaskRenderer::new(config.width, config.height);
    let mut field = Field::from_config(config).context("building field")?;

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut primitives = Vec::new();
    let mut lit_total = 0usize;

    for _ in 0..frame_count {
        let frame = field.frame_index();
        field
            .step_into(&mut primitives)
            .with_context(|| format!("stepping frame {frame}"))?;
        let lit_pixels = renderer.render(&primitives).lit_pixels();
        lit_total += lit_pixels;

        let record = FrameRecord {
            frame,
            lit_pixels,
            primitives: &primitives,
        };
        serde_json::to_writer(&mut out, &record)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;

    log::info!(
        "Done: {} frames, {} respawns, mean coverage {:.1} px",
        field.frame_index(),
        field.respawn_count(),
        lit_total as f64 / frame_count.max(1) as f64
    );
    Ok(())
}
