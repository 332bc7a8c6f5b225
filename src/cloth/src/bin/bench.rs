use std::time::SystemTime;

use cloth::{Button, ClothConfig, ClothWorld, PointerState};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

// frames of scripted pointer input, then the same again idle
const FRAMES: usize = 600;

fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
		)
		.init();

	let config = ClothConfig::default();
	let mut world = match ClothWorld::new(config) {
		Ok(world) => world,
		Err(e) => {
			error!("bad config: {}", e);
			std::process::exit(1);
		}
	};
	let [cw, ch] = world.config().canvas;

	let start = SystemTime::now();
	let mut pointer = PointerState::at(cw * 0.2, ch * 0.5);
	pointer.press(Button::Drag);
	for frame in 0..FRAMES {
		// sweep left to right while dragging, then cut back along a lower line
		let t = frame as f32 / FRAMES as f32;
		if frame == FRAMES / 2 {
			pointer.release(Button::Drag);
			pointer.press(Button::Cut);
		}
		if frame < FRAMES / 2 {
			pointer.move_to(cw * (0.2 + 1.2 * t), ch * 0.5);
		} else {
			pointer.move_to(cw * (1.4 - 1.2 * t), ch * 0.6);
		}
		world.step(&pointer);
	}
	pointer.release(Button::Cut);
	for _ in 0..FRAMES {
		world.step(&pointer);
	}

	let duration = match SystemTime::now().duration_since(start) {
		Ok(d) => d.as_micros().max(1),
		Err(e) => {
			error!("clock went backwards: {}", e);
			return;
		}
	};
	let frames = 2 * FRAMES;
	let info = world.update_info();
	info!(
		"{} frames in {:.3}ms, {:.1} fps",
		frames,
		duration as f32 / 1e3,
		frames as f32 / duration as f32 * 1e6
	);
	info!("{} of {} sticks broken", info.broken_len, info.stick_len);
}
