use crate::config::ClothConfig;
use crate::posbox::Posbox;
use crate::V2;
use protocol::pointer::{Button, PointerState};
use protocol::pr_model::PrPoint;

#[derive(Debug, Clone, PartialEq)]
pub struct Point {
	pub pos: V2,
	// velocity is pos - ppos
	pub ppos: V2,
	pub pinned: bool,
	// meaningful only when pinned
	pub anchor: V2,
}

impl Point {
	pub fn new(pos: V2, pinned: bool) -> Self {
		Self {
			pos,
			ppos: pos,
			pinned,
			anchor: pos,
		}
	}

	pub fn get_pos(&self) -> V2 {
		self.pos
	}

	pub fn add_pos(&mut self, dp: V2) {
		self.pos += dp
	}

	// rewrite ppos so the next update sees the given pointer impulse
	fn interact(&mut self, pointer: &PointerState, config: &ClothConfig) {
		let drag = pointer.is_down(Button::Drag);
		let explode = pointer.is_down(Button::Explode);
		if !drag && !explode {
			return;
		}
		let d = self.pos - V2::from(pointer.pos);
		let dist = d.magnitude();
		if drag && dist < config.drag_radius {
			self.ppos = self.pos - V2::from(pointer.displacement()) * 0.5;
		}
		if explode && dist < config.explode_radius {
			self.ppos = self.pos - d * 2.0;
		}
	}

	pub fn update(
		&mut self,
		pointer: &PointerState,
		config: &ClothConfig,
		posbox: &Posbox,
	) {
		if self.pinned {
			self.pos = self.anchor;
			return;
		}
		self.interact(pointer, config);
		let v = (self.pos - self.ppos) * config.drag;
		self.ppos = self.pos;
		self.pos += v;
		self.pos[1] += config.gravity;
		posbox.bounce(&mut self.pos, &mut self.ppos, v, config.bounce);
	}

	pub fn render(&self) -> PrPoint {
		PrPoint {
			pos: self.pos.into(),
			pinned: self.pinned,
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn still() -> PointerState {
		PointerState::at(-1000.0, -1000.0)
	}

	fn config() -> ClothConfig {
		ClothConfig::default()
			.with_canvas(100.0, 100.0)
			.with_gravity(0.5)
	}

	fn posbox(config: &ClothConfig) -> Posbox {
		Posbox::from_canvas(config.canvas)
	}

	#[test]
	fn test_pinned_snaps_to_anchor() {
		let config = config();
		let mut p = Point::new(V2::new(10.0, 10.0), true);
		p.pos = V2::new(40.0, 3.0);
		let pointer = PointerState::at(40.0, 3.0).with_button(Button::Explode);
		p.update(&pointer, &config, &posbox(&config));
		assert_eq!(p.pos, V2::new(10.0, 10.0));
	}

	#[test]
	fn test_gravity_shows_up_next_frame() {
		let config = config();
		let mut p = Point::new(V2::new(50.0, 10.0), false);
		p.update(&still(), &config, &posbox(&config));
		assert_eq!(p.pos, V2::new(50.0, 10.5));
		assert_eq!(p.ppos, V2::new(50.0, 10.0));
		p.update(&still(), &config, &posbox(&config));
		// 10.5 + 0.5 velocity + 0.5 gravity
		assert!((p.pos[1] - 11.5).abs() < 1e-5);
	}

	#[test]
	fn test_drag_coefficient_damps() {
		let config = config().with_gravity(0.0).with_drag(0.5);
		let mut p = Point::new(V2::new(50.0, 50.0), false);
		p.ppos = V2::new(46.0, 50.0);
		p.update(&still(), &config, &posbox(&config));
		assert_eq!(p.pos, V2::new(52.0, 50.0));
		assert_eq!(p.pos - p.ppos, V2::new(2.0, 0.0));
	}

	#[test]
	fn test_drag_follows_cursor_at_half_speed() {
		let config = config().with_gravity(0.0);
		let mut p = Point::new(V2::new(50.0, 50.0), false);
		let mut pointer = PointerState::at(52.0, 50.0);
		pointer.press(Button::Drag);
		pointer.move_to(56.0, 52.0);
		p.update(&pointer, &config, &posbox(&config));
		assert_eq!(p.pos, V2::new(52.0, 51.0));
	}

	#[test]
	fn test_drag_ignores_far_points() {
		let config = config().with_gravity(0.0);
		let mut p = Point::new(V2::new(10.0, 10.0), false);
		let mut pointer = PointerState::at(80.0, 80.0);
		pointer.press(Button::Drag);
		pointer.move_to(90.0, 90.0);
		p.update(&pointer, &config, &posbox(&config));
		assert_eq!(p.pos, V2::new(10.0, 10.0));
	}

	#[test]
	fn test_explode_pushes_outward() {
		let config = config().with_gravity(0.0);
		let mut p = Point::new(V2::new(50.0, 50.0), false);
		let pointer = PointerState::at(45.0, 50.0).with_button(Button::Explode);
		p.update(&pointer, &config, &posbox(&config));
		// offset 5 doubled
		assert_eq!(p.pos, V2::new(60.0, 50.0));
	}

	#[test]
	fn test_floor_bounce_reverses() {
		let config = config().with_gravity(0.0).with_bounce(0.3);
		let mut p = Point::new(V2::new(50.0, 98.0), false);
		p.ppos = V2::new(50.0, 94.0);
		p.update(&still(), &config, &posbox(&config));
		assert_eq!(p.pos[1], 100.0);
		let v = p.pos - p.ppos;
		assert!(v[1] < 0.0);
		assert!((v[1] + 4.0 * 0.3).abs() < 1e-5);
	}
}
