use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Button {
	// primary
	Drag,
	// secondary
	Cut,
	// tertiary
	Explode,
}

impl Button {
	fn idx(self) -> usize {
		match self {
			Button::Drag => 0,
			Button::Cut => 1,
			Button::Explode => 2,
		}
	}
}

/// Cursor and button snapshot handed to one simulation step.
///
/// A front end feeds window events in through `move_to`, `press` and
/// `release` between steps; the simulation only reads it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerState {
	pub pos: [f32; 2],
	pub ppos: [f32; 2],
	pub buttons: [bool; 3],
}

impl PointerState {
	pub fn at(x: f32, y: f32) -> Self {
		Self {
			pos: [x, y],
			ppos: [x, y],
			buttons: [false; 3],
		}
	}

	pub fn with_button(mut self, button: Button) -> Self {
		self.buttons[button.idx()] = true;
		self
	}

	pub fn move_to(&mut self, x: f32, y: f32) {
		self.ppos = self.pos;
		self.pos = [x, y];
	}

	pub fn press(&mut self, button: Button) {
		self.buttons[button.idx()] = true;
		// a fresh drag must not inherit motion made while the button was up
		if button == Button::Drag {
			self.ppos = self.pos;
		}
	}

	pub fn release(&mut self, button: Button) {
		self.buttons[button.idx()] = false;
	}

	pub fn is_down(&self, button: Button) -> bool {
		self.buttons[button.idx()]
	}

	pub fn displacement(&self) -> [f32; 2] {
		[self.pos[0] - self.ppos[0], self.pos[1] - self.ppos[1]]
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_move_shifts_previous() {
		let mut ps = PointerState::at(10.0, 20.0);
		ps.move_to(13.0, 24.0);
		assert_eq!(ps.ppos, [10.0, 20.0]);
		assert_eq!(ps.pos, [13.0, 24.0]);
		assert_eq!(ps.displacement(), [3.0, 4.0]);
	}

	#[test]
	fn test_press_drag_resets_displacement() {
		let mut ps = PointerState::at(0.0, 0.0);
		ps.move_to(50.0, 50.0);
		ps.press(Button::Drag);
		assert!(ps.is_down(Button::Drag));
		assert_eq!(ps.displacement(), [0.0, 0.0]);
	}

	#[test]
	fn test_buttons_independent() {
		let mut ps = PointerState::default();
		ps.press(Button::Cut);
		ps.press(Button::Explode);
		assert!(!ps.is_down(Button::Drag));
		assert!(ps.is_down(Button::Cut));
		ps.release(Button::Cut);
		assert!(!ps.is_down(Button::Cut));
		assert!(ps.is_down(Button::Explode));
	}

	#[test]
	fn test_press_cut_keeps_motion() {
		let mut ps = PointerState::at(0.0, 0.0);
		ps.move_to(2.0, 0.0);
		ps.press(Button::Cut);
		assert_eq!(ps.displacement(), [2.0, 0.0]);
	}
}
