use crate::V2;

pub struct Posbox {
	pub xmin: f32,
	pub xmax: f32,
	pub ymin: f32,
	pub ymax: f32,
}

impl Posbox {
	pub fn from_canvas(canvas: [f32; 2]) -> Self {
		Self {
			xmin: 0.0,
			xmax: canvas[0],
			ymin: 0.0,
			ymax: canvas[1],
		}
	}

	fn clamp_axis(&self, axis: usize, x: f32) -> Option<f32> {
		let (min, max) = match axis {
			0 => (self.xmin, self.xmax),
			_ => (self.ymin, self.ymax),
		};
		if x > max {
			Some(max)
		} else if x < min {
			Some(min)
		} else {
			None
		}
	}

	/// Clamp `pos` into the box. On each clamped axis `ppos` is placed so
	/// the implied velocity is `v` reflected and scaled by `k`.
	///
	/// `v` must be the velocity the point moved with this frame, before
	/// clamping. Returns whether any axis was clamped.
	pub fn bounce(&self, pos: &mut V2, ppos: &mut V2, v: V2, k: f32) -> bool {
		let mut flag = false;
		for axis in 0..2 {
			if let Some(x) = self.clamp_axis(axis, pos[axis]) {
				pos[axis] = x;
				ppos[axis] = x + v[axis] * k;
				flag = true;
			}
		}
		flag
	}
}
