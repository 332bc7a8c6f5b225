use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::point::Point;
use crate::stick::Stick;

// a Vec may hold at most isize::MAX bytes
fn fits_in_memory<T>(len: usize) -> bool {
	len.checked_mul(std::mem::size_of::<T>())
		.map_or(false, |bytes| bytes <= isize::MAX as usize)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SolverKind {
	// in-place sweep over sticks, each correction sees the previous ones
	#[default]
	Sequential,
	// all corrections read the same positions, then are applied together
	Jacobi,
}

/// Everything a cloth world needs to regenerate itself.
///
/// Distances are in canvas pixels, velocities in pixels per frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClothConfig {
	pub canvas: [f32; 2],
	pub grid: [usize; 2],
	pub spacing: f32,
	pub tear_distance: f32,
	pub iteration: usize,
	pub gravity: f32,
	pub drag: f32,
	pub bounce: f32,
	pub drag_radius: f32,
	pub cut_radius: f32,
	pub explode_radius: f32,
	pub solver: SolverKind,
}

impl Default for ClothConfig {
	fn default() -> Self {
		Self {
			canvas: [800.0, 600.0],
			grid: [60, 40],
			spacing: 8.0,
			tear_distance: 32.0,
			iteration: 4,
			gravity: 0.07,
			drag: 1.0,
			bounce: 0.3,
			drag_radius: 30.0,
			cut_radius: 3.5,
			explode_radius: 25.0,
			solver: SolverKind::Sequential,
		}
	}
}

impl ClothConfig {
	pub fn with_canvas(mut self, width: f32, height: f32) -> Self {
		self.canvas = [width, height];
		self
	}

	pub fn with_grid(mut self, width: usize, height: usize) -> Self {
		self.grid = [width, height];
		self
	}

	pub fn with_spacing(mut self, spacing: f32) -> Self {
		self.spacing = spacing;
		self
	}

	pub fn with_tear_distance(mut self, tear_distance: f32) -> Self {
		self.tear_distance = tear_distance;
		self
	}

	pub fn with_iteration(mut self, iteration: usize) -> Self {
		self.iteration = iteration;
		self
	}

	pub fn with_gravity(mut self, gravity: f32) -> Self {
		self.gravity = gravity;
		self
	}

	pub fn with_drag(mut self, drag: f32) -> Self {
		self.drag = drag;
		self
	}

	pub fn with_bounce(mut self, bounce: f32) -> Self {
		self.bounce = bounce;
		self
	}

	pub fn with_radii(mut self, drag: f32, cut: f32, explode: f32) -> Self {
		self.drag_radius = drag;
		self.cut_radius = cut;
		self.explode_radius = explode;
		self
	}

	pub fn with_solver(mut self, solver: SolverKind) -> Self {
		self.solver = solver;
		self
	}

	// None when the count overflows usize
	pub fn point_len(&self) -> Option<usize> {
		self.grid[0].checked_mul(self.grid[1])
	}

	pub fn stick_len(&self) -> Option<usize> {
		let [w, h] = self.grid;
		self.point_len()?.checked_mul(2)?.checked_sub(w)?.checked_sub(h)
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		let [w, h] = self.grid;
		if w == 0 || h == 0 {
			return Err(ConfigError::EmptyGrid(w, h));
		}
		let fits = match (self.point_len(), self.stick_len()) {
			(Some(points), Some(sticks)) => {
				fits_in_memory::<Point>(points) && fits_in_memory::<Stick>(sticks)
			}
			_ => false,
		};
		if !fits {
			return Err(ConfigError::GridTooLarge(w, h));
		}
		let [cw, ch] = self.canvas;
		if !(cw.is_finite() && ch.is_finite() && cw > 0.0 && ch > 0.0) {
			return Err(ConfigError::BadCanvas(cw, ch));
		}
		if !(self.spacing.is_finite() && self.spacing > 0.0) {
			return Err(ConfigError::BadSpacing(self.spacing));
		}
		if self.tear_distance.is_nan() || self.tear_distance <= 0.0 {
			return Err(ConfigError::BadTearDistance(self.tear_distance));
		}
		if self.iteration == 0 {
			return Err(ConfigError::NoIterations);
		}
		if !self.gravity.is_finite() {
			return Err(ConfigError::NotFinite {
				name: "gravity",
				value: self.gravity,
			});
		}
		for (name, value) in [("drag", self.drag), ("bounce", self.bounce)] {
			if !(0.0..=1.0).contains(&value) {
				return Err(ConfigError::OutOfUnitRange { name, value });
			}
		}
		for (name, value) in [
			("drag radius", self.drag_radius),
			("cut radius", self.cut_radius),
			("explode radius", self.explode_radius),
		] {
			if !value.is_finite() {
				return Err(ConfigError::NotFinite { name, value });
			}
			if value < 0.0 {
				return Err(ConfigError::NegativeRadius { name, value });
			}
		}
		Ok(())
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_default_is_valid() {
		let config = ClothConfig::default();
		assert_eq!(config.validate(), Ok(()));
		assert_eq!(config.point_len(), Some(2400));
		assert_eq!(config.stick_len(), Some(2 * 2400 - 60 - 40));
	}

	#[test]
	fn test_rejects_grid_beyond_memory() {
		// the counts fit in usize on 64-bit targets, the bytes do not
		let config = ClothConfig::default().with_grid(1 << 31, 1 << 31);
		assert_eq!(
			config.validate(),
			Err(ConfigError::GridTooLarge(1 << 31, 1 << 31))
		);
		let config = ClothConfig::default().with_grid(usize::MAX, 3);
		assert_eq!(config.point_len(), None);
		assert_eq!(
			config.validate(),
			Err(ConfigError::GridTooLarge(usize::MAX, 3))
		);
	}

	#[test]
	fn test_rejects_empty_grid() {
		let config = ClothConfig::default().with_grid(0, 4);
		assert_eq!(config.validate(), Err(ConfigError::EmptyGrid(0, 4)));
	}

	#[test]
	fn test_rejects_bad_spacing() {
		for spacing in [0.0, -1.0, f32::NAN, f32::INFINITY] {
			let config = ClothConfig::default().with_spacing(spacing);
			assert!(matches!(config.validate(), Err(ConfigError::BadSpacing(_))));
		}
	}

	#[test]
	fn test_rejects_coefficients() {
		let config = ClothConfig::default().with_drag(1.5);
		assert!(matches!(
			config.validate(),
			Err(ConfigError::OutOfUnitRange { name: "drag", .. })
		));
		let config = ClothConfig::default().with_bounce(f32::NAN);
		assert!(matches!(
			config.validate(),
			Err(ConfigError::OutOfUnitRange { name: "bounce", .. })
		));
		let config = ClothConfig::default().with_gravity(f32::INFINITY);
		assert!(matches!(config.validate(), Err(ConfigError::NotFinite { .. })));
	}

	#[test]
	fn test_rejects_radii() {
		let config = ClothConfig::default().with_radii(30.0, -1.0, 25.0);
		assert!(matches!(
			config.validate(),
			Err(ConfigError::NegativeRadius { name: "cut radius", .. })
		));
		let config = ClothConfig::default().with_radii(f32::NAN, 1.0, 25.0);
		assert!(matches!(config.validate(), Err(ConfigError::NotFinite { .. })));
	}

	#[test]
	fn test_rejects_zero_iteration() {
		let config = ClothConfig::default().with_iteration(0);
		assert_eq!(config.validate(), Err(ConfigError::NoIterations));
	}

	#[test]
	fn test_tear_distance_may_be_infinite() {
		let config = ClothConfig::default().with_tear_distance(f32::INFINITY);
		assert_eq!(config.validate(), Ok(()));
		let config = ClothConfig::default().with_tear_distance(f32::NAN);
		assert!(config.validate().is_err());
	}
}
