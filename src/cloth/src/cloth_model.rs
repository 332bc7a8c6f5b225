use crate::config::ClothConfig;
use crate::error::ConfigError;
use crate::point::Point;
use crate::point_set::PointSet;
use crate::stick::Stick;
use crate::stick_set::StickSet;
use crate::V2;

/// Freshly generated cloth, centered on the canvas with its top row pinned.
#[derive(Debug, Clone, PartialEq)]
pub struct ClothModel {
	pub points: PointSet,
	pub sticks: StickSet,
}

impl ClothModel {
	/// Build the grid described by `config`.
	///
	/// Sticks are emitted per point in row-major order, the one to the left
	/// neighbor first and then the one to the neighbor above, so a stick
	/// index is stable for a given grid size.
	pub fn new_grid(config: &ClothConfig) -> Result<Self, ConfigError> {
		let [w, h] = config.grid;
		let d = config.spacing;
		let mut points = PointSet::with_grid(config.grid)?;
		let extent = V2::new(w as f32 * d, h as f32 * d);
		let origin = (V2::from(config.canvas) - extent) * 0.5;
		for row in 0..h {
			for col in 0..w {
				let pos = origin + V2::new(col as f32 * d, row as f32 * d);
				points.push(Point::new(pos, row == 0));
			}
		}

		let too_large = || ConfigError::GridTooLarge(w, h);
		let stick_len = config.stick_len().ok_or_else(too_large)?;
		let mut sticks =
			StickSet::try_with_capacity(stick_len).map_err(|_| too_large())?;
		for row in 0..h {
			for col in 0..w {
				let idx = points.index(col, row);
				if col > 0 {
					let left = points.index(col - 1, row);
					sticks.push(Stick::new(left, idx, points.as_slice()));
				}
				if row > 0 {
					let up = points.index(col, row - 1);
					sticks.push(Stick::new(up, idx, points.as_slice()));
				}
			}
		}
		Ok(Self { points, sticks })
	}
}
