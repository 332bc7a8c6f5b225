use tracing::{debug, error, info};

use crate::cloth_model::ClothModel;
use crate::config::ClothConfig;
use crate::controller_message::ControllerMessage;
use crate::error::ConfigError;
use crate::point_set::PointSet;
use crate::stick_set::{BreakCount, StickSet};
use crate::V2;
use protocol::pointer::PointerState;
use protocol::pr_model::{PrModel, UpdateInfo};

/// Owns the cloth and the config it was generated from.
///
/// Every `reset` or successful `reconfigure` replaces the point and stick
/// storage, so indices taken from an earlier generation are invalid.
pub struct ClothWorld {
	config: ClothConfig,
	points: PointSet,
	sticks: StickSet,
}

impl ClothWorld {
	pub fn new(config: ClothConfig) -> Result<Self, ConfigError> {
		config.validate()?;
		let ClothModel { points, sticks } = ClothModel::new_grid(&config)?;
		info!(
			"new cloth {}x{}: {} points, {} sticks",
			config.grid[0],
			config.grid[1],
			points.len(),
			sticks.len()
		);
		Ok(Self {
			config,
			points,
			sticks,
		})
	}

	pub fn reset(&mut self) {
		// config was validated on the way in, failure leaves the old cloth
		match ClothModel::new_grid(&self.config) {
			Ok(model) => {
				self.points = model.points;
				self.sticks = model.sticks;
				info!("cloth reset, {} sticks", self.sticks.len());
			}
			Err(e) => error!("cloth reset failed: {}", e),
		}
	}

	pub fn reconfigure(&mut self, config: ClothConfig) -> Result<(), ConfigError> {
		config.validate()?;
		let ClothModel { points, sticks } = ClothModel::new_grid(&config)?;
		info!(
			"cloth reconfigured to {}x{}, spacing {}",
			config.grid[0], config.grid[1], config.spacing
		);
		self.config = config;
		self.points = points;
		self.sticks = sticks;
		Ok(())
	}

	/// Advance one frame: relax the sticks `iteration` times, then move the
	/// points once. `pointer` is read as a single snapshot.
	pub fn step(&mut self, pointer: &PointerState) -> BreakCount {
		let mut count = BreakCount::default();
		for _ in 0..self.config.iteration {
			count += self.sticks.solve(
				self.points.as_mut_slice(),
				pointer,
				&self.config,
			);
		}
		self.points.update(pointer, &self.config);
		if count.total() > 0 {
			debug!("{} sticks cut, {} torn", count.cut, count.torn);
		}
		count
	}

	pub fn handle(&mut self, msg: ControllerMessage) -> Result<(), ConfigError> {
		match msg {
			ControllerMessage::Reset => self.reset(),
			ControllerMessage::Reconfigure(config) => self.reconfigure(config)?,
			ControllerMessage::Step(pointer) => {
				self.step(&pointer);
			}
		}
		Ok(())
	}

	pub fn config(&self) -> &ClothConfig {
		&self.config
	}

	pub fn points(&self) -> &PointSet {
		&self.points
	}

	pub fn sticks(&self) -> &StickSet {
		&self.sticks
	}

	/// Endpoints of every unbroken stick, in stick order.
	pub fn render_sticks(&self) -> impl Iterator<Item = (V2, V2)> + '_ {
		let points = self.points.as_slice();
		self.sticks
			.iter_unbroken()
			.map(move |(_, s)| (points[s.p0].get_pos(), points[s.p1].get_pos()))
	}

	pub fn pr_model(&self) -> PrModel {
		PrModel {
			points: self.points.pr_points(),
			sticks: self.sticks.pr_sticks(self.points.as_slice()),
		}
	}

	pub fn update_info(&self) -> UpdateInfo {
		UpdateInfo {
			point_len: self.points.len(),
			stick_len: self.sticks.len(),
			broken_len: self.sticks.broken_count(),
		}
	}
}
