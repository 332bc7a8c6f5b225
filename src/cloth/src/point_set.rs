use crate::config::ClothConfig;
use crate::error::ConfigError;
use crate::point::Point;
use crate::posbox::Posbox;
use protocol::pointer::PointerState;
use protocol::pr_model::PrPoint;

/// Dense row-major grid of points, index `row * width + col`.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
	width: usize,
	height: usize,
	data: Vec<Point>,
}

impl PointSet {
	pub fn with_grid(grid: [usize; 2]) -> Result<Self, ConfigError> {
		let [width, height] = grid;
		if width == 0 || height == 0 {
			return Err(ConfigError::EmptyGrid(width, height));
		}
		let too_large = ConfigError::GridTooLarge(width, height);
		let len = width.checked_mul(height).ok_or(too_large.clone())?;
		let mut data = Vec::new();
		data.try_reserve_exact(len).map_err(|_| too_large)?;
		Ok(Self {
			width,
			height,
			data,
		})
	}

	pub(crate) fn push(&mut self, p: Point) -> usize {
		debug_assert!(self.data.len() < self.width * self.height);
		self.data.push(p);
		self.data.len() - 1
	}

	pub fn index(&self, col: usize, row: usize) -> usize {
		debug_assert!(
			col < self.width && row < self.height,
			"({}, {}) outside {}x{} grid",
			col,
			row,
			self.width,
			self.height
		);
		row * self.width + col
	}

	pub fn width(&self) -> usize {
		self.width
	}

	pub fn height(&self) -> usize {
		self.height
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn get(&self, col: usize, row: usize) -> &Point {
		&self.data[self.index(col, row)]
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Point> {
		self.data.iter()
	}

	pub fn as_slice(&self) -> &[Point] {
		&self.data
	}

	pub(crate) fn as_mut_slice(&mut self) -> &mut [Point] {
		&mut self.data
	}

	pub fn update(&mut self, pointer: &PointerState, config: &ClothConfig) {
		let posbox = Posbox::from_canvas(config.canvas);
		for p in self.data.iter_mut() {
			p.update(pointer, config, &posbox);
		}
	}

	pub fn pr_points(&self) -> Vec<PrPoint> {
		self.data.iter().map(|p| p.render()).collect()
	}
}

impl std::ops::Index<usize> for PointSet {
	type Output = Point;
	fn index(&self, idx: usize) -> &Self::Output {
		&self.data[idx]
	}
}

impl std::ops::IndexMut<usize> for PointSet {
	fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
		&mut self.data[idx]
	}
}
