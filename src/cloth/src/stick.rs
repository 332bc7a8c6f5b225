use tracing::trace;

use crate::config::ClothConfig;
use crate::point::Point;
use crate::V2;
use protocol::pointer::{Button, PointerState};
use protocol::pr_model::PrStick;

// below this the direction of a stick is meaningless
const MIN_LENGTH: f32 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Break {
	Cut,
	Torn,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stick {
	pub p0: usize,
	pub p1: usize,
	l0: f32,
	broken: bool,
}

impl Stick {
	pub fn new(p0: usize, p1: usize, points: &[Point]) -> Self {
		let l0 = (points[p1].get_pos() - points[p0].get_pos()).magnitude();
		Self::new_with_l0(p0, p1, l0)
	}

	pub fn new_with_l0(p0: usize, p1: usize, l0: f32) -> Self {
		Self {
			p0,
			p1,
			l0,
			broken: false,
		}
	}

	pub fn rest_length(&self) -> f32 {
		self.l0
	}

	pub fn is_broken(&self) -> bool {
		self.broken
	}

	pub fn length(&self, points: &[Point]) -> f32 {
		(points[self.p1].get_pos() - points[self.p0].get_pos()).magnitude()
	}

	pub fn midpoint(&self, points: &[Point]) -> V2 {
		let pos0 = points[self.p0].get_pos();
		let pos1 = points[self.p1].get_pos();
		pos0 + (pos1 - pos0) * 0.5
	}

	/// Decide this pass's fate of the stick from the current positions.
	///
	/// Returns how it broke, if it did, and the offset to move `p1` by
	/// (`p0` moves by the negation). A stick torn by strain still reports
	/// its correction for this pass; a cut one does not.
	pub fn probe(
		&mut self,
		points: &[Point],
		pointer: &PointerState,
		config: &ClothConfig,
	) -> (Option<Break>, Option<V2>) {
		if self.broken {
			return (None, None);
		}
		if pointer.is_down(Button::Cut) {
			let dist = (self.midpoint(points) - V2::from(pointer.pos)).magnitude();
			if dist < config.cut_radius {
				self.broken = true;
				return (Some(Break::Cut), None);
			}
		}
		let dp = points[self.p1].get_pos() - points[self.p0].get_pos();
		let l = dp.magnitude();
		let event = if l > config.tear_distance {
			self.broken = true;
			Some(Break::Torn)
		} else {
			None
		};
		if l.is_nan() || l < MIN_LENGTH {
			trace!("skip degenerate stick {}-{}, length {}", self.p0, self.p1, l);
			return (event, None);
		}
		let percent = (self.l0 - l) / l * 0.5;
		(event, Some(dp * percent))
	}

	pub fn apply(&self, points: &mut [Point], offset: V2) {
		if !points[self.p0].pinned {
			points[self.p0].add_pos(-offset);
		}
		if !points[self.p1].pinned {
			points[self.p1].add_pos(offset);
		}
	}

	pub fn step(
		&mut self,
		points: &mut [Point],
		pointer: &PointerState,
		config: &ClothConfig,
	) -> Option<Break> {
		let (event, offset) = self.probe(points, pointer, config);
		if let Some(offset) = offset {
			self.apply(points, offset);
		}
		event
	}

	pub fn render(&self, id: usize, points: &[Point]) -> PrStick {
		PrStick {
			id,
			p0: points[self.p0].get_pos().into(),
			p1: points[self.p1].get_pos().into(),
		}
	}
}
