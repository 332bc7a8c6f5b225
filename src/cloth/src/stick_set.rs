use std::collections::TryReserveError;

use rayon::prelude::*;

use crate::config::{ClothConfig, SolverKind};
use crate::point::Point;
use crate::stick::{Break, Stick};
use crate::V2;
use protocol::pointer::PointerState;
use protocol::pr_model::PrStick;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BreakCount {
	pub cut: usize,
	pub torn: usize,
}

impl BreakCount {
	fn add(&mut self, event: Option<Break>) {
		match event {
			Some(Break::Cut) => self.cut += 1,
			Some(Break::Torn) => self.torn += 1,
			None => {}
		}
	}

	pub fn total(&self) -> usize {
		self.cut + self.torn
	}
}

impl std::ops::AddAssign for BreakCount {
	fn add_assign(&mut self, rhs: Self) {
		self.cut += rhs.cut;
		self.torn += rhs.torn;
	}
}

// Slots are never removed, a broken stick keeps its index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StickSet {
	data: Vec<Stick>,
}

impl StickSet {
	pub fn try_with_capacity(len: usize) -> Result<Self, TryReserveError> {
		let mut data = Vec::new();
		data.try_reserve_exact(len)?;
		Ok(Self { data })
	}

	pub(crate) fn push(&mut self, stick: Stick) -> usize {
		self.data.push(stick);
		self.data.len() - 1
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Stick> {
		self.data.iter()
	}

	pub fn iter_unbroken(&self) -> impl Iterator<Item = (usize, &Stick)> {
		self.data.iter().enumerate().filter(|(_, s)| !s.is_broken())
	}

	pub fn broken_count(&self) -> usize {
		self.data.iter().filter(|s| s.is_broken()).count()
	}

	/// Run one relaxation pass over every stick.
	pub fn solve(
		&mut self,
		points: &mut [Point],
		pointer: &PointerState,
		config: &ClothConfig,
	) -> BreakCount {
		match config.solver {
			SolverKind::Sequential => self.solve_sequential(points, pointer, config),
			SolverKind::Jacobi => self.solve_jacobi(points, pointer, config),
		}
	}

	fn solve_sequential(
		&mut self,
		points: &mut [Point],
		pointer: &PointerState,
		config: &ClothConfig,
	) -> BreakCount {
		let mut count = BreakCount::default();
		for stick in self.data.iter_mut() {
			count.add(stick.step(points, pointer, config));
		}
		count
	}

	// Every stick reads the same positions, then the per-point sums are
	// applied averaged over the sticks that touched the point. Without the
	// average a point shared by four sticks overshoots.
	fn solve_jacobi(
		&mut self,
		points: &mut [Point],
		pointer: &PointerState,
		config: &ClothConfig,
	) -> BreakCount {
		let snapshot: &[Point] = points;
		let probes: Vec<_> = self
			.data
			.par_iter_mut()
			.map(|stick| {
				let (event, offset) = stick.probe(snapshot, pointer, config);
				(stick.p0, stick.p1, event, offset)
			})
			.collect();

		let mut count = BreakCount::default();
		let mut delta = vec![(V2::zeros(), 0u32); points.len()];
		for (p0, p1, event, offset) in probes {
			count.add(event);
			if let Some(offset) = offset {
				delta[p0].0 -= offset;
				delta[p0].1 += 1;
				delta[p1].0 += offset;
				delta[p1].1 += 1;
			}
		}
		for (p, (dp, n)) in points.iter_mut().zip(delta) {
			if n > 0 && !p.pinned {
				p.add_pos(dp / n as f32);
			}
		}
		count
	}

	pub fn pr_sticks(&self, points: &[Point]) -> Vec<PrStick> {
		self.iter_unbroken()
			.map(|(id, s)| s.render(id, points))
			.collect()
	}
}
