// pr_model: cloth state for rendering

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrPoint {
	pub pos: [f32; 2],
	pub pinned: bool,
}

// one line segment, id is the slot in the stick set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrStick {
	pub id: usize,
	pub p0: [f32; 2],
	pub p1: [f32; 2],
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrModel {
	pub points: Vec<PrPoint>,
	// unbroken sticks only, in stick order
	pub sticks: Vec<PrStick>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateInfo {
	pub point_len: usize,
	pub stick_len: usize,
	pub broken_len: usize,
}
