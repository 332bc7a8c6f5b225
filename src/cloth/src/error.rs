use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
	#[error("grid must be at least 1x1, got {0}x{1}")]
	EmptyGrid(usize, usize),
	#[error("grid {0}x{1} does not fit in memory")]
	GridTooLarge(usize, usize),
	#[error("canvas must be positive and finite, got {0}x{1}")]
	BadCanvas(f32, f32),
	#[error("rest spacing must be positive and finite, got {0}")]
	BadSpacing(f32),
	#[error("tear distance must be positive, got {0}")]
	BadTearDistance(f32),
	#[error("iteration count must be at least 1")]
	NoIterations,
	#[error("{name} must be finite, got {value}")]
	NotFinite { name: &'static str, value: f32 },
	#[error("{name} must be within [0, 1], got {value}")]
	OutOfUnitRange { name: &'static str, value: f32 },
	#[error("{name} must not be negative, got {value}")]
	NegativeRadius { name: &'static str, value: f32 },
}
