pub mod pointer;
pub mod pr_model;

use pr_model::PrModel;

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("message codec failed: {0}")]
	Codec(#[from] bincode::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Message {
	WorldUpdate(PrModel),
	Nop,
}

impl Message {
	pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
		Ok(bincode::serialize(&self)?)
	}

	pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
		Ok(bincode::deserialize(bytes)?)
	}
}
