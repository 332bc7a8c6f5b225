use crate::config::ClothConfig;
use protocol::pointer::PointerState;

#[derive(Debug, Clone, PartialEq)]
pub enum ControllerMessage {
	// regenerate with the current config
	Reset,
	Reconfigure(ClothConfig),
	Step(PointerState),
}
