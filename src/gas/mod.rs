//! 압축가스 배관망 사이징 계산 모듈 모음.

pub mod drops;
pub mod friction;
pub mod header;
pub mod properties;
pub mod segment;
pub mod system;
pub mod tank;

pub use properties::{properties, GasKind, GasProperties};
pub use segment::*;
pub use system::*;
