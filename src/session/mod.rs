//! Live game state: lanes, the holding area, the session state machine,
//! and player skills.

pub mod holding;
pub mod lane;
pub mod session;
pub mod skills;

pub use holding::HoldingArea;
pub use lane::Lane;
pub use session::{ClickDelta, GameStatus, LaneCoord, Session};
