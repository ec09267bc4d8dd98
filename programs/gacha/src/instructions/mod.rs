pub mod close_session;
pub mod export_result;
pub mod initialize;
pub mod reset;
pub mod reveal_result;
pub mod start_draw;

pub use close_session::*;
pub use export_result::*;
pub use initialize::*;
pub use reset::*;
pub use reveal_result::*;
pub use start_draw::*;
