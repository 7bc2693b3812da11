pub mod channel;
pub mod constants;
pub mod permission;
pub mod pulse;
pub mod timer;
pub mod view;

pub use channel::*;
pub use permission::*;
pub use pulse::*;
pub use timer::Millis;
pub use view::*;
