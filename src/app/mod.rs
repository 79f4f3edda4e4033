//! App layer - the two screens and the session that sequences them
//!
//! Screens are pure state plus an update function; the session owns the
//! active screen and the version checker.

pub mod hostname;
pub mod menu;
pub mod session;

pub use hostname::HostnameEntry;
pub use menu::ActionMenu;
pub use session::{Screen, Session};
