pub mod layout;
pub mod sidebar;
pub mod transition;

pub use layout::{ShellFrame, ShellLayout};
pub use sidebar::{SidebarItem, SidebarVariant};
pub use transition::{ShellEvent, TransitionPhase, TransitionSequencer};
