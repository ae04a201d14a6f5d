pub mod category;
pub mod entry;
pub mod preferences;
pub mod rating;
pub mod view_state;

pub use category::*;
pub use entry::*;
pub use preferences::*;
pub use rating::*;
pub use view_state::*;
