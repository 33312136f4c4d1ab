pub mod entry;
pub mod page;
pub mod record;
pub mod view_state;

pub use entry::*;
pub use page::*;
pub use record::*;
pub use view_state::*;
