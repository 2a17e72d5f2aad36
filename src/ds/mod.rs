pub mod arena;
pub mod entry_list;

pub use arena::{Arena, EntryId};
pub use entry_list::EntryList;
