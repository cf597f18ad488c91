pub mod entry;
pub mod lister;
pub mod ops;
pub mod path;

pub use entry::Entry;
pub use lister::list_dir;
