//! Repository layer: one zero-sized struct per table, associated async
//! functions taking the pool (or a transaction) explicitly.

pub mod item_list_repo;
pub mod item_repo;

pub use item_list_repo::ItemListRepo;
pub use item_repo::ItemRepo;
