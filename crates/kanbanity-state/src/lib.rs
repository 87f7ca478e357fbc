pub mod board_store;
pub mod projection;

pub use board_store::BoardStore;
pub use projection::ProjectionCache;
