//! Service layer: point generation, batched fetching, and the
//! earliest-sunrise reduction.

pub mod fetcher;
pub mod points;
pub mod sunrise;

pub use fetcher::fetch_all_times;
pub use points::generate_points;
pub use sunrise::earliest_sunrise;
