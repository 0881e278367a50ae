pub mod numeric;
pub mod quantity;
pub mod timer;

pub use numeric::{amount_filter, numeric_filter};
pub use quantity::scale_filter;
pub use timer::countdown_filter;
