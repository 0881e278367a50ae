pub mod servings;

pub use servings::{scale_for_servings, serving_ratio_function};
