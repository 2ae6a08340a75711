pub mod constraints;
pub mod listing;

pub use constraints::{Bounds, Categorical, ConstraintSet, Range, SortDirection, Tab};
pub use listing::{Listing, TABLE_COLUMNS};
