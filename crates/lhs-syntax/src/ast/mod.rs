pub mod filter;
pub mod operator;
pub mod params;
pub mod sort;

pub use filter::Filter;
pub use operator::Operator;
pub use params::SearchParams;
pub use sort::{Sort, SortDirection};
