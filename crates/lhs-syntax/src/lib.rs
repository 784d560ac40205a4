//! Bracket-syntax codec for filter and sort query parameters.
//!
//! Filters are written `field[operator]=value` and sorts `sort[index]=field:direction`,
//! e.g. `?property_type[eq]=PARKING&deposit_amount[lte]=604.75&sort[0]=auction_value:asc`.

pub mod ast;
pub mod error;
pub mod parser;
pub mod serializer;

pub use ast::{Filter, Operator, SearchParams, Sort, SortDirection};
pub use error::SyntaxError;
pub use parser::parse;
pub use serializer::serialize;
