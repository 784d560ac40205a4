pub mod data_type;
pub mod table;
pub mod value;
