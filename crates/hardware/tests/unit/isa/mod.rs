pub mod decode;
pub mod table;
