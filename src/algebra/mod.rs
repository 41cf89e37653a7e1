pub mod element;
pub mod field;
pub mod group;
pub mod law;
