pub mod complex;
pub mod finite;
pub mod float;
pub mod ratio;
