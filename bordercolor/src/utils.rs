pub mod imgutils;
pub mod math;
pub mod percent;
