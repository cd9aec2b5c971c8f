pub mod babylonian;
pub mod bit_math;
pub mod fixed_point;
pub mod full_math;
pub mod word;
