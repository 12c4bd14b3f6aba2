pub mod errors;
pub mod hsv;
pub mod kinds;
pub mod smooth;
