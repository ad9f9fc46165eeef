pub mod display;
pub mod mask;

pub use display::{Address, format_date, title_case};
pub use mask::Mask;
