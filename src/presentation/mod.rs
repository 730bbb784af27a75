pub mod navigation;
pub mod views;

pub use navigation::Navigation;
