pub mod button;

pub use button::PressTracker;
