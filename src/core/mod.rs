pub mod ballistics;
pub mod chart;
pub mod help;
pub mod playback;
pub mod session;
pub mod units;
pub mod window;
