pub mod bot;

pub use bot::run_bot;
