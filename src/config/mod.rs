pub mod board_config;

pub use board_config::BoardConfig;
