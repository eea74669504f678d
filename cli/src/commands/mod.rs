pub mod generate;
pub mod textconv;
pub mod watch;
