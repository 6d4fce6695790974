pub mod config;
pub mod export;
pub mod framing;
pub mod info;
pub mod preview;
