pub mod button;
pub mod control_loop;
pub mod encoder;
pub mod logger;
