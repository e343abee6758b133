pub mod aggregate;
pub mod detect;
pub mod monitoring;
pub mod pipeline;
pub mod resolve;
