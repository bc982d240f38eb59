pub mod oracle;
pub mod pipeline;
pub mod resolve;
pub mod session;
