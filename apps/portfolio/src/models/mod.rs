pub mod portfolio;
pub mod session;
