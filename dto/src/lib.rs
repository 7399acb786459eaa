pub mod envelope;
pub mod records;
pub mod session;

pub use envelope::ApiResponse;
