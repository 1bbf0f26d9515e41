pub mod allocator;
pub mod validator;

pub use allocator::{allocate, fat_range, AllocationResult};
pub use validator::{validate_request, InvalidInput};
