pub mod verification;

pub use verification::verify_message;
