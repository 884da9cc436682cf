pub mod verify_email;

pub use verify_email::{verify_email_handler, verify_email_link_handler, VerifyEmailRequestDto};
