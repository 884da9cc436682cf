pub mod verify_email;
