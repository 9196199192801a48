pub mod session_registration;
