//! Value Object Module

pub mod email;
pub mod session_token;
pub mod user_id;
pub mod user_role;
