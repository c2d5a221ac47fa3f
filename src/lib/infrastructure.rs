//! Infrastructure implementations

pub mod email;
