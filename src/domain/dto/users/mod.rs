//! # User Data Transfer Objects Module
//!
//! - [`CreateUserRequest`] - `POST /users/`
//! - [`UpdateUserRequest`] - `PUT /users/{id}`
//! - [`UserResponse`] - 모든 사용자 응답

pub mod request;
pub mod response;

pub use request::{CreateUserRequest, UpdateUserRequest};
pub use response::UserResponse;
