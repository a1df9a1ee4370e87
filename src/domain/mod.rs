pub mod contact;
pub mod store;
