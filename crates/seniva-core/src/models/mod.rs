pub mod interpretation;
pub mod response;
pub mod screening;
