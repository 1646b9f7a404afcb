pub mod ret;
pub mod text;
