pub mod pagination;
pub mod window;
