pub mod serve;
pub mod view;
pub mod window;
