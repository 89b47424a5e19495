pub mod compositor;
pub mod display;
pub mod shell;
