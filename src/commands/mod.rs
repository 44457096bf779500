pub mod component;
pub mod suggest;
