mod action;
mod component;
mod swizzle_config;

pub use action::{ActionStatus, SwizzleAction};
pub use component::{ComponentActions, ComponentConfig};
pub use swizzle_config::{COMPONENT_SEPARATOR, SwizzleConfig};
