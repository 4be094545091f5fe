// Output generation module

pub mod site;
pub mod templates;

pub use site::*;
pub use templates::*;
