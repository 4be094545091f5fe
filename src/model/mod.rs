// Documentation model and its extraction from a type catalog

pub mod extract;
pub mod records;
pub mod typename;

pub use extract::*;
pub use records::*;
pub use typename::*;
