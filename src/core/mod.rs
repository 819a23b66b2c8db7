pub mod assembler;
pub mod section;

pub use crate::domain::model::{ContractSection, ContractStorage, GenesisSections};
pub use crate::domain::ports::ContractConfig;
pub use crate::utils::error::Result;
