pub mod config;
pub mod contracts;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::GenesisConfig;
pub use core::assembler::GenesisAssembler;
pub use core::section::{build_section, build_section_from};
pub use domain::model::{ContractSection, ContractStorage, GenesisSections};
pub use utils::error::{GenesisError, Result};
