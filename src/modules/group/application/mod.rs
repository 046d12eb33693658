pub mod group_use_cases;
pub mod ports;
pub mod services;

pub use group_use_cases::GroupUseCases;
