//! Records module - domain models, services, and traits.

mod records_model;
mod records_service;
mod records_traits;



pub use records_model::{NewRecord, Record, RecordFilter, RecordUpdate};
pub use records_service::RecordService;
pub use records_traits::{RecordRepositoryTrait, RecordServiceTrait};
