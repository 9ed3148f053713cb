pub mod commission;
pub mod conversion;


pub use commission::CommissionSchedule;
pub use conversion::{convert, convert_line};
