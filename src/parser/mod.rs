//! Pure parsers from raw text to records.
//!
//! Parsers only see their input text and a format descriptor from
//! [`crate::platform::Layout`]; they never look at the running OS.

mod interface;
mod keyvalue;
mod load;
mod table;
mod uptime;

pub use interface::{NO_ADDRESS, parse_interfaces};
pub use keyvalue::parse_key_values;
pub use load::{parse_load_average, scale_load};
pub use table::{data_lines, parse_table};
pub use uptime::{elapsed_from_proc_uptime, kstat_integer, parse_uptime};
