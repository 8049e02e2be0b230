// Domain models: value types produced by the parsers

mod interface;
mod load;
mod snapshot;
mod table;
mod uptime;

pub use interface::{Counters, InterfaceCounters, InterfaceTable};
pub use load::LoadAverage;
pub use snapshot::HostSnapshot;
pub use table::{FieldValues, KeyedTable, Row};
pub use uptime::UptimeRecord;
