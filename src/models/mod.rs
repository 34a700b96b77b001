pub mod cap;
pub mod report;
pub mod spot;

pub use cap::{CapSnapshot, HistoryRecord, Provenance, RawCap, TrendDelta};
pub use report::{ArchiveEntry, ArchiveIndex, DailyReport, Tdcv, TypicalBill};
pub use spot::{SpotPrice, SpotPriceSummary};
