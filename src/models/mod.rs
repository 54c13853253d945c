pub mod cell;
pub mod checkin;
pub mod report;
pub mod roster;

pub use cell::{Cell, RawRow};
pub use checkin::{CheckIn, Timestamp};
pub use report::{AttendanceReport, PivotRow};
pub use roster::{Roster, RosterEntry};
