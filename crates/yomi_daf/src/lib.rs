//! Jerusalem Talmud (Yerushalmi) Daf Yomi calculator.
//!
//! This crate provides:
//! - The 39-tractate page table and tractate names
//! - Cycle boundary search from the 1980-02-02 epoch
//! - Excluded-day counting for Yom Kippur and Tisha B'Av
//! - Offset-to-page mapping, schedules, and cycle information
//!
//! Hebrew dates and holy days come from any [`yomi_time::HebrewCalendar`].

pub mod cycle;
pub mod daf_types;
pub mod error;
pub mod masechta;
pub mod page;
pub mod special_days;
pub mod yerushalmi;

pub use cycle::{YERUSHALMI_EPOCH, cycle_origin, next_cycle_start};
pub use daf_types::{CycleOrigin, Daf, DafConfig, DayReading, NameScript};
pub use error::DafError;
pub use masechta::{
    ALL_MASECHTOS, MASECHTA_COUNT, Masechta, PAGES_PER_MASECHTA, WHOLE_SHAS_PAGES,
};
pub use page::map_offset_to_daf;
pub use special_days::{ALL_EXCLUDED_DAYS, ExcludedDay, count_special_days, is_excluded};
pub use yerushalmi::{
    cycle_info_for_date, daf_for_jewish_date, daf_schedule, yerushalmi_daf_for_date,
};
