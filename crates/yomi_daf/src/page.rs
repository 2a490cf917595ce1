//! Offset-to-page mapping over the tractate table.

use crate::daf_types::Daf;
use crate::error::DafError;
use crate::masechta::{ALL_MASECHTOS, PAGES_PER_MASECHTA};

/// Map an adjusted cycle offset (`0..WHOLE_SHAS_PAGES`) to its page.
///
/// Offset 0 is the first page of the first tractate.
pub fn map_offset_to_daf(offset: u32) -> Result<Daf, DafError> {
    let mut remaining = offset;
    for (masechta, &pages) in ALL_MASECHTOS.iter().zip(PAGES_PER_MASECHTA.iter()) {
        if remaining < pages {
            return Ok(Daf {
                masechta: *masechta,
                page: remaining + 1,
            });
        }
        remaining -= pages;
    }
    Err(DafError::TableExhausted {
        offset: offset as i64,
    })
}
