use std::path::Path;

use crate::abundance::TaxidSet;
use crate::error::Result;
use crate::input::{for_each_line, split_fields};

/// Rewrites `taxids` with the merges in `merged.dmp`:
/// ```text
/// <old taxid>\t|\t<new taxid>\t|
/// ```
/// Lines apply strictly in file order, so a taxid produced by one merge is
/// picked up by a later line that merges it again. Returns the number of
/// merges that touched the set.
pub fn apply_merges<P: AsRef<Path>>(merged_path: P, taxids: &mut TaxidSet) -> Result<usize> {
    let path = merged_path.as_ref();
    let mut applied = 0usize;
    let mut total = 0usize;

    for_each_line(path, |line_no, line| {
        let fields = split_fields(path, line_no, line, 3)?;
        total += 1;
        if apply_merge(taxids, fields[0], fields[2]) {
            log::debug!("Merged taxid {} -> {}", fields[0], fields[2]);
            applied += 1;
        }
        Ok(())
    })?;

    log::info!(
        "Applied {} of {} merge(s) from {}",
        applied,
        total,
        path.display()
    );
    Ok(applied)
}

/// Moves the annotation of `old` to `new`. No-op when `old` is absent or
/// equal to `new`.
pub fn apply_merge(taxids: &mut TaxidSet, old: &str, new: &str) -> bool {
    if old == new {
        return false;
    }
    match taxids.remove(old) {
        Some(annotation) => {
            taxids.insert(new.to_string(), annotation);
            true
        }
        None => false,
    }
}
