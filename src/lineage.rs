//src/lineage.rs

use crate::abundance::TaxidSet;
use crate::error::{LineageError, Result};
use crate::taxdb::TaxonomyDb;
use crate::types::{Lineage, LineageRow, Rank};

/// Taxid of the taxonomy root; every ascent stops here.
pub const ROOT_TAXID: &str = "1";

/// Upper bound on ascent steps. NCBI paths stay well below this, so hitting
/// it means the parent pointers loop.
pub const MAX_LINEAGE_DEPTH: usize = 64;

/// Walks from `taxid` up to the root and returns the `(rank, name)` pairs
/// visited, leaf first. The root itself is not included.
pub fn ascend<'a>(taxid: &str, db: &'a TaxonomyDb) -> Result<Vec<(&'a str, &'a str)>> {
    let mut path = Vec::new();
    let mut cursor = taxid;

    while cursor != ROOT_TAXID {
        if path.len() >= MAX_LINEAGE_DEPTH {
            return Err(LineageError::CycleDetected {
                taxid: taxid.to_string(),
                max_depth: MAX_LINEAGE_DEPTH,
            });
        }
        let node = db.node(cursor).ok_or_else(|| LineageError::UnknownTaxid {
            taxid: cursor.to_string(),
        })?;
        let name = db.name(cursor).ok_or_else(|| LineageError::MissingName {
            taxid: cursor.to_string(),
        })?;
        path.push((node.rank.as_str(), name));
        cursor = node.parent.as_str();
    }
    Ok(path)
}

/// Projects the ascent of `taxid` onto the seven tracked ranks.
///
/// Pairs are applied root to leaf, so when a rank label repeats along the
/// path (several "clade" ancestors) the one nearest the leaf is kept.
pub fn resolve_lineage(taxid: &str, db: &TaxonomyDb) -> Result<Lineage> {
    let mut lineage = Lineage::default();
    for (rank_label, name) in ascend(taxid, db)?.into_iter().rev() {
        if let Some(rank) = Rank::from_label(rank_label) {
            lineage.set(rank, name);
        }
    }
    Ok(lineage)
}

/// Resolves every taxid of the working set, in set order. The first lookup
/// failure aborts the whole batch.
pub fn resolve_all(taxids: &TaxidSet, db: &TaxonomyDb) -> Result<Vec<LineageRow>> {
    taxids
        .taxids()
        .map(|taxid| {
            resolve_lineage(taxid, db).map(|lineage| LineageRow {
                taxid: taxid.to_string(),
                lineage,
            })
        })
        .collect()
}
