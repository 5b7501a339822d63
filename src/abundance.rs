//src/abundance.rs

use ahash::AHashMap;
use std::path::Path;

use crate::error::Result;
use crate::input::for_each_line;

/// Insertion-ordered working set of taxids, each carrying an annotation.
///
/// Removal leaves a tombstone so the surviving entries keep their order;
/// re-inserting a present key overwrites its annotation in place.
#[derive(Debug, Default, Clone)]
pub struct TaxidSet {
    entries: Vec<Option<(String, String)>>,
    index: AHashMap<String, usize>,
}

impl TaxidSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, taxid: String, annotation: String) {
        if let Some(&pos) = self.index.get(&taxid) {
            if let Some(entry) = self.entries[pos].as_mut() {
                entry.1 = annotation;
            }
            return;
        }
        self.index.insert(taxid.clone(), self.entries.len());
        self.entries.push(Some((taxid, annotation)));
    }

    /// Removes `taxid`, returning its annotation if it was present.
    pub fn remove(&mut self, taxid: &str) -> Option<String> {
        let pos = self.index.remove(taxid)?;
        self.entries[pos].take().map(|(_, annotation)| annotation)
    }

    pub fn contains(&self, taxid: &str) -> bool {
        self.index.contains_key(taxid)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Taxids with their annotations, in working-set order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .flatten()
            .map(|(taxid, annotation)| (taxid.as_str(), annotation.as_str()))
    }

    pub fn taxids(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(taxid, _)| taxid)
    }
}

/// Collects the taxids from the first column of an abundance table.
///
/// Lines starting with `#` (BIOM-style `#OTU ID` headers and metadata) are
/// skipped. Each taxid gets an empty annotation; repeated taxids collapse
/// into their first position.
pub fn collect_taxids<P: AsRef<Path>>(table_path: P) -> Result<TaxidSet> {
    let path = table_path.as_ref();
    let mut set = TaxidSet::new();
    let mut comments = 0usize;

    for_each_line(path, |_, line| {
        if line.starts_with('#') {
            comments += 1;
            return Ok(());
        }
        // split always yields at least one field
        let taxid = line.split('\t').next().unwrap_or(line);
        set.insert(taxid.to_string(), String::new());
        Ok(())
    })?;

    log::debug!("Skipped {} comment line(s) in {}", comments, path.display());
    log::info!("Collected {} taxid(s) from {}", set.len(), path.display());
    Ok(set)
}
