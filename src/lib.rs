// src/lib.rs
pub mod abundance;
pub mod error;
pub mod input;
pub mod lineage;
pub mod merged;
pub mod taxdb;
pub mod types;

use std::fmt::Write as FmtWrite;
use std::path::{Path, PathBuf};

use crate::abundance::collect_taxids;
use crate::lineage::resolve_all;
use crate::merged::apply_merges;
use crate::taxdb::TaxonomyDb;
use crate::types::{LineageRow, OutputLayout};

pub use crate::error::{LineageError, Result};

/// Header of the output table.
pub const TABLE_HEADER: &str = "otu\tsuperkingdom\tphylum\tclade\torder\tfamily\tgenus\tspecies";

/// Locations of the abundance table, the output table and the taxdump triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineageConfig {
    /// Abundance table with taxids in the first column.
    pub input_table_path: PathBuf,
    /// Where the lineage table is written.
    pub output_path: PathBuf,
    pub nodes_path: PathBuf,
    pub names_path: PathBuf,
    pub merged_path: PathBuf,
    pub layout: OutputLayout,
}

impl Default for LineageConfig {
    fn default() -> Self {
        Self::from_taxonomy_dir("./table.tsv", "./taxonomy.tsv", "./taxonomy")
    }
}

impl LineageConfig {
    /// Uses `nodes.dmp`, `names.dmp` and `merged.dmp` from an unpacked
    /// taxdump directory.
    pub fn from_taxonomy_dir<I, O, D>(input_table: I, output: O, taxonomy_dir: D) -> Self
    where
        I: Into<PathBuf>,
        O: Into<PathBuf>,
        D: AsRef<Path>,
    {
        let dir = taxonomy_dir.as_ref();
        Self {
            input_table_path: input_table.into(),
            output_path: output.into(),
            nodes_path: dir.join("nodes.dmp"),
            names_path: dir.join("names.dmp"),
            merged_path: dir.join("merged.dmp"),
            layout: OutputLayout::default(),
        }
    }
}

/// Resolved rows plus what the run did to get them.
/// Text is generated on demand from the structured rows.
#[derive(Debug, Clone)]
pub struct LineageReport {
    pub rows: Vec<LineageRow>,
    pub layout: OutputLayout,
    /// Number of merged.dmp lines that rewrote the working set.
    pub merges_applied: usize,
}

impl LineageReport {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Formats one data row according to the report layout.
    pub fn format_row(&self, row: &LineageRow) -> String {
        let mut line = row.taxid.clone();
        for (i, value) in row.lineage.values().enumerate() {
            line.push('\t');
            // legacy tables carry an empty column after superkingdom
            if i == 1 && self.layout == OutputLayout::Legacy {
                line.push('\t');
            }
            line.push_str(value);
        }
        line
    }

    /// Generate the full table text (header + rows)
    pub fn to_table_string(&self) -> String {
        let mut output = String::new();
        output.push_str(TABLE_HEADER);
        output.push('\n');
        for row in &self.rows {
            // writing into a String cannot fail
            let _ = writeln!(output, "{}", self.format_row(row));
        }
        output
    }

    /// Writes the table to `path` in a single pass.
    pub fn write_table<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_table_string()).map_err(|e| LineageError::io(path, e))?;
        log::info!("Wrote {} lineage row(s) to {}", self.rows.len(), path.display());
        Ok(())
    }
}

/// Collects taxids, loads the taxonomy, applies merges and resolves every
/// lineage. Nothing is written.
pub fn expand_taxonomy(config: &LineageConfig) -> Result<LineageReport> {
    // 1. Taxids requested by the abundance table
    let mut taxids = collect_taxids(&config.input_table_path)?;

    // 2. Taxonomy graph and scientific names
    let db = TaxonomyDb::from_ncbi(&config.nodes_path, &config.names_path)?;

    // 3. Rewrite merged taxids before any walk
    let merges_applied = apply_merges(&config.merged_path, &mut taxids)?;

    // 4. Walk each taxid to the root
    let rows = resolve_all(&taxids, &db)?;

    Ok(LineageReport {
        rows,
        layout: config.layout,
        merges_applied,
    })
}

/// [`expand_taxonomy`] followed by writing the table to `config.output_path`.
pub fn run(config: &LineageConfig) -> Result<LineageReport> {
    let report = expand_taxonomy(config)?;
    report.write_table(&config.output_path)?;
    Ok(report)
}
