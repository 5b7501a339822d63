//src/taxdb.rs

use ahash::AHashMap;
use std::path::Path;

use crate::error::Result;
use crate::input::{for_each_line, split_fields};

/// Parent pointer and raw rank label of one taxonomy node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxNode {
    pub parent: String,
    pub rank: String,
}

pub type NodeMap = AHashMap<String, TaxNode>;
pub type NameMap = AHashMap<String, String>;

/// Marker that selects the canonical name lines of `names.dmp`.
const SCIENTIFIC_NAME: &str = "scientific name";

/// The taxonomy loaded from a `nodes.dmp`/`names.dmp` pair.
#[derive(Debug, Default, Clone)]
pub struct TaxonomyDb {
    pub nodes: NodeMap,
    pub names: NameMap,
}

impl TaxonomyDb {
    pub fn from_ncbi<P: AsRef<Path>, Q: AsRef<Path>>(nodes_path: P, names_path: Q) -> Result<Self> {
        let nodes = parse_nodes(nodes_path)?;
        let names = parse_names(names_path)?;
        Ok(Self { nodes, names })
    }

    pub fn node(&self, taxid: &str) -> Option<&TaxNode> {
        self.nodes.get(taxid)
    }

    pub fn name(&self, taxid: &str) -> Option<&str> {
        self.names.get(taxid).map(String::as_str)
    }
}

/// Parses `nodes.dmp`:
/// ```text
/// <taxid>\t|\t<parent taxid>\t|\t<rank>\t|\t...
/// ```
/// Only tab fields 0, 2 and 4 are read. A repeated taxid overwrites the
/// earlier entry. Lines with fewer than five fields are an error.
pub fn parse_nodes<P: AsRef<Path>>(filepath: P) -> Result<NodeMap> {
    let path = filepath.as_ref();
    let mut nodes: NodeMap = AHashMap::new();

    for_each_line(path, |line_no, line| {
        let fields = split_fields(path, line_no, line, 5)?;
        nodes.insert(
            fields[0].to_string(),
            TaxNode {
                parent: fields[2].to_string(),
                rank: fields[4].to_string(),
            },
        );
        Ok(())
    })?;

    log::info!("Loaded {} nodes from {}", nodes.len(), path.display());
    Ok(nodes)
}

/// Parses `names.dmp`, keeping the first scientific name seen per taxid:
/// ```text
/// <taxid>\t|\t<name>\t|\t<unique name>\t|\t<name class>\t|
/// ```
/// A line qualifies when it contains "scientific name" anywhere; other
/// lines are not checked for field count.
pub fn parse_names<P: AsRef<Path>>(filepath: P) -> Result<NameMap> {
    let path = filepath.as_ref();
    let mut names: NameMap = AHashMap::new();

    for_each_line(path, |line_no, line| {
        if !line.contains(SCIENTIFIC_NAME) {
            return Ok(());
        }
        let fields = split_fields(path, line_no, line, 3)?;
        names
            .entry(fields[0].to_string())
            .or_insert_with(|| fields[2].to_string());
        Ok(())
    })?;

    log::info!("Loaded {} scientific names from {}", names.len(), path.display());
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LineageError;

    const NODES: &str = "\
1\t|\t1\t|\tno rank\t|\t\t|\t8\t|
2\t|\t131567\t|\tsuperkingdom\t|\t\t|\t0\t|
131567\t|\t1\t|\tno rank\t|\t\t|\t8\t|
562\t|\t561\t|\tspecies\t|\tEC\t|\t0\t|
";

    const NAMES: &str = "\
2\t|\tBacteria\t|\tBacteria <bacteria>\t|\tscientific name\t|
2\t|\teubacteria\t|\t\t|\tgenbank common name\t|
562\t|\tBacillus coli\t|\t\t|\tsynonym\t|
562\t|\tEscherichia coli\t|\t\t|\tscientific name\t|
562\t|\tEscherichia coli duplicate\t|\t\t|\tscientific name\t|
";

    #[test]
    fn test_parse_nodes_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nodes.dmp");
        std::fs::write(&path, NODES).unwrap();

        let nodes = parse_nodes(&path).unwrap();
        assert_eq!(nodes.len(), 4);
        assert_eq!(
            nodes["562"],
            TaxNode {
                parent: "561".to_string(),
                rank: "species".to_string()
            }
        );
        assert_eq!(nodes["2"].rank, "superkingdom");
    }

    #[test]
    fn test_parse_nodes_last_write_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nodes.dmp");
        std::fs::write(&path, "5\t|\t1\t|\tgenus\n5\t|\t2\t|\tspecies\n").unwrap();
        let nodes = parse_nodes(&path).unwrap();
        assert_eq!(nodes["5"].parent, "2");
        assert_eq!(nodes["5"].rank, "species");
    }

    #[test]
    fn test_parse_nodes_malformed_fails_fast() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nodes.dmp");
        std::fs::write(&path, "2\t|\t1\t|\tsuperkingdom\t|\n3\t|\t2\n").unwrap();
        match parse_nodes(&path).unwrap_err() {
            LineageError::MalformedLine { line, expected, found, .. } => {
                assert_eq!((line, expected, found), (2, 5, 3));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_parse_names_first_scientific_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("names.dmp");
        std::fs::write(&path, NAMES).unwrap();

        let names = parse_names(&path).unwrap();
        assert_eq!(names.len(), 2);
        assert_eq!(names["2"], "Bacteria");
        assert_eq!(names["562"], "Escherichia coli");
    }

    #[test]
    fn test_parse_names_ignores_short_non_scientific_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("names.dmp");
        std::fs::write(&path, "junk\n7\t|\tSeven\t|\t\t|\tscientific name\t|\n").unwrap();
        let names = parse_names(&path).unwrap();
        assert_eq!(names.len(), 1);
        assert_eq!(names["7"], "Seven");

        std::fs::write(&path, "7 scientific name\n").unwrap();
        assert!(matches!(
            parse_names(&path).unwrap_err(),
            LineageError::MalformedLine { line: 1, .. }
        ));
    }

    #[test]
    fn test_from_ncbi() {
        let dir = tempfile::tempdir().unwrap();
        let nodes = dir.path().join("nodes.dmp");
        let names = dir.path().join("names.dmp");
        std::fs::write(&nodes, NODES).unwrap();
        std::fs::write(&names, NAMES).unwrap();

        let db = TaxonomyDb::from_ncbi(&nodes, &names).unwrap();
        assert_eq!(db.node("131567").map(|n| n.parent.as_str()), Some("1"));
        assert_eq!(db.name("2"), Some("Bacteria"));
        assert_eq!(db.name("131567"), None);
    }
}
