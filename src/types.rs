//src/types.rs

/// Placeholder written for every rank the ascent did not hit.
pub const UNIDENTIFIED: &str = "unidentified";

/// The seven ranks projected into the output table, in column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    Superkingdom,
    Phylum,
    Clade,
    Order,
    Family,
    Genus,
    Species,
}

impl Rank {
    pub const ALL: [Rank; 7] = [
        Rank::Superkingdom,
        Rank::Phylum,
        Rank::Clade,
        Rank::Order,
        Rank::Family,
        Rank::Genus,
        Rank::Species,
    ];

    /// Maps a raw `nodes.dmp` rank label to a tracked rank.
    /// Anything else ("kingdom", "subspecies", "no rank", ...) is untracked.
    pub fn from_label(label: &str) -> Option<Rank> {
        match label {
            "superkingdom" => Some(Rank::Superkingdom),
            "phylum" => Some(Rank::Phylum),
            "clade" => Some(Rank::Clade),
            "order" => Some(Rank::Order),
            "family" => Some(Rank::Family),
            "genus" => Some(Rank::Genus),
            "species" => Some(Rank::Species),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Rank::Superkingdom => "superkingdom",
            Rank::Phylum => "phylum",
            Rank::Clade => "clade",
            Rank::Order => "order",
            Rank::Family => "family",
            Rank::Genus => "genus",
            Rank::Species => "species",
        }
    }

    /// Single-letter tag (k__, p__, ... style).
    pub fn tag(self) -> char {
        match self {
            Rank::Superkingdom => 'k',
            Rank::Phylum => 'p',
            Rank::Clade => 'c',
            Rank::Order => 'o',
            Rank::Family => 'f',
            Rank::Genus => 'g',
            Rank::Species => 's',
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

/// Fixed seven-slot lineage. Slots start as [`UNIDENTIFIED`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lineage {
    slots: [String; 7],
}

impl Default for Lineage {
    fn default() -> Self {
        Self {
            slots: std::array::from_fn(|_| UNIDENTIFIED.to_string()),
        }
    }
}

impl Lineage {
    /// Stores `name` in the slot for `rank`. Species names get their spaces
    /// replaced by underscores.
    pub fn set(&mut self, rank: Rank, name: &str) {
        self.slots[rank.slot()] = match rank {
            Rank::Species => name.replace(' ', "_"),
            _ => name.to_string(),
        };
    }

    pub fn get(&self, rank: Rank) -> &str {
        &self.slots[rank.slot()]
    }

    /// Slot values in column order (k, p, c, o, f, g, s).
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(String::as_str)
    }
}

/// One output row: the working-set taxid and its projected lineage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineageRow {
    pub taxid: String,
    pub lineage: Lineage,
}

/// Column layout of the data rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputLayout {
    /// Blank column right after superkingdom, as downstream tools
    /// built against the original table expect. Data rows carry one more
    /// column than the header.
    #[default]
    Legacy,
    /// Data rows line up with the header.
    Aligned,
}
