use std::fmt::Debug;

use bicycle::part::Part;

/// Capability for deciding whether a part belongs to a configuration.
///
/// The processor passes each catalog part to the criteria; a configuration never
/// reaches into the catalog itself.
pub trait PartCriteria: Debug {
    fn matches(&self, part: &Part) -> bool;
}

/// Matches every part; used by configurations without a part-name list.
#[derive(Debug, Default)]
pub struct AnyPartCriteria {}

impl PartCriteria for AnyPartCriteria {
    fn matches(&self, _part: &Part) -> bool {
        true
    }
}

/// Matches parts whose name appears in the list.
#[derive(Debug)]
pub struct NameListCriteria {
    pub names: Vec<String>,
}

impl PartCriteria for NameListCriteria {
    fn matches(&self, part: &Part) -> bool {
        self.names
            .iter()
            .any(|name| part.name.eq(name))
    }
}
