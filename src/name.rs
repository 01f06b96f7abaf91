use crate::idmap::{IdIndex, IdMap};

/// Id of an interned qualified name.
///
/// Element names, declaration targets and attribute names are interned per
/// [`Document`](crate::Document). The qualified name is kept as written,
/// prefix included: `S:Envelope` and `Envelope` are different names.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct NameId(u32);

impl IdIndex<NameId> for NameId {
    fn to_id(index: usize) -> NameId {
        NameId(index as u32)
    }

    fn from_id(id: NameId) -> usize {
        id.0 as usize
    }
}

pub(crate) type NameLookup = IdMap<NameId, String>;

/// Split a qualified name into prefix and local part.
///
/// The prefix is empty when the name has no `:`.
pub(crate) fn split_qname(qname: &str) -> (&str, &str) {
    match qname.split_once(':') {
        Some((prefix, local)) => (prefix, local),
        None => ("", qname),
    }
}
