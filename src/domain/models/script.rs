use std::fmt;

/// Identifier of a campaign API script on Roll20. `New` is the sentinel the
/// save endpoint reads as "create a script and assign an id server-side"; the
/// assigned id is never reported back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScriptId {
    New,
    Existing(String),
}

impl fmt::Display for ScriptId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ScriptId::New => return write!(f, "new"),
            ScriptId::Existing(id) => return write!(f, "{id}"),
        }
    }
}
