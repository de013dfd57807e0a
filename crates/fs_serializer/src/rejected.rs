use alloc::string::String;
use core::fmt;

/// Why an attribute registration was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum RejectReason {
    /// No object was bound, or the bound object was nil.
    NoObject,
    /// The object has no readable attribute with that name.
    UnknownAttribute,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoObject => f.write_str("no object is bound"),
            Self::UnknownAttribute => f.write_str("unknown or unreadable attribute"),
        }
    }
}

/// An attribute registration that was silently dropped.
///
/// Dropping is not an error, the output simply lacks the field. These
/// entries exist so callers can detect typos in attribute names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedField {
    /// The requested output name.
    pub name: String,
    /// The attribute that could not be read.
    pub attribute: String,
    pub reason: RejectReason,
}

impl fmt::Display for RejectedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "field `{}` dropped, attribute `{}`: {}",
            self.name, self.attribute, self.reason
        )
    }
}
