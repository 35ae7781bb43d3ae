//! Field identifiers for the contact form

/// Identifies one of the six form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Name,
    Email,
    Phone,
    Subject,
    Inquiry,
    ContactMethod,
}

impl FieldId {
    /// Number of fields, used to size the store's companion arrays
    pub const COUNT: usize = 6;

    /// All fields, in form order
    pub const ALL: [FieldId; FieldId::COUNT] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Subject,
        FieldId::Inquiry,
        FieldId::ContactMethod,
    ];

    /// Wire identifier of this field
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
            FieldId::Subject => "subject",
            FieldId::Inquiry => "inquiry",
            FieldId::ContactMethod => "contactMethod",
        }
    }

    /// Parse a wire identifier; unknown identifiers yield `None`
    pub fn parse(identifier: &str) -> Option<FieldId> {
        FieldId::ALL.iter().copied().find(|f| f.as_str() == identifier)
    }

    /// Human-readable label for UI display
    pub fn label(&self) -> &'static str {
        match self {
            FieldId::Name => "Name",
            FieldId::Email => "Email",
            FieldId::Phone => "Phone",
            FieldId::Subject => "Subject",
            FieldId::Inquiry => "Inquiry",
            FieldId::ContactMethod => "Contact method",
        }
    }

    /// Whether the field must be filled in for submission
    pub fn is_required(&self) -> bool {
        !matches!(self, FieldId::Phone | FieldId::ContactMethod)
    }

    /// Index into the store's companion arrays
    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        for field in FieldId::ALL {
            assert_eq!(FieldId::parse(field.as_str()), Some(field));
        }
    }

    #[test]
    fn test_parse_unknown_is_none() {
        assert_eq!(FieldId::parse("company"), None);
        assert_eq!(FieldId::parse(""), None);
        // Wire identifiers are case-sensitive
        assert_eq!(FieldId::parse("Name"), None);
    }

    #[test]
    fn test_required_fields() {
        assert!(FieldId::Name.is_required());
        assert!(FieldId::Email.is_required());
        assert!(FieldId::Subject.is_required());
        assert!(FieldId::Inquiry.is_required());
        assert!(!FieldId::Phone.is_required());
        assert!(!FieldId::ContactMethod.is_required());
    }

    #[test]
    fn test_indices_are_dense() {
        for (i, field) in FieldId::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }
}
