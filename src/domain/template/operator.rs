// Expression operators and their expansion rules

/// The operator selecting prefix, separator and naming rules for an expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Operator {
    #[default]
    Simple,
    Reserved,
    Fragment,
    Label,
    PathSegment,
    PathParameter,
    Query,
    QueryContinuation,
}

/// Expansion rules for one operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorDescriptor {
    pub code: &'static str,
    pub prefix: &'static str,
    pub separator: &'static str,
    pub named: bool,
}

const fn descriptor(
    code: &'static str,
    prefix: &'static str,
    separator: &'static str,
    named: bool,
) -> OperatorDescriptor {
    OperatorDescriptor {
        code,
        prefix,
        separator,
        named,
    }
}

const SIMPLE: OperatorDescriptor = descriptor("", "", ",", false);
const RESERVED: OperatorDescriptor = descriptor("+", "", ",", false);
const FRAGMENT: OperatorDescriptor = descriptor("#", "#", ",", false);
const LABEL: OperatorDescriptor = descriptor(".", ".", ".", false);
const PATH_SEGMENT: OperatorDescriptor = descriptor("/", "/", "/", false);
const PATH_PARAMETER: OperatorDescriptor = descriptor(";", ";", ";", true);
const QUERY: OperatorDescriptor = descriptor("?", "?", "&", true);
const QUERY_CONTINUATION: OperatorDescriptor = descriptor("&", "&", "&", true);

impl Operator {
    pub const ALL: [Operator; 8] = [
        Operator::Simple,
        Operator::Reserved,
        Operator::Fragment,
        Operator::Label,
        Operator::PathSegment,
        Operator::PathParameter,
        Operator::Query,
        Operator::QueryContinuation,
    ];

    /// Look up an operator by its code. Unknown codes resolve to [`Operator::Simple`].
    pub fn lookup(code: &str) -> Self {
        match code {
            "+" => Operator::Reserved,
            "#" => Operator::Fragment,
            "." => Operator::Label,
            "/" => Operator::PathSegment,
            ";" => Operator::PathParameter,
            "?" => Operator::Query,
            "&" => Operator::QueryContinuation,
            _ => Operator::Simple,
        }
    }

    /// Recognize an operator from the first character of an expression body.
    /// Returns `None` when the character is not an operator code.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Operator::Reserved),
            '#' => Some(Operator::Fragment),
            '.' => Some(Operator::Label),
            '/' => Some(Operator::PathSegment),
            ';' => Some(Operator::PathParameter),
            '?' => Some(Operator::Query),
            '&' => Some(Operator::QueryContinuation),
            _ => None,
        }
    }

    pub fn descriptor(self) -> &'static OperatorDescriptor {
        match self {
            Operator::Simple => &SIMPLE,
            Operator::Reserved => &RESERVED,
            Operator::Fragment => &FRAGMENT,
            Operator::Label => &LABEL,
            Operator::PathSegment => &PATH_SEGMENT,
            Operator::PathParameter => &PATH_PARAMETER,
            Operator::Query => &QUERY,
            Operator::QueryContinuation => &QUERY_CONTINUATION,
        }
    }

    pub fn code(self) -> &'static str {
        self.descriptor().code
    }

    pub fn prefix(self) -> &'static str {
        self.descriptor().prefix
    }

    pub fn separator(self) -> &'static str {
        self.descriptor().separator
    }

    pub fn is_named(self) -> bool {
        self.descriptor().named
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_round_trips_codes() {
        for op in Operator::ALL {
            assert_eq!(Operator::lookup(op.code()), op);
        }
    }

    #[test]
    fn test_unknown_code_is_simple() {
        assert_eq!(Operator::lookup("!"), Operator::Simple);
        assert_eq!(Operator::lookup("=="), Operator::Simple);
        assert_eq!(Operator::from_char('x'), None);
    }

    #[test]
    fn test_table_entries() {
        let query = Operator::Query.descriptor();
        assert_eq!(query.prefix, "?");
        assert_eq!(query.separator, "&");
        assert!(query.named);

        let label = Operator::Label.descriptor();
        assert_eq!(label.prefix, ".");
        assert_eq!(label.separator, ".");
        assert!(!label.named);

        assert_eq!(Operator::Reserved.prefix(), "");
        assert_eq!(Operator::Fragment.prefix(), "#");
        assert_eq!(Operator::Fragment.separator(), ",");
        assert!(Operator::PathParameter.is_named());
        assert!(Operator::QueryContinuation.is_named());
        assert!(!Operator::PathSegment.is_named());
    }

    #[test]
    fn test_only_three_named_operators() {
        let named: Vec<_> = Operator::ALL.iter().filter(|op| op.is_named()).collect();
        assert_eq!(
            named,
            vec![
                &Operator::PathParameter,
                &Operator::Query,
                &Operator::QueryContinuation
            ]
        );
    }
}
