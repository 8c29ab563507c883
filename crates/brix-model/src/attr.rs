use crate::instance::InstanceId;

/// A single attribute value on a model instance.
///
/// Values are produced on demand by the store and are never cached or written
/// back.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Integer(i64),
    Real(f64),
    Text(String),
    Boolean(bool),
    Enum(String),
    Ref(InstanceId),
    List(Vec<AttrValue>),
    Null,
    Derived,
}

impl std::fmt::Display for AttrValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttrValue::Integer(v) => write!(f, "{v}"),
            AttrValue::Real(v) => write!(f, "{v:.6}"),
            AttrValue::Text(s) => write!(f, "'{s}'"),
            AttrValue::Boolean(b) => write!(f, "{b}"),
            AttrValue::Enum(e) => write!(f, ".{e}."),
            AttrValue::Ref(id) => write!(f, "{id}"),
            AttrValue::List(members) => {
                write!(f, "(")?;
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{member}")?;
                }
                write!(f, ")")
            }
            AttrValue::Null => write!(f, "$"),
            AttrValue::Derived => write!(f, "*"),
        }
    }
}
