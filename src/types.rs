use std::fmt;

use serde::Serialize;

use crate::record::RecordValue;

/// A named field of a record shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDef {
    pub name: String,
    pub optional: bool,
    pub readonly: bool,
}

impl FieldDef {
    pub fn new(name: &str) -> Self {
        FieldDef {
            name: name.to_string(),
            optional: false,
            readonly: false,
        }
    }
}

/// A declared record shape: named fields in declaration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shape {
    pub name: String,
    pub fields: Vec<FieldDef>,
}

impl Shape {
    /// Declare a shape whose fields are all required and reassignable.
    pub fn new(name: &str, fields: &[&str]) -> Self {
        Shape {
            name: name.to_string(),
            fields: fields.iter().map(|f| FieldDef::new(f)).collect(),
        }
    }

    /// Mark one declared field as optional.
    pub fn optional(mut self, field: &str) -> Self {
        if let Some(f) = self.fields.iter_mut().find(|f| f.name == field) {
            f.optional = true;
        }
        self
    }

    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }
}

/// An enumerated set of string labels in declaration order,
/// e.g. `Status = active | inactive | pending`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelSet {
    pub name: String,
    pub labels: Vec<String>,
}

impl LabelSet {
    pub fn new(name: &str, labels: &[&str]) -> Self {
        LabelSet {
            name: name.to_string(),
            labels: labels.iter().map(|l| l.to_string()).collect(),
        }
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl fmt::Display for LabelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(&self.labels).map_err(|_| fmt::Error)?;
        write!(f, "{json}")
    }
}

/// What a demo derived: either a record shape or a narrowed label set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "def", rename_all = "lowercase")]
pub enum Derived {
    Shape(Shape),
    Labels(LabelSet),
}

/// One demo snippet's result: the derived shape or label set, plus the
/// record constructed against it. The union-narrowing demos construct
/// no record, so `value` is None for them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoOutput {
    pub name: String,
    pub derived: Derived,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<RecordValue>,
}

impl fmt::Display for DemoOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.value, &self.derived) {
            (Some(record), _) => write!(f, "{record}"),
            (None, Derived::Labels(set)) => write!(f, "{set}"),
            (None, Derived::Shape(shape)) => {
                let names = serde_json::to_string(&shape.field_names()).map_err(|_| fmt::Error)?;
                write!(f, "{names}")
            }
        }
    }
}

/// Result of running the full demo sequence
#[derive(Debug, Serialize)]
pub struct DemoReport {
    pub demos: Vec<DemoOutput>,
}

impl DemoReport {
    pub fn names(&self) -> Vec<&str> {
        self.demos.iter().map(|d| d.name.as_str()).collect()
    }

    pub fn find(&self, name: &str) -> Option<&DemoOutput> {
        self.demos.iter().find(|d| d.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_preserves_declaration_order() {
        let user = Shape::new("User", &["name", "age", "email"]);
        assert_eq!(user.field_names(), vec!["name", "age", "email"]);
        assert!(user.has_field("age"));
        assert!(!user.has_field("id"));
    }

    #[test]
    fn optional_marks_only_the_named_field() {
        let req_user = Shape::new("ReqUser", &["dept", "deptNum"]).optional("deptNum");
        assert!(!req_user.field("dept").unwrap().optional);
        assert!(req_user.field("deptNum").unwrap().optional);
    }

    #[test]
    fn label_set_displays_as_json_array() {
        let status = LabelSet::new("Status", &["active", "inactive", "pending"]);
        assert_eq!(status.to_string(), r#"["active","inactive","pending"]"#);
        assert!(status.contains("pending"));
        assert_eq!(status.len(), 3);
    }
}
