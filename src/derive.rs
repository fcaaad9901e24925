use crate::types::{FieldDef, LabelSet, Shape};

/// Derive a shape containing only the named keys, in the base shape's
/// declaration order. Keys the base never declared select nothing.
pub fn pick(base: &Shape, name: &str, keys: &[&str]) -> Shape {
    Shape {
        name: name.to_string(),
        fields: base
            .fields
            .iter()
            .filter(|f| keys.contains(&f.name.as_str()))
            .cloned()
            .collect(),
    }
}

/// Derive a shape containing every base field except the named keys.
pub fn omit(base: &Shape, name: &str, keys: &[&str]) -> Shape {
    Shape {
        name: name.to_string(),
        fields: base
            .fields
            .iter()
            .filter(|f| !keys.contains(&f.name.as_str()))
            .cloned()
            .collect(),
    }
}

/// Derive an object shape with one field per label, in label order.
pub fn record(labels: &LabelSet, name: &str) -> Shape {
    Shape {
        name: name.to_string(),
        fields: labels.labels.iter().map(|l| FieldDef::new(l)).collect(),
    }
}

/// Narrow a label set: the base labels minus the removed ones.
pub fn exclude(base: &LabelSet, name: &str, removed: &[&str]) -> LabelSet {
    LabelSet {
        name: name.to_string(),
        labels: base
            .labels
            .iter()
            .filter(|l| !removed.contains(&l.as_str()))
            .cloned()
            .collect(),
    }
}

/// Narrow a label set: the base labels also present in `kept`, in base order.
pub fn extract(base: &LabelSet, name: &str, kept: &[&str]) -> LabelSet {
    LabelSet {
        name: name.to_string(),
        labels: base
            .labels
            .iter()
            .filter(|l| kept.contains(&l.as_str()))
            .cloned()
            .collect(),
    }
}

/// Derive a shape with every field marked optional.
pub fn partial(base: &Shape, name: &str) -> Shape {
    map_fields(base, name, |f| FieldDef { optional: true, ..f })
}

/// Derive a shape with every field marked required, optional or not before.
pub fn required(base: &Shape, name: &str) -> Shape {
    map_fields(base, name, |f| FieldDef { optional: false, ..f })
}

/// Derive a shape with every field marked non-reassignable.
pub fn readonly(base: &Shape, name: &str) -> Shape {
    map_fields(base, name, |f| FieldDef { readonly: true, ..f })
}

/// Append a field the base shape never declared. No-op if it exists.
pub fn with_field(base: &Shape, field: &str) -> Shape {
    let mut fields = base.fields.clone();
    if !fields.iter().any(|f| f.name == field) {
        fields.push(FieldDef::new(field));
    }
    Shape {
        name: base.name.clone(),
        fields,
    }
}

fn map_fields(base: &Shape, name: &str, f: impl Fn(FieldDef) -> FieldDef) -> Shape {
    Shape {
        name: name.to_string(),
        fields: base.fields.iter().cloned().map(f).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> Shape {
        Shape::new("User", &["name", "age", "email"])
    }

    fn status() -> LabelSet {
        LabelSet::new("Status", &["active", "inactive", "pending"])
    }

    #[test]
    fn pick_keeps_subset_in_base_order() {
        // Requested in reverse; the base declaration order wins
        let preview = pick(&user(), "UserPreview", &["email", "name"]);
        assert_eq!(preview.name, "UserPreview");
        assert_eq!(preview.field_names(), vec!["name", "email"]);
    }

    #[test]
    fn pick_ignores_unknown_keys() {
        let preview = pick(&user(), "UserPreview", &["name", "id"]);
        assert_eq!(preview.field_names(), vec!["name"]);
    }

    #[test]
    fn pick_of_nothing_is_empty() {
        let empty = pick(&user(), "Empty", &[]);
        assert!(empty.fields.is_empty());
    }

    #[test]
    fn omit_drops_only_the_named_keys() {
        let without_email = omit(&user(), "UserWithoutEmail", &["email"]);
        assert_eq!(without_email.field_names(), vec!["name", "age"]);
    }

    #[test]
    fn omit_of_nothing_is_identity() {
        let same = omit(&user(), "User2", &[]);
        assert_eq!(same.field_names(), user().field_names());
    }

    #[test]
    fn record_has_one_field_per_label() {
        let roles = LabelSet::new("Role", &["admin", "user", "guest"]);
        let permissions = record(&roles, "Permissions");
        assert_eq!(permissions.field_names(), vec!["admin", "user", "guest"]);
    }

    #[test]
    fn exclude_removes_named_labels() {
        let active = exclude(&status(), "ActiveStatus", &["inactive"]);
        assert_eq!(active.labels, vec!["active", "pending"]);
    }

    #[test]
    fn extract_keeps_intersection_in_base_order() {
        let extracted = extract(&status(), "Extracted", &["active", "pending", "archived"]);
        assert_eq!(extracted.labels, vec!["active", "pending"]);
    }

    #[test]
    fn extract_of_disjoint_labels_is_empty() {
        let none = extract(&status(), "None", &["archived"]);
        assert!(none.is_empty());
    }

    #[test]
    fn partial_marks_every_field_optional() {
        let update = partial(&user(), "UserUpdate");
        assert!(update.fields.iter().all(|f| f.optional));
    }

    #[test]
    fn required_clears_optional_flags() {
        let base = Shape::new("ReqUser", &["dept", "deptNum"]).optional("deptNum");
        let strict = required(&base, "StrictReqUser");
        assert!(strict.fields.iter().all(|f| !f.optional));
    }

    #[test]
    fn readonly_marks_every_field() {
        let frozen = readonly(&user(), "FrozenUser");
        assert!(frozen.fields.iter().all(|f| f.readonly));
        // Optionality is untouched
        assert!(frozen.fields.iter().all(|f| !f.optional));
    }

    #[test]
    fn with_field_appends_new_field_only() {
        let base = omit(&user(), "UserWithoutEmail", &["email"]);
        let with_id = with_field(&base, "id");
        assert_eq!(with_id.field_names(), vec!["name", "age", "id"]);

        let unchanged = with_field(&with_id, "id");
        assert_eq!(unchanged.field_names(), vec!["name", "age", "id"]);
    }
}
