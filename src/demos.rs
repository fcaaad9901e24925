use serde_json::json;

use crate::derive;
use crate::record::{RecordValue, record_of};
use crate::types::{DemoOutput, Derived, LabelSet, Shape};

fn user_shape() -> Shape {
    Shape::new("User", &["name", "age", "email"])
}

fn status_labels() -> LabelSet {
    LabelSet::new("Status", &["active", "inactive", "pending"])
}

/// Key-subset selection: a preview shape over `name` and `email` only.
pub fn pick_demo() -> DemoOutput {
    let preview = derive::pick(&user_shape(), "UserPreview", &["name", "email"]);

    let value = RecordValue::new()
        .with("name", json!("Getabalew"))
        .with("email", json!("getabalew@mail.com"));

    DemoOutput {
        name: "pick".to_string(),
        derived: Derived::Shape(preview),
        value: Some(value),
    }
}

/// Key-exclusion: drop `email`, then add an `id` the base never had.
pub fn omit_demo() -> DemoOutput {
    let without_email = derive::omit(&user_shape(), "UserWithoutEmail", &["email"]);
    let with_id = derive::with_field(&without_email, "id");

    let value = RecordValue::new()
        .with("name", json!("abebe"))
        .with("age", json!(23))
        .with("id", json!(34));

    DemoOutput {
        name: "omit".to_string(),
        derived: Derived::Shape(with_id),
        value: Some(value),
    }
}

/// Label-to-value mapping: one permission list per role.
pub fn record_demo() -> DemoOutput {
    let roles = LabelSet::new("Role", &["admin", "user", "guest"]);
    let shape = derive::record(&roles, "Permissions");

    let permissions = record_of(&roles, |role| match role {
        "admin" => json!(["read", "write", "delete"]),
        "user" => json!(["read", "write"]),
        _ => json!(["read"]),
    });

    DemoOutput {
        name: "record".to_string(),
        derived: Derived::Shape(shape),
        value: Some(permissions),
    }
}

/// Union narrowing by removal: statuses minus `inactive`.
/// No value of the narrowed set is constructed.
pub fn exclude_demo() -> DemoOutput {
    let active = derive::exclude(&status_labels(), "ActiveStatus", &["inactive"]);

    DemoOutput {
        name: "exclude".to_string(),
        derived: Derived::Labels(active),
        value: None,
    }
}

/// Union narrowing by retention: statuses also named in the probe set.
pub fn extract_demo() -> DemoOutput {
    let extracted = derive::extract(
        &status_labels(),
        "Extracted",
        &["active", "pending", "archived"],
    );

    DemoOutput {
        name: "extract".to_string(),
        derived: Derived::Labels(extracted),
        value: None,
    }
}

/// All-optional shape: construct an empty record, then assign each field.
/// Both the empty and the final record are reported, as the source logs both.
pub fn partial_demo() -> Vec<DemoOutput> {
    let user = Shape::new("User", &["name", "age"]);
    let update_shape = derive::partial(&user, "UserUpdate");

    let mut update = RecordValue::new();
    let before = update.clone();
    update.set("age", json!(45));
    update.set("name", json!("getchTheGreat"));

    vec![
        DemoOutput {
            name: "partial_empty".to_string(),
            derived: Derived::Shape(update_shape.clone()),
            value: Some(before),
        },
        DemoOutput {
            name: "partial".to_string(),
            derived: Derived::Shape(update_shape),
            value: Some(update),
        },
    ]
}

/// All-required shape: the otherwise-optional `deptNum` gets a value too.
pub fn required_demo() -> DemoOutput {
    let req_user = Shape::new("ReqUser", &["dept", "deptNum"]).optional("deptNum");
    let strict = derive::required(&req_user, "FullReqUser");

    let value = RecordValue::new()
        .with("dept", json!("software"))
        .with("deptNum", json!(34));

    DemoOutput {
        name: "required".to_string(),
        derived: Derived::Shape(strict),
        value: Some(value),
    }
}

/// Non-reassignable shape: the record keeps its initial literals, untouched.
pub fn readonly_demo() -> DemoOutput {
    let only_usr = Shape::new("OnlyUsr", &["name", "age"]);
    let frozen = derive::readonly(&only_usr, "FrozenUsr");

    let value = RecordValue::new()
        .with("name", json!("leta"))
        .with("age", json!(34));

    DemoOutput {
        name: "readonly".to_string(),
        derived: Derived::Shape(frozen),
        value: Some(value),
    }
}
