//! Schema fixtures shared by command tests.

use std::path::{Path, PathBuf};

use indoc::indoc;

/// `User` with a wide-integer identity and an optional name, `Message`
/// referencing it, and two reducers.
pub const CHAT_JSON: &str = indoc! {r#"
    {
        "typespace": {
            "types": [
                { "Product": { "elements": [
                    { "name": { "some": "identity" }, "algebraic_type": { "U256": [] } },
                    { "name": { "some": "name" }, "algebraic_type": { "Sum": { "variants": [
                        { "name": { "some": "some" }, "algebraic_type": { "String": [] } },
                        { "name": { "some": "none" }, "algebraic_type": { "Product": { "elements": [] } } }
                    ]}}},
                    { "name": { "some": "online" }, "algebraic_type": { "Bool": [] } }
                ]}},
                { "Product": { "elements": [
                    { "name": { "some": "sender" }, "algebraic_type": { "Ref": 0 } },
                    { "name": { "some": "sent" }, "algebraic_type": { "U64": [] } },
                    { "name": { "some": "text" }, "algebraic_type": { "String": [] } }
                ]}}
            ]
        },
        "tables": [],
        "reducers": [
            { "name": "set_name", "params": { "elements": [
                { "name": { "some": "name" }, "algebraic_type": { "String": [] } }
            ]}},
            { "name": "send_message", "params": { "elements": [
                { "name": { "some": "text" }, "algebraic_type": { "String": [] } }
            ]}}
        ],
        "types": [
            { "name": { "scope": [], "name": "User" }, "ty": 0, "custom_ordering": true },
            { "name": { "scope": [], "name": "Message" }, "ty": 1, "custom_ordering": true }
        ],
        "misc_exports": [],
        "row_level_security": []
    }
"#};

pub fn write_schema(dir: &Path, file_name: &str, json: &str) -> PathBuf {
    let path = dir.join(file_name);
    std::fs::write(&path, json).unwrap();
    path
}
