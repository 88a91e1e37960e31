use std::fs;

use portfolio_assistant::build_knowledge_str;
use serde_json::Value;

fn fixture_path(name: &str) -> String {
    format!("{}/tests/data/{name}", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn sample_profile_matches_golden_knowledge() {
    let profile = fs::read_to_string(fixture_path("sample_profile.json"))
        .expect("Không đọc được hồ sơ mẫu");

    let knowledge = build_knowledge_str(&profile).expect("Không dựng được knowledge");

    let mut actual = serde_json::to_value(knowledge).expect("Không serialize knowledge");
    normalize_dynamic_fields(&mut actual);

    let expected = fs::read_to_string(fixture_path("sample_knowledge.json"))
        .expect("Không đọc được golden knowledge");

    let mut expected_value: Value = serde_json::from_str(&expected).expect("Golden không hợp lệ");
    normalize_dynamic_fields(&mut expected_value);

    assert_eq!(actual, expected_value);
}

fn normalize_dynamic_fields(value: &mut Value) {
    if let Some(obj) = value.as_object_mut() {
        if obj.contains_key("built_at") {
            obj.insert(
                "built_at".to_string(),
                Value::String("__DYNAMIC_TIMESTAMP__".to_string()),
            );
        }
    }
}
