use super::*;

#[test]
fn api_list_projects_display_fields() {
    let v = serde_json::json!({
        "apis": [
            {
                "api_definition": {
                    "api_id": "b1f0c2",
                    "name": "Payments",
                    "proxy": { "listen_path": "/payments/", "target_url": "http://upstream" },
                    "version_data": { "not_versioned": true, "default_version": "v1" }
                },
                "hook_references": []
            },
            {
                "api_definition": { "api_id": "bare" }
            }
        ],
        "pages": 3
    });
    let list: ApiListResponse = serde_json::from_value(v).unwrap();
    assert_eq!(list.pages, 3);

    let records = list.records();
    assert_eq!(
        records[0],
        ApiRecord {
            id: "b1f0c2".to_string(),
            name: "Payments".to_string(),
            listen_path: "/payments/".to_string(),
            default_version: "v1".to_string(),
        }
    );
    assert_eq!(records[1].id, "bare");
    assert_eq!(records[1].listen_path, "");
}

#[test]
fn empty_or_missing_apis_is_an_empty_page() {
    let list: ApiListResponse = serde_json::from_value(serde_json::json!({ "apis": [] })).unwrap();
    assert!(list.records().is_empty());

    let list: ApiListResponse = serde_json::from_value(serde_json::json!({ "pages": 0 })).unwrap();
    assert!(list.records().is_empty());
}

#[test]
fn status_message_uses_dashboard_casing() {
    let msg: StatusMessage = serde_json::from_value(serde_json::json!({
        "Status": "OK",
        "Message": "API deleted",
        "Meta": null
    }))
    .unwrap();
    assert_eq!(msg.status, "OK");
    assert_eq!(msg.message, "API deleted");
}
