//! End-to-end walk of the status-change workflow: parse the backend
//! payload, filter to a department, build the index, navigate, and
//! resolve a selection into the payload the client persists.

use serde_json::json;

use leads::*;

fn backend_payload() -> serde_json::Value {
    json!([
        {
            "name": "Active Leads",
            "sub_statuses": ["Fresh Lead", {"name": "Interested"}, "Callback"],
            "department": "Sales"
        },
        {
            "name": "Lost login",
            "sub_statuses": ["Rejected", "Not Reachable"],
            "department_ids": ["Sales", "Recovery"]
        },
        {
            "name": "Archive",
            "sub_statuses": ["Old Import"],
            "department": "Accounts"
        },
        {
            "name": "Unscoped",
            "sub_statuses": []
        },
        "garbage entry"
    ])
}

#[test]
fn status_change_workflow() {
    // Parse: one garbage element dropped, the rest survive
    let records = parse_status_list(&backend_payload());
    assert_eq!(records.len(), 4);

    // Scope to the Sales department
    let records = filter_by_department(records, "Sales");
    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Active Leads", "Lost login", "Unscoped"]);

    // Index
    let index = StatusHierarchyIndex::build(&records);
    assert!(index.duplicate_warnings().is_empty());

    // Open the dropdown: main list first
    let cursor = NavigationCursor::open();
    assert_eq!(
        index.search(&cursor, ""),
        ["Active Leads", "Lost login", "Unscoped"]
    );

    // Drill into a category
    let cursor = cursor.select_main("Active Leads");
    assert_eq!(
        index.search(&cursor, ""),
        ["Fresh Lead", "Interested", "Callback"]
    );

    // Search flat across every category, not just the selected one
    let cursor = cursor.with_search_term("reach");
    assert_eq!(index.search(&cursor, &cursor.search_term), ["Not Reachable"]);

    // Resolve the pick into the payload the client persists
    let change = match index.resolve_sub("Not Reachable").unwrap() {
        StatusSelection::Sub(change) => change,
        other => panic!("expected a sub-status selection, got {other:?}"),
    };
    assert_eq!(change.status, "Lost login");
    assert_eq!(change.sub_status, "Not Reachable");
    assert_eq!(
        serde_json::to_value(&change).unwrap(),
        json!({"status": "Lost login", "sub_status": "Not Reachable"})
    );
}

#[test]
fn category_pick_forces_drill_down() {
    let records = filter_by_department(parse_status_list(&backend_payload()), "Sales");
    let index = StatusHierarchyIndex::build(&records);

    // finalizing a category is refused; the interaction stays alive
    let err = index.resolve_sub("Lost login").unwrap_err();
    assert!(matches!(err, LeadsError::CategorySelected(ref name) if name == "Lost login"));

    // the UI drills down instead and picks a leaf
    let cursor = NavigationCursor::open().select_main("Lost login");
    let subs = index.search(&cursor, "");
    assert_eq!(subs, ["Rejected", "Not Reachable"]);
    assert!(index.resolve_sub(&subs[0]).is_ok());
}

#[test]
fn fallback_config_claims_legacy_subs() {
    let config = LeadsConfig::from_pairs([("Ring Back", "Follow Up")]);
    let records = filter_by_department(parse_status_list(&backend_payload()), "Sales");
    let index = StatusHierarchyIndex::build_with_config(&records, &config);

    // the legacy sub-status resolves through its seeded category
    match index.resolve_sub("Ring Back").unwrap() {
        StatusSelection::Sub(change) => {
            assert_eq!(change.status, "Follow Up");
            assert_eq!(change.sub_status, "Ring Back");
        }
        other => panic!("expected a sub-status selection, got {other:?}"),
    }

    // names outside the hierarchy still pass through untouched
    assert_eq!(
        index.resolve_sub("Imported 2019").unwrap(),
        StatusSelection::Direct("Imported 2019".into())
    );
}

#[test]
fn rebuilt_index_swaps_in_cleanly() {
    let index = StatusHierarchyIndex::build(&filter_by_department(
        parse_status_list(&backend_payload()),
        "Sales",
    ));
    let cursor = NavigationCursor::open().select_main("Active Leads");
    assert!(!index.search(&cursor, "").is_empty());

    // backend renames the category; the caller rebuilds and swaps
    let index = StatusHierarchyIndex::build(&parse_status_list(&json!([
        {"name": "Open Leads", "sub_statuses": ["Fresh Lead"]},
    ])));
    assert!(index.search(&cursor, "").is_empty());
    assert_eq!(index.search(&cursor.back_to_main_list(), ""), ["Open Leads"]);
}
