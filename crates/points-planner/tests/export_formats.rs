use points_planner::export::{export, parse_document, to_csv, ExportFormat, PlanDocument};
use points_planner::plan::{PlanBlock, TransferPath};
use points_planner::Selection;

fn scenario_selection() -> Selection {
    Selection::new(
        vec!["amex-platinum", "chase-ink-cash", "capone-venture", "hilton-aspire"],
        vec!["oneworld", "star", "skyteam"],
        vec!["marriott", "hilton", "hyatt"],
        vec!["JFK", "DFW"],
    )
}

#[test]
fn json_document_round_trips_blocks_paths_and_details() {
    let selection = scenario_selection();
    let plan = selection.plan();
    let payload = export(ExportFormat::Json, &selection, &plan).expect("json export");

    let parsed = parse_document(&payload.content).expect("document parses");
    assert_eq!(parsed, PlanDocument::new(&selection, &plan));
    assert_eq!(parsed.plan, plan);
    assert_eq!(parsed.home_airports, ["JFK", "DFW"]);

    let reparsed = Selection::new(
        parsed.selected_cards.clone(),
        parsed.preferred_air.clone(),
        parsed.preferred_hotels.clone(),
        parsed.home_airports.clone(),
    );
    assert_eq!(reparsed.plan(), plan);
}

#[test]
fn json_round_trip_preserves_optional_via_and_missing_paths() {
    let plan = vec![
        PlanBlock {
            title: "Routed".to_string(),
            details: vec![],
            paths: Some(vec![
                TransferPath::new("Membership Rewards", "Avianca LifeMiles").with_via("Aeroplan"),
                TransferPath::new("Ultimate Rewards", "United"),
            ]),
        },
        PlanBlock {
            title: "Hints".to_string(),
            details: vec!["one".to_string()],
            paths: None,
        },
    ];
    let document = PlanDocument::new(&Selection::defaults(), &plan);
    let parsed = parse_document(&document.to_json().expect("serializes")).expect("parses");

    assert_eq!(parsed.plan, plan);
    assert_eq!(parsed.plan[0].paths()[0].via.as_deref(), Some("Aeroplan"));
    assert_eq!(parsed.plan[0].paths()[1].note, None);
    assert!(parsed.plan[1].paths.is_none());
}

#[test]
fn csv_rows_follow_block_order_with_paths_first() {
    let selection = Selection::defaults();
    let plan = selection.plan();
    let csv = to_csv(&plan).expect("csv renders");

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(csv.as_bytes());
    let headers = reader.headers().expect("header row").clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        ["Section", "Source", "To", "Via", "Note", "Detail"]
    );

    let rows: Vec<csv::StringRecord> = reader
        .records()
        .collect::<Result<_, _>>()
        .expect("rows parse");
    let expected_rows: usize = plan
        .iter()
        .map(|block| block.paths().len() + block.details.len())
        .sum();
    assert_eq!(rows.len(), expected_rows);

    let mut offset = 0;
    for block in &plan {
        for path in block.paths() {
            let row = &rows[offset];
            assert_eq!(&row[0], block.title);
            assert_eq!(&row[1], path.source);
            assert_eq!(&row[2], path.destination);
            assert_eq!(&row[4], path.note.as_deref().unwrap_or_default());
            assert_eq!(&row[5], "");
            offset += 1;
        }
        for detail in &block.details {
            let row = &rows[offset];
            assert_eq!(&row[0], block.title);
            assert!((1..5).all(|index| row[index].is_empty()));
            assert_eq!(&row[5], detail.as_str());
            offset += 1;
        }
    }
}

#[test]
fn csv_escapes_embedded_quotes() {
    let plan = vec![PlanBlock {
        title: "Quotes".to_string(),
        details: vec!["Ask for the \"suite\" upgrade".to_string()],
        paths: None,
    }];
    let csv = to_csv(&plan).expect("csv renders");
    let detail_line = csv.lines().nth(1).expect("detail row");
    assert_eq!(
        detail_line,
        "\"Quotes\",\"\",\"\",\"\",\"\",\"Ask for the \"\"suite\"\" upgrade\""
    );
}
