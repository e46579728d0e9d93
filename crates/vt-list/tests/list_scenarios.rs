use vt_list::{FilterValue, Item, List, Message, ViewportConfig};
use vt_protocol::Command;

fn config() -> ViewportConfig {
    ViewportConfig::new(8, 8).with_bounding_area(8, 16)
}

fn items(start: usize, count: usize) -> Vec<Item<u32>> {
    (start..start + count).map(|n| Item::new(n.to_string(), n as u32)).collect()
}

fn load_chunk_starts(commands: &[Command]) -> Vec<usize> {
    let mut starts: Vec<usize> = commands
        .iter()
        .filter_map(|c| match c {
            Command::LoadChunk(r) => Some(r.start),
            _ => None,
        })
        .collect();
    starts.sort_unstable();
    starts
}

#[test]
fn scenario_1_initial_load_of_100() {
    let mut list: List<u32> = List::new(config());
    list.update(Message::DataRefresh);
    let commands = list.update(Message::DataTotal { total: 100 });
    assert_eq!(load_chunk_starts(&commands), vec![0, 8, 16]);

    let req = list.template().with_range(0, 8);
    list.update(Message::DataChunkLoaded { start_index: 0, items: items(0, 8), request: req });

    let rendered = list.view();
    assert!(rendered.starts_with("> "));
    assert_eq!(list.viewport().cursor_index, 0);
}

#[test]
fn scenario_2_navigate_to_end_evicts_and_requests_far_chunks() {
    let mut list: List<u32> = List::new(config());
    list.update(Message::DataRefresh);
    list.update(Message::DataTotal { total: 100 });
    for start in [0usize, 8, 16] {
        let req = list.template().with_range(start, 8);
        list.update(Message::DataChunkLoaded { start_index: start, items: items(start, 8), request: req });
    }

    let commands = list.update(Message::JumpToEnd);
    assert_eq!(list.viewport().cursor_index, 99);
    assert_eq!(list.viewport().viewport_start_index, 92);
    assert_eq!(list.viewport().cursor_viewport_index, 7);
    assert!(list.viewport().at_dataset_end);
    assert_eq!(load_chunk_starts(&commands), vec![80, 88, 96]);
}

#[test]
fn scenario_3_filter_change_invalidates_in_flight_chunks() {
    let mut list: List<u32> = List::new(config());
    list.update(Message::DataRefresh);
    list.update(Message::DataTotal { total: 100 });
    // Chunks {0, 8, 16} are now in flight (marked loading, no replies yet).
    let in_flight_request = list.template().with_range(0, 8);

    list.update(Message::FilterSet {
        field: "job".to_string(),
        value: FilterValue::Text("Engineer".to_string()),
    });
    assert_eq!(list.template().generation, 2);

    // The stale reply for the pre-filter-change request must be rejected.
    let commands = list.update(Message::DataChunkLoaded {
        start_index: 0,
        items: items(0, 8),
        request: in_flight_request,
    });
    assert!(commands.is_empty());
    assert!(list.view().contains('…'), "rejected reply must not populate the cache");
}

#[test]
fn scenario_5_stale_page_down_under_slow_loader() {
    let cfg = ViewportConfig::new(5, 5).with_bounding_area(5, 10);
    let mut list: List<u32> = List::new(cfg);
    list.update(Message::DataRefresh);
    list.update(Message::DataTotal { total: 100 });

    let first = list.update(Message::PageDown);
    let second = list.update(Message::PageDown);

    assert_eq!(list.viewport().cursor_index, 10);
    let mut all_starts = load_chunk_starts(&first);
    all_starts.extend(load_chunk_starts(&second));
    let mut unique = all_starts.clone();
    unique.sort_unstable();
    unique.dedup();
    assert_eq!(all_starts.len(), unique.len(), "no duplicate in-flight chunk requests");
    assert!(list.view().contains('…'), "unloaded rows must render as placeholders");
}
