use std::sync::{Arc, Mutex};

use seatkit_core::{
    AppEvent, DragEvent, Error, ErrorEvent, EventBus, EventCategory, EventFilter, FileEvent,
    LayoutEvent, SnapshotError,
};
use seatkit_designer::{
    DropTarget, LayoutSnapshot, LayoutStore, SeatRef, SeatingCommand, SeatingState, SnapshotSink,
    TableType,
};
use tempfile::tempdir;

fn recording_bus(filter: EventFilter) -> (Arc<EventBus>, Arc<Mutex<Vec<AppEvent>>>) {
    let bus = Arc::new(EventBus::new());
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    bus.subscribe(filter, move |event| sink.lock().unwrap().push(event));
    (bus, events)
}

struct FailingSink;

impl SnapshotSink for FailingSink {
    fn save(&mut self, _snapshot: &LayoutSnapshot) -> anyhow::Result<()> {
        anyhow::bail!("disk full")
    }
}

#[derive(Clone, Default)]
struct CountingSink {
    saves: Arc<Mutex<usize>>,
}

impl SnapshotSink for CountingSink {
    fn save(&mut self, _snapshot: &LayoutSnapshot) -> anyhow::Result<()> {
        *self.saves.lock().unwrap() += 1;
        Ok(())
    }
}

#[test]
fn test_open_missing_file_starts_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data").join("layout.json");
    let store = LayoutStore::open(&path, Arc::new(EventBus::new())).unwrap();

    assert!(store.layout().is_empty());
    assert_eq!(store.location(), Some(path.as_path()));
    assert!(!path.exists());
}

#[test]
fn test_mutations_are_persisted_and_reopened() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data").join("layout.json");

    let mut store = LayoutStore::open(&path, Arc::new(EventBus::new())).unwrap();
    assert!(store
        .dispatch(SeatingCommand::add_table(TableType::Square, 10.0, 10.0))
        .unwrap());
    assert!(store
        .dispatch(SeatingCommand::add_guest("Anna", "Smith", None))
        .unwrap());
    assert!(path.exists());
    assert!(!path.with_extension("json.tmp").exists());

    let reopened = LayoutStore::open(&path, Arc::new(EventBus::new())).unwrap();
    assert_eq!(reopened.layout(), store.layout());
}

#[test]
fn test_open_corrupt_file_is_error_and_file_untouched() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("layout.json");
    std::fs::write(&path, "{ broken").unwrap();

    let err = LayoutStore::open(&path, Arc::new(EventBus::new())).unwrap_err();
    assert!(err.downcast_ref::<SnapshotError>().is_some());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ broken");
}

#[test]
fn test_dispatch_publishes_layout_events() {
    let (bus, events) = recording_bus(EventFilter::Categories(vec![EventCategory::Layout]));
    let mut store = LayoutStore::in_memory(bus);

    store
        .dispatch(SeatingCommand::add_table(TableType::Round, 0.0, 0.0))
        .unwrap();
    let table_id = store.state().tables()[0].id;
    // unchanged: no event
    store
        .dispatch(SeatingCommand::UpdateTablePosition {
            table_id,
            x: 0.0,
            y: 0.0,
        })
        .unwrap();

    let events = events.lock().unwrap();
    assert_eq!(
        *events,
        vec![AppEvent::Layout(LayoutEvent::TableAdded { table_id })]
    );
}

#[test]
fn test_rejected_command_publishes_notice() {
    let (bus, events) = recording_bus(EventFilter::Categories(vec![EventCategory::Error]));
    let mut store = LayoutStore::in_memory(bus);

    assert!(store
        .dispatch(SeatingCommand::add_guest(" ", "Smith", None))
        .is_err());
    assert!(store.layout().is_empty());

    let events = events.lock().unwrap();
    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], AppEvent::Error(ErrorEvent::Rejected { .. })));
}

#[test]
fn test_persist_failure_keeps_mutation_and_notifies() {
    let (bus, events) = recording_bus(EventFilter::All);
    let mut store = LayoutStore::with_sink(SeatingState::new(), Box::new(FailingSink), bus);

    assert!(store
        .dispatch(SeatingCommand::add_guest("Anna", "Smith", None))
        .unwrap());
    assert_eq!(store.state().guests().len(), 1);

    let events = events.lock().unwrap();
    assert!(events.iter().any(|e| matches!(
        e,
        AppEvent::Error(ErrorEvent::PersistFailed { message }) if message.contains("disk full")
    )));
    assert!(store.save().is_err());
}

#[test]
fn test_autosave_can_be_disabled() {
    let sink = CountingSink::default();
    let saves = Arc::clone(&sink.saves);
    let mut store =
        LayoutStore::with_sink(SeatingState::new(), Box::new(sink), Arc::new(EventBus::new()));

    store
        .dispatch(SeatingCommand::add_guest("A", "One", None))
        .unwrap();
    assert_eq!(*saves.lock().unwrap(), 1);

    store.set_autosave(false);
    store
        .dispatch(SeatingCommand::add_guest("B", "Two", None))
        .unwrap();
    assert_eq!(*saves.lock().unwrap(), 1);

    store.save().unwrap();
    assert_eq!(*saves.lock().unwrap(), 2);
}

#[test]
fn test_drag_and_drop_through_store() {
    let (bus, events) = recording_bus(EventFilter::Categories(vec![EventCategory::Drag]));
    let mut store = LayoutStore::in_memory(bus);
    store
        .dispatch(SeatingCommand::add_table(TableType::Round, 0.0, 0.0))
        .unwrap();
    store
        .dispatch(SeatingCommand::add_guest("Anna", "Smith", None))
        .unwrap();
    let guest_id = store.state().guests()[0].id;
    let table = &store.state().tables()[0];
    let target = SeatRef::new(table.id, table.seats[2].id);

    assert!(store.begin_drag(guest_id));
    assert!(store.is_droppable(target));
    assert!(store.drop_on(DropTarget::Seat(target)));
    assert_eq!(store.layout().occupant(target), Some(guest_id));
    assert!(!store.drag_state().is_dragging());

    // dropped back onto its own seat: cancelled, nothing changes
    let before = store.layout().clone();
    store.begin_drag(guest_id);
    assert!(!store.drop_on(DropTarget::Seat(target)));
    store.begin_drag(guest_id);
    store.cancel_drag();
    assert_eq!(store.layout(), &before);

    let events = events.lock().unwrap();
    assert_eq!(
        *events,
        vec![
            AppEvent::Drag(DragEvent::Started { guest_id }),
            AppEvent::Drag(DragEvent::Dropped { guest_id }),
            AppEvent::Drag(DragEvent::Started { guest_id }),
            AppEvent::Drag(DragEvent::Cancelled { guest_id }),
            AppEvent::Drag(DragEvent::Started { guest_id }),
            AppEvent::Drag(DragEvent::Cancelled { guest_id }),
        ]
    );
}

#[test]
fn test_failed_import_leaves_store_unchanged() {
    let (bus, events) = recording_bus(EventFilter::Categories(vec![EventCategory::Error]));
    let mut store = LayoutStore::in_memory(bus);
    store
        .dispatch(SeatingCommand::add_guest("Anna", "Smith", None))
        .unwrap();
    let before = store.layout().clone();

    let err = store.import_json("[]").unwrap_err();
    assert!(matches!(err, Error::Snapshot(SnapshotError::Malformed(_))));
    assert_eq!(store.layout(), &before);
    assert!(matches!(
        events.lock().unwrap()[0],
        AppEvent::Error(ErrorEvent::ImportFailed { .. })
    ));
}

#[test]
fn test_import_and_export_files() {
    let dir = tempdir().unwrap();
    let mut source = SeatingState::new();
    source.add_table(TableType::Theater, None, 0.0, 0.0).unwrap();
    source.import_guests(&["Иванов Иван", "Сидорова"]);
    let file = dir.path().join("incoming.json");
    source.save_to_file(&file).unwrap();

    let (bus, events) = recording_bus(EventFilter::Categories(vec![EventCategory::File]));
    let mut store = LayoutStore::in_memory(bus);
    store.import_file(&file).unwrap();
    assert_eq!(store.layout(), source.layout());

    let exported = store.export_to_directory(dir.path()).unwrap();
    assert!(exported.exists());

    let events = events.lock().unwrap();
    assert_eq!(
        *events,
        vec![
            AppEvent::File(FileEvent::Loaded { path: file.clone() }),
            AppEvent::File(FileEvent::Exported { path: exported }),
        ]
    );
}
