use worldline_render::{
    DiagramController, EventRef, SpaceTimeConfig, SpaceTimeDiagram, SpaceTimeMessage,
    SpaceTimeProcess,
};

fn three_lane_diagram() -> SpaceTimeDiagram {
    SpaceTimeDiagram::new(200.0, 200.0)
        .with_process(SpaceTimeProcess::from_times([1.0, 4.0]))
        .with_process(SpaceTimeProcess::from_times([2.0, 5.0]))
        .with_process(SpaceTimeProcess::from_times([1.0, 3.0]))
        .with_message(SpaceTimeMessage::new((0, 0), (1, 1)))
}

fn controller() -> DiagramController {
    DiagramController::new(three_lane_diagram(), SpaceTimeConfig::default()).expect("valid model")
}

#[test]
fn click_toggles_the_selection_start() {
    let ctl = controller();
    let target = EventRef::new(0, 0);

    ctl.click(target);
    assert_eq!(ctl.selection().borrow().start(), Some(target));

    // Clicking the selected event again clears it.
    ctl.click(target);
    assert_eq!(ctl.selection().borrow().start(), None);

    // Clicking another event replaces the start outright.
    ctl.click(target);
    ctl.click(EventRef::new(2, 1));
    assert_eq!(ctl.selection().borrow().start(), Some(EventRef::new(2, 1)));
}

#[test]
fn hover_sets_a_transient_end() {
    let ctl = controller();

    ctl.hover_enter(EventRef::new(1, 1));
    assert_eq!(ctl.selection().borrow().end(), Some(EventRef::new(1, 1)));

    ctl.hover_leave();
    assert_eq!(ctl.selection().borrow().end(), None);
}

#[test]
fn leaving_the_surface_clears_everything() {
    let ctl = controller();
    ctl.click(EventRef::new(0, 0));
    ctl.hover_enter(EventRef::new(1, 1));

    ctl.pointer_leave();
    let selection = ctl.selection();
    let selection = selection.borrow();
    assert_eq!(selection.start(), None);
    assert_eq!(selection.end(), None);
}

#[test]
fn search_runs_only_when_an_endpoint_changes() {
    let ctl = controller();

    assert_eq!(ctl.search_runs(), 0);

    // First read computes (the empty selection still counts as one key).
    ctl.active_path();
    assert_eq!(ctl.search_runs(), 1);

    // Re-reading and re-laying-out with an unchanged selection never
    // re-runs the search.
    ctl.active_path();
    ctl.layout().unwrap();
    ctl.layout().unwrap();
    assert_eq!(ctl.search_runs(), 1);

    ctl.click(EventRef::new(0, 0));
    ctl.layout().unwrap();
    assert_eq!(ctl.search_runs(), 2);

    ctl.hover_enter(EventRef::new(1, 1));
    ctl.layout().unwrap();
    ctl.layout().unwrap();
    assert_eq!(ctl.search_runs(), 3);
}

#[test]
fn highlight_propagates_exactly_along_the_selected_path() {
    let ctl = controller();
    ctl.click(EventRef::new(0, 0));
    ctl.hover_enter(EventRef::new(1, 1));

    let layout = ctl.layout().unwrap();
    assert_eq!(
        layout.active_path,
        vec![EventRef::new(0, 0), EventRef::new(1, 1)]
    );

    // Exactly the connecting message and its two endpoint events light up.
    assert!(layout.messages[0].highlight);
    for process in &layout.processes {
        for event in &process.events {
            let expected = event.reference == EventRef::new(0, 0)
                || event.reference == EventRef::new(1, 1);
            assert_eq!(event.highlight, expected, "event {:?}", event.reference);
        }
        assert!(
            process.segments.iter().all(|s| !s.highlight),
            "no timeline segment lies on the path"
        );
    }
}

#[test]
fn segments_between_path_events_highlight() {
    // No direct message from (0, 0) to (0, 1): the path must walk the
    // process timeline, so that segment highlights.
    let ctl = controller();
    ctl.click(EventRef::new(0, 0));
    ctl.hover_enter(EventRef::new(0, 1));

    let layout = ctl.layout().unwrap();
    assert_eq!(
        layout.active_path,
        vec![EventRef::new(0, 0), EventRef::new(0, 1)]
    );
    assert!(layout.processes[0].segments[1].highlight);
    assert!(!layout.messages[0].highlight);
}

#[test]
fn shortest_route_wins_over_detours() {
    // Two routes from (0, 0) to (1, 1): the direct message, and the detour
    // along process 0's timeline plus a second message. Fewest nodes wins.
    let diagram = three_lane_diagram().with_message(SpaceTimeMessage::new((0, 1), (1, 1)));
    let ctl = DiagramController::new(diagram, SpaceTimeConfig::default()).unwrap();

    ctl.click(EventRef::new(0, 0));
    ctl.hover_enter(EventRef::new(1, 1));

    let path = ctl.active_path();
    assert_eq!(path, vec![EventRef::new(0, 0), EventRef::new(1, 1)]);
}

#[test]
fn clearing_an_endpoint_empties_the_path() {
    let ctl = controller();
    ctl.click(EventRef::new(0, 0));
    ctl.hover_enter(EventRef::new(1, 1));
    assert!(!ctl.active_path().is_empty());

    ctl.hover_leave();
    assert!(ctl.active_path().is_empty());
}

#[test]
fn a_shared_selection_drives_several_controllers() {
    let first = controller();
    let second = DiagramController::with_selection(
        three_lane_diagram(),
        SpaceTimeConfig::default(),
        first.selection(),
    )
    .unwrap();

    first.click(EventRef::new(0, 0));
    first.hover_enter(EventRef::new(1, 1));

    let layout = second.layout().unwrap();
    assert!(layout.messages[0].highlight);
    assert_eq!(
        layout.active_path,
        vec![EventRef::new(0, 0), EventRef::new(1, 1)]
    );
}

#[test]
fn construction_rejects_invalid_models() {
    let diagram = SpaceTimeDiagram::new(200.0, 200.0)
        .with_process(SpaceTimeProcess::from_times([1.0]))
        .with_message(SpaceTimeMessage::new((0, 0), (5, 0)));

    assert!(DiagramController::new(diagram, SpaceTimeConfig::default()).is_err());
}
