use worldline_render::{
    DiagramController, EventRef, PathSelection, RenderOptions, SpaceTimeConfig, SpaceTimeDiagram,
    SpaceTimeEvent, SpaceTimeMessage, SpaceTimeProcess, layout_space_time, render_svg,
};

fn demo_diagram() -> SpaceTimeDiagram {
    let mut sender = SpaceTimeProcess::from_times([1.0, 6.0]).with_label("sender");
    sender.events[0] = SpaceTimeEvent::at(1.0).with_label("send");
    SpaceTimeDiagram::new(200.0, 200.0)
        .with_process(sender)
        .with_process(SpaceTimeProcess::from_times([4.0, 8.0]).with_label("receiver"))
        .with_message(SpaceTimeMessage::new((0, 0), (1, 0)))
}

fn render(options: &RenderOptions) -> String {
    let layout = layout_space_time(
        &demo_diagram(),
        &SpaceTimeConfig::default(),
        &PathSelection::new(),
    )
    .unwrap();
    render_svg(&layout, options)
}

#[test]
fn output_has_the_expected_structure() {
    let svg = render(&RenderOptions::default());

    assert!(svg.starts_with("<svg "));
    assert!(svg.ends_with("</svg>"));
    assert!(svg.contains(r#"viewBox="0 0 200 200""#));
    assert!(svg.contains(r#"class="space-time""#));
    assert!(svg.contains(r#"<marker id="space-time-arrow""#));
    assert!(svg.contains(r#"<marker id="space-time-arrow-highlight""#));
    assert!(svg.contains(r#"<g class="process">"#));
    assert!(svg.contains(r#"<circle class="event""#));
    assert!(svg.contains(r#"<line class="segment""#));
    assert!(svg.contains(r#"class="message""#));
    assert!(svg.contains("<animateMotion "));
    assert!(svg.contains(">sender</text>"));
    assert!(svg.contains(">send</text>"));
}

#[test]
fn rendering_is_deterministic() {
    let options = RenderOptions::default();
    assert_eq!(render(&options), render(&options));
}

#[test]
fn diagram_id_prefixes_marker_ids() {
    let options = RenderOptions {
        diagram_id: Some("figure 3 (consensus)".to_string()),
        ..RenderOptions::default()
    };
    let svg = render(&options);

    assert!(svg.contains(r#"<marker id="figure-3-consensus-arrow""#));
    assert!(svg.contains(r##"marker-end="url(#figure-3-consensus-arrow)""##));
    assert!(!svg.contains(r#"id="space-time-arrow""#));
}

#[test]
fn transit_animation_can_be_disabled() {
    let options = RenderOptions {
        animate_messages: false,
        ..RenderOptions::default()
    };
    let svg = render(&options);

    assert!(!svg.contains("animateMotion"));
    assert!(svg.contains(r#"class="message""#), "curve itself remains");
}

#[test]
fn styles_can_be_omitted() {
    let options = RenderOptions {
        include_styles: false,
        ..RenderOptions::default()
    };
    assert!(!render(&options).contains("<style>"));
}

#[test]
fn interactive_rendering_adds_the_selection_class() {
    let options = RenderOptions {
        interactive: true,
        ..RenderOptions::default()
    };
    assert!(render(&options).contains(r#"class="space-time selection""#));
    assert!(!render(&RenderOptions::default()).contains(r#"class="space-time selection""#));
}

#[test]
fn labels_are_xml_escaped() {
    let diagram = SpaceTimeDiagram::new(200.0, 200.0)
        .with_process(SpaceTimeProcess::from_times([1.0]).with_label("p & <q>"));
    let layout =
        layout_space_time(&diagram, &SpaceTimeConfig::default(), &PathSelection::new()).unwrap();
    let svg = render_svg(&layout, &RenderOptions::default());

    assert!(svg.contains("p &amp; &lt;q&gt;"));
    assert!(!svg.contains("p & <q>"));
}

#[test]
fn highlighted_messages_use_the_highlight_marker() {
    let ctl = DiagramController::new(demo_diagram(), SpaceTimeConfig::default()).unwrap();
    ctl.click(EventRef::new(0, 0));
    ctl.hover_enter(EventRef::new(1, 0));

    let svg = render_svg(&ctl.layout().unwrap(), &RenderOptions::default());
    assert!(svg.contains(r#"class="message highlight""#));
    assert!(svg.contains(r##"url(#space-time-arrow-highlight)"##));
    assert!(svg.contains(r#"class="event highlight""#));
}
