mod algorithm;
mod core;
mod graph;
mod input;
mod platform;

use crate::core::config::{self, SketchConfig};
use crate::core::types::*;
use crate::graph::graph::Graph;
use crate::graph::graph_layout::GraphLayout;
use crate::input::input_translator::InputTranslator;
use crate::platform::canvas::Canvas;
use crate::platform::canvas_cairo::CanvasCairo;
use crate::platform::window_x11::WindowX11;

const USAGE: &str = "Usage: algo-sketch [--nodes N] [--algorithm dfs|bfs|dijkstra] \
[--width W] [--height H] [--start V] [--target V]";

fn parse_args(argv: &[String]) -> Result<SketchConfig, String> {
    let mut cfg = SketchConfig::default();

    let mut i = 1;
    while i < argv.len() {
        let flag = argv[i].as_str();
        let value = argv.get(i + 1).map(String::as_str);
        match (flag, value) {
            ("--nodes", Some(v)) => {
                cfg.size = v.parse().map_err(|_| format!("invalid node count '{}'", v))?;
            }
            ("--algorithm", Some(v)) => cfg.action = v.parse()?,
            ("--width", Some(v)) => {
                cfg.bounds.0 = v.parse().map_err(|_| format!("invalid width '{}'", v))?;
            }
            ("--height", Some(v)) => {
                cfg.bounds.1 = v.parse().map_err(|_| format!("invalid height '{}'", v))?;
            }
            ("--start", Some(v)) => {
                cfg.start = Some(v.parse().map_err(|_| format!("invalid start '{}'", v))?);
            }
            ("--target", Some(v)) => {
                cfg.target = Some(v.parse().map_err(|_| format!("invalid target '{}'", v))?);
            }
            _ => return Err(format!("unexpected argument '{}'", flag)),
        }
        i += 2;
    }

    Ok(cfg)
}

/// Spread the nodes out and wire up the demo topology.
fn build_demo(graph: &mut Graph) {
    graph.arrange_circle();
    for (a, b, weight) in GraphLayout::new().ring_with_chords(graph.number_of_nodes()) {
        if let Err(err) = graph.connect(a, b, weight) {
            log::warn!("Demo edge {}-{} skipped: {}", a, b, err);
        }
    }
}

fn handle_key(graph: &mut Graph, key: Key) {
    match key {
        Key::Enter => {
            if graph.toggle_pause().is_err() {
                log::info!("Press Backspace to start over");
            }
        }
        Key::Backspace => {
            if graph.reset().is_ok() {
                build_demo(graph);
            }
        }
        Key::Char('d') => graph.set_action(Action::DepthFirstSearch),
        Key::Char('b') => graph.set_action(Action::BreadthFirstSearch),
        Key::Char('j') => graph.set_action(Action::Dijkstra),
        Key::Char(_) => {}
    }
}

/// One-line account of a finished run: visit order, plus distances for Dijkstra.
fn summarize(graph: &Graph) -> String {
    let progress = graph.algorithm().progress();
    let label = |i: NodeIndex| graph.nodes()[i].value();
    let steps: Vec<String> = progress
        .order
        .iter()
        .map(|&i| match progress.distances.get(i) {
            Some(d) => format!("{}({})", label(i), d),
            None => label(i).to_string(),
        })
        .collect();
    format!("{} order: {}", graph.action(), steps.join(" -> "))
}

fn main() {
    env_logger::init();

    let argv: Vec<String> = std::env::args().collect();
    let sketch = match parse_args(&argv) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("{}", err);
            eprintln!("{}", USAGE);
            std::process::exit(1);
        }
    };
    let (width, height) = (sketch.bounds.0 as i32, sketch.bounds.1 as i32);

    let mut window = WindowX11::new();
    if !window.create(width, height, "Algo Sketch") {
        eprintln!("Failed to create X11 window");
        std::process::exit(1);
    }

    let cr = match window.create_cairo_context() {
        Some(cr) => cr,
        None => {
            eprintln!("Failed to create Cairo context");
            std::process::exit(1);
        }
    };
    let mut canvas = CanvasCairo::new(cr);

    let mut translator = InputTranslator::new();
    let mut graph = Graph::new(sketch);
    build_demo(&mut graph);

    log::info!("Enter: run/pause, Backspace: reset, d/b/j: DFS/BFS/Dijkstra");

    loop {
        let input = translator.poll(&mut window).clone();
        if translator.should_close() {
            break;
        }
        if let Some(key) = input.last_key {
            handle_key(&mut graph, key);
        }

        let was_completed = graph.is_completed();
        graph.update(&input);
        if graph.is_completed() && !was_completed {
            log::info!("{}", summarize(&graph));
        }

        if let Some(cr) = window.create_cairo_context() {
            canvas.set_context(cr);
        }

        canvas.begin_frame(window.width(), window.height());
        canvas.fill_rect(
            0.0,
            0.0,
            window.width() as f64,
            window.height() as f64,
            Color::from_hex(config::BG_COLOR, 1.0),
        );
        graph.render(&canvas);
        canvas.end_frame();

        window.flush();

        std::thread::sleep(std::time::Duration::from_millis(config::FRAME_MS));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("algo-sketch")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_defaults() {
        assert_eq!(parse_args(&args(&[])), Ok(SketchConfig::default()));
    }

    #[test]
    fn test_parse_all_flags() {
        let cfg = parse_args(&args(&[
            "--nodes", "9", "--algorithm", "dijkstra", "--width", "640", "--height", "480",
            "--start", "2", "--target", "7",
        ]))
        .unwrap();
        assert_eq!(cfg.size, 9);
        assert_eq!(cfg.action, Action::Dijkstra);
        assert_eq!(cfg.bounds, (640.0, 480.0));
        assert_eq!(cfg.start, Some(2));
        assert_eq!(cfg.target, Some(7));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(parse_args(&args(&["--nodes", "many"])).is_err());
        assert!(parse_args(&args(&["--algorithm", "astar"])).is_err());
        assert!(parse_args(&args(&["--nodes"])).is_err());
        assert!(parse_args(&args(&["--verbose"])).is_err());
    }

    #[test]
    fn test_demo_graph_is_laid_out_and_connected() {
        let mut graph = Graph::new(SketchConfig::default());
        build_demo(&mut graph);
        assert_eq!(graph.edges().len(), 9);
        assert!(graph
            .nodes()
            .iter()
            .all(|n| n.position() != config::spawn_point()));
    }

    #[test]
    fn test_summary_lists_distances_for_dijkstra() {
        let mut graph = Graph::new(SketchConfig::new(3, Action::Dijkstra, (800.0, 800.0)));
        graph.connect(1, 2, 4).unwrap();
        graph.connect(2, 3, 1).unwrap();
        graph.resume().unwrap();
        while !graph.is_completed() {
            graph.update(&Default::default());
        }
        assert_eq!(summarize(&graph), "Dijkstra order: 1(0) -> 2(4) -> 3(5)");

        graph.set_action(Action::BreadthFirstSearch);
        graph.resume().unwrap();
        while !graph.is_completed() {
            graph.update(&Default::default());
        }
        assert_eq!(summarize(&graph), "BFS order: 1 -> 2 -> 3");
    }

    /// Replays raw events the way the X11 window queues them.
    struct Replay(std::collections::VecDeque<RawEvent>);

    impl input::input_translator::RawEventSource for Replay {
        fn poll_event(&mut self) -> Option<RawEvent> {
            self.0.pop_front()
        }

        fn pointer_position(&self) -> Vec2 {
            Vec2::default()
        }
    }

    #[test]
    fn test_raw_keystrokes_select_algorithm_and_toggle_once() {
        let mut graph = Graph::new(SketchConfig::default());
        build_demo(&mut graph);
        let mut translator = InputTranslator::new();
        let t0 = std::time::Instant::now();

        let mut source = Replay(
            [RawEvent::KeyPressed(KeyCode::Other(0x6A)), RawEvent::TextEntered('j' as u32)].into(),
        );
        if let Some(key) = translator.poll_at(&mut source, t0).last_key {
            handle_key(&mut graph, key);
        }
        assert_eq!(graph.action(), Action::Dijkstra);

        // Enter twice inside one debounce window toggles only once
        for ms in [150, 200] {
            let mut source = Replay([RawEvent::KeyPressed(KeyCode::Enter)].into());
            let now = t0 + std::time::Duration::from_millis(ms);
            if let Some(key) = translator.poll_at(&mut source, now).last_key {
                handle_key(&mut graph, key);
            }
        }
        assert!(!graph.is_paused());
    }

    #[test]
    fn test_keys_drive_the_graph() {
        let mut graph = Graph::new(SketchConfig::default());
        build_demo(&mut graph);

        handle_key(&mut graph, Key::Char('j'));
        assert_eq!(graph.action(), Action::Dijkstra);

        handle_key(&mut graph, Key::Enter);
        assert!(!graph.is_paused());

        // Reset is refused while running
        handle_key(&mut graph, Key::Backspace);
        assert_eq!(graph.edges().len(), 9);

        handle_key(&mut graph, Key::Enter);
        assert!(graph.is_paused());
        handle_key(&mut graph, Key::Backspace);
        assert_eq!(graph.edges().len(), 9);
        assert!(!graph.is_completed());
    }
}
