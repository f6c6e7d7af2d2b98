/// Graph sketch: owns nodes and edges, drives the active algorithm once per frame.

use crate::algorithm::{self, AlgorithmState};
use crate::core::config::{self, SketchConfig};
use crate::core::error::GraphError;
use crate::core::types::*;
use crate::graph::graph_arena::GraphArena;
use crate::graph::graph_edge::Edge;
use crate::graph::graph_layout::GraphLayout;
use crate::graph::graph_node::Node;
use crate::input::input_translator::FrameInput;
use crate::platform::canvas::Canvas;

pub struct Graph {
    config: SketchConfig,
    arena: GraphArena,
    action: Action,

    // Playback state; completed implies paused
    paused: bool,
    completed: bool,

    algorithm: Box<dyn AlgorithmState>,
    draw_list: Vec<DrawPrimitive>,
}

impl Graph {
    /// Create a paused graph with `config.size` nodes at the spawn point.
    pub fn new(config: SketchConfig) -> Self {
        let mut arena = GraphArena::new();
        spawn_nodes(&mut arena, &config);
        let algorithm = algorithm::create(config.action, &mut arena, config.start, config.target);

        log::info!(
            "Graph loaded: {} node(s), {} in {}x{}",
            config.size,
            config.action,
            config.bounds.0,
            config.bounds.1
        );

        let mut graph = Self {
            action: config.action,
            config,
            arena,
            paused: true,
            completed: false,
            algorithm,
            draw_list: Vec::new(),
        };
        graph.rebuild_draw_list();
        graph
    }

    /// Respawn `config.size` nodes at the spawn point with no edges.
    /// Rejected while the algorithm is running.
    pub fn reset(&mut self) -> Result<(), GraphError> {
        if !self.paused {
            log::warn!("Reset ignored: graph is running");
            return Err(GraphError::InvalidOperation("reset while running"));
        }

        self.arena.nodes.clear();
        self.arena.edges.clear();
        spawn_nodes(&mut self.arena, &self.config);
        self.completed = false;
        self.reinit_algorithm();
        self.rebuild_draw_list();
        log::info!("Graph reset with {} node(s)", self.config.size);
        Ok(())
    }

    pub fn set_action(&mut self, action: Action) {
        self.action = action;
        self.completed = false;
        self.reinit_algorithm();
        log::info!("Action set to {}", action);
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) -> Result<(), GraphError> {
        if self.completed {
            log::warn!("Resume ignored: {} already completed", self.action);
            return Err(GraphError::InvalidOperation("algorithm already completed"));
        }
        self.paused = false;
        for node in &mut self.arena.nodes {
            node.stop_drag();
        }
        Ok(())
    }

    /// Pause when running, resume otherwise.
    pub fn toggle_pause(&mut self) -> Result<(), GraphError> {
        if self.paused {
            self.resume()
        } else {
            self.pause();
            Ok(())
        }
    }

    /// Add an undirected edge between the nodes carrying `a` and `b`.
    pub fn connect(&mut self, a: u32, b: u32, weight: u32) -> Result<EdgeIndex, GraphError> {
        self.add_edge(a, b, weight, false)
    }

    /// Add an edge traversable only from `a` to `b`.
    pub fn connect_directed(&mut self, a: u32, b: u32, weight: u32) -> Result<EdgeIndex, GraphError> {
        self.add_edge(a, b, weight, true)
    }

    /// Spread the nodes on a circle centered in the bounds.
    pub fn arrange_circle(&mut self) {
        let radius = config::NODE_RADIUS;
        let positions =
            GraphLayout::new().circle(self.arena.nodes.len(), self.config.bounds, radius);
        for (node, position) in self.arena.nodes.iter_mut().zip(positions) {
            node.set_position(position);
        }
        self.refresh_geometry();
    }

    /// Per-frame update: drags, edge geometry, draw list, then at most one
    /// algorithm step.
    ///
    /// The draw list is rebuilt before stepping, so the coloring a step
    /// produces (including the final demotion of the last node to visited)
    /// is drawn on the following frame.
    pub fn update(&mut self, input: &FrameInput) {
        self.update_drag(input);
        for node in &mut self.arena.nodes {
            node.update(input.pointer);
        }
        self.refresh_geometry();
        self.rebuild_draw_list();

        if self.paused {
            return;
        }

        if self.algorithm.step(&mut self.arena) {
            self.completed = true;
            self.paused = true;
            log::info!("{} finished; graph paused", self.action);
        }
    }

    /// Submit this frame's draw list to `canvas`.
    pub fn render(&self, canvas: &dyn Canvas) {
        for primitive in &self.draw_list {
            canvas.draw(primitive);
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.arena.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.arena.edges
    }

    pub fn draw_list(&self) -> &[DrawPrimitive] {
        &self.draw_list
    }

    pub fn action(&self) -> Action {
        self.action
    }

    pub fn algorithm(&self) -> &dyn AlgorithmState {
        self.algorithm.as_ref()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn number_of_nodes(&self) -> usize {
        self.config.size
    }

    // ===== Private helpers =====

    fn add_edge(&mut self, a: u32, b: u32, weight: u32, directed: bool) -> Result<EdgeIndex, GraphError> {
        if !self.paused {
            log::warn!("Edge {}-{} ignored: graph is running", a, b);
            return Err(GraphError::InvalidOperation("edit while running"));
        }
        if weight == 0 {
            return Err(GraphError::InvalidWeight(weight));
        }
        let first = self.arena.find_by_value(a).ok_or(GraphError::UnknownNode(a))?;
        let second = self.arena.find_by_value(b).ok_or(GraphError::UnknownNode(b))?;
        if first == second {
            return Err(GraphError::InvalidOperation("self loop"));
        }

        let edge = Edge::new(first, second, weight, directed, config::EDGE_WIDTH, &self.arena.nodes);
        self.arena.edges.push(edge);

        // Structure changed: algorithm state sized for the old graph is stale
        self.completed = false;
        self.reinit_algorithm();
        self.rebuild_draw_list();
        Ok(self.arena.edges.len() - 1)
    }

    fn reinit_algorithm(&mut self) {
        self.algorithm = algorithm::create(
            self.action,
            &mut self.arena,
            self.config.start,
            self.config.target,
        );
    }

    /// Only the topmost node under the pointer is picked up, so nodes stacked
    /// on the spawn point come off one at a time.
    fn update_drag(&mut self, input: &FrameInput) {
        if !self.paused || !input.left_held {
            for node in &mut self.arena.nodes {
                node.stop_drag();
            }
        }
        if self.paused && input.left_pressed {
            if let Some(node) = self
                .arena
                .nodes
                .iter_mut()
                .rev()
                .find(|n| n.contains(input.pointer))
            {
                log::debug!("Dragging node {}", node.value());
                node.start_drag();
            }
        }
    }

    fn refresh_geometry(&mut self) {
        let GraphArena { nodes, edges } = &mut self.arena;
        for edge in edges.iter_mut() {
            edge.update(nodes.as_slice());
        }
    }

    /// Edges first so nodes render on top; both in container order.
    fn rebuild_draw_list(&mut self) {
        self.draw_list.clear();
        self.draw_list
            .extend(self.arena.edges.iter().map(|e| DrawPrimitive::Edge(e.shape())));
        self.draw_list
            .extend(self.arena.nodes.iter().map(|n| DrawPrimitive::Node(n.shape())));
    }
}

fn spawn_nodes(arena: &mut GraphArena, sketch: &SketchConfig) {
    let (width, height) = sketch.bounds;
    for i in 0..sketch.size {
        arena.nodes.push(Node::new(
            i as u32 + 1,
            config::spawn_point(),
            config::NODE_RADIUS,
            width,
            height,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::Status;
    use std::cell::RefCell;

    fn config(size: usize, action: Action) -> SketchConfig {
        SketchConfig::new(size, action, (800.0, 800.0))
    }

    /// 1-2, 1-3, 2-4, 3-4 laid out on a circle.
    fn square(action: Action) -> Graph {
        let mut graph = Graph::new(config(4, action));
        graph.arrange_circle();
        graph.connect(1, 2, 1).unwrap();
        graph.connect(1, 3, 4).unwrap();
        graph.connect(2, 4, 2).unwrap();
        graph.connect(3, 4, 1).unwrap();
        graph
    }

    fn node(graph: &Graph, value: u32) -> Option<&Node> {
        graph.nodes().iter().find(|n| n.value() == value)
    }

    fn idle() -> FrameInput {
        FrameInput::default()
    }

    #[test]
    fn test_new_graph_is_paused_at_spawn_point() {
        let graph = Graph::new(config(5, Action::DepthFirstSearch));
        assert!(graph.is_paused());
        assert!(!graph.is_completed());
        assert_eq!(graph.nodes().len(), 5);
        assert!(graph.nodes().iter().all(|n| n.position() == config::spawn_point()));
        let values: Vec<u32> = graph.nodes().iter().map(|n| n.value()).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_updates_while_paused_do_not_step() {
        let mut graph = square(Action::BreadthFirstSearch);
        let before = graph.algorithm().progress();
        for _ in 0..20 {
            graph.update(&idle());
        }
        assert_eq!(graph.algorithm().progress(), before);
        assert_eq!(graph.algorithm().status(), Status::NotStarted);
    }

    #[test]
    fn test_one_step_per_update() {
        let mut graph = square(Action::BreadthFirstSearch);
        graph.resume().unwrap();
        graph.update(&idle());
        assert_eq!(graph.algorithm().progress().order.len(), 1);
        graph.update(&idle());
        assert_eq!(graph.algorithm().progress().order.len(), 2);

        graph.pause();
        let frozen = graph.algorithm().progress();
        graph.update(&idle());
        graph.update(&idle());
        assert_eq!(graph.algorithm().progress(), frozen);
    }

    #[test]
    fn test_completion_pauses_graph() {
        let mut graph = square(Action::DepthFirstSearch);
        graph.resume().unwrap();
        let mut frames = 0;
        while !graph.is_completed() {
            graph.update(&idle());
            frames += 1;
            assert!(frames < 100);
        }
        // Four visits plus the step that finds the frontier empty
        assert_eq!(frames, 5);
        assert!(graph.is_paused());
        assert!(graph.resume().is_err());
        assert!(graph.is_paused());
    }

    #[test]
    fn test_reset_rejected_while_running() {
        let mut graph = square(Action::DepthFirstSearch);
        graph.resume().unwrap();
        graph.update(&idle());

        let edges = graph.edges().len();
        assert_eq!(
            graph.reset(),
            Err(GraphError::InvalidOperation("reset while running"))
        );
        assert_eq!(graph.edges().len(), edges);
        assert!(!graph.is_paused());
    }

    #[test]
    fn test_reset_while_paused_respawns_nodes() {
        let mut graph = square(Action::Dijkstra);
        graph.resume().unwrap();
        while !graph.is_completed() {
            graph.update(&idle());
        }

        graph.reset().unwrap();
        assert_eq!(graph.nodes().len(), 4);
        assert!(graph.edges().is_empty());
        assert!(!graph.is_completed());
        assert!(graph.nodes().iter().all(|n| n.color() == NodeColor::Unvisited
            || n.color() == NodeColor::Highlighted));
        assert_eq!(graph.algorithm().status(), Status::NotStarted);
    }

    #[test]
    fn test_set_action_reinitializes_state() {
        let mut graph = square(Action::DepthFirstSearch);
        graph.resume().unwrap();
        while !graph.is_completed() {
            graph.update(&idle());
        }

        graph.set_action(Action::Dijkstra);
        assert_eq!(graph.action(), Action::Dijkstra);
        assert_eq!(graph.algorithm().action(), Action::Dijkstra);
        assert_eq!(graph.algorithm().status(), Status::NotStarted);
        assert!(!graph.is_completed());
        assert!(graph.edges().iter().all(|e| e.color() == EdgeColor::Default));

        graph.resume().unwrap();
        while !graph.is_completed() {
            graph.update(&idle());
        }
        assert_eq!(graph.algorithm().progress().distances, vec![0, 1, 4, 3]);
    }

    #[test]
    fn test_connect_validation() {
        let mut graph = Graph::new(config(3, Action::BreadthFirstSearch));
        assert_eq!(graph.connect(1, 9, 1), Err(GraphError::UnknownNode(9)));
        assert_eq!(graph.connect(1, 2, 0), Err(GraphError::InvalidWeight(0)));
        assert!(graph.connect(2, 2, 1).is_err());
        assert_eq!(graph.connect_directed(1, 2, 3), Ok(0));
        assert!(graph.edges()[0].shape().directed);

        graph.resume().unwrap();
        assert!(graph.connect(2, 3, 1).is_err());
    }

    #[test]
    fn test_draw_list_edges_before_nodes_in_stable_order() {
        let mut graph = square(Action::DepthFirstSearch);
        graph.update(&idle());
        let first: Vec<DrawPrimitive> = graph.draw_list().to_vec();

        assert_eq!(first.len(), 8);
        assert!(first[..4].iter().all(|p| matches!(p, DrawPrimitive::Edge(_))));
        let labels: Vec<&str> = first[4..]
            .iter()
            .map(|p| match p {
                DrawPrimitive::Node(n) => n.label.as_str(),
                DrawPrimitive::Edge(_) => panic!("edge after nodes"),
            })
            .collect();
        assert_eq!(labels, vec!["1", "2", "3", "4"]);

        graph.update(&idle());
        assert_eq!(graph.draw_list(), first.as_slice());
    }

    #[test]
    fn test_drag_picks_topmost_node_and_moves_edges() {
        let mut graph = Graph::new(config(3, Action::DepthFirstSearch));
        graph.connect(1, 3, 1).unwrap();
        let spawn = config::spawn_point();

        let grab = FrameInput {
            left_pressed: true,
            left_held: true,
            pointer: spawn,
            ..FrameInput::default()
        };
        graph.update(&grab);
        assert!(node(&graph, 3).is_some_and(|n| n.is_dragging()));
        assert!(!node(&graph, 1).is_some_and(|n| n.is_dragging()));

        let target = Vec2::new(spawn.x + 30.0, spawn.y + 40.0);
        graph.update(&FrameInput {
            left_held: true,
            pointer: target,
            ..FrameInput::default()
        });
        assert_eq!(node(&graph, 3).map(|n| n.position()), Some(target));
        assert_eq!(node(&graph, 1).map(|n| n.position()), Some(spawn));
        assert!((graph.edges()[0].length() - (50.0 + config::EDGE_WIDTH)).abs() < 1e-9);

        // Button up ends the drag even when the release signal was debounced
        graph.update(&FrameInput {
            pointer: Vec2::new(10.0, 10.0),
            ..FrameInput::default()
        });
        assert_eq!(node(&graph, 3).map(|n| n.position()), Some(target));
    }

    #[test]
    fn test_no_drag_while_running() {
        let mut graph = square(Action::DepthFirstSearch);
        let before = node(&graph, 1).map(|n| n.position());
        graph.resume().unwrap();
        let pointer = before.unwrap_or_default();
        graph.update(&FrameInput {
            left_pressed: true,
            left_held: true,
            pointer,
            ..FrameInput::default()
        });
        graph.update(&FrameInput {
            left_held: true,
            pointer: Vec2::new(100.0, 100.0),
            ..FrameInput::default()
        });
        assert_eq!(node(&graph, 1).map(|n| n.position()), before);
    }

    #[test]
    fn test_coincident_spawn_edges_are_finite() {
        let mut graph = Graph::new(config(2, Action::DepthFirstSearch));
        graph.connect(1, 2, 1).unwrap();
        graph.update(&idle());
        let edge = &graph.edges()[0];
        assert_eq!(edge.length(), config::EDGE_WIDTH);
        assert_eq!(edge.angle(), 0.0);
    }

    struct RecordingCanvas {
        calls: RefCell<Vec<String>>,
    }

    impl Canvas for RecordingCanvas {
        fn begin_frame(&mut self, _width: i32, _height: i32) {}
        fn end_frame(&mut self) {}
        fn fill_rect(&self, _x: f64, _y: f64, _w: f64, _h: f64, _color: Color) {}
        fn fill_circle(&self, _cx: f64, _cy: f64, _radius: f64, _color: Color) {
            self.calls.borrow_mut().push("circle".to_string());
        }
        fn stroke_circle(&self, _cx: f64, _cy: f64, _radius: f64, _color: Color, _line_width: f64) {}
        fn fill_rotated_rect(&self, _origin: Vec2, _length: f64, _width: f64, _angle: f64, _color: Color) {
            self.calls.borrow_mut().push("rect".to_string());
        }
        fn draw_text_centered(&self, _center: Vec2, text: &str, _size: f64, _color: Color) {
            self.calls.borrow_mut().push(format!("text:{}", text));
        }
    }

    #[test]
    fn test_render_submits_draw_list() {
        let mut graph = Graph::new(config(2, Action::BreadthFirstSearch));
        graph.arrange_circle();
        graph.connect(1, 2, 7).unwrap();
        let canvas = RecordingCanvas {
            calls: RefCell::new(Vec::new()),
        };
        graph.render(&canvas);

        let calls = canvas.calls.into_inner();
        assert_eq!(
            calls,
            vec!["rect", "text:7", "circle", "text:1", "circle", "text:2"]
        );
    }
}
