use super::*;

fn three_vertices() -> Digraph<i32, f64> {
    let mut graph = Digraph::new();
    graph.add_vertex(1, 10).unwrap();
    graph.add_vertex(2, 20).unwrap();
    graph.add_vertex(3, 30).unwrap();
    graph
}

/// Three vertices, five edges, one self-loop on 3.
fn with_edges() -> Digraph<i32, f64> {
    let mut graph = three_vertices();
    graph.add_edge(1, 2, 5.0).unwrap();
    graph.add_edge(2, 3, 17.0).unwrap();
    graph.add_edge(3, 1, 100.0).unwrap();
    graph.add_edge(3, 2, 101.0).unwrap();
    graph.add_edge(3, 3, 102.0).unwrap();
    graph
}

#[test]
fn new_graph_is_empty() {
    let graph: Digraph<(), ()> = Digraph::new();
    assert!(graph.is_empty());
    assert_eq!(graph.vertex_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.vertices().is_empty());
    assert!(graph.edges().is_empty());
    assert_eq!(graph, Digraph::default());
}

#[test]
fn vertices_are_listed_in_key_order() {
    let mut graph: Digraph<&str, ()> = Digraph::new();
    graph.add_vertex(30, "c").unwrap();
    graph.add_vertex(-4, "a").unwrap();
    graph.add_vertex(7, "b").unwrap();
    assert_eq!(graph.vertices(), vec![-4, 7, 30]);
    assert_eq!(graph.vertex_count(), 3);
}

#[test]
fn duplicate_vertex_is_rejected_and_payload_kept() {
    let mut graph = three_vertices();
    assert_eq!(graph.add_vertex(2, 99), Err(DigraphError::DuplicateVertex(2)));
    assert_eq!(graph.vertex_info(2), Ok(&20));
    assert_eq!(graph.vertex_count(), 3);
}

#[test]
fn edges_keep_insertion_order_per_vertex() {
    let graph = with_edges();
    assert_eq!(graph.edges_from(3).unwrap(), vec![(3, 1), (3, 2), (3, 3)]);
    assert_eq!(graph.edges(), vec![(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)]);
}

#[test]
fn add_edge_requires_both_endpoints() {
    let mut graph = three_vertices();
    assert_eq!(graph.add_edge(1, 4, 1.0), Err(DigraphError::UnknownVertex(4)));
    assert_eq!(graph.add_edge(4, 1, 1.0), Err(DigraphError::UnknownVertex(4)));
    assert_eq!(graph.add_edge(8, 9, 1.0), Err(DigraphError::UnknownVertex(8)));
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn duplicate_edge_is_rejected_and_count_unchanged() {
    let mut graph = with_edges();
    assert_eq!(
        graph.add_edge(1, 2, 9.0),
        Err(DigraphError::DuplicateEdge { from: 1, to: 2 })
    );
    assert_eq!(graph.edge_count(), 5);
    assert_eq!(graph.edge_info(1, 2), Ok(&5.0));
}

#[test]
fn reverse_edge_is_a_distinct_pair() {
    let mut graph = three_vertices();
    graph.add_edge(1, 2, 1.0).unwrap();
    graph.add_edge(2, 1, 2.0).unwrap();
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.edge_info(2, 1), Ok(&2.0));
}

#[test]
fn payload_accessors() {
    let graph = with_edges();
    assert_eq!(graph.vertex_info(1), Ok(&10));
    assert_eq!(graph.vertex_info(3), Ok(&30));
    assert_eq!(graph.edge_info(3, 1), Ok(&100.0));
    assert_eq!(graph.edge_info(3, 3), Ok(&102.0));

    assert_eq!(graph.vertex_info(4), Err(DigraphError::UnknownVertex(4)));
    assert_eq!(graph.edge_info(1, 3), Err(DigraphError::UnknownEdge { from: 1, to: 3 }));
    assert_eq!(graph.edge_info(1, 7), Err(DigraphError::UnknownVertex(7)));
    assert_eq!(graph.edge_info(7, 1), Err(DigraphError::UnknownVertex(7)));
}

#[test]
fn payloads_can_be_edited_in_place() {
    let mut graph = with_edges();
    *graph.vertex_info_mut(2).unwrap() += 1;
    *graph.edge_info_mut(2, 3).unwrap() = 18.5;
    assert_eq!(graph.vertex_info(2), Ok(&21));
    assert_eq!(graph.edge_info(2, 3), Ok(&18.5));
    assert_eq!(
        graph.edge_info_mut(2, 1).map(|w| *w),
        Err(DigraphError::UnknownEdge { from: 2, to: 1 })
    );
}

#[test]
fn counts_track_every_mutation() {
    let mut graph = with_edges();
    graph.add_edge(2, 2, 14.0).unwrap();

    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 6);
    assert_eq!(graph.edge_count_from(3), Ok(3));
    assert_eq!(graph.edge_count_from(9), Err(DigraphError::UnknownVertex(9)));

    graph.remove_vertex(3).unwrap();
    graph.remove_edge(1, 2).unwrap();

    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.edges(), vec![(2, 2)]);
}

#[test]
fn remove_vertex_purges_incoming_and_outgoing_edges() {
    let mut graph = with_edges();
    assert_eq!(graph.remove_vertex(3), Ok(30));

    assert_eq!(graph.vertices(), vec![1, 2]);
    assert_eq!(graph.edges(), vec![(1, 2)]);
    assert_eq!(graph.edge_count(), 1);
    assert!(!graph.contains_vertex(3));
}

#[test]
fn remove_vertex_with_only_a_self_loop() {
    let mut graph = three_vertices();
    graph.add_edge(2, 2, 1.0).unwrap();
    graph.remove_vertex(2).unwrap();
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn failed_removals_leave_counts_alone() {
    let mut graph = with_edges();
    assert_eq!(graph.remove_vertex(8), Err(DigraphError::UnknownVertex(8)));
    assert_eq!(graph.remove_edge(1, 3), Err(DigraphError::UnknownEdge { from: 1, to: 3 }));
    assert_eq!(graph.remove_edge(1, 8), Err(DigraphError::UnknownVertex(8)));
    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 5);
}

#[test]
fn remove_edge_returns_payload_and_keeps_order() {
    let mut graph = with_edges();
    assert_eq!(graph.remove_edge(3, 1), Ok(100.0));
    assert_eq!(graph.remove_edge(1, 2), Ok(5.0));
    assert_eq!(graph.vertices().len(), 3);
    assert_eq!(graph.edges(), vec![(2, 3), (3, 2), (3, 3)]);
    assert!(!graph.contains_edge(3, 1));
    assert!(graph.contains_edge(3, 2));
}

#[test]
fn clone_is_deep() {
    let original = with_edges();
    let mut copy = original.clone();
    assert_eq!(copy.vertices(), original.vertices());
    assert_eq!(copy.edges(), original.edges());

    copy.remove_vertex(1).unwrap();
    *copy.edge_info_mut(2, 3).unwrap() = 0.0;

    assert_eq!(original.vertex_count(), 3);
    assert_eq!(original.edge_count(), 5);
    assert_eq!(original.edge_info(2, 3), Ok(&17.0));
}

#[test]
fn clone_from_replaces_previous_contents() {
    let source = with_edges();
    let mut target: Digraph<i32, f64> = Digraph::new();
    target.add_vertex(1, 200).unwrap();
    target.add_vertex(9, 900).unwrap();
    target.add_edge(9, 1, 150.0).unwrap();

    target.clone_from(&source);
    assert_eq!(target, source);
    assert_eq!(target.vertex_info(1), Ok(&10));
}

#[test]
fn take_leaves_an_empty_graph() {
    let mut source = with_edges();
    let moved = std::mem::take(&mut source);

    assert_eq!(moved.vertex_count(), 3);
    assert_eq!(moved.edge_count(), 5);
    assert!(source.is_empty());
    assert_eq!(source.edge_count(), 0);

    // The emptied graph is fully usable.
    source.add_vertex(1, 1).unwrap();
    assert_eq!(source.vertices(), vec![1]);
}

#[test]
fn clear_resets_counters() {
    let mut graph = with_edges();
    graph.clear();
    assert!(graph.is_empty());
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn map_transforms_payloads_and_keeps_structure() {
    let graph = with_edges();
    let labelled = graph.map(|v| format!("v{v}"), |w| w.round() as u32);

    assert_eq!(labelled.vertices(), graph.vertices());
    assert_eq!(labelled.edges(), graph.edges());
    assert_eq!(labelled.edge_count(), graph.edge_count());
    assert_eq!(labelled.vertex_info(3).map(String::as_str), Ok("v30"));
    assert_eq!(labelled.edge_info(2, 3), Ok(&17));
}

#[test]
fn vertex_records_expose_outgoing_edges() {
    let graph = with_edges();
    let vertex = graph.vertex(3).unwrap();
    assert_eq!(vertex.info(), &30);
    assert_eq!(vertex.out_degree(), 3);

    let edge = &vertex.edges()[2];
    assert_eq!(edge.endpoints(), (3, 3));
    assert_eq!((edge.from(), edge.to()), (3, 3));
    assert_eq!(edge.info(), &102.0);

    let total: usize = graph.iter().map(|(_, v)| v.out_degree()).sum();
    assert_eq!(total, graph.edge_count());
    assert_eq!(graph.out_edges(1).unwrap().len(), 1);
}

#[cfg(debug_assertions)]
#[test]
fn invariants_hold_after_mutation() {
    let mut graph = with_edges();
    graph.remove_vertex(2).unwrap();
    assert!(graph.validate_invariants());
}

#[test]
fn large_ring_builds_without_whole_graph_rechecks() {
    // Edge mutations only re-check their own slot, so building stays
    // near-linear even in debug builds.
    let n = 50_000;
    let mut graph: Digraph<(), u32> = Digraph::new();
    for k in 0..n {
        graph.add_vertex(k, ()).unwrap();
    }
    for k in 0..n {
        graph.add_edge(k, (k + 1) % n, 1).unwrap();
    }
    graph.remove_edge(0, 1).unwrap();
    graph.remove_vertex(n / 2).unwrap();

    assert_eq!(graph.vertex_count(), 49_999);
    assert_eq!(graph.edge_count(), 49_997);
    assert!(!graph.is_strongly_connected());
    #[cfg(debug_assertions)]
    assert!(graph.validate_invariants());
}

#[test]
fn source_endpoint_is_reported_before_target() {
    let mut graph = with_edges();
    assert_eq!(graph.add_edge(8, 9, 1.0), Err(DigraphError::UnknownVertex(8)));
    assert_eq!(graph.remove_edge(8, 9), Err(DigraphError::UnknownVertex(8)));
    assert_eq!(graph.edge_info_mut(8, 9), Err(DigraphError::UnknownVertex(8)));
    assert_eq!(graph.edge_info(8, 9), Err(DigraphError::UnknownVertex(8)));
    assert_eq!(graph.remove_edge(1, 9), Err(DigraphError::UnknownVertex(9)));
    assert_eq!(graph.edge_info_mut(1, 9), Err(DigraphError::UnknownVertex(9)));
    assert_eq!(graph.edge_count(), 5);
}
