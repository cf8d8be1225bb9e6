//! CLI command implementations.
//!
//! Each `cmd_*` function applies one operation to the session graph and
//! writes its result as text or JSON. Rejections are returned as errors and
//! reported by the caller.

use std::io::Write;

use crate::graph::{Graph, TraversalKind};
use crate::types::{GraphError, GraphResult, VertexId, VertexModel};

/// All command codes with their menu text.
pub const COMMANDS: &[(char, &str)] = &[
    ('z', "Initialize Graph"),
    ('v', "Insert Vertex"),
    ('e', "Insert Edge"),
    ('d', "Depth First Search"),
    ('b', "Breadth First Search"),
    ('p', "Print Graph"),
    ('h', "Help"),
    ('q', "Quit"),
];

const RULE: &str = "----------------------------------------------------------------";

/// Convert a raw operand into a vertex index.
///
/// Negative values are reported as out of range; the upper bound is checked
/// by the graph itself.
pub fn to_vertex(graph: &Graph, raw: i64) -> GraphResult<VertexId> {
    let vertex = usize::try_from(raw).map_err(|_| GraphError::OutOfRange {
        vertex: raw,
        capacity: graph.capacity(),
    })?;
    graph.check_vertex(vertex)
}

/// Render the command menu.
pub fn menu_text(model: VertexModel) -> String {
    let mut text = format!("\n{RULE}\nGraph Searches ({model} vertices)\n{RULE}\n");
    for (code, label) in COMMANDS {
        if *code == 'v' && model == VertexModel::Implicit {
            text.push_str(&format!("{label} = {code} (Not used, all vertices are implicit)\n"));
        } else {
            text.push_str(&format!("{label} = {code}\n"));
        }
    }
    text.push_str(RULE);
    text.push('\n');
    text
}

/// Discard all vertices and edges.
pub fn cmd_initialize<W: Write>(graph: &mut Graph, out: &mut W, json: bool) -> GraphResult<()> {
    graph.reinitialize();
    if json {
        writeln!(out, "{}", serde_json::json!({"command": "initialize"}))?;
    } else {
        writeln!(out, "Graph initialized.")?;
    }
    Ok(())
}

/// Add one vertex (explicit model).
pub fn cmd_insert_vertex<W: Write>(
    graph: &mut Graph,
    vertex: i64,
    out: &mut W,
    json: bool,
) -> GraphResult<()> {
    if graph.model() == VertexModel::Implicit {
        return Err(GraphError::UnsupportedInModel {
            operation: "Insert vertex",
            model: graph.model(),
        });
    }
    let v = to_vertex(graph, vertex)?;
    graph.add_vertex(v)?;
    if json {
        writeln!(out, "{}", serde_json::json!({"command": "insert_vertex", "vertex": v}))?;
    } else {
        writeln!(out, "Vertex {} added.", v)?;
    }
    Ok(())
}

/// Add one undirected edge.
pub fn cmd_insert_edge<W: Write>(
    graph: &mut Graph,
    a: i64,
    b: i64,
    out: &mut W,
    json: bool,
) -> GraphResult<()> {
    let a = to_vertex(graph, a)?;
    let b = to_vertex(graph, b)?;
    graph.add_edge(a, b)?;
    if json {
        writeln!(out, "{}", serde_json::json!({"command": "insert_edge", "a": a, "b": b}))?;
    } else {
        writeln!(out, "Edge added between {} and {}.", a, b)?;
    }
    Ok(())
}

/// Reset the visited flags and run a traversal from `start`.
pub fn cmd_search<W: Write>(
    graph: &mut Graph,
    kind: TraversalKind,
    start: i64,
    out: &mut W,
    json: bool,
) -> GraphResult<Vec<VertexId>> {
    let start = to_vertex(graph, start)?;
    graph.reset_visited();
    let visited = kind.run(graph, start)?;

    if json {
        writeln!(
            out,
            "{}",
            serde_json::json!({
                "command": kind.name(),
                "start": start,
                "visited": visited,
            })
        )?;
    } else {
        for v in &visited {
            writeln!(out, "Visited {}", v)?;
        }
    }
    Ok(visited)
}

/// Dump every non-empty adjacency list.
pub fn cmd_print<W: Write>(graph: &Graph, out: &mut W, json: bool) -> GraphResult<()> {
    if json {
        writeln!(
            out,
            "{}",
            serde_json::json!({
                "command": "print",
                "model": graph.model(),
                "vertices": graph.vertex_count(),
                "edges": graph.edge_count(),
                "rows": graph.adjacency_rows(),
            })
        )?;
    } else {
        write!(out, "{}", graph)?;
    }
    Ok(())
}

/// Say goodbye.
pub fn cmd_quit<W: Write>(out: &mut W, json: bool) -> GraphResult<()> {
    if json {
        writeln!(out, "{}", serde_json::json!({"command": "quit"}))?;
    } else {
        writeln!(out, "Quitting program.")?;
    }
    Ok(())
}

/// Report a rejected command without ending the session.
pub fn report_error<W: Write>(err: &GraphError, out: &mut W, json: bool) -> GraphResult<()> {
    if json {
        writeln!(out, "{}", serde_json::json!({"error": err.to_string()}))?;
    } else {
        writeln!(out, "{}.", err)?;
    }
    Ok(())
}
