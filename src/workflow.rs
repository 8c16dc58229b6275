//! Workflow snapshot collaborator.
//!
//! Hosts persist prompts inside a serialized workflow: a JSON document
//! whose nodes carry a `widgets_values` array of widget states. At
//! serialization time every string value in that array is replaced with
//! its resolved form, so the persisted snapshot records the concrete
//! prompt that was actually used.

use serde_json::Value;

use crate::expand::{resolve_prompt, RandomSource};

/// Resolve every string entry of a node's `widgets_values` array in place.
///
/// Non-string entries (numbers, booleans, nested arrays) and nodes without
/// a `widgets_values` array are left untouched. Returns the number of
/// values rewritten.
pub fn resolve_widget_values(node: &mut Value, rng: &mut dyn RandomSource) -> usize {
    let Some(values) = node.get_mut("widgets_values").and_then(Value::as_array_mut) else {
        return 0;
    };

    let mut resolved = 0;
    for value in values.iter_mut() {
        if let Value::String(text) = value {
            *text = resolve_prompt(text, rng);
            resolved += 1;
        }
    }
    resolved
}

/// Resolve `widgets_values` across every node of a workflow document.
///
/// Works on the standard layout: a top-level `nodes` array of node
/// objects. Returns the total number of values rewritten.
pub fn resolve_workflow(workflow: &mut Value, rng: &mut dyn RandomSource) -> usize {
    let Some(nodes) = workflow.get_mut("nodes").and_then(Value::as_array_mut) else {
        return 0;
    };

    nodes
        .iter_mut()
        .map(|node| resolve_widget_values(node, rng))
        .sum()
}
