// Diamond-shaped graph: the same leaf reaches the output through two paths,
// and its gradient is the sum of both contributions.
use gradstack_core::{AutogradError, Graph};

fn main() -> Result<(), AutogradError> {
    let mut graph = Graph::new();
    let a = graph.leaf(1.0);
    let b = graph.leaf(3.0);
    let c = graph.leaf(5.0);
    let ab = graph.add(a, b)?;
    let ac = graph.mul(a, c)?;
    let out = graph.add(ab, ac)?;

    graph.backward(out)?;

    println!("Evaluation order (ancestors first):");
    for id in graph.topological_order(out)? {
        let node = graph.node(id)?;
        println!(
            "  {:<6} {:<5} value={:<6} grad={}",
            id.to_string(),
            node.op().name(),
            node.value(),
            node.grad()
        );
    }
    println!("d out / d a = {} (1 via a+b, plus c=5 via a*c)", graph.grad(a)?);

    let released = graph.release_pass();
    println!("Released {} nodes", released);
    Ok(())
}
