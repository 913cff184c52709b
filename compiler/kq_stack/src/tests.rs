use super::ensure_sufficient_stack;

/// Mimics the evaluator: a linked chain of nested nodes walked recursively.
enum Node {
    Leaf(i64),
    Neg(Box<Node>),
}

fn build(depth: usize) -> Node {
    let mut node = Node::Leaf(1);
    for _ in 0..depth {
        node = Node::Neg(Box::new(node));
    }
    node
}

fn eval(node: &Node) -> i64 {
    ensure_sufficient_stack(|| match node {
        Node::Leaf(v) => *v,
        Node::Neg(inner) => -eval(inner),
    })
}

fn drop_iteratively(mut node: Node) {
    while let Node::Neg(inner) = node {
        node = *inner;
    }
}

#[test]
fn shallow_nesting() {
    let tree = build(3);
    assert_eq!(eval(&tree), -1);
    drop_iteratively(tree);
}

#[test]
fn deep_nesting_does_not_overflow() {
    let tree = build(200_000);
    assert_eq!(eval(&tree), 1);
    drop_iteratively(tree);
}

#[test]
fn passes_errors_through() {
    let result: Result<u8, String> = ensure_sufficient_stack(|| Err("boom".to_string()));
    assert_eq!(result, Err("boom".to_string()));
}
