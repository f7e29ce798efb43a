use super::*;

fn nest(depth: u32) -> u32 {
    ensure_sufficient_stack(|| if depth == 0 { 0 } else { nest(depth - 1) + 1 })
}

#[test]
fn passes_through_closure_value() {
    assert_eq!(ensure_sufficient_stack(|| "слово"), "слово");
}

#[test]
fn shallow_nesting() {
    assert_eq!(nest(16), 16);
}

#[test]
fn nesting_deeper_than_default_stack() {
    // A frame per level; 200k levels overflows an 8MB main-thread stack.
    assert_eq!(nest(200_000), 200_000);
}

#[test]
fn propagates_errors() {
    let result: Result<u8, String> = ensure_sufficient_stack(|| Err("глубоко".to_string()));
    assert_eq!(result, Err("глубоко".to_string()));
}
