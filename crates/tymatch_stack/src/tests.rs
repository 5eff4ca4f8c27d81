use super::*;

#[test]
fn shallow_recursion_returns_result() {
    fn depth(n: u32) -> u32 {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { depth(n - 1) + 1 })
    }

    assert_eq!(depth(16), 16);
}

#[test]
fn deep_recursion_does_not_overflow() {
    // Roughly the depth of a pathological nested list annotation
    fn nest(n: u64) -> u64 {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { nest(n - 1) + 1 })
    }

    assert_eq!(nest(100_000), 100_000);
}

#[test]
fn passes_through_result_values() {
    let result: Result<u8, &str> = ensure_sufficient_stack(|| Err("rejected"));
    assert_eq!(result, Err("rejected"));
}
