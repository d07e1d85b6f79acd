pub mod types;
pub use types::*;

use tracing::debug;

/// Furthest reaching `x` per diagonal `k`, indexed from `-size` to `size`.
#[derive(Clone)]
struct V {
    data: Vec<usize>,
    offset: isize,
}

impl V {
    fn new(size: usize) -> Self {
        V {
            data: vec![0; 2 * size + 1],
            offset: size as isize,
        }
    }

    fn get(&self, k: isize) -> usize {
        self.data[(k + self.offset) as usize]
    }

    fn set(&mut self, k: isize, val: usize) {
        self.data[(k + self.offset) as usize] = val;
    }

    /// Whether diagonal `k` at distance `d` is entered by a downward move
    /// (from `k + 1`). Equal reach goes to the downward move.
    fn enters_down(&self, d: isize, k: isize) -> bool {
        k == -d || (k != d && self.get(k - 1) < self.get(k + 1))
    }
}

/// Computes the edit script between two texts after breaking them into lines
/// on `'\n'` and running `diff`.
pub fn diff_lines(old: &str, new: &str) -> EditScript<String> {
    let old_lines: Vec<String> = old.split('\n').map(ToString::to_string).collect();
    let new_lines: Vec<String> = new.split('\n').map(ToString::to_string).collect();
    diff(&old_lines, &new_lines)
}

/// Computes a minimal edit script between two sequences using the Myers algorithm.
///
/// The number of non-`Equal` records is the smallest possible, so the `Equal`
/// records form a longest common subsequence of `old` and `new`.
///
/// # Examples
///
/// ```
/// use linepatch::myers::{diff, EditRecord};
///
/// let old = vec!["a", "b", "c"];
/// let new = vec!["a", "x", "c"];
/// let result = diff(&old, &new);
/// assert_eq!(result, vec![
///     EditRecord::equal("a"),
///     EditRecord::delete("b"),
///     EditRecord::insert("x"),
///     EditRecord::equal("c"),
/// ]);
/// ```
///
/// # Arguments
///
/// * `old` - The original sequence
/// * `new` - The new sequence
pub fn diff<T: Eq + Clone>(old: &[T], new: &[T]) -> EditScript<T> {
    if old.is_empty() {
        return new.iter().cloned().map(EditRecord::insert).collect();
    }
    if new.is_empty() {
        return old.iter().cloned().map(EditRecord::delete).collect();
    }

    let n = old.len();
    let m = new.len();
    let maxi = n + m;
    let mut v = V::new(maxi);
    // trace[d] holds the reach left by distance d - 1, which is all that
    // round d reads.
    let mut trace: Vec<V> = Vec::new();
    'edits: for d in 0..=maxi as isize {
        trace.push(v.clone());
        for k in (-d..=d).step_by(2) {
            let mut x = if v.enters_down(d, k) {
                v.get(k + 1)
            } else {
                v.get(k - 1) + 1
            };
            let mut y = (x as isize - k) as usize;
            while x < n && y < m && old[x] == new[y] {
                x += 1;
                y += 1;
            }
            v.set(k, x);
            if x >= n && y >= m {
                break 'edits;
            }
        }
    }

    let script = traceback(old, new, &trace);
    debug!(
        old_len = n,
        new_len = m,
        distance = trace.len() - 1,
        records = script.len(),
        "computed edit script"
    );
    script
}

/// Walks the recorded reach back from `(old.len(), new.len())` to the origin,
/// re-deriving at every distance which move led onto the current diagonal.
fn traceback<T: Clone>(old: &[T], new: &[T], trace: &[V]) -> EditScript<T> {
    let mut x = old.len();
    let mut y = new.len();
    let mut script: EditScript<T> = Vec::with_capacity(x + y);

    for (d, v) in trace.iter().enumerate().skip(1).rev() {
        let d = d as isize;
        let k = x as isize - y as isize;
        let down = v.enters_down(d, k);
        let prev_k = if down { k + 1 } else { k - 1 };
        let prev_x = v.get(prev_k);
        let prev_y = (prev_x as isize - prev_k) as usize;
        // where the snake of this round starts
        let (start_x, start_y) = if down {
            (prev_x, prev_y + 1)
        } else {
            (prev_x + 1, prev_y)
        };
        while x > start_x && y > start_y {
            script.push(EditRecord::equal(old[x - 1].clone()));
            x -= 1;
            y -= 1;
        }
        if down {
            script.push(EditRecord::insert(new[y - 1].clone()));
            y -= 1;
        } else {
            script.push(EditRecord::delete(old[x - 1].clone()));
            x -= 1;
        }
    }
    while x > 0 && y > 0 {
        script.push(EditRecord::equal(old[x - 1].clone()));
        x -= 1;
        y -= 1;
    }
    debug_assert!(x == 0 && y == 0);

    script.reverse();
    script
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn count(script: &[EditRecord<u8>], op: EditOp) -> usize {
        script.iter().filter(|r| r.op == op).count()
    }

    proptest! {
        #[test]
        fn test_length_invariant(old: Vec<u8>, new: Vec<u8>) {
            let result = diff(&old, &new);
            let deletes = count(&result, EditOp::Delete);
            let equals = count(&result, EditOp::Equal);
            let inserts = count(&result, EditOp::Insert);
            prop_assert_eq!(old.len(), deletes + equals);
            prop_assert_eq!(new.len(), inserts + equals);
        }

        #[test]
        fn test_sides_reproduce_inputs(
            old in prop::collection::vec(0u8..4, 0..30),
            new in prop::collection::vec(0u8..4, 0..30),
        ) {
            let result = diff(&old, &new);
            let old_side: Vec<u8> = result.iter().filter(|r| r.consumes_old()).map(|r| r.line).collect();
            let new_side: Vec<u8> = result.iter().filter(|r| r.produces_new()).map(|r| r.line).collect();
            prop_assert_eq!(old_side, old);
            prop_assert_eq!(new_side, new);
        }

        #[test]
        fn test_idempotency(els: Vec<u8>) {
            let result = diff(&els, &els);
            let expected: EditScript<u8> = els.iter().map(|e| EditRecord::equal(*e)).collect();
            prop_assert_eq!(result, expected);
        }

        #[test]
        fn test_new_empty(els: Vec<u8>) {
            let result = diff(&els, &Vec::new());
            let expected: EditScript<u8> = els.iter().map(|e| EditRecord::delete(*e)).collect();
            prop_assert_eq!(result, expected);
        }

        #[test]
        fn test_old_empty(els: Vec<u8>) {
            let result = diff(&Vec::new(), &els);
            let expected: EditScript<u8> = els.iter().map(|e| EditRecord::insert(*e)).collect();
            prop_assert_eq!(result, expected);
        }

        #[test]
        fn test_symmetry(old: Vec<u8>, new: Vec<u8>) {
            let result = diff(&old, &new);
            let result_2 = diff(&new, &old);

            prop_assert_eq!(count(&result, EditOp::Equal), count(&result_2, EditOp::Equal));
            prop_assert_eq!(count(&result, EditOp::Insert), count(&result_2, EditOp::Delete));
            prop_assert_eq!(count(&result, EditOp::Delete), count(&result_2, EditOp::Insert));
        }
    }

    #[test]
    fn test_both_empty() {
        let empty: Vec<String> = vec![];
        assert_eq!(diff(&empty, &empty), vec![]);
    }

    #[test]
    fn test_diff_lines() {
        let old = "hello\nworld\nfoo";
        let new = "hello\nrust\nfoo";
        let result = diff_lines(old, new);
        assert_eq!(
            result,
            vec![
                EditRecord::equal("hello".to_string()),
                EditRecord::delete("world".to_string()),
                EditRecord::insert("rust".to_string()),
                EditRecord::equal("foo".to_string()),
            ]
        );
    }

    #[test]
    fn test_diff_lines_trailing_newline() {
        let result = diff_lines("a\n", "a");
        assert_eq!(
            result,
            vec![
                EditRecord::equal("a".to_string()),
                EditRecord::delete(String::new()),
            ]
        );
    }

    #[test]
    fn test_simple_diff() {
        let old = vec!["a", "b", "c"];
        let new = vec!["a", "x", "c"];
        let result = diff(&old, &new);
        assert_eq!(
            result,
            [
                EditRecord::equal("a"),
                EditRecord::delete("b"),
                EditRecord::insert("x"),
                EditRecord::equal("c")
            ]
        );
    }

    #[test]
    fn test_swap() {
        let old = vec!["a", "b"];
        let new = vec!["b", "a"];
        let result = diff(&old, &new);
        assert_eq!(
            result,
            [
                EditRecord::delete("a"),
                EditRecord::equal("b"),
                EditRecord::insert("a")
            ]
        );
    }

    #[test]
    fn test_completely_different() {
        let old = vec!["a", "b", "c"];
        let new = vec!["x", "y", "z"];
        let result = diff(&old, &new);
        assert_eq!(
            result,
            vec![
                EditRecord::delete("a"),
                EditRecord::delete("b"),
                EditRecord::delete("c"),
                EditRecord::insert("x"),
                EditRecord::insert("y"),
                EditRecord::insert("z")
            ]
        )
    }

    #[test]
    fn test_single_element_different() {
        let old = vec!["a"];
        let new = vec!["b"];
        let result = diff(&old, &new);
        assert_eq!(result, vec![EditRecord::delete("a"), EditRecord::insert("b")]);
    }

    #[test]
    fn test_duplicates() {
        let old = vec!["a", "a", "b"];
        let new = vec!["a", "b", "b"];
        let result = diff(&old, &new);
        assert_eq!(
            result,
            vec![
                EditRecord::equal("a"),
                EditRecord::delete("a"),
                EditRecord::equal("b"),
                EditRecord::insert("b")
            ]
        );
    }

    #[test]
    fn test_insertion_in_middle() {
        let old = vec!["a", "c"];
        let new = vec!["a", "b", "c"];
        let result = diff(&old, &new);
        assert_eq!(
            result,
            vec![
                EditRecord::equal("a"),
                EditRecord::insert("b"),
                EditRecord::equal("c")
            ]
        );
    }

    // the worked example from Myers' paper
    #[test]
    fn test_paper_example() {
        let old: Vec<char> = "ABCABBA".chars().collect();
        let new: Vec<char> = "CBABAC".chars().collect();
        let result = diff(&old, &new);
        assert_eq!(
            result,
            vec![
                EditRecord::delete('A'),
                EditRecord::delete('B'),
                EditRecord::equal('C'),
                EditRecord::insert('B'),
                EditRecord::equal('A'),
                EditRecord::equal('B'),
                EditRecord::delete('B'),
                EditRecord::equal('A'),
                EditRecord::insert('C'),
            ]
        );
        assert_eq!(distance(&result), 5);
    }
}
