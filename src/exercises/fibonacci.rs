/// Iterator over the Fibonacci numbers: 0, 1, 1, 2, 3, 5, ...
///
/// Ends once the next term no longer fits in a `u64`.
#[derive(Debug, Clone)]
pub struct Fibonacci {
    current: Option<u64>,
    next: Option<u64>,
}

impl Fibonacci {
    pub fn new() -> Fibonacci {
        Fibonacci {
            current: Some(0),
            next: Some(1),
        }
    }
}

impl Default for Fibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Fibonacci {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let result = self.current?;
        let following = self.next.and_then(|next| result.checked_add(next));
        self.current = self.next;
        self.next = following;
        Some(result)
    }
}
