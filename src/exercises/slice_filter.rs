use clap::ValueEnum;

/// Returns a new vector holding only the elements of `items` that satisfy
/// `predicate`, in their original order.
pub fn filter<T, F>(items: &[T], predicate: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> bool,
{
    let mut kept = Vec::new();
    for item in items {
        if predicate(item) {
            kept.push(item.clone());
        }
    }
    kept
}

/// Named integer predicates, selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Predicate {
    Even,
    Odd,
    Positive,
    Negative,
}

impl Predicate {
    pub fn test(&self, value: &i64) -> bool {
        match self {
            Predicate::Even => value % 2 == 0,
            Predicate::Odd => value % 2 != 0,
            Predicate::Positive => *value > 0,
            Predicate::Negative => *value < 0,
        }
    }
}
