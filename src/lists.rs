use crate::error::{Error, Result};

/// Takes a two dimensional array and returns a new one where the rows of the
/// first become the columns of the second.
///
/// The number of columns comes from the first row. Any later row that is
/// shorter is an error; extra elements on longer rows are dropped.
pub fn rows_to_columns<T: Clone>(matrix: &[Vec<T>]) -> Result<Vec<Vec<T>>> {
    let Some(first) = matrix.first() else {
        return Ok(Vec::new());
    };
    let num_cols = first.len();

    if let Some((row, short)) = matrix
        .iter()
        .enumerate()
        .find(|(_, row)| row.len() < num_cols)
    {
        return Err(Error::RaggedMatrix {
            row,
            expected: num_cols,
            found: short.len(),
        });
    }

    Ok((0..num_cols)
        .map(|col| matrix.iter().map(|row| row[col].clone()).collect())
        .collect())
}

/// Iterator returned by [`list_to_rows`]
#[derive(Debug, Clone)]
pub struct ListToRows<I> {
    iter: I,
    size: usize,
}

impl<I: Iterator> Iterator for ListToRows<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut row = Vec::new();
        for item in self.iter.by_ref() {
            row.push(item);
            if row.len() == self.size {
                break;
            }
        }

        if row.is_empty() { None } else { Some(row) }
    }
}

/// Lazily splits anything iterable into rows of `size` items; the last row
/// may be shorter. A `size` of zero never fills a row, so everything comes
/// back as a single row.
pub fn list_to_rows<I: IntoIterator>(src: I, size: usize) -> ListToRows<I::IntoIter> {
    ListToRows {
        iter: src.into_iter(),
        size,
    }
}

/// Returns the head, the middle and the tail of a slice.
///
/// A single item is the head, with an empty middle and no tail.
pub fn head_tail_middle<T>(src: &[T]) -> (Option<&T>, &[T], Option<&T>) {
    match src {
        [] => (None, src, None),
        [head] => (Some(head), &src[1..], None),
        [head, middle @ .., tail] => (Some(head), middle, Some(tail)),
    }
}
