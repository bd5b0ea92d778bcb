use crate::table::{BlockGroups, ClassifiedTable};

/// A borrowed selection of rows of a [`ClassifiedTable`], in ascending row order.
#[derive(Debug, Clone)]
pub struct RowSet<'a> {
    table: &'a ClassifiedTable,
    rows: Vec<usize>,
}

impl<'a> RowSet<'a> {
    pub(crate) fn new(table: &'a ClassifiedTable, rows: Vec<usize>) -> Self {
        debug_assert!(rows.iter().all(|&row| row < table.len()), "row out of range");
        debug_assert!(rows.windows(2).all(|w| w[0] < w[1]), "rows must be strictly ascending");
        Self { table, rows }
    }

    /// The table these rows belong to.
    #[inline] pub fn table(&self) -> &'a ClassifiedTable { self.table }

    /// Base table behind the classified table.
    #[inline] pub fn base(&self) -> &'a BlockGroups { self.table.base() }

    #[inline] pub fn len(&self) -> usize { self.rows.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Row indices into the table.
    #[inline] pub fn indices(&self) -> &[usize] { &self.rows }

    /// Iterator over row indices.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.rows.iter().copied()
    }

    /// Rows of this set for which `predicate` holds.
    pub fn filter(&self, mut predicate: impl FnMut(usize) -> bool) -> RowSet<'a> {
        RowSet::new(self.table, self.iter().filter(|&row| predicate(row)).collect())
    }
}
