use indexmap::IndexMap;

/// Column-major table of string values keyed by header name.
///
/// "." is the null sentinel throughout. Every column holds one value per row,
/// and column order is the order they'll be written back out in.
#[derive(Debug, Clone, Default)]
pub struct Table {
    columns: IndexMap<String, Vec<String>>,
}

impl Table {
    pub fn new() -> Self {
        Self {
            columns: IndexMap::new(),
        }
    }

    pub fn n_rows(&self) -> usize {
        self.columns.first().map(|(_, v)| v.len()).unwrap_or(0)
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn header(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.get_index_of(name)
    }

    pub fn column(&self, name: &str) -> Option<&[String]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    pub fn column_mut(&mut self, name: &str) -> Option<&mut Vec<String>> {
        self.columns.get_mut(name)
    }

    /// Fetch a column that a transformation cannot do without
    pub fn require(&self, name: &str) -> &[String] {
        match self.columns.get(name) {
            Some(values) => values,
            None => {
                error!("'{}' column not found", name);
                std::process::exit(1);
            }
        }
    }

    /// Position of a column that a transformation cannot do without
    pub fn require_index(&self, name: &str) -> usize {
        match self.columns.get_index_of(name) {
            Some(idx) => idx,
            None => {
                error!("'{}' column not found", name);
                std::process::exit(1);
            }
        }
    }

    /// Append a column. Duplicated header names are fatal, they would
    /// silently shadow each other once keyed by name.
    pub fn push_column(&mut self, name: impl Into<String>, values: Vec<String>) {
        let name = name.into();
        if self.columns.insert(name.clone(), values).is_some() {
            error!("duplicated column '{}'", name);
            std::process::exit(1);
        }
    }

    /// Insert a column at a position, shifting the rest right
    pub fn insert_column(&mut self, index: usize, name: impl Into<String>, values: Vec<String>) {
        let name = name.into();
        if self.columns.contains_key(&name) {
            error!("duplicated column '{}'", name);
            std::process::exit(1);
        }
        self.columns.shift_insert(index, name, values);
    }

    /// Remove a column by name, preserving the order of the rest
    pub fn drop_column(&mut self, name: &str) -> Option<Vec<String>> {
        self.columns.shift_remove(name)
    }

    /// Rename a column in place. Returns false when `old` isn't present.
    pub fn rename_column(&mut self, old: &str, new: &str) -> bool {
        let Some(idx) = self.columns.get_index_of(old) else {
            return false;
        };
        if let Some((_, values)) = self.columns.shift_remove_index(idx) {
            self.columns.shift_insert(idx, new.to_string(), values);
        }
        true
    }

    /// Move a column to a new position, shifting the ones between
    pub fn move_column(&mut self, name: &str, to: usize) {
        if let Some(from) = self.columns.get_index_of(name) {
            self.columns.move_index(from, to);
        }
    }

    /// Keep only the rows flagged true in `keep`
    pub fn retain_rows(&mut self, keep: &[bool]) {
        for values in self.columns.values_mut() {
            let mut row = 0;
            values.retain(|_| {
                let k = keep[row];
                row += 1;
                k
            });
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.columns
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// One row of cells in column order
    pub fn row(&self, index: usize) -> Vec<&str> {
        self.columns
            .values()
            .map(|values| values[index].as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn build() -> Table {
        let mut table = Table::new();
        table.push_column("Chr", strings(&["chr1", "chr2", "chr3"]));
        table.push_column("Start", strings(&["100", "200", "300"]));
        table.push_column("Ref", strings(&["A", "C", "G"]));
        table
    }

    #[test]
    fn test_shape() {
        let table = build();
        assert_eq!(table.n_rows(), 3);
        assert_eq!(table.n_cols(), 3);
        assert_eq!(
            table.header().collect::<Vec<_>>(),
            vec!["Chr", "Start", "Ref"]
        );
    }

    #[test]
    fn test_rename_preserves_position() {
        let mut table = build();
        assert!(table.rename_column("Start", "position"));
        assert_eq!(table.position("position"), Some(1));
        assert_eq!(table.column("position").unwrap()[0], "100");
        assert!(!table.rename_column("Start", "again"));
    }

    #[test]
    fn test_insert_and_move() {
        let mut table = build();
        table.insert_column(1, "End", strings(&["150", "250", "350"]));
        assert_eq!(
            table.header().collect::<Vec<_>>(),
            vec!["Chr", "End", "Start", "Ref"]
        );
        table.move_column("Ref", 0);
        assert_eq!(table.position("Ref"), Some(0));
        assert_eq!(table.row(0), vec!["A", "chr1", "150", "100"]);
    }

    #[test]
    fn test_retain_rows() {
        let mut table = build();
        table.retain_rows(&[true, false, true]);
        assert_eq!(table.n_rows(), 2);
        assert_eq!(table.column("Chr").unwrap(), &["chr1", "chr3"]);
        assert_eq!(table.column("Start").unwrap(), &["100", "300"]);
    }

    #[test]
    fn test_drop_column() {
        let mut table = build();
        let dropped = table.drop_column("Start").unwrap();
        assert_eq!(dropped, strings(&["100", "200", "300"]));
        assert_eq!(table.header().collect::<Vec<_>>(), vec!["Chr", "Ref"]);
        assert!(table.drop_column("Start").is_none());
    }
}
