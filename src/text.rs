//! String joining helpers

/// Delimiter and quote used by [`list_to_str`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListStyle<'a> {
    pub delim: &'a str,
    pub quote: &'a str,
}

impl Default for ListStyle<'_> {
    fn default() -> Self {
        Self {
            delim: ", ",
            quote: "'",
        }
    }
}

impl<'a> ListStyle<'a> {
    pub fn new(delim: &'a str, quote: &'a str) -> Self {
        Self { delim, quote }
    }

    /// Join items, wrapping each in `quote` on both sides
    ///
    /// Quote characters inside an item are not escaped.
    pub fn join<I, S>(&self, items: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = String::new();
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                out.push_str(self.delim);
            }
            out.push_str(self.quote);
            out.push_str(item.as_ref());
            out.push_str(self.quote);
        }
        out
    }
}

/// Join items as `'a', 'b', 'c'`
pub fn list_to_str<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ListStyle::default().join(items)
}
