/// One level of list nesting
#[derive(Debug, Clone, PartialEq)]
struct ListLevel {
    ordered: bool,
    counter: usize,
    prefix: String,
}

/// Hierarchical list counters, pushed and popped in step with `<ul>`/`<ol>`.
///
/// Labels carry the full nesting path of ordered ancestors, so the second item
/// of a list nested in the third item of an outer ordered list is `"3.2. "`.
/// Unordered levels contribute nothing to the path of their children.
#[derive(Debug, Default, Clone)]
pub struct ListNumbering {
    levels: Vec<ListLevel>,
}

impl ListNumbering {
    pub fn new() -> ListNumbering {
        ListNumbering::default()
    }

    /// Enter a nested list
    pub fn open(&mut self, ordered: bool) {
        let prefix = match self.levels.last() {
            Some(parent) if parent.ordered => format!("{}{}.", parent.prefix, parent.counter),
            Some(parent) => parent.prefix.clone(),
            None => String::new(),
        };
        self.levels.push(ListLevel {
            ordered,
            counter: 0,
            prefix,
        });
    }

    /// Leave the innermost list; the parent carries on counting where it stopped.
    /// Closing more lists than were opened is ignored.
    pub fn close(&mut self) {
        self.levels.pop();
    }

    /// Nesting depth, 0 outside of any list
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Whether the innermost list is an ordered one
    pub fn is_ordered(&self) -> bool {
        self.levels.last().is_some_and(|level| level.ordered)
    }

    /// Advance the innermost counter and return the new item's label, e.g. `"1.2. "`
    pub fn next_label(&mut self) -> Option<String> {
        let level = self.levels.last_mut()?;
        level.counter += 1;
        Some(format!("{}{}. ", level.prefix, level.counter))
    }

    /// The label of the item currently open in the innermost list
    pub fn current_label(&self) -> Option<String> {
        let level = self.levels.last()?;
        Some(format!("{}{}. ", level.prefix, level.counter))
    }
}
