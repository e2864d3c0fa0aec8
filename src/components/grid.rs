//! Responsive grid

use super::variants::{ClassList, StyleVariants, VariantAxis};
use super::Component;
use crate::helpers::attrs;

pub static GRID: StyleVariants = StyleVariants {
    base: "grid grid-cols-1",
    axes: &[
        VariantAxis {
            name: "cols",
            default: "3",
            options: &[
                ("1", "grid-cols-1"),
                ("2", "md:grid-cols-2"),
                ("3", "md:grid-cols-2 lg:grid-cols-3"),
                ("4", "sm:grid-cols-2 lg:grid-cols-4"),
            ],
        },
        VariantAxis {
            name: "gap",
            default: "md",
            options: &[("sm", "gap-4"), ("md", "gap-6"), ("lg", "gap-10")],
        },
    ],
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GridGap {
    Sm,
    #[default]
    Md,
    Lg,
}

impl GridGap {
    pub fn as_str(&self) -> &'static str {
        match self {
            GridGap::Sm => "sm",
            GridGap::Md => "md",
            GridGap::Lg => "lg",
        }
    }
}

/// Grid of pre-rendered items
#[derive(Debug, Clone, Default)]
pub struct Grid {
    cols: Option<u8>,
    gap: Option<GridGap>,
    items: Vec<String>,
    class: Option<String>,
}

impl Grid {
    pub fn new(items: Vec<String>) -> Self {
        Self {
            items,
            ..Default::default()
        }
    }

    /// Column count at the widest breakpoint (1 to 4)
    pub fn cols(mut self, cols: u8) -> Self {
        self.cols = Some(cols);
        self
    }

    pub fn gap(mut self, gap: GridGap) -> Self {
        self.gap = Some(gap);
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn classes(&self) -> ClassList {
        let cols = self.cols.map(|c| c.to_string());
        let mut selections = Vec::new();
        if let Some(c) = cols.as_deref() {
            selections.push(("cols", c));
        }
        if let Some(g) = self.gap {
            selections.push(("gap", g.as_str()));
        }
        GRID.resolve(&selections, self.class.as_deref())
    }
}

impl Component for Grid {
    fn render(&self) -> String {
        let classes = self.classes().to_string();
        format!(
            "<div{}>{}</div>",
            attrs(&[("class", Some(classes.as_str()))]),
            self.items.concat()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_three_columns() {
        let classes = Grid::new(vec![]).classes();
        assert!(classes.contains_all("grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6"));
    }

    #[test]
    fn test_cols_and_gap() {
        let classes = Grid::new(vec![]).cols(4).gap(GridGap::Sm).classes();
        assert!(classes.contains("lg:grid-cols-4"));
        assert!(!classes.contains("lg:grid-cols-3"));
        assert!(classes.contains("gap-4"));
        assert!(!classes.contains("gap-6"));
    }

    #[test]
    fn test_out_of_range_cols_use_default() {
        assert!(Grid::new(vec![]).cols(7).classes().contains("lg:grid-cols-3"));
    }

    #[test]
    fn test_render_items_in_order() {
        let html = Grid::new(vec!["<p>a</p>".into(), "<p>b</p>".into()]).render();
        assert!(html.ends_with("<p>a</p><p>b</p></div>"));
    }
}
