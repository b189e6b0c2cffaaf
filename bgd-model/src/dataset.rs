//! Role-tagged columnar dataset as delivered by the host.

/// Semantic tag identifying which raw column supplies which record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Category,
    Region,
    GdpTotal,
    GdpPerCapita,
    Population,
    Count,
}

/// A raw cell value from the host dataset.
///
/// Cells are untyped at the boundary; coercion to the record field types
/// happens during extraction.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Null,
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Coerce to a display string; `None` for null cells.
    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Text(s) => Some(s.clone()),
            CellValue::Number(n) => Some(n.to_string()),
            CellValue::Null => None,
        }
    }

    /// Coerce to a number; non-numeric and null cells become 0.
    pub fn as_number(&self) -> f64 {
        match self {
            CellValue::Number(n) if n.is_finite() => *n,
            CellValue::Number(_) => 0.0,
            CellValue::Text(s) => s.trim().parse().unwrap_or(0.0),
            CellValue::Null => 0.0,
        }
    }
}

/// One named, role-tagged column of raw values.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub role: Role,
    pub values: Vec<CellValue>,
}

impl Column {
    pub fn new(name: impl Into<String>, role: Role, values: Vec<CellValue>) -> Self {
        Column {
            name: name.into(),
            role,
            values,
        }
    }
}

/// A flat columnar dataset snapshot handed over by the host.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub columns: Vec<Column>,
}

impl Dataset {
    pub fn new(columns: Vec<Column>) -> Self {
        Dataset { columns }
    }

    /// The first column tagged with `role`, if any.
    pub fn column(&self, role: Role) -> Option<&Column> {
        self.columns.iter().find(|c| c.role == role)
    }

    /// A dataset is categorical when it carries a category or region column.
    /// Without one there is nothing to build rows from and the dashboard
    /// shows its field-mapping guidance instead.
    pub fn is_categorical(&self) -> bool {
        self.column(Role::Category).is_some() || self.column(Role::Region).is_some()
    }
}
