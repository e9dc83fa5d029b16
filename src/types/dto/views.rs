use poem_openapi::Object;

/// Declarative field configuration for one admin-view column
#[derive(Object, Debug, Clone)]
pub struct FieldMeta {
    pub name: String,
    /// Display label for the rendering layer
    pub label: String,
    pub searchable: bool,
    pub filterable: bool,
    pub editable: bool,
}

impl FieldMeta {
    pub fn new(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            searchable: false,
            filterable: false,
            editable: false,
        }
    }

    pub fn searchable(mut self) -> Self {
        self.searchable = true;
        self
    }

    pub fn filterable(mut self) -> Self {
        self.filterable = true;
        self
    }

    pub fn editable(mut self) -> Self {
        self.editable = true;
        self
    }
}

/// Declarative configuration for one admin view
#[derive(Object, Debug, Clone)]
pub struct ViewMeta {
    pub entity: String,
    /// Minimum role required to access the view
    pub required_role: String,
    pub can_create: bool,
    pub can_edit: bool,
    pub can_delete: bool,
    pub fields: Vec<FieldMeta>,
}

/// Response model for the view-metadata endpoint
#[derive(Object, Debug)]
pub struct ViewsResponse {
    pub views: Vec<ViewMeta>,
}
