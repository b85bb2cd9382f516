use hc_core::Child;

use serde::{Deserialize, Serialize};

/// How a catalog is laid out; `?view=grid` or `?view=list`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogLayout {
    #[default]
    Grid,
    List,
}

#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    #[serde(default)]
    pub view: CatalogLayout,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogData {
    pub layout: CatalogLayout,
    pub children: Vec<Child>,
}
