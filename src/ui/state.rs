#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub ui: UiState,
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Where the poems came from, shown beside the download affordance.
    pub source_label: String,
}
