/// Modal alert handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiMsg {
    ShowAlert(String),
    DismissAlert,
}
