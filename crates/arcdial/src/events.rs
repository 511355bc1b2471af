#[derive(Debug, Clone)]
pub enum AppEvent {
    SetProgress(u32),
    ConfigReload,
}
