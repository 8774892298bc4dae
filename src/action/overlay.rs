use crate::action::ValidIn;
use crate::app::{App, AppData};
use crate::state::{AppMode, HelpMode, NoticeMode};
use anyhow::Result;

/// Overlay action: close the help or notice overlay.
#[derive(Debug, Clone, Copy, Default)]
pub struct DismissAction;

impl ValidIn<HelpMode> for DismissAction {
    type NextState = AppMode;

    fn execute(self, _state: HelpMode, _app_data: &mut AppData<'_>) -> Result<Self::NextState> {
        Ok(AppMode::home())
    }
}

impl ValidIn<NoticeMode> for DismissAction {
    type NextState = AppMode;

    fn execute(self, _state: NoticeMode, _app_data: &mut AppData<'_>) -> Result<Self::NextState> {
        Ok(AppMode::home())
    }
}

/// Dispatch a key press while the help or notice overlay is showing: any
/// key dismisses it.
///
/// # Errors
///
/// Returns an error if the dispatched action fails.
pub fn dispatch_overlay_mode(app: &mut App) -> Result<()> {
    let mut app_data = AppData::new(app);

    let next = match app_data.mode.clone() {
        AppMode::Help(state) => DismissAction.execute(state, &mut app_data)?,
        AppMode::Notice(state) => DismissAction.execute(state, &mut app_data)?,
        other => other,
    };

    app_data.apply_mode(next);
    Ok(())
}
