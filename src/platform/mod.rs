//! Platform abstraction layer
//!
//! Host shell capabilities the game needs: a modal message box and process
//! exit. Calls are best-effort; failures are logged and never retried.

/// Button sets a message box can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogButtons {
    Ok,
    OkCancel,
    RetryCancel,
    YesNo,
}

/// Icon/severity of a message box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogSeverity {
    Info,
    Warning,
    Error,
    Question,
}

/// Button the user picked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogChoice {
    Ok,
    Cancel,
    Retry,
    Yes,
    No,
}

impl DialogButtons {
    /// Map a confirm-style yes/no answer onto this button set
    pub fn choice(&self, accepted: bool) -> DialogChoice {
        match (self, accepted) {
            (DialogButtons::Ok, _) => DialogChoice::Ok,
            (DialogButtons::OkCancel, true) => DialogChoice::Ok,
            (DialogButtons::RetryCancel, true) => DialogChoice::Retry,
            (DialogButtons::YesNo, true) => DialogChoice::Yes,
            (DialogButtons::YesNo, false) => DialogChoice::No,
            (DialogButtons::OkCancel | DialogButtons::RetryCancel, false) => DialogChoice::Cancel,
        }
    }
}

/// Application shell the game runs inside
pub trait DialogHost {
    /// Show a modal message box and wait for the user's choice
    fn show_message_box(
        &mut self,
        title: &str,
        body: &str,
        buttons: DialogButtons,
        severity: DialogSeverity,
    ) -> DialogChoice;

    /// Terminate the application
    fn exit(&mut self);
}

/// Host without a UI: answers every dialog with a fixed choice
#[derive(Debug, Clone)]
pub struct HeadlessHost {
    pub answer: DialogChoice,
    pub exited: bool,
}

impl HeadlessHost {
    pub fn new(answer: DialogChoice) -> Self {
        Self {
            answer,
            exited: false,
        }
    }
}

impl DialogHost for HeadlessHost {
    fn show_message_box(
        &mut self,
        title: &str,
        body: &str,
        _buttons: DialogButtons,
        _severity: DialogSeverity,
    ) -> DialogChoice {
        log::info!("{title}: {body} -> {:?}", self.answer);
        self.answer
    }

    fn exit(&mut self) {
        log::info!("Exit requested");
        self.exited = true;
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::BrowserHost;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{DialogButtons, DialogChoice, DialogHost, DialogSeverity};

    /// Browser window as the host shell: `confirm()` dialogs, `close()` on exit
    #[derive(Debug, Default)]
    pub struct BrowserHost;

    impl DialogHost for BrowserHost {
        fn show_message_box(
            &mut self,
            title: &str,
            body: &str,
            buttons: DialogButtons,
            _severity: DialogSeverity,
        ) -> DialogChoice {
            let Some(window) = web_sys::window() else {
                return buttons.choice(false);
            };
            let message = format!("{title}\n\n{body}");
            let accepted = match buttons {
                DialogButtons::Ok => window.alert_with_message(&message).is_ok(),
                _ => window.confirm_with_message(&message).unwrap_or(false),
            };
            buttons.choice(accepted)
        }

        fn exit(&mut self) {
            let Some(window) = web_sys::window() else {
                return;
            };
            if let Err(e) = window.close() {
                log::warn!("window.close failed: {:?}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_mapping() {
        assert_eq!(DialogButtons::RetryCancel.choice(true), DialogChoice::Retry);
        assert_eq!(DialogButtons::RetryCancel.choice(false), DialogChoice::Cancel);
        assert_eq!(DialogButtons::YesNo.choice(false), DialogChoice::No);
        assert_eq!(DialogButtons::Ok.choice(false), DialogChoice::Ok);
    }

    #[test]
    fn test_headless_host_answers_and_exits() {
        let mut host = HeadlessHost::new(DialogChoice::Cancel);
        let choice = host.show_message_box(
            "t",
            "b",
            DialogButtons::RetryCancel,
            DialogSeverity::Info,
        );
        assert_eq!(choice, DialogChoice::Cancel);
        host.exit();
        assert!(host.exited);
    }
}
