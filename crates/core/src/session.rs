//! The presentation adapter a front end drives.
//!
//! A [`Session`] owns one option model, one recent history and a clipboard
//! handle. Each edit re-renders the command. Copying is fire-and-forget: a
//! failed write is logged and simply leaves the "copied" acknowledgement off.

use std::time::{Duration, Instant};

use log::{debug, error, warn};

use crate::error::Result;
use crate::families::{render_model, Family};
use crate::history::RecentHistory;
use crate::option_model::{OptionModel, SetOutcome};

/// How long a successful copy is acknowledged.
pub const COPY_ACKNOWLEDGEMENT: Duration = Duration::from_secs(2);

/// Write-only access to the host clipboard.
pub trait Clipboard {
    /// # Errors
    ///
    /// Returns an error if the host refuses the write.
    fn set_text(&mut self, text: &str) -> Result<()>;
}

pub struct Session<C> {
    model: OptionModel,
    history: RecentHistory,
    clipboard: C,
    copied_at: Option<Instant>,
}

impl<C: Clipboard> Session<C> {
    pub fn new(family: Family, clipboard: C) -> Self {
        Self {
            model: OptionModel::new(family),
            history: RecentHistory::new(),
            clipboard,
            copied_at: None,
        }
    }

    #[must_use]
    pub fn with_history(mut self, history: RecentHistory) -> Self {
        self.history = history;
        self
    }

    pub fn model(&self) -> &OptionModel {
        &self.model
    }

    pub fn history(&self) -> &RecentHistory {
        &self.history
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    /// Applies a batch of edits and returns the new rendering.
    ///
    /// Edits that are rejected or name an unknown field are logged and
    /// skipped; the rest still apply.
    pub fn on_model_change<K, V>(&mut self, changes: &[(K, V)]) -> String
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (name, value) in changes {
            let (name, value) = (name.as_ref(), value.as_ref());
            match self.model.set(name, value) {
                SetOutcome::Applied => debug!("Set `{name}` to `{value}`"),
                SetOutcome::Rejected => warn!(
                    "`{value}` is not a valid value for `{name}`, keeping `{}`",
                    self.model
                        .get(name)
                        .map(ToString::to_string)
                        .unwrap_or_default()
                ),
                SetOutcome::UnknownField => warn!(
                    "The `{}` family has no option `{name}`, ignoring it",
                    self.model.family()
                ),
            }
        }

        self.render()
    }

    pub fn render(&self) -> String {
        render_model(&self.model)
    }

    /// Starts over with a fresh model for `family`.
    pub fn switch_family(&mut self, family: Family) {
        self.model = OptionModel::new(family);
        self.copied_at = None;
    }

    /// Replaces the model, e.g. with one restored from history.
    pub fn load(&mut self, model: OptionModel) {
        self.model = model;
        self.copied_at = None;
    }

    /// Pushes the current rendering into the history and returns it.
    pub fn record(&mut self) -> String {
        let rendered = self.render();
        self.history.push(rendered.clone());
        rendered
    }

    /// Copies the current rendering. Returns whether the write succeeded.
    pub fn copy(&mut self, now: Instant) -> bool {
        let rendered = self.render();
        match self.clipboard.set_text(&rendered) {
            Ok(()) => {
                self.copied_at = Some(now);
                true
            }
            Err(e) => {
                error!("{e}");
                false
            }
        }
    }

    /// Whether the last successful copy is still being acknowledged.
    pub fn is_copied(&self, now: Instant) -> bool {
        self.copied_at
            .is_some_and(|copied_at| now.saturating_duration_since(copied_at) < COPY_ACKNOWLEDGEMENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[derive(Default)]
    struct FakeClipboard {
        contents: Option<String>,
        fail: bool,
    }

    impl Clipboard for FakeClipboard {
        fn set_text(&mut self, text: &str) -> Result<()> {
            if self.fail {
                return Err(Error::Clipboard("permission denied".to_string()));
            }
            self.contents = Some(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_on_model_change_renders() {
        let mut session = Session::new(Family::Archive, FakeClipboard::default());

        let rendered = session.on_model_change(&[("archive", "a.tar.gz"), ("targets", "src/")]);

        assert_eq!(rendered, "tar cvzf a.tar.gz src/");
        assert_eq!(session.render(), rendered);
    }

    #[test]
    fn test_bad_edits_are_skipped() {
        let mut session = Session::new(Family::Archive, FakeClipboard::default());

        let rendered = session.on_model_change(&[
            ("mode", "explode"),
            ("bogus", "1"),
            ("archive", "a.tar"),
            ("compression", "none"),
        ]);

        assert_eq!(rendered, "tar cvf a.tar .");
    }

    #[test]
    fn test_switch_family_resets_model() {
        let mut session = Session::new(Family::Archive, FakeClipboard::default());
        session.on_model_change(&[("mode", "list")]);

        session.switch_family(Family::Process);

        assert_eq!(session.model(), &OptionModel::new(Family::Process));
        assert_eq!(session.render(), "top");
    }

    #[test]
    fn test_record_pushes_rendering() {
        let mut session = Session::new(Family::Process, FakeClipboard::default());
        session.record();
        session.record();
        session.on_model_change(&[("tool", "htop")]);
        session.record();

        assert_eq!(session.history().entries(), ["htop", "top"]);
    }

    #[test]
    fn test_copy_acknowledgement_expires() {
        let mut session = Session::new(Family::Process, FakeClipboard::default());
        let now = Instant::now();

        assert!(!session.is_copied(now));
        assert!(session.copy(now));
        assert_eq!(session.clipboard().contents.as_deref(), Some("top"));
        assert!(session.is_copied(now + Duration::from_millis(1999)));
        assert!(!session.is_copied(now + COPY_ACKNOWLEDGEMENT));
    }

    #[test]
    fn test_failed_copy_is_not_acknowledged() {
        let clipboard = FakeClipboard {
            fail: true,
            ..FakeClipboard::default()
        };
        let mut session = Session::new(Family::Process, clipboard);
        let now = Instant::now();

        assert!(!session.copy(now));
        assert!(!session.is_copied(now));
        assert!(session.clipboard().contents.is_none());
    }

    #[test]
    fn test_switching_family_clears_copy_state() {
        let mut session = Session::new(Family::Process, FakeClipboard::default());
        let now = Instant::now();
        session.copy(now);

        session.switch_family(Family::Git);

        assert!(!session.is_copied(now));
    }
}
