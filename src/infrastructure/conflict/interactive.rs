//! Interactive Conflict Prompters
//!
//! Ask once how to handle the unmanaged conflicts of a deploy.
//!
//! - `DialoguerPrompter` - select/input widgets on a terminal
//! - `LinePrompter` - numbered answers read line by line, for piped stdin

use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use dialoguer::{Input, Select};

use crate::domain::ports::{
    ConflictDecision, Localizer, Message, PromptError, UserPrompter, DEFAULT_BACKUP_SUFFIX,
};
use crate::domain::value_objects::Lang;

/// Answer to the action menu: anything but `2` means backup
fn parse_choice(answer: &str) -> bool {
    answer.trim() == "2"
}

fn suffix_or_default(answer: &str, default: &str) -> String {
    let suffix = answer.trim();
    if suffix.is_empty() {
        default.to_string()
    } else {
        suffix.to_string()
    }
}

/// Terminal prompter built on dialoguer
pub struct DialoguerPrompter {
    localizer: Arc<dyn Localizer>,
    default_suffix: String,
}

impl DialoguerPrompter {
    pub fn new(localizer: Arc<dyn Localizer>) -> Self {
        Self {
            localizer,
            default_suffix: DEFAULT_BACKUP_SUFFIX.to_string(),
        }
    }

    /// Suffix offered when the user just presses enter
    pub fn with_default_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.default_suffix = suffix.into();
        self
    }
}

impl UserPrompter for DialoguerPrompter {
    fn ask_conflict_action(
        &self,
        files: &[String],
        lang: Lang,
    ) -> Result<ConflictDecision, PromptError> {
        let render = |message: Message<'_>| self.localizer.render(&message, lang);

        eprintln!("{}", render(Message::ConflictFound { files }));

        let items = [render(Message::ActionBackup), render(Message::ActionRemove)];
        let selection = Select::new()
            .with_prompt(render(Message::ActionQuestion))
            .items(&items)
            .default(0)
            .interact()
            .map_err(|e| PromptError::Interaction(e.to_string()))?;

        if selection == 1 {
            return Ok(ConflictDecision::Remove);
        }

        let prompt = render(Message::BackupSuffix {
            default: &self.default_suffix,
        });
        let answer: String = Input::new()
            .with_prompt(prompt.trim_end().trim_end_matches(':'))
            .allow_empty(true)
            .interact_text()
            .map_err(|e| PromptError::Interaction(e.to_string()))?;

        Ok(ConflictDecision::backup(suffix_or_default(
            &answer,
            &self.default_suffix,
        )))
    }
}

/// Line-oriented prompter
///
/// Prints the numbered menu to `writer` and reads answers from `reader`.
/// `1` or an empty line chooses backup, `2` chooses remove.
pub struct LinePrompter<R: BufRead, W: Write> {
    reader: RefCell<R>,
    writer: RefCell<W>,
    localizer: Arc<dyn Localizer>,
    default_suffix: String,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W, localizer: Arc<dyn Localizer>) -> Self {
        Self {
            reader: RefCell::new(reader),
            writer: RefCell::new(writer),
            localizer,
            default_suffix: DEFAULT_BACKUP_SUFFIX.to_string(),
        }
    }

    pub fn with_default_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.default_suffix = suffix.into();
        self
    }

    /// Give back the writer (tests inspect what was printed)
    pub fn into_writer(self) -> W {
        self.writer.into_inner()
    }

    fn say(&self, text: &str, newline: bool) -> io::Result<()> {
        let mut writer = self.writer.borrow_mut();
        if newline {
            writeln!(writer, "{text}")?;
        } else {
            write!(writer, "{text}")?;
        }
        writer.flush()
    }

    /// One line of input; `None` at end of input
    fn read_answer(&self) -> io::Result<Option<String>> {
        let mut line = String::new();
        let read = self.reader.borrow_mut().read_line(&mut line)?;
        Ok((read > 0).then_some(line))
    }
}

impl LinePrompter<io::BufReader<io::Stdin>, io::Stderr> {
    /// Prompter on the process's stdin, printing to stderr
    pub fn stdio(localizer: Arc<dyn Localizer>) -> Self {
        Self::new(io::BufReader::new(io::stdin()), io::stderr(), localizer)
    }
}

impl<R: BufRead, W: Write> UserPrompter for LinePrompter<R, W> {
    fn ask_conflict_action(
        &self,
        files: &[String],
        lang: Lang,
    ) -> Result<ConflictDecision, PromptError> {
        let render = |message: Message<'_>| self.localizer.render(&message, lang);

        self.say(&render(Message::ConflictFound { files }), true)?;
        self.say(&render(Message::ChooseAction), false)?;

        let choice = self
            .read_answer()?
            .ok_or_else(|| PromptError::Interaction("no answer on input".to_string()))?;
        if parse_choice(&choice) {
            return Ok(ConflictDecision::Remove);
        }

        self.say(
            &render(Message::BackupSuffix {
                default: &self.default_suffix,
            }),
            false,
        )?;
        // A missing suffix answer keeps the default.
        let suffix = self.read_answer().ok().flatten().unwrap_or_default();

        Ok(ConflictDecision::backup(suffix_or_default(
            &suffix,
            &self.default_suffix,
        )))
    }
}
