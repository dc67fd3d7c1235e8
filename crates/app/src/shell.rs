//! Line-driven terminal front end over `SessionController`.

use std::io::{self, Write};

use quiz_core::model::{
    Language, LevelId, Page, QuestionCount, QuestionOutcome, QuizResult, QuizSettings,
    UserProfile,
};
use services::{SessionController, SessionError};

use crate::bank::{Question, QuestionBank};
use crate::text::{TextId, text};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Levels,
    Select(String),
    Start(Option<String>),
    Answer(String),
    Restart,
    Home,
    Go(String),
    Lang,
    Profile,
    State,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    fn parse(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let head = parts.next()?;
        let arg = parts.next().map(str::to_string);
        let command = match (head, arg) {
            ("levels", _) => Command::Levels,
            ("select", Some(level)) => Command::Select(level),
            ("start", count) => Command::Start(count),
            ("answer", Some(value)) => Command::Answer(value),
            ("restart", _) => Command::Restart,
            ("home", _) => Command::Home,
            ("go", Some(page)) => Command::Go(page),
            ("lang", _) => Command::Lang,
            ("profile", _) => Command::Profile,
            ("state", _) => Command::State,
            ("help" | "?", _) => Command::Help,
            ("quit" | "exit", _) => Command::Quit,
            _ => Command::Unknown(line.trim().to_string()),
        };
        Some(command)
    }
}

/// The running attempt: its length, the question being answered and the
/// answers given so far. Questions are drawn one at a time.
#[derive(Debug)]
struct QuizRun {
    level: LevelId,
    total: u32,
    current: Option<Question>,
    outcomes: Vec<QuestionOutcome>,
}

impl QuizRun {
    fn start(settings: &QuizSettings, bank: &mut QuestionBank) -> Self {
        Self {
            level: settings.level(),
            total: settings.number_of_questions().get(),
            current: Some(bank.next_question(settings.level())),
            outcomes: Vec::new(),
        }
    }

    fn current(&self) -> Option<&Question> {
        self.current.as_ref()
    }

    fn record(&mut self, outcome: QuestionOutcome, bank: &mut QuestionBank) {
        self.outcomes.push(outcome);
        let remaining = u32::try_from(self.outcomes.len()).is_ok_and(|n| n < self.total);
        self.current = remaining.then(|| bank.next_question(self.level));
    }
}

pub struct Shell<W: Write> {
    session: SessionController,
    bank: QuestionBank,
    run: Option<QuizRun>,
    out: W,
}

impl<W: Write> Shell<W> {
    pub fn new(session: SessionController, bank: QuestionBank, out: W) -> Self {
        Self {
            session,
            bank,
            run: None,
            out,
        }
    }

    pub fn session(&self) -> &SessionController {
        &self.session
    }

    /// End the session and hand back the accumulated profile.
    pub fn finish(self) -> UserProfile {
        self.session.into_profile()
    }

    /// Handle one line of user input.
    ///
    /// # Errors
    ///
    /// Only output failures are returned; session errors are printed and the
    /// loop continues.
    pub fn handle_line(&mut self, line: &str) -> io::Result<Flow> {
        let Some(command) = Command::parse(line) else {
            return Ok(Flow::Continue);
        };
        // bare numbers answer the current question
        let command = match command {
            Command::Unknown(raw) if self.session.page() == Page::Quiz => Command::Answer(raw),
            other => other,
        };

        let language = self.session.language();
        match command {
            Command::Levels | Command::Home => {
                self.run = None;
                self.session.go_home();
                self.render()?;
            }
            Command::Select(raw) => match raw.parse::<LevelId>() {
                Ok(id) => self.transition(|session| session.select_level(id))?,
                Err(err) => self.report(&err)?,
            },
            Command::Start(raw) => {
                let count = raw
                    .map_or(Ok(QuestionCount::DEFAULT), |raw| raw.parse::<QuestionCount>())
                    .map_err(SessionError::from);
                match count {
                    Ok(count) => self.transition(|session| session.start_quiz(count.get()))?,
                    Err(err) => self.report(&err)?,
                }
            }
            Command::Answer(raw) => self.answer(&raw)?,
            Command::Restart => self.transition(SessionController::restart)?,
            Command::Go(raw) => match raw.parse::<Page>() {
                Ok(page) => self.transition(|session| session.navigate(page))?,
                Err(err) => self.report(&err)?,
            },
            Command::Lang => {
                let language = self.session.toggle_language();
                writeln!(self.out, "{}", text(TextId::LanguageSwitched, language))?;
                self.render()?;
            }
            Command::Profile => self.transition(|session| session.navigate(Page::Profile))?,
            Command::State => {
                let json = self.session.snapshot().to_json().map_err(io::Error::other)?;
                writeln!(self.out, "{json}")?;
            }
            Command::Help => self.print_commands()?,
            Command::Quit => {
                writeln!(self.out, "{}", text(TextId::Goodbye, language))?;
                return Ok(Flow::Quit);
            }
            Command::Unknown(raw) => {
                writeln!(self.out, "unknown command: {raw} (type `help`)")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn transition(
        &mut self,
        apply: impl FnOnce(&mut SessionController) -> Result<(), SessionError>,
    ) -> io::Result<()> {
        match apply(&mut self.session) {
            Ok(()) => {
                self.sync_run();
                self.render()
            }
            Err(err) => self.report(&err),
        }
    }

    /// Keep the question list in step with the session page.
    fn sync_run(&mut self) {
        match self.session.settings() {
            Some(settings) if self.session.page() == Page::Quiz => {
                self.run = Some(QuizRun::start(settings, &mut self.bank));
            }
            _ => self.run = None,
        }
    }

    fn answer(&mut self, raw: &str) -> io::Result<()> {
        let Some(run) = self.run.as_mut() else {
            return writeln!(self.out, "no quiz in progress");
        };
        let Some(question) = run.current() else {
            return Ok(());
        };
        let Some(outcome) = question.check(raw) else {
            return writeln!(self.out, "{}", text(TextId::NotANumber, self.session.language()));
        };

        let feedback = if outcome.correct {
            text(TextId::Correct, self.session.language()).to_string()
        } else {
            format!(
                "{} {}",
                text(TextId::Incorrect, self.session.language()),
                outcome.expected
            )
        };
        run.record(outcome, &mut self.bank);
        let finished = run.current().is_none();
        writeln!(self.out, "{feedback}")?;

        if !finished {
            return self.ask_current();
        }

        let outcomes = self.run.take().map(|run| run.outcomes).unwrap_or_default();
        let completed = QuizResult::from_outcomes(outcomes)
            .map_err(SessionError::from)
            .and_then(|result| self.session.complete_quiz(result).map(|_| ()));
        if let Err(err) = completed {
            self.report(&err)?;
            self.session.go_home();
        }
        self.render()
    }

    fn ask_current(&mut self) -> io::Result<()> {
        let Some(run) = self.run.as_ref() else {
            return Ok(());
        };
        let Some(question) = run.current() else {
            return Ok(());
        };
        let label = text(TextId::QuestionLabel, self.session.language());
        writeln!(
            self.out,
            "{label} {}/{}: {} = ?",
            run.outcomes.len() + 1,
            run.total,
            question.prompt
        )
    }

    fn report(&mut self, err: &dyn std::error::Error) -> io::Result<()> {
        writeln!(self.out, "error: {err}")
    }

    /// Print the current page.
    ///
    /// # Errors
    ///
    /// Returns the underlying write error.
    pub fn render(&mut self) -> io::Result<()> {
        let language = self.session.language();
        let page = self.session.page();
        writeln!(self.out)?;
        writeln!(self.out, "== {} ==", text(TextId::title_for(page), language))?;

        match page {
            Page::Home => {
                writeln!(self.out, "{}", text(TextId::Tagline, language))?;
                writeln!(self.out, "{}", text(TextId::SelectLevel, language))?;
                for level in self.session.catalog().iter() {
                    writeln!(
                        self.out,
                        "  {:<13} {} ({})",
                        level.id(),
                        level.name(language),
                        level.grade()
                    )?;
                }
            }
            Page::About => writeln!(self.out, "{}", text(TextId::AboutBody, language))?,
            Page::Contact => writeln!(self.out, "{}", text(TextId::ContactBody, language))?,
            Page::Help => writeln!(self.out, "{}", text(TextId::HelpBody, language))?,
            Page::Profile => self.render_profile(language)?,
            Page::QuizSetup => {
                if let Some(level) = self.session.selected_level() {
                    writeln!(self.out, "{} · {}", level.name(language), level.grade())?;
                }
                writeln!(self.out, "{}", text(TextId::SetupPrompt, language))?;
            }
            Page::Quiz => {
                if let Some(attempt) = self.session.attempt() {
                    writeln!(self.out, "{} {attempt}", text(TextId::AttemptLabel, language))?;
                }
                self.ask_current()?;
            }
            Page::Results => self.render_results()?,
        }
        Ok(())
    }

    fn render_profile(&mut self, language: Language) -> io::Result<()> {
        let profile = self.session.profile().clone();
        let t = |id| text(id, language);
        writeln!(self.out, "{} {}", t(TextId::Username), profile.username())?;
        writeln!(
            self.out,
            "{} {}",
            t(TextId::MemberSince),
            profile.member_since_label()
        )?;
        writeln!(self.out, "{} {}", t(TextId::TotalPoints), profile.total_points())?;
        writeln!(self.out, "{}: {}", t(TextId::QuizzesTaken), profile.total_quizzes())?;
        writeln!(self.out, "{}: {}%", t(TextId::AverageScore), profile.average_score())?;
        writeln!(self.out, "{}: {}", t(TextId::Achievements), profile.achievements())
    }

    fn render_results(&mut self) -> io::Result<()> {
        let language = self.session.language();
        let Some(result) = self.session.result().cloned() else {
            return Ok(());
        };
        writeln!(
            self.out,
            "{}: {}/{} ({:.0}%)",
            text(TextId::ScoreLabel, language),
            result.correct_answers(),
            result.total_questions(),
            result.score_percent()
        )?;
        if let Some(attempt) = self.session.attempt() {
            writeln!(self.out, "{} {attempt}", text(TextId::AttemptLabel, language))?;
        }
        if let Some(at) = self.session.completed_at() {
            writeln!(self.out, "{}", at.format("%Y-%m-%d %H:%M UTC"))?;
        }
        for outcome in result.outcomes() {
            let mark = if outcome.correct { '✓' } else { '✗' };
            writeln!(
                self.out,
                "  {mark} {} = {} ({})",
                outcome.prompt, outcome.given, outcome.expected
            )?;
        }
        writeln!(self.out, "{}", text(TextId::ResultsPrompt, language))
    }

    fn print_commands(&mut self) -> io::Result<()> {
        writeln!(self.out, "commands:")?;
        writeln!(self.out, "  levels | home           back to level selection")?;
        writeln!(self.out, "  select <level>          beginner, intermediate, advanced")?;
        writeln!(self.out, "  start [n]               begin with n questions (default 10)")?;
        writeln!(self.out, "  <number> | answer <n>   answer the current question")?;
        writeln!(self.out, "  restart                 retake the last quiz")?;
        let pages: Vec<&str> = Page::ALL
            .into_iter()
            .filter(|page| page.is_informational())
            .map(Page::as_str)
            .collect();
        writeln!(self.out, "  go <page>               {}", pages.join(", "))?;
        writeln!(self.out, "  profile                 show your statistics")?;
        writeln!(self.out, "  lang                    switch English / Tamil")?;
        writeln!(self.out, "  state                   dump session as JSON")?;
        writeln!(self.out, "  quit")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{LevelCatalog, UserProfile};
    use quiz_core::time::fixed_clock;

    fn shell() -> Shell<Vec<u8>> {
        let session = SessionController::new(LevelCatalog::standard(), UserProfile::seed())
            .with_clock(fixed_clock());
        Shell::new(session, QuestionBank::seeded(11), Vec::new())
    }

    fn output(shell: &Shell<Vec<u8>>) -> String {
        String::from_utf8(shell.out.clone()).unwrap()
    }

    fn current_answer(shell: &Shell<Vec<u8>>) -> i64 {
        shell.run.as_ref().and_then(QuizRun::current).unwrap().answer
    }

    #[test]
    fn plays_a_full_quiz() {
        let mut shell = shell();
        shell.handle_line("select beginner").unwrap();
        shell.handle_line("start 3").unwrap();
        assert_eq!(shell.session().page(), Page::Quiz);

        let first = current_answer(&shell);
        shell.handle_line(&first.to_string()).unwrap();
        let second = current_answer(&shell);
        shell.handle_line(&format!("answer {second}")).unwrap();
        let third = current_answer(&shell);
        shell.handle_line(&(third + 1).to_string()).unwrap();

        assert_eq!(shell.session().page(), Page::Results);
        let result = shell.session().result().unwrap();
        assert_eq!(result.correct_answers(), 2);
        assert_eq!(result.total_questions(), 3);
        assert_eq!(shell.session().profile().total_points(), 1270);
        assert!(output(&shell).contains("Score: 2/3"));
    }

    #[test]
    fn restart_generates_a_new_attempt() {
        let mut shell = shell();
        shell.handle_line("select advanced").unwrap();
        shell.handle_line("start 1").unwrap();
        let answer = current_answer(&shell);
        shell.handle_line(&answer.to_string()).unwrap();
        shell.handle_line("restart").unwrap();

        assert_eq!(shell.session().page(), Page::Quiz);
        assert_eq!(shell.session().attempt(), Some(2));
        let run = shell.run.as_ref().unwrap();
        assert_eq!(run.total, 1);
        assert!(run.outcomes.is_empty());
    }

    #[test]
    fn errors_are_reported_and_loop_continues() {
        let mut shell = shell();
        assert_eq!(shell.handle_line("start 5").unwrap(), Flow::Continue);
        assert!(output(&shell).contains("error: cannot start quiz from the home page"));

        shell.handle_line("select expert").unwrap();
        assert!(output(&shell).contains("unknown level id"));

        shell.handle_line("select beginner").unwrap();
        shell.handle_line("start 0").unwrap();
        shell.handle_line("start two").unwrap();
        assert_eq!(shell.session().page(), Page::QuizSetup);
        assert!(output(&shell).contains("invalid question count"));
    }

    #[test]
    fn non_numeric_answers_are_not_counted() {
        let mut shell = shell();
        shell.handle_line("select intermediate").unwrap();
        shell.handle_line("start 2").unwrap();
        shell.handle_line("banana").unwrap();
        assert!(shell.run.as_ref().unwrap().outcomes.is_empty());
        assert!(output(&shell).contains("whole number"));
    }

    #[test]
    fn leaving_mid_quiz_discards_the_attempt() {
        let mut shell = shell();
        shell.handle_line("select beginner").unwrap();
        shell.handle_line("start").unwrap();
        assert_eq!(shell.run.as_ref().unwrap().total, 10);
        shell.handle_line("go about").unwrap();

        assert_eq!(shell.session().page(), Page::About);
        assert!(shell.run.is_none());
        assert_eq!(shell.session().profile(), &UserProfile::seed());
    }

    #[test]
    fn lang_switches_rendered_text() {
        let mut shell = shell();
        shell.handle_line("lang").unwrap();
        assert_eq!(shell.session().language(), Language::Tamil);
        assert!(output(&shell).contains("வினா மாஸ்டர்"));
    }

    #[test]
    fn help_lists_reachable_pages() {
        let mut shell = shell();
        shell.handle_line("help").unwrap();
        assert!(output(&shell).contains("go <page>               about, contact, help, profile"));
    }

    #[test]
    fn state_prints_json_and_quit_stops() {
        let mut shell = shell();
        shell.handle_line("state").unwrap();
        assert!(output(&shell).contains("\"page\": \"home\""));
        assert_eq!(shell.handle_line("quit").unwrap(), Flow::Quit);
    }

    #[test]
    fn huge_question_counts_are_played_one_at_a_time() {
        let mut shell = shell();
        shell.handle_line("select beginner").unwrap();
        assert_eq!(shell.handle_line("start 4000000000").unwrap(), Flow::Continue);
        assert_eq!(shell.session().page(), Page::Quiz);
        assert!(output(&shell).contains("1/4000000000"));

        let answer = current_answer(&shell);
        assert_eq!(shell.handle_line(&answer.to_string()).unwrap(), Flow::Continue);
        let run = shell.run.as_ref().unwrap();
        assert_eq!(run.outcomes.len(), 1);
        assert!(run.current().is_some());
        assert!(output(&shell).contains("2/4000000000"));
    }

    #[test]
    fn failed_fold_returns_home_instead_of_stranding_the_quiz() {
        let profile = UserProfile::from_parts(
            "maxed",
            fixed_clock().today(),
            u32::MAX,
            3,
            90,
            0,
        )
        .unwrap();
        let session = SessionController::new(LevelCatalog::standard(), profile.clone())
            .with_clock(fixed_clock());
        let mut shell = Shell::new(session, QuestionBank::seeded(11), Vec::new());
        shell.handle_line("select beginner").unwrap();
        shell.handle_line("start 1").unwrap();
        let answer = current_answer(&shell);

        assert_eq!(shell.handle_line(&answer.to_string()).unwrap(), Flow::Continue);
        assert!(output(&shell).contains("error:"));
        assert_eq!(shell.session().page(), Page::Home);
        assert!(shell.run.is_none());
        assert_eq!(shell.session().profile(), &profile);
    }
}
