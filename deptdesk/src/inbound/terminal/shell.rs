//! The interactive loop: login screen, main screen, form screen.
//!
//! Every domain failure is rendered as a notice at the point it happens and
//! the loop carries on. Only I/O errors on the terminal itself end the run,
//! and end of input is treated as quitting.

use std::io::{self, Write};
use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::ports::{DepartmentRepository, LoginService};
use crate::domain::{
    DepartmentForm, DepartmentId, DepartmentList, Error, ErrorCode, FormField, FormFields,
    FormOutcome, FormProfile, INVALID_SEARCH_ID, Notice, RegistrationRequest, Session,
};

use super::command::{self, FormCommand, MainCommand};
use super::prompt::Prompter;
use super::render;

const LOGIN_MENU: [&str; 3] = ["Login", "Register", "Quit"];

/// Terminal front end over the domain components.
pub struct Shell<P, W> {
    prompter: P,
    out: W,
    session: Session,
    departments: Arc<dyn DepartmentRepository>,
}

impl<P: Prompter, W: Write> Shell<P, W> {
    /// Wire a shell to its input, output and ports.
    pub fn new(
        prompter: P,
        out: W,
        login_service: Arc<dyn LoginService>,
        departments: Arc<dyn DepartmentRepository>,
    ) -> Self {
        Self {
            prompter,
            out,
            session: Session::new(login_service),
            departments,
        }
    }

    /// Run until the user quits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        let result = self.login_then_main();
        self.session.logout();
        match result {
            Err(error) if error.kind() == io::ErrorKind::UnexpectedEof => {
                debug!("input closed");
                Ok(())
            }
            other => other,
        }
    }

    fn login_then_main(&mut self) -> io::Result<()> {
        if self.login_screen()? {
            self.main_screen()?;
        }
        Ok(())
    }

    /// Returns `true` once a login succeeds, `false` on quit.
    fn login_screen(&mut self) -> io::Result<bool> {
        loop {
            match self.prompter.select("Department Desk", &LOGIN_MENU)? {
                0 => {
                    let username = self.prompter.input("Username", "")?;
                    let password = self.prompter.password("Password")?;
                    match self.session.login(&username, &password) {
                        Ok(()) => {
                            self.show(&Notice::info(format!("Welcome, {username}!")))?;
                            return Ok(true);
                        }
                        Err(error) => self.show_error(&error)?,
                    }
                }
                1 => self.register()?,
                _ => return Ok(false),
            }
        }
    }

    fn register(&mut self) -> io::Result<()> {
        let name = self.prompter.input("Name", "")?;
        let email = self.prompter.input("Email", "")?;
        let designation = self.prompter.input("Designation", "")?;
        let notice = match RegistrationRequest::try_from_parts(&name, &email, &designation) {
            Ok(request) => Notice::info(request.submit()),
            Err(error) => Notice::warning(error.to_string()),
        };
        self.show(&notice)
    }

    fn main_screen(&mut self) -> io::Result<()> {
        let mut list = DepartmentList::new(Arc::clone(&self.departments));
        if let Err(error) = list.reload() {
            self.show_error(&error)?;
        }

        loop {
            render::department_table(&mut self.out, &list)?;
            let line = self.prompter.input("Command", "")?;
            let command = match command::parse_main(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(reason) => {
                    self.show(&Notice::warning(format!("{reason} (type `help`)")))?;
                    continue;
                }
            };

            match command {
                MainCommand::Search { id } => {
                    let raw = id.unwrap_or_default();
                    match list.search_text(&raw) {
                        Ok(_) => {}
                        Err(error) if error.code() == ErrorCode::NotFound => {
                            self.show(&Notice::info(error.message()))?;
                        }
                        Err(error) => self.show_error(&error)?,
                    }
                }
                MainCommand::Refresh => {
                    if let Err(error) = list.refresh() {
                        self.show_error(&error)?;
                    }
                }
                MainCommand::Manage => self.form_screen(FormProfile::Manage, &mut list)?,
                MainCommand::New => self.form_screen(FormProfile::EditorNew, &mut list)?,
                MainCommand::Edit { id } => match id.trim().parse::<i32>() {
                    Ok(id) => {
                        let profile = FormProfile::EditorExisting(DepartmentId::new(id));
                        self.form_screen(profile, &mut list)?;
                    }
                    Err(_) => self.show(&Notice::warning(INVALID_SEARCH_ID))?,
                },
                MainCommand::Help => writeln!(self.out, "{}", command::HELP)?,
                MainCommand::Quit => {
                    info!(username = self.session.username(), "quit requested");
                    return Ok(());
                }
            }
        }
    }

    fn form_screen(&mut self, profile: FormProfile, list: &mut DepartmentList) -> io::Result<()> {
        let mut form = match DepartmentForm::open(Arc::clone(&self.departments), profile) {
            Ok(form) => form,
            Err(error) => return self.show_error(&error),
        };
        writeln!(self.out, "== {} ==", profile.title())?;
        let action_prompt = FormCommand::prompt_for(profile);

        loop {
            let current = form.fields().clone();
            let fields = self.prompt_fields(&current, profile)?;
            form.set_fields(fields);

            let line = self.prompter.input(&action_prompt, "")?;
            let action = match command::parse_form(&line) {
                Ok(Some(action)) if action.available_in(profile) => action,
                Ok(Some(_)) => {
                    let message = format!("`{}` is not available here", line.trim());
                    self.show(&Notice::warning(message))?;
                    continue;
                }
                Ok(None) => continue,
                Err(reason) => {
                    self.show(&Notice::warning(reason))?;
                    continue;
                }
            };

            let result = match action {
                FormCommand::Insert => form.insert().map(Some),
                FormCommand::Update => form.update().map(Some),
                FormCommand::Save => form.save().map(Some),
                FormCommand::Delete => self.delete_with_confirmation(&mut form)?,
                FormCommand::Clear => {
                    form.clear();
                    continue;
                }
                FormCommand::Close => return Ok(()),
            };

            match result {
                Ok(Some(outcome)) => {
                    self.finish(outcome, list)?;
                    if profile.closes_on_success() {
                        return Ok(());
                    }
                }
                Ok(None) => {}
                Err(error) => self.show_error(&error)?,
            }
        }
    }

    /// Run a delete, asking the prompter to confirm. A terminal error while
    /// asking aborts the delete and is returned as the outer error.
    fn delete_with_confirmation(
        &mut self,
        form: &mut DepartmentForm,
    ) -> io::Result<Result<Option<FormOutcome>, Error>> {
        let prompter = &mut self.prompter;
        let mut failure = None;
        let result = form.delete(|question| match prompter.confirm(question) {
            Ok(answer) => answer,
            Err(error) => {
                failure = Some(error);
                false
            }
        });
        match failure {
            Some(error) => Err(error),
            None => Ok(result),
        }
    }

    fn finish(&mut self, outcome: FormOutcome, list: &mut DepartmentList) -> io::Result<()> {
        self.show(&outcome.notice())?;
        if let Err(error) = list.reload() {
            self.show_error(&error)?;
        }
        Ok(())
    }

    fn prompt_fields(
        &mut self,
        current: &FormFields,
        profile: FormProfile,
    ) -> io::Result<FormFields> {
        let id = match profile.locked_id() {
            Some(id) => {
                writeln!(self.out, "{}: {id}", FormField::Id.label())?;
                id.to_string()
            }
            None => self.prompter.input(FormField::Id.label(), &current.id)?,
        };
        Ok(FormFields {
            id,
            school_id: self
                .prompter
                .input(FormField::SchoolId.label(), &current.school_id)?,
            dept_code: self
                .prompter
                .input(FormField::DeptCode.label(), &current.dept_code)?,
            name: self.prompter.input(FormField::Name.label(), &current.name)?,
            location: self.prompter.input("Location", &current.location)?,
            email: self.prompter.input("Email", &current.email)?,
        })
    }

    fn show(&mut self, notice: &Notice) -> io::Result<()> {
        render::notice(&mut self.out, notice)
    }

    fn show_error(&mut self, error: &Error) -> io::Result<()> {
        self.show(&Notice::from(error))
    }
}
