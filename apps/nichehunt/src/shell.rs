//! Interactive shell driving the store and the search session.

use std::sync::Arc;

use app_store::{AppStore, SearchSession, SessionError, StoreError, FREE_SEARCH_LIMIT};
use auth::{demo_google_user, sign_in, AuthError, AuthMode, Credentials};
use entities::{BillingPeriod, NicheIdea, NicheSearchRequest, NicheSearchResult, User};
use niche_search::{Latency, NicheSearch};
use thiserror::Error;

use crate::commands::{Command, ShellLine};
use crate::render;

/// Errors reported to the shell user.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("Failed to encode result: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No idea with id {0}; run `hunt` or `saved` to list ideas")]
    UnknownIdea(String),

    #[error("Already signed in as {0}; run `logout` first")]
    AlreadySignedIn(String),
}

pub type ShellResult<T> = Result<T, ShellError>;

/// Result of handling one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Output(String),
    Quit,
}

pub struct Shell {
    store: Arc<AppStore>,
    engine: Arc<dyn NicheSearch>,
    session: SearchSession,
    auth_latency: Arc<dyn Latency>,
    last_result: Option<NicheSearchResult>,
}

impl Shell {
    pub fn new(
        store: Arc<AppStore>,
        engine: Arc<dyn NicheSearch>,
        auth_latency: Arc<dyn Latency>,
    ) -> Self {
        let session = SearchSession::new(store.clone(), engine.clone());
        Self {
            store,
            engine,
            session,
            auth_latency,
            last_result: None,
        }
    }

    /// Prompt shown before each line, reflecting the signed-in user.
    pub fn prompt(&self) -> String {
        match self.store.current_user() {
            Some(user) => format!("nichehunt ({})> ", user.name),
            None => "nichehunt> ".to_string(),
        }
    }

    /// Parses and executes one line of input.
    pub async fn run_line(&mut self, line: &str) -> LineOutcome {
        if line.trim().is_empty() {
            return LineOutcome::Output(String::new());
        }

        let command = match ShellLine::parse_line(line) {
            Ok(parsed) => parsed.command,
            Err(err) => return LineOutcome::Output(err.render().to_string().trim_end().to_string()),
        };

        if command == Command::Quit {
            return LineOutcome::Quit;
        }

        match self.execute(command).await {
            Ok(output) => LineOutcome::Output(output),
            Err(err) => {
                tracing::debug!(error = %err, "Command failed");
                LineOutcome::Output(format!("Error: {}", err))
            }
        }
    }

    pub async fn execute(&mut self, command: Command) -> ShellResult<String> {
        if command.requires_user() {
            self.store.require_user()?;
        }

        match command {
            Command::Login { email, password } => {
                self.authenticate(AuthMode::Login, Credentials::new(email, password))
                    .await
            }
            Command::Signup {
                email,
                password,
                name,
            } => {
                let mut credentials = Credentials::new(email, password);
                if let Some(name) = name {
                    credentials = credentials.with_name(name.join(" "));
                }
                self.authenticate(AuthMode::Signup, credentials).await
            }
            Command::DemoLogin => {
                self.ensure_signed_out()?;
                self.auth_latency.wait().await;
                Ok(self.start_session(demo_google_user()))
            }
            Command::Logout => match self.store.current_user() {
                Some(_) => {
                    self.end_session();
                    Ok("Signed out.".to_string())
                }
                None => Ok("Not signed in.".to_string()),
            },
            Command::Whoami => Ok(self
                .store
                .current_user()
                .map(|user| render::user_badge(&user))
                .unwrap_or_else(|| "Not signed in.".to_string())),
            Command::Rename { name } => {
                self.store.rename_user(name.join(" "));
                let user = self.store.require_user()?;
                Ok(render::user_badge(&user))
            }
            Command::DeleteAccount => {
                self.end_session();
                Ok("Account removed from this device.".to_string())
            }
            Command::Hunt {
                category,
                cost,
                json,
                profession,
            } => {
                let request = NicheSearchRequest::new(profession.join(" "))
                    .with_category(category)
                    .with_cost_level(cost);
                let result = self.session.hunt(request).await?;

                let output = if json {
                    serde_json::to_string_pretty(&result)?
                } else {
                    let usage = self
                        .session
                        .remaining()
                        .map(|_| (self.session.searches_used(), FREE_SEARCH_LIMIT));
                    render::search_result(&result, usage)
                };

                self.last_result = Some(result);
                Ok(output)
            }
            Command::History => Ok(render::history(&self.store.search_history())),
            Command::Show { idea_id } => Ok(render::idea_report(&self.find_idea(&idea_id)?)),
            Command::Save { idea_id } => {
                let idea = self.find_idea(&idea_id)?;
                let title = idea.title.clone();
                self.store.save_niche(idea);
                Ok(format!("Saved \"{}\".", title))
            }
            Command::Unsave { idea_id } => {
                if !self.store.saved_niches().iter().any(|i| i.id == idea_id) {
                    return Err(ShellError::UnknownIdea(idea_id));
                }
                self.store.remove_saved_niche(&idea_id);
                Ok(format!("Removed {} from saved niches.", idea_id))
            }
            Command::Saved => Ok(render::saved(&self.store.saved_niches())),
            Command::Share { idea_id } => Ok(self.find_idea(&idea_id)?.share_text()),
            Command::Pricing { annual } => {
                let billing = if annual {
                    BillingPeriod::Annual
                } else {
                    BillingPeriod::Monthly
                };
                let current = self.store.current_user().map(|user| user.plan);
                Ok(render::pricing(billing, current))
            }
            Command::Plan { plan } => {
                self.store.set_plan(plan);
                Ok(format!("You are now on the {} plan.", plan))
            }
            Command::Quit => Ok(String::new()),
        }
    }

    async fn authenticate(&mut self, mode: AuthMode, credentials: Credentials) -> ShellResult<String> {
        self.ensure_signed_out()?;
        credentials.validate()?;
        self.auth_latency.wait().await;
        let user = sign_in(mode, &credentials)?;
        Ok(self.start_session(user))
    }

    fn ensure_signed_out(&self) -> ShellResult<()> {
        match self.store.current_user() {
            Some(user) => Err(ShellError::AlreadySignedIn(user.email)),
            None => Ok(()),
        }
    }

    fn start_session(&mut self, user: User) -> String {
        let greeting = format!("Welcome, {}.\n{}", user.name, render::user_badge(&user));
        self.store.set_user(Some(user));
        self.reset_session();
        greeting
    }

    fn end_session(&mut self) {
        self.store.set_user(None);
        self.reset_session();
    }

    fn reset_session(&mut self) {
        self.session = SearchSession::new(self.store.clone(), self.engine.clone());
        self.last_result = None;
    }

    /// Looks an idea up in the last result, then in the saved ideas.
    fn find_idea(&self, id: &str) -> ShellResult<NicheIdea> {
        self.last_result
            .iter()
            .flat_map(|result| result.ideas.iter())
            .find(|idea| idea.id == id)
            .cloned()
            .or_else(|| {
                self.store
                    .saved_niches()
                    .into_iter()
                    .find(|idea| idea.id == id)
            })
            .ok_or_else(|| ShellError::UnknownIdea(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use auth::LocalUserPersistence;
    use entities::SubscriptionPlan;
    use niche_search::{NicheSearchEngine, NoLatency};

    use super::*;

    fn shell() -> Shell {
        let store = Arc::new(AppStore::new(Arc::new(LocalUserPersistence::in_memory())));
        Shell::new(
            store,
            Arc::new(NicheSearchEngine::instant()),
            Arc::new(NoLatency),
        )
    }

    async fn output(shell: &mut Shell, line: &str) -> String {
        match shell.run_line(line).await {
            LineOutcome::Output(out) => out,
            LineOutcome::Quit => panic!("unexpected quit"),
        }
    }

    #[tokio::test]
    async fn test_protected_commands_require_sign_in() {
        let mut shell = shell();
        assert_eq!(output(&mut shell, "hunt chef").await, "Error: Not signed in");
        assert_eq!(output(&mut shell, "whoami").await, "Not signed in.");
        assert!(output(&mut shell, "pricing").await.starts_with("free"));
    }

    #[tokio::test]
    async fn test_signup_and_login_flow() {
        let mut shell = shell();

        let out = output(&mut shell, "signup Ada@Example.com secret1 --name Ada Lovelace").await;
        assert!(out.starts_with("Welcome, Ada Lovelace."));
        assert_eq!(shell.prompt(), "nichehunt (Ada Lovelace)> ");

        let out = output(&mut shell, "login ada@example.com secret1").await;
        assert_eq!(
            out,
            "Error: Already signed in as ada@example.com; run `logout` first"
        );

        assert_eq!(output(&mut shell, "logout").await, "Signed out.");
        let out = output(&mut shell, "login ada@example.com secret1").await;
        assert!(out.starts_with("Welcome, ada."));
    }

    #[tokio::test]
    async fn test_invalid_credentials_are_reported() {
        let mut shell = shell();
        let out = output(&mut shell, "login not-an-email secret1").await;
        assert!(out.starts_with("Error: Enter a valid email"));

        let out = output(&mut shell, "login ada@example.com short").await;
        assert_eq!(out, "Error: Password must be at least 6 characters");
        assert_eq!(shell.store.current_user(), None);
    }

    #[tokio::test]
    async fn test_hunt_save_share_and_history() {
        let mut shell = shell();
        output(&mut shell, "login ada@example.com secret1").await;

        let out = output(&mut shell, "hunt --category jobs chef").await;
        assert!(out.starts_with("Showing 1 AI-simulated niches for chef."));
        assert!(out.contains("Free plan: 1/3 full hunts used this session."));

        assert_eq!(
            output(&mut shell, "save idea-2").await,
            "Saved \"Cohort-based bootcamp for aspiring chefs\"."
        );
        assert_eq!(
            output(&mut shell, "share idea-2").await,
            "Cohort-based bootcamp for aspiring chefs – discovered via NicheHunt"
        );
        assert!(output(&mut shell, "history").await.starts_with("chef · 1 ideas"));

        let out = output(&mut shell, "show idea-1").await;
        assert_eq!(out, "Error: No idea with id idea-1; run `hunt` or `saved` to list ideas");

        assert_eq!(
            output(&mut shell, "unsave idea-2").await,
            "Removed idea-2 from saved niches."
        );
        assert!(output(&mut shell, "saved").await.starts_with("No saved niches yet."));
    }

    #[tokio::test]
    async fn test_hunt_filters_after_profession() {
        let mut shell = shell();
        output(&mut shell, "demo-login").await;

        let out = output(&mut shell, "hunt chef --category business --cost any").await;
        assert!(out.starts_with("Showing 1 AI-simulated niches for chef."));
        assert!(out.contains("[idea-1] Premium chef advisory for remote-first companies"));
        assert!(!out.contains("idea-2"));
    }

    #[tokio::test]
    async fn test_free_limit_and_upgrade() {
        let mut shell = shell();
        output(&mut shell, "login ada@example.com secret1").await;

        for _ in 0..FREE_SEARCH_LIMIT {
            output(&mut shell, "hunt chef").await;
        }
        let out = output(&mut shell, "hunt chef").await;
        assert_eq!(
            out,
            "Error: Free plan search limit reached (3 searches per session)"
        );

        assert_eq!(
            output(&mut shell, "plan pro").await,
            "You are now on the pro plan."
        );
        let out = output(&mut shell, "hunt chef").await;
        assert!(out.starts_with("Showing 3 AI-simulated niches for chef."));
        assert!(!out.contains("Free plan"));
    }

    #[tokio::test]
    async fn test_demo_login_is_pro() {
        let mut shell = shell();
        output(&mut shell, "demo-login").await;

        let user = shell.store.current_user().unwrap();
        assert_eq!(user.plan, SubscriptionPlan::Pro);
        assert!(output(&mut shell, "pricing --annual")
            .await
            .contains("$182/yr (current)"));
    }

    #[tokio::test]
    async fn test_hunt_json_output() {
        let mut shell = shell();
        output(&mut shell, "demo-login").await;

        let out = output(&mut shell, "hunt --json --cost low nurse").await;
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["ideas"].as_array().unwrap().len(), 2);
        assert_eq!(value["query"]["profession"], "nurse");
    }

    #[tokio::test]
    async fn test_rename_and_delete_account() {
        let mut shell = shell();
        output(&mut shell, "demo-login").await;

        let out = output(&mut shell, "rename Grace Hopper").await;
        assert!(out.contains("Grace Hopper <demo@nichehunt.app>"));

        output(&mut shell, "delete-account").await;
        assert_eq!(shell.store.current_user(), None);
    }

    #[tokio::test]
    async fn test_quit_and_parse_errors() {
        let mut shell = shell();
        assert_eq!(shell.run_line("quit").await, LineOutcome::Quit);
        assert_eq!(shell.run_line("exit").await, LineOutcome::Quit);
        assert_eq!(shell.run_line("   ").await, LineOutcome::Output(String::new()));

        match shell.run_line("fly").await {
            LineOutcome::Output(out) => assert!(out.contains("unrecognized subcommand")),
            LineOutcome::Quit => panic!("unexpected quit"),
        }
    }
}
