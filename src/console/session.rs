use std::str::FromStr;
use std::time::Duration;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::bank::User;
use crate::console::errors::ConsoleError;
use crate::console::menu::{render_menu, MenuChoice};
use crate::models::AccountType;
use crate::types::{AccountId, Monetary};

/// Line-oriented front end: reads answers from `reader`, writes prompts and results to `writer`.
///
/// All rule checking is left to [`User`] and the accounts; this layer only
/// loops until input parses and prints what happened.
pub struct Console<R, W> {
    reader: R,
    writer: W,
    pause: Duration
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin
{
    pub fn new(reader: R, writer: W, pause: Duration) -> Self {
        Self { reader, writer, pause }
    }

    /// Runs one session until the user exits or the input ends.
    pub async fn run(&mut self) -> Result<(), ConsoleError> {
        match self.session().await {
            Err(ConsoleError::EndOfInput) => {
                info!("Input closed, ending session");
                Ok(())
            }
            result => result
        }
    }

    async fn session(&mut self) -> Result<(), ConsoleError> {
        let mut user = self.create_user().await?;

        info!("Session started for [{}]", user.name());
        self.line(format!("\nWelcome, {}! Let's start managing your finances.", user.name())).await?;

        loop {
            self.line(render_menu(user.name())).await?;
            let input = self.prompt("Enter your choice (1-7): ").await?;

            match MenuChoice::from_input(&input) {
                Some(MenuChoice::Exit) => {
                    self.line(format!("\nThank you, {}, for using the Bank System. Goodbye!", user.name())).await?;
                    info!("Session ended for [{}]", user.name());
                    return Ok(())
                }
                Some(choice) => self.dispatch(choice, &mut user).await?,
                None => self.line("Invalid choice. Please enter a number between 1 and 7.").await?
            }

            sleep(self.pause).await;
        }
    }

    async fn dispatch(&mut self, choice: MenuChoice, user: &mut User) -> Result<(), ConsoleError> {
        self.line(format!("\n--- {}. {} ---", choice.number(), choice.label())).await?;

        match choice {
            MenuChoice::CreateAccount => self.create_account(user).await,
            MenuChoice::Deposit => self.deposit(user).await,
            MenuChoice::Withdraw => self.withdraw(user).await,
            MenuChoice::ViewBalance => self.view_balance(user).await,
            MenuChoice::ViewHistory => self.view_history(user).await,
            MenuChoice::ApplyInterest => self.apply_interest(user).await,
            MenuChoice::Exit => Ok(())
        }
    }

    async fn create_user(&mut self) -> Result<User, ConsoleError> {
        self.line("Welcome to the Interactive Bank Management System!").await?;

        loop {
            let name = self.prompt("Please enter your full name (only letters and spaces allowed): ").await?;

            match User::new(&name) {
                Ok(user) => return Ok(user),
                Err(error) => {
                    debug!("{error}");
                    self.line(" Invalid Name. Name must contain only letters and spaces. Please try again.").await?;
                }
            }
        }
    }

    async fn create_account(&mut self, user: &mut User) -> Result<(), ConsoleError> {
        // The type is checked here only to re-prompt before asking for a deposit;
        // `open_account` takes the text as typed and does the authoritative parse.
        let (input, account_type) = loop {
            let input = self.prompt("Enter account type (Saving/Current): ").await?;

            match AccountType::from_str(input.trim()) {
                Ok(account_type) => break (input, account_type),
                Err(_) => self.line("Invalid type. Please enter 'Saving' or 'Current'.").await?
            }
        };

        let initial_deposit = self.read_amount(
            "Enter initial deposit amount (e.g., 100.00): $",
            |amount| !amount.is_negative(),
            "Deposit must be a non-negative number."
        ).await?;

        match user.open_account(input.trim(), initial_deposit) {
            Ok(account_id) => {
                self.line(format!("\n SUCCESS! {} opened a {} Account.", user.name(), account_type.label())).await?;
                self.line(format!("   Your New Account ID is: {account_id}")).await
            }
            Err(error) => {
                warn!("{error}");
                self.line(format!(" ACCOUNT CREATION FAILED: {error}. Please try again.")).await
            }
        }
    }

    async fn deposit(&mut self, user: &mut User) -> Result<(), ConsoleError> {
        let Some(account_id) = self.select_account(user).await? else {
            return Ok(())
        };

        let amount = self.read_amount("Enter deposit amount: $", Monetary::is_positive, "Deposit amount must be positive.").await?;

        let Some(account) = user.get_account_mut(account_id) else {
            return Ok(())
        };

        match account.deposit(amount) {
            Ok(()) => self.line(format!(" Deposit successful. New Balance: ${}", account.balance())).await,
            Err(error) => {
                warn!("{error}");
                self.line(format!(" Deposit failed: {error}")).await
            }
        }
    }

    async fn withdraw(&mut self, user: &mut User) -> Result<(), ConsoleError> {
        let Some(account_id) = self.select_account(user).await? else {
            return Ok(())
        };

        let Some(account) = user.get_account_mut(account_id) else {
            return Ok(())
        };

        self.line(format!("Current Balance for {account_id}: ${}", account.balance())).await?;

        let amount = self.read_amount("Enter withdrawal amount: $", Monetary::is_positive, "Withdrawal amount must be positive.").await?;

        match account.withdraw(amount) {
            Ok(()) => self.line(format!(" Withdrawal successful. New Balance: ${}", account.balance())).await,
            Err(error) => {
                warn!("{error}");
                self.line(format!(" Withdrawal failed: {error}")).await
            }
        }
    }

    async fn view_balance(&mut self, user: &User) -> Result<(), ConsoleError> {
        let Some(account_id) = self.select_account(user).await? else {
            return Ok(())
        };

        let Some(account) = user.get_account(account_id) else {
            return Ok(())
        };

        self.line(format!(" Account ID {} Balance: ${}", account.account_id(), account.balance())).await?;
        self.line(format!(" {} Account opened on {}", account.account_type().label(), account.opened_date())).await
    }

    async fn view_history(&mut self, user: &User) -> Result<(), ConsoleError> {
        let Some(account_id) = self.select_account(user).await? else {
            return Ok(())
        };

        let Some(account) = user.get_account(account_id) else {
            return Ok(())
        };

        let history = account.get_transaction_history();

        if history.is_empty() {
            return self.line("No transactions recorded for this account.").await
        }

        self.line(format!("\n--- History for Account {} ---", account.account_id())).await?;

        for transaction in history {
            self.line(transaction.to_string()).await?;
        }

        Ok(())
    }

    async fn apply_interest(&mut self, user: &mut User) -> Result<(), ConsoleError> {
        let Some(account_id) = self.select_account(user).await? else {
            return Ok(())
        };

        let Some(account) = user.get_account_mut(account_id) else {
            return Ok(())
        };

        let initial_balance = account.balance();

        match account.calculate_interest() {
            Ok(interest) => {
                self.line(interest_outcome(initial_balance, interest)).await?;
            }
            Err(error) => {
                warn!("{error}");
                self.line(format!(" Interest could not be applied: {error}")).await?;
            }
        }

        self.line(format!("Current Balance: ${}", account.balance())).await
    }

    async fn select_account(&mut self, user: &User) -> Result<Option<AccountId>, ConsoleError> {
        let account_ids = user.get_all_account_ids();

        if account_ids.is_empty() {
            self.line(" No accounts found. Please create an account first (Option 1).").await?;
            return Ok(None)
        }

        let listing: Vec<String> = account_ids.iter().map(ToString::to_string).collect();
        self.line(format!("Available Account IDs: {}", listing.join(", "))).await?;

        let input = self.prompt("Enter the Account ID: ").await?;

        match user.find_account_id(&input) {
            Ok(account_id) => Ok(Some(account_id)),
            Err(error) => {
                debug!("{error}");
                self.line(format!(" Error: {error}.")).await?;
                Ok(None)
            }
        }
    }

    /// Prompts until the input is a number that `accept` allows.
    async fn read_amount(&mut self, prompt: &str, accept: fn(&Monetary) -> bool, rejection: &str) -> Result<Monetary, ConsoleError> {
        loop {
            let input = self.prompt(prompt).await?;

            match Monetary::from_str(&input) {
                Ok(amount) if accept(&amount) => return Ok(amount),
                Ok(_) => self.line(rejection).await?,
                Err(error) => {
                    debug!("{error}");
                    self.line("Invalid input. Please enter a numerical value.").await?;
                }
            }
        }
    }

    async fn prompt(&mut self, text: &str) -> Result<String, ConsoleError> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.flush().await?;

        let mut input = String::new();

        if self.reader.read_line(&mut input).await? == 0 {
            return Err(ConsoleError::EndOfInput)
        }

        Ok(input.trim_end_matches(['\r', '\n']).to_string())
    }

    async fn line(&mut self, text: impl AsRef<str>) -> Result<(), ConsoleError> {
        self.writer.write_all(text.as_ref().as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await?;

        Ok(())
    }
}

pub(super) fn interest_outcome(initial_balance: Monetary, interest: Monetary) -> String {
    if interest.is_positive() {
        format!(" Successfully applied ${interest} in interest/fees.")
    } else if initial_balance.is_positive() {
        " No interest applied (Current Account balance was positive but no interest accrued).".to_string()
    } else {
        " No interest or fees applied.".to_string()
    }
}
