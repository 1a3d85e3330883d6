const RULE_WIDTH: usize = 40;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum MenuChoice {
    CreateAccount,
    Deposit,
    Withdraw,
    ViewBalance,
    ViewHistory,
    ApplyInterest,
    Exit
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::CreateAccount,
        MenuChoice::Deposit,
        MenuChoice::Withdraw,
        MenuChoice::ViewBalance,
        MenuChoice::ViewHistory,
        MenuChoice::ApplyInterest,
        MenuChoice::Exit
    ];

    /// Parses the menu number typed by the user, `1` through `7`.
    pub fn from_input(input: &str) -> Option<Self> {
        let number: usize = input.trim().parse().ok()?;
        Self::ALL.get(number.checked_sub(1)?).copied()
    }

    pub fn number(&self) -> usize {
        Self::ALL.iter().position(|choice| choice == self).map_or(0, |index| index + 1)
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::CreateAccount => "Create New Account",
            MenuChoice::Deposit => "Deposit Funds",
            MenuChoice::Withdraw => "Withdraw Funds",
            MenuChoice::ViewBalance => "View Account Balance",
            MenuChoice::ViewHistory => "View Transaction History",
            MenuChoice::ApplyInterest => "Apply Interest/Fees",
            MenuChoice::Exit => "Exit"
        }
    }
}

pub fn render_menu(user_name: &str) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut menu = format!("\n{rule}\n      {user_name}'s Banking Menu\n{rule}\n");

    for choice in MenuChoice::ALL {
        menu.push_str(&format!("{}: {}\n", choice.number(), choice.label()));
    }

    menu.push_str(&rule);
    menu
}
